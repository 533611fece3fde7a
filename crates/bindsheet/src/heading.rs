//! Colored section headings.

use console::{Color, Style};

/// Heading colors by level, starting at level 1.
pub const PALETTE: [Color; 5] = [
    Color::Magenta,
    Color::Blue,
    Color::Yellow,
    Color::Green,
    Color::Red,
];

/// Renders headings in the palette color for their level, or plain when color is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingStyle {
    color: bool,
}

impl HeadingStyle {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Style for `level`; level 0 is treated as 1 and the palette wraps.
    ///
    /// Bright colors come out as 256-color codes (`ESC[38;5;13m` for level 1).
    pub fn style(&self, level: u8) -> Style {
        let index = usize::from(level.max(1) - 1) % PALETTE.len();
        Style::new()
            .fg(PALETTE[index])
            .bright()
            .force_styling(self.color)
    }

    pub fn render(&self, text: &str, level: u8) -> String {
        if !self.color {
            return text.to_string();
        }
        self.style(level).apply_to(text).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindsheet_render::{display_width, strip_escapes};

    #[test]
    fn test_plain_heading_has_no_escapes() {
        assert_eq!(HeadingStyle::plain().render("Key-bindings:", 1), "Key-bindings:");
    }

    #[test]
    fn test_colored_heading_is_wrapped_and_reset() {
        let out = HeadingStyle::new(true).render("Key-bindings:", 1);
        assert!(out.starts_with("\x1b["));
        assert!(out.ends_with("\x1b[0m"));
        assert_eq!(strip_escapes(&out), "Key-bindings:");
        assert_eq!(display_width(&out), 13);
    }

    #[test]
    fn test_colored_heading_bytes() {
        let style = HeadingStyle::new(true);
        assert_eq!(style.render("Key-bindings:", 1), "\x1b[38;5;13mKey-bindings:\x1b[0m");
        assert_eq!(style.render("Apps", 2), "\x1b[38;5;12mApps\x1b[0m");
    }

    #[test]
    fn test_levels_use_different_colors() {
        let style = HeadingStyle::new(true);
        assert_ne!(style.render("x", 1), style.render("x", 2));
        assert_eq!(style.render("x", 0), style.render("x", 1));
        assert_eq!(style.render("x", 6), style.render("x", 1));
    }
}
