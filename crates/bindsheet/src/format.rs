//! Binding and description formatting.
//!
//! A binding renders as its held modifiers followed by the key glyph
//! (`❖ ⇧ q`); a description renders from the dispatcher's template with the
//! argument and free-text description filled in (`Move focus left`).

use crate::tables::{ARGS, DISPATCHERS, KEYS, MODIFIERS, NO_SEPARATOR_PREFIXES};
use bindsheet_render::pad_to_width;

/// How a binding's modifiers and key are joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingStyle {
    /// Placed between modifiers, and between modifiers and the key.
    pub separator: String,
    /// Key glyphs starting with any of these are attached without a separator.
    pub no_separator_prefixes: Vec<String>,
}

impl Default for BindingStyle {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            no_separator_prefixes: NO_SEPARATOR_PREFIXES
                .iter()
                .map(|prefix| prefix.to_string())
                .collect(),
        }
    }
}

impl BindingStyle {
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    fn joins_without_separator(&self, key: &str) -> bool {
        self.separator == " "
            && self
                .no_separator_prefixes
                .iter()
                .any(|prefix| key.starts_with(prefix.as_str()))
    }
}

/// Joins a modifier string and a key symbol.
///
/// Rules, first match wins:
/// 1. no modifiers: the key alone
/// 2. key empty or already shown among the modifiers: the modifiers alone
/// 3. single-space separator and a key starting with an awkward glyph: no separator
/// 4. otherwise `modifiers + separator + key`
pub fn join_binding(modifiers: &str, key: &str, style: &BindingStyle) -> String {
    if modifiers.is_empty() {
        return key.to_string();
    }
    if modifiers.contains(key) {
        return modifiers.to_string();
    }
    if style.joins_without_separator(key) {
        return format!("{}{}", modifiers, key);
    }
    format!("{}{}{}", modifiers, style.separator, key)
}

/// Renders a binding from its raw key token and modifier mask.
///
/// # Example
///
/// ```rust
/// use bindsheet::format::{format_binding, BindingStyle};
///
/// let style = BindingStyle::default();
/// assert_eq!(format_binding("Q", 64 | 1, &style), "❖ ⇧ Q");
/// assert_eq!(format_binding("mouse:272", 64, &style), "❖˙🖰");
/// assert_eq!(format_binding("SUPER_L", 64, &style), "❖");
/// ```
pub fn format_binding(key: &str, modmask: u64, style: &BindingStyle) -> String {
    let modifiers = MODIFIERS.decode(modmask).join(&style.separator);
    let key_symbol = KEYS.substitute(key);
    join_binding(&modifiers, key_symbol, style)
}

/// Fills `{arg}` and `{description}` placeholders in one pass.
///
/// Substituted text is never rescanned, so a description containing a
/// literal `{arg}` stays as written. Unknown placeholders are kept verbatim.
pub fn render_template(template: &str, arg: &str, description: &str) -> String {
    let mut out = String::with_capacity(template.len() + arg.len() + description.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix("{arg}") {
            out.push_str(arg);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{description}") {
            out.push_str(description);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Renders a description from the dispatcher template, argument and free text.
///
/// # Example
///
/// ```rust
/// use bindsheet::format::format_description;
///
/// assert_eq!(format_description("l", "", "movefocus"), "Move focus left");
/// assert_eq!(format_description("kitty", "Open terminal", "exec"), "Open terminal");
/// assert_eq!(format_description("", "", "fullscreen"), "fullscreen");
/// ```
pub fn format_description(arg: &str, description: &str, dispatcher: &str) -> String {
    let arg = ARGS.substitute(arg);
    let template = DISPATCHERS.substitute(dispatcher);
    render_template(template, arg, description).trim().to_string()
}

/// Lays out one binding row: binding padded to `bind_width - 1`, a space, then the description.
///
/// The space between the two counts toward `bind_width`, so a binding column
/// of width 8 starts descriptions at column 8.
pub fn format_row(binding: &str, description: &str, bind_width: usize, desc_width: usize) -> String {
    format!(
        "{} {}",
        pad_to_width(binding, bind_width.saturating_sub(1)),
        pad_to_width(description, desc_width)
    )
}
