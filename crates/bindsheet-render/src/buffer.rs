//! Line accumulator that remembers the widest line it has seen.

use crate::metrics::display_width;

/// An ordered block of rendered lines plus the widest visible line among them.
///
/// Lines are measured as they are pushed, so the block's column width is
/// known as soon as the last line arrives.
///
/// # Example
///
/// ```rust
/// use bindsheet_render::LineBuffer;
///
/// let mut buf = LineBuffer::new();
/// buf.push("\x1b[95mKey-bindings:\x1b[m");
/// buf.push("a       Open terminal");
/// assert_eq!(buf.len(), 2);
/// assert_eq!(buf.longest_visible_width(), 21);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
    longest: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line. Text containing newlines is split into one line per segment.
    pub fn push(&mut self, line: impl AsRef<str>) {
        let line = line.as_ref();
        if line.contains('\n') {
            for segment in line.split('\n') {
                self.push_one(segment);
            }
        } else {
            self.push_one(line);
        }
    }

    pub fn push_blank(&mut self) {
        self.lines.push(String::new());
    }

    fn push_one(&mut self, line: &str) {
        self.longest = self.longest.max(display_width(line));
        self.lines.push(line.to_string());
    }

    /// Width in terminal columns of the widest line pushed so far.
    pub fn longest_visible_width(&self) -> usize {
        self.longest
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl<S: AsRef<str>> Extend<S> for LineBuffer {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for line in iter {
            self.push(line);
        }
    }
}
