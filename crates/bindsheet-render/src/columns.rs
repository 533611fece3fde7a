//! Newspaper-style column layout.
//!
//! A block of lines is poured into as many fixed-width columns as fit in the
//! available width, filling each column top to bottom before moving right:
//!
//! ```text
//! 0  3  6
//! 1  4
//! 2  5
//! ```
//!
//! Cells are padded by display width, so lines carrying color codes line up
//! with plain ones.

use crate::metrics::pad_to_width;
use std::io::{self, Write};

/// Column-major layout of a block of lines.
///
/// # Example
///
/// ```rust
/// use bindsheet_render::ColumnLayout;
///
/// let layout = ColumnLayout::new(4, 12);
/// assert_eq!(layout.columns(), 3);
///
/// let out = layout.render(&["a", "b", "c", "d"]);
/// assert_eq!(out, "a   c   \nb   d   \n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    column_width: usize,
    max_width: usize,
    prefix: String,
    line_end: String,
}

impl ColumnLayout {
    /// Creates a layout of `column_width`-wide cells filling at most `max_width` columns.
    pub fn new(column_width: usize, max_width: usize) -> Self {
        Self {
            column_width,
            max_width,
            prefix: String::new(),
            line_end: "\n".to_string(),
        }
    }

    /// Text written before every cell.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Text written after every row. Defaults to a newline.
    pub fn line_end(mut self, line_end: impl Into<String>) -> Self {
        self.line_end = line_end.into();
        self
    }

    pub fn column_width(&self) -> usize {
        self.column_width
    }

    /// Number of columns that fit in the total width.
    ///
    /// Never zero: when not even one column fits (or the column width is
    /// zero) everything goes into a single column.
    pub fn columns(&self) -> usize {
        if self.column_width == 0 {
            return 1;
        }
        (self.max_width / self.column_width).max(1)
    }

    /// Number of rows needed for `count` lines.
    pub fn rows(&self, count: usize) -> usize {
        count.div_ceil(self.columns())
    }

    /// Grid position `(row, col)` of the line at `index` when there are `rows` rows.
    ///
    /// Inverse of `index = row + col * rows`.
    pub fn position(index: usize, rows: usize) -> (usize, usize) {
        if rows == 0 {
            return (0, 0);
        }
        (index % rows, index / rows)
    }

    /// Arranges `lines` into rows of cells without padding.
    ///
    /// Row `r` holds the lines at `r`, `r + rows`, `r + 2 * rows`, ... that
    /// exist; positions past the end are left out rather than blank.
    pub fn grid<'a, S: AsRef<str>>(&self, lines: &'a [S]) -> Vec<Vec<&'a str>> {
        let count = lines.len();
        let rows = self.rows(count);
        let columns = self.columns();

        (0..rows)
            .map(|row| {
                (0..columns)
                    .filter_map(|col| lines.get(row + col * rows))
                    .map(S::as_ref)
                    .collect()
            })
            .collect()
    }

    /// Renders the laid-out block to a string.
    pub fn render<S: AsRef<str>>(&self, lines: &[S]) -> String {
        let mut out = String::new();
        for row in self.grid(lines) {
            for cell in row {
                out.push_str(&self.prefix);
                out.push_str(&pad_to_width(cell, self.column_width));
            }
            out.push_str(&self.line_end);
        }
        out
    }

    /// Writes the laid-out block to `writer`.
    pub fn write_to<S: AsRef<str>, W: Write>(&self, lines: &[S], writer: &mut W) -> io::Result<()> {
        writer.write_all(self.render(lines).as_bytes())
    }
}
