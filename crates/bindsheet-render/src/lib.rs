//! Terminal text measurement and column layout for binding cheat sheets.
//!
//! Two pieces live here:
//!
//! - [`metrics`]: width calculations that ignore ANSI control sequences and
//!   count double-width characters correctly
//! - [`ColumnLayout`]: pours a block of lines into newspaper-style columns
//!
//! [`LineBuffer`] ties them together: it collects a block of rendered lines
//! and tracks the widest one, which is what the layout needs to size its
//! columns.
//!
//! ```rust
//! use bindsheet_render::{ColumnLayout, LineBuffer};
//!
//! let mut buf = LineBuffer::new();
//! buf.extend(["one", "two", "three"]);
//!
//! let spacing = 2;
//! let layout = ColumnLayout::new(buf.longest_visible_width() + spacing, 14);
//! assert_eq!(layout.render(buf.lines()), "one    three  \ntwo    \n");
//! ```

pub mod buffer;
pub mod columns;
pub mod metrics;

pub use buffer::LineBuffer;
pub use columns::ColumnLayout;
pub use metrics::{display_width, escape_length, pad_to_width, strip_escapes, visible_len};
