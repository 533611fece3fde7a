//! Escape-aware text measurement.
//!
//! Terminal color codes occupy bytes in a string but no columns on screen.
//! Every function here separates the two so that fixed-width alignment stays
//! correct for styled text:
//!
//! - [`escape_length`] counts the bytes taken by control sequences
//! - [`visible_len`] counts the characters that remain visible
//! - [`display_width`] counts terminal columns (wide characters take two)
//!
//! Only CSI sequences are recognised: `ESC [`, then parameter bytes from
//! `0-9:;<=>?`, then intermediate bytes from `!"#$%&'()*+,-./`, then exactly
//! one final byte from `@A-Z[\]^_`a-z{|}~`. Anything that does not complete
//! that shape is left alone and counted as visible text.

use console::{measure_text_width, pad_str, Alignment};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static ANSI_CSI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r##"\x1b\[[0-9:;<=>?]*[!"#$%&'()*+,\-./]*[@A-Z\[\\\]^_`a-z{|}~]"##)
        .expect("CSI pattern is a valid regex")
});

/// Returns the number of bytes contributed by control sequences in `text`.
///
/// # Example
///
/// ```rust
/// use bindsheet_render::escape_length;
///
/// assert_eq!(escape_length("plain"), 0);
/// assert_eq!(escape_length("\x1b[95mhi\x1b[m"), 8);
/// ```
pub fn escape_length(text: &str) -> usize {
    ANSI_CSI.find_iter(text).map(|m| m.len()).sum()
}

/// Removes every control sequence from `text`.
///
/// Borrows the input when there is nothing to strip.
pub fn strip_escapes(text: &str) -> Cow<'_, str> {
    ANSI_CSI.replace_all(text, "")
}

/// Number of visible characters: characters minus escape bytes minus newlines.
///
/// Escape sequences are pure ASCII, so their byte length equals their
/// character count and the subtraction is exact.
pub fn visible_len(text: &str) -> usize {
    let chars = text.chars().count();
    let newlines = text.chars().filter(|&c| c == '\n').count();
    chars.saturating_sub(escape_length(text) + newlines)
}

/// Returns the number of terminal columns `text` occupies.
///
/// Escape sequences count as zero, double-width characters as two and
/// control characters (including newlines) as zero.
///
/// # Example
///
/// ```rust
/// use bindsheet_render::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(text: &str) -> usize {
    let stripped = strip_escapes(text);
    if stripped.chars().any(char::is_control) {
        let printable: String = stripped.chars().filter(|c| !c.is_control()).collect();
        measure_text_width(&printable)
    } else {
        measure_text_width(&stripped)
    }
}

/// Right-pads `text` with spaces until it spans `width` columns.
///
/// Text that is already wide enough is returned unchanged; nothing is ever
/// truncated. Escape sequences and double-width characters are measured the
/// way the terminal shows them, so styled text pads like plain text.
pub fn pad_to_width(text: &str, width: usize) -> String {
    pad_str(text, width, Alignment::Left, None).into_owned()
}
