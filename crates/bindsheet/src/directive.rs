//! Row directives embedded in binding descriptions.
//!
//! A description may start with a marker that changes how its row renders
//! instead of being shown literally:
//!
//! | Marker | Effect |
//! |--------|--------|
//! | `!skip` | row is not shown |
//! | `!br rest` | blank line before the row, description becomes `rest` |
//! | `!h Title: rest` | heading `Title` before the row, description becomes `rest` |
//! | `!h3 Title: rest` | same, with heading level 3 |
//!
//! Only the first matching marker applies, checked in the order above.

/// Heading level used by `!h` when no digit follows the marker.
pub const DEFAULT_HEADING_LEVEL: u8 = 2;

/// A heading to print before a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub title: String,
    pub level: u8,
}

/// The outcome of reading a description's directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowDirective {
    /// Suppress the row entirely.
    Skip,
    /// Render the row with this description, preceded by optional extras.
    Emit {
        description: String,
        blank_line_before: bool,
        heading: Option<Heading>,
    },
}

impl RowDirective {
    /// Interprets the leading directive of `description`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bindsheet::directive::{Heading, RowDirective};
    ///
    /// assert_eq!(RowDirective::interpret("!skip hidden"), RowDirective::Skip);
    ///
    /// let row = RowDirective::interpret("!h Apps: Open terminal");
    /// assert_eq!(row.heading(), Some(&Heading { title: "Apps".into(), level: 2 }));
    /// assert_eq!(row.description(), Some("Open terminal"));
    /// ```
    pub fn interpret(description: &str) -> Self {
        if description.starts_with("!skip") {
            return RowDirective::Skip;
        }
        if let Some(rest) = description.strip_prefix("!br") {
            return RowDirective::Emit {
                description: rest.trim().to_string(),
                blank_line_before: true,
                heading: None,
            };
        }
        if let Some(rest) = description.strip_prefix("!h") {
            let (level, rest) = split_level(rest);
            let (title, text) = rest.split_once(':').unwrap_or((rest, ""));
            return RowDirective::Emit {
                description: text.trim().to_string(),
                blank_line_before: false,
                heading: Some(Heading {
                    title: title.trim().to_string(),
                    level,
                }),
            };
        }
        RowDirective::Emit {
            description: description.to_string(),
            blank_line_before: false,
            heading: None,
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, RowDirective::Skip)
    }

    /// The cleaned description, or `None` for a skipped row.
    pub fn description(&self) -> Option<&str> {
        match self {
            RowDirective::Skip => None,
            RowDirective::Emit { description, .. } => Some(description.as_str()),
        }
    }

    pub fn blank_line_before(&self) -> bool {
        matches!(
            self,
            RowDirective::Emit {
                blank_line_before: true,
                ..
            }
        )
    }

    pub fn heading(&self) -> Option<&Heading> {
        match self {
            RowDirective::Skip => None,
            RowDirective::Emit { heading, .. } => heading.as_ref(),
        }
    }
}

/// Splits an optional single-digit level off the text after `!h`.
fn split_level(rest: &str) -> (u8, &str) {
    let mut chars = rest.chars();
    match chars.next().and_then(|c| c.to_digit(10)) {
        Some(digit) if digit > 0 => (digit as u8, chars.as_str()),
        _ => (DEFAULT_HEADING_LEVEL, rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_description_passes_through() {
        let row = RowDirective::interpret("  Open terminal ");
        assert_eq!(
            row,
            RowDirective::Emit {
                description: "  Open terminal ".into(),
                blank_line_before: false,
                heading: None,
            }
        );
    }

    #[test]
    fn test_skip() {
        assert!(RowDirective::interpret("!skip anything").is_skip());
        assert!(RowDirective::interpret("!skip").is_skip());
        assert_eq!(RowDirective::interpret("!skip").description(), None);
    }

    #[test]
    fn test_skip_must_be_prefix() {
        let row = RowDirective::interpret("do not !skip");
        assert!(!row.is_skip());
        assert_eq!(row.description(), Some("do not !skip"));
    }

    #[test]
    fn test_break() {
        let row = RowDirective::interpret("!br Title");
        assert!(row.blank_line_before());
        assert_eq!(row.description(), Some("Title"));
        assert_eq!(row.heading(), None);
    }

    #[test]
    fn test_break_without_text() {
        let row = RowDirective::interpret("!br");
        assert!(row.blank_line_before());
        assert_eq!(row.description(), Some(""));
    }

    #[test]
    fn test_heading_splits_on_first_colon() {
        let row = RowDirective::interpret("!h Heading: Rest: more");
        assert_eq!(
            row.heading(),
            Some(&Heading {
                title: "Heading".into(),
                level: DEFAULT_HEADING_LEVEL,
            })
        );
        assert_eq!(row.description(), Some("Rest: more"));
        assert!(!row.blank_line_before());
    }

    #[test]
    fn test_heading_without_colon() {
        let row = RowDirective::interpret("!h Media");
        assert_eq!(row.heading().map(|h| h.title.as_str()), Some("Media"));
        assert_eq!(row.description(), Some(""));
    }

    #[test]
    fn test_heading_level_digit() {
        let row = RowDirective::interpret("!h3 Windows: Close");
        assert_eq!(
            row.heading(),
            Some(&Heading {
                title: "Windows".into(),
                level: 3,
            })
        );
        assert_eq!(row.description(), Some("Close"));
    }

    #[test]
    fn test_heading_level_zero_is_not_a_level() {
        let row = RowDirective::interpret("!h0 Title: x");
        assert_eq!(
            row.heading().map(|h| (h.title.as_str(), h.level)),
            Some(("0 Title", DEFAULT_HEADING_LEVEL))
        );
    }

    #[test]
    fn test_priority_skip_over_break_and_heading() {
        assert!(RowDirective::interpret("!skip !br !h x: y").is_skip());
        let row = RowDirective::interpret("!br !h x: y");
        assert!(row.blank_line_before());
        assert_eq!(row.heading(), None);
        assert_eq!(row.description(), Some("!h x: y"));
    }
}
