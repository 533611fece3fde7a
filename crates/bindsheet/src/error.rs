//! Error types for rendering a cheat sheet.

/// Errors that abort a run.
///
/// Unknown keys, dispatchers and missing record fields are not errors; they
/// fall back to the raw token or an empty value.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input was not valid JSON, or a record field had the wrong type.
    #[error("invalid binding JSON: {0}")]
    Json(#[from] serde_json::Error),
}
