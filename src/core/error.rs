use thiserror::Error;

/// Errors that abort an export.
///
/// Per-counter-party resolution gaps are deliberately not represented
/// here — they degrade to documented defaults and surface as operator
/// notices instead, so a draft document can always be produced once the
/// input resolved.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    /// Malformed or empty structural input (id list, address value).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Zero payment records resolved for a non-empty id set.
    #[error("not found: {0}")]
    NotFound(String),

    /// The record store failed to answer a lookup.
    #[error("storage error: {0}")]
    Storage(String),

    /// XML document generation error.
    #[error("XML error: {0}")]
    Xml(String),
}

/// A single advisory finding with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the offending field (e.g. "debtor_iban").
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
