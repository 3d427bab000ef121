use thiserror::Error;

/// Errors that can occur while building, rendering, signing or encoding an invoice.
///
/// Every failure aborts the whole invocation; no component produces a partial result.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FatooraError {
    /// One or more structural preconditions on the invoice failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// The private key could not be parsed or a signing key derived from it.
    #[error("key format error: {0}")]
    KeyFormat(String),

    /// A TLV/QR value is out of the supported range or cannot be decoded.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// A signature or public key is malformed or does not verify.
    #[error("signature error: {0}")]
    Signature(String),

    /// XML generation error.
    #[error("XML error: {0}")]
    Xml(String),

    /// A hash chain link does not match its predecessor or its own content.
    #[error("hash chain error: {0}")]
    Chain(String),
}

/// A single structural violation with the path of the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Path to the invalid field (e.g. "items[2].quantity").
    pub field: String,
    /// Human-readable error description.
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

/// Collapse a list of validation errors into a single `FatooraError::Validation`.
pub(crate) fn validation_failure(errors: &[ValidationError]) -> FatooraError {
    let msg = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    FatooraError::Validation(msg)
}
