/// Convenience result type used across vitrine.
pub type VitrineResult<T> = Result<T, VitrineError>;

/// Top-level error taxonomy used by loading and validation APIs.
///
/// Rendering itself never returns these: malformed templates become inline
/// error nodes and empty sections are omitted.
#[derive(thiserror::Error, Debug)]
pub enum VitrineError {
    /// Invalid merchant-provided configuration or content data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VitrineError {
    /// Build a [`VitrineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VitrineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for VitrineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
