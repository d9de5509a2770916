use thiserror::Error;

/// Result type alias for request construction
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Raised while rendering a request, always before any network I/O
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingParameter(&'static str),

    #[error("one or more {0} are required")]
    EmptyList(&'static str),

    #[error("Could not handle {kind} {value}")]
    Unsupported { kind: &'static str, value: String },

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl ValidationError {
    pub fn unsupported(kind: &'static str, value: impl Into<String>) -> Self {
        ValidationError::Unsupported {
            kind,
            value: value.into(),
        }
    }
}
