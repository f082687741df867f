use thiserror::Error;

/// Message shown when a failure carries no description of its own.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Errors reported by a [`UserRepository`](super::UserRepository).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("{}", message.as_deref().unwrap_or(UNKNOWN_ERROR))]
    OperationFailed { message: Option<String> },
}

impl RepositoryError {
    pub fn failed(message: impl Into<String>) -> Self {
        RepositoryError::OperationFailed {
            message: Some(message.into()),
        }
    }

    pub fn unknown() -> Self {
        RepositoryError::OperationFailed { message: None }
    }

    /// Human-readable description, falling back to [`UNKNOWN_ERROR`].
    pub fn user_message(&self) -> &str {
        match self {
            RepositoryError::OperationFailed { message } => {
                message.as_deref().unwrap_or(UNKNOWN_ERROR)
            }
        }
    }
}
