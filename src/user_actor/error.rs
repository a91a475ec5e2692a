use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("User validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for UserError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}
