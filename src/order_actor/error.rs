use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::product_actor::CatalogError;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("User not found: {0}")]
    UserNotFound(String),
    #[error("No unused order code after {0} attempts")]
    CodeSpaceExhausted(usize),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(code) => OrderError::NotFound(code),
            FrameworkError::IdSpaceExhausted(attempts) => OrderError::CodeSpaceExhausted(attempts),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
