use thiserror::Error;

use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: u32 },
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CatalogError {
    /// Reservation refusals that leave the catalog untouched and only skip a line.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            CatalogError::InsufficientStock { .. } | CatalogError::InvalidQuantity(_)
        )
    }
}

impl From<FrameworkError> for CatalogError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => CatalogError::NotFound(id),
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}
