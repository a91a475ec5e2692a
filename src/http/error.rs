use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::order_actor::OrderError;
use crate::product_actor::CatalogError;
use crate::user_actor::UserError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl From<UserError> for HttpError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::ValidationError(_) => {
                HttpError::BadRequest("Nombre y cédula son obligatorios".to_string())
            }
            UserError::NotFound(_) => HttpError::NotFound("Usuario no encontrado".to_string()),
            UserError::ActorCommunicationError(msg) => HttpError::Internal(msg),
        }
    }
}

impl From<CatalogError> for HttpError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(name) => HttpError::NotFound(format!("Producto no encontrado: {name}")),
            other => HttpError::Internal(other.to_string()),
        }
    }
}

impl From<OrderError> for HttpError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::UserNotFound(_) => HttpError::NotFound("Usuario no encontrado".to_string()),
            OrderError::NotFound(_) => HttpError::NotFound("Pedido no encontrado".to_string()),
            OrderError::CodeSpaceExhausted(_) => HttpError::ServiceUnavailable(err.to_string()),
            OrderError::Catalog(catalog_err) => catalog_err.into(),
            OrderError::ActorCommunicationError(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}
