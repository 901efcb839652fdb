//! HTTP error taxonomy. Every failure leaves the service as `{"error": "<message>"}`.

use crate::order_actor::OrderError;
use crate::registry_actor::RegistryError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    /// Client input was missing, malformed or invalid.
    #[error("{0}")]
    BadRequest(String),

    #[error("x-api-key required")]
    MissingApiKey,

    #[error("invalid api key")]
    InvalidApiKey,

    #[error("forbidden")]
    Forbidden,

    #[error("{0}")]
    NotFound(&'static str),

    /// The order store failed. Details are logged, never returned.
    #[error("db error")]
    Database,

    /// The registry could not answer.
    #[error("internal error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingApiKey => StatusCode::UNAUTHORIZED,
            ApiError::InvalidApiKey | ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::ValidationError(message) => ApiError::BadRequest(message),
            OrderError::DatabaseError(_) | OrderError::ActorCommunicationError(_) => {
                error!(error = %e, "Order store failure");
                ApiError::Database
            }
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::NotFound(_) => ApiError::NotFound("spec not found"),
            RegistryError::Storage(_) | RegistryError::ActorCommunicationError(_) => {
                error!(error = %e, "Registry failure");
                ApiError::Internal
            }
        }
    }
}
