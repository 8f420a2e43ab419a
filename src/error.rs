use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use common::MessageResponse;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

/// Errors a handler can return. Each renders as `{"message": ...}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("internal server error")]
    ServerError,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingUser | StoreError::MissingWorksite => Self::BadRequest {
                message: err.to_string(),
            },
            StoreError::Database(db_err) => {
                error!("Database error while handling request: {}", db_err);
                Self::ServerError
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(MessageResponse::new(self.to_string()))).into_response()
    }
}
