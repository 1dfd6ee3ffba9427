use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use common::responses::ApiMessage;
use log::error;
use thiserror::Error;

/// Failures of the soil API, rendered as `{ "success": false, "message": ... }`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database is not connected")]
    Disconnected,

    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Stored document is malformed: {0}")]
    Document(#[from] serde_json::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Disconnected => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Storage(_) | AppError::Document(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        }
        HttpResponse::build(status).json(ApiMessage::failed(self.to_string()))
    }
}
