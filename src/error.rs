use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::db::StoreError;
use crate::submission::validate::REQUIRED_MESSAGE;

pub const PERSISTENCE_MESSAGE: &str = "Error writing to database.";

#[derive(Debug)]
pub enum AppError {
    MissingField,
    Validation(Vec<String>),
    Persistence(StoreError),
    RateLimited(u64),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::MissingField => write!(f, "Missing Field: {REQUIRED_MESSAGE}"),
            AppError::Validation(violations) => {
                write!(f, "Validation Failed: {}", violations.join(" "))
            }
            AppError::Persistence(err) => write!(f, "Persistence Failed: {err}"),
            AppError::RateLimited(secs) => write!(f, "Rate Limited: retry after {secs}s"),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingField => (StatusCode::BAD_REQUEST, REQUIRED_MESSAGE.to_string()),
            AppError::Validation(violations) => (StatusCode::BAD_REQUEST, violations.join(" ")),
            AppError::Persistence(err) => {
                tracing::error!("An error occurred: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, PERSISTENCE_MESSAGE.to_string())
            }
            AppError::RateLimited(secs) => {
                let message = format!("Too many submissions. Retry after {secs}s.");
                let body = json!({ "message": message });
                return (
                    StatusCode::TOO_MANY_REQUESTS,
                    [(header::RETRY_AFTER, secs.to_string())],
                    axum::Json(body),
                )
                    .into_response();
            }
        };

        let body = json!({ "message": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Persistence(err)
    }
}
