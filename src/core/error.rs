use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sqlx::error::ErrorKind;
use thiserror::Error;

use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Standard wire shape for a missing entity row.
    pub fn not_found(entity: &str, id: i64) -> Self {
        AppError::NotFound(format!("{} with id {} not found", entity, id))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // Constraint violations are client-visible conflicts; everything
            // else from the driver stays opaque.
            AppError::Database(ref e) => match constraint_kind(e) {
                Some(ErrorKind::UniqueViolation) => (
                    StatusCode::CONFLICT,
                    constraint_message(e, "value already exists"),
                ),
                Some(ErrorKind::ForeignKeyViolation) => (
                    StatusCode::CONFLICT,
                    "row is referenced by or references another record".to_string(),
                ),
                Some(ErrorKind::NotNullViolation) | Some(ErrorKind::CheckViolation) => (
                    StatusCode::BAD_REQUEST,
                    constraint_message(e, "constraint violated"),
                ),
                _ => {
                    tracing::error!("Database error: {:?}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Database error occurred".to_string(),
                    )
                }
            },
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(ref msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Conflict(ref msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse { error: message });

        (status, body).into_response()
    }
}

fn constraint_kind(e: &sqlx::Error) -> Option<ErrorKind> {
    e.as_database_error().map(|db| db.kind())
}

fn constraint_message(e: &sqlx::Error, fallback: &str) -> String {
    e.as_database_error()
        .map(|db| db.message().to_string())
        .unwrap_or_else(|| fallback.to_string())
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_matches_wire_format() {
        let err = AppError::not_found("Company", 7);
        assert_eq!(err.to_string(), "Company with id 7 not found");
    }
}
