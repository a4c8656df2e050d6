//! HTTP error responses.
//!
//! Every handler failure is returned as an `ApiError`, rendered as
//! `{ "code": ..., "message": ... }` with a status matching the code.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::BookingError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    fn new(status: StatusCode, code: &str, message: String) -> Self {
        Self {
            status,
            body: ErrorResponse {
                code: code.to_string(),
                message,
            },
        }
    }

    pub fn room_not_found(room_id: u32) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "room_not_found",
            format!("room {} does not exist", room_id),
        )
    }

    pub fn invalid_date(value: &str) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "invalid_date",
            format!("invalid date {:?}, expected YYYY-MM-DD or DD.MM.YYYY", value),
        )
    }

    pub fn past_date(date: NaiveDate, today: NaiveDate) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "past_date",
            format!("cannot book {} because it is before {}", date, today),
        )
    }

    pub fn internal(detail: &str) -> Self {
        // Details stay in the log
        error!("Internal error: {}", detail);
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal",
            "internal server error".to_string(),
        )
    }
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Conflict { .. } => {
                Self::new(StatusCode::CONFLICT, "conflict", err.to_string())
            }
            BookingError::NotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, "booking_not_found", err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
