use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum FlightError {
    /// The requested flight does not exist. Not retryable; the id either
    /// refers to a deleted flight or was never valid.
    #[error("Flight ID {0} not found")]
    NotFound(i32),
}

impl IntoResponse for FlightError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Flight not found".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
