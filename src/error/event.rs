use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Trip event ID {0} not found")]
    NotFound(i32),
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Event not found".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
