use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::registration::RegistrationStatus;
use thiserror::Error;

use crate::model::api::{ErrorDto, FieldErrorDto, FieldErrorsDto};

/// A single field-level validation failure.
///
/// Field names match the camelCase wire names of the registration form DTO
/// so the caller can attach the reason to the offending input directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("Registration not found")]
    NotFound,
    #[error("Registration payload failed validation on {} field(s)", .0.len())]
    ValidationFailed(Vec<FieldError>),
    #[error("Registration status cannot change from {from:?} to {to:?}")]
    InvalidTransition {
        from: RegistrationStatus,
        to: RegistrationStatus,
    },
}

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Registration not found".to_string(),
                }),
            )
                .into_response(),
            Self::ValidationFailed(errors) => {
                tracing::debug!("registration rejected with {} field error(s)", errors.len());

                (
                    StatusCode::BAD_REQUEST,
                    Json(FieldErrorsDto {
                        errors: errors
                            .into_iter()
                            .map(|e| FieldErrorDto {
                                field: e.field,
                                reason: e.reason,
                            })
                            .collect(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidTransition { .. } => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
