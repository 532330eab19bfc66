//! Error types for the tripdesk server.
//!
//! Domain-specific error enums live in the submodules (assignment, auth,
//! config, event, flight, registration) and are aggregated into a single
//! [`Error`] type with `#[from]` conversions so `?` works across layers.
//! Every error implements `IntoResponse`; the registration service passes
//! collaborator errors through untouched, so the mapping from a typed error
//! to an HTTP status lives here and nowhere else.

pub mod assignment;
pub mod auth;
pub mod config;
pub mod event;
pub mod flight;
pub mod registration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{
        assignment::AssignmentError, auth::AuthError, config::ConfigError, event::EventError,
        flight::FlightError, registration::RegistrationError,
    },
    model::api::ErrorDto,
};

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (no user id in the session).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Trip event error (unknown event id).
    #[error(transparent)]
    EventError(#[from] EventError),
    /// Flight directory error (unknown flight id).
    #[error(transparent)]
    FlightError(#[from] FlightError),
    /// Group-flight assignment error (resolution, write validation, capacity).
    #[error(transparent)]
    AssignmentError(#[from] AssignmentError),
    /// Registration error (validation, uniqueness, lifecycle transitions).
    #[error(transparent)]
    RegistrationError(#[from] RegistrationError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in tripdesk's code.
    #[error("Internal error in tripdesk's code: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::EventError(err) => err.into_response(),
            Self::FlightError(err) => err.into_response(),
            Self::AssignmentError(err) => err.into_response(),
            Self::RegistrationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// The full error is logged; the client only sees a generic message so
/// internal details never leak into responses.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
