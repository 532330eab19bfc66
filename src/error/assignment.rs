use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::InternalServerError,
    model::api::{ErrorDto, FieldErrorDto, FieldErrorsDto},
};

#[derive(Error, Debug)]
pub enum AssignmentError {
    #[error("Group flight assignment ID {0} not found")]
    NotFound(i32),
    /// No active flight pair exists for the departure airport the user
    /// selected. This is a user-correctable input error, so it renders as a
    /// field-level error on `departureAirport` rather than a 404.
    #[error("No active flight assignment for departure airport {airport:?} on event ID {event_id}")]
    NoActiveAssignment { event_id: i32, airport: String },
    /// Two or more active assignments share the highest priority for the
    /// same departure airport. The write-time uniqueness rules should make
    /// this impossible; resolving by first-match would hide corrupted data,
    /// so it is surfaced as an integrity failure instead.
    #[error(
        "Found multiple active assignments with equal priority {priority} for departure airport \
         {airport:?} on event ID {event_id}; refusing to resolve a flight pair from ambiguous data"
    )]
    AmbiguousAssignment {
        event_id: i32,
        airport: String,
        priority: i32,
    },
    #[error("Outbound flight ID {0} does not have direction 'outbound'")]
    OutboundDirectionMismatch(i32),
    #[error("Return flight ID {0} does not have direction 'return'")]
    ReturnDirectionMismatch(i32),
    #[error("Flight ID {flight_id} belongs to a different event than the assignment (expected event ID {expected_event_id})")]
    EventMismatch {
        flight_id: i32,
        expected_event_id: i32,
    },
    #[error(
        "Outbound flight departs from {flight_departure:?}, which does not match the assignment's \
         departure airport code {airport:?}"
    )]
    AirportMismatch {
        airport: String,
        flight_departure: String,
    },
    #[error(
        "An active assignment already exists for group {group_name:?} and departure airport \
         {airport:?} on event ID {event_id}"
    )]
    DuplicateActiveAssignment {
        event_id: i32,
        group_name: String,
        airport: String,
    },
    #[error("Group flight assignment ID {0} is at capacity")]
    AssignmentFull(i32),
}

impl IntoResponse for AssignmentError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Assignment not found".to_string(),
                }),
            )
                .into_response(),
            Self::NoActiveAssignment { .. } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(FieldErrorsDto {
                        errors: vec![FieldErrorDto {
                            field: "departureAirport".to_string(),
                            reason: "No flights are available for this departure airport"
                                .to_string(),
                        }],
                    }),
                )
                    .into_response()
            }
            Self::AmbiguousAssignment { .. } => InternalServerError(self).into_response(),
            Self::AssignmentFull(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "Assignment is at capacity".to_string(),
                }),
            )
                .into_response(),
            // Admin write validation failures; the Display message names the
            // violated rule so the admin form can show it verbatim.
            err => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
