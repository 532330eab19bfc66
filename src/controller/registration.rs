use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, Error},
    model::{
        api::{ErrorDto, FieldErrorsDto},
        app::AppState,
        registration::{
            CancelRegistrationDto, RegistrationDto, RegistrationFormDto, SetRegistrationStatusDto,
        },
        session::SessionUserId,
    },
    service::registration::RegistrationService,
};

pub static REGISTRATION_TAG: &str = "registration";

#[derive(Debug, serde::Deserialize, utoipa::IntoParams)]
pub struct EventQuery {
    /// Defaults to the deployment's configured event when omitted
    pub event_id: Option<i32>,
}

/// Submit or resubmit the logged in user's registration for an event
#[utoipa::path(
    post,
    path = "/api/registrations",
    tag = REGISTRATION_TAG,
    params(EventQuery),
    request_body = RegistrationFormDto,
    responses(
        (status = 200, description = "Registration stored", body = RegistrationDto),
        (status = 400, description = "Validation failed or no flight assignment for the chosen airport", body = FieldErrorsDto),
        (status = 404, description = "User or event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_registration(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<EventQuery>,
    Json(payload): Json<RegistrationFormDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::UserNotInSession)?;

    let event_id = query.event_id.unwrap_or(state.default_event_id);

    let registration_service = RegistrationService::new(&state.db);
    let registration = registration_service
        .submit(user_id, event_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(RegistrationDto::from(registration))).into_response())
}

/// Get the logged in user's registration for an event
#[utoipa::path(
    get,
    path = "/api/registrations/me",
    tag = REGISTRATION_TAG,
    params(EventQuery),
    responses(
        (status = 200, description = "The user's registration", body = RegistrationDto),
        (status = 404, description = "User or registration not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_registration(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<EventQuery>,
) -> Result<impl IntoResponse, Error> {
    let user_id = SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::UserNotInSession)?;

    let event_id = query.event_id.unwrap_or(state.default_event_id);

    let registration_service = RegistrationService::new(&state.db);

    let registration = if let Some(registration) =
        registration_service.get_own(user_id, event_id).await?
    {
        registration
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "Registration not found".to_string(),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, Json(RegistrationDto::from(registration))).into_response())
}

/// Cancel the logged in user's registration for an event
#[utoipa::path(
    post,
    path = "/api/registrations/me/cancel",
    tag = REGISTRATION_TAG,
    params(EventQuery),
    request_body = CancelRegistrationDto,
    responses(
        (status = 200, description = "Registration cancelled", body = RegistrationDto),
        (status = 404, description = "User or registration not found", body = ErrorDto),
        (status = 409, description = "Registration is already cancelled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_own_registration(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<EventQuery>,
    Json(payload): Json<CancelRegistrationDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::UserNotInSession)?;

    let event_id = query.event_id.unwrap_or(state.default_event_id);

    let registration_service = RegistrationService::new(&state.db);
    let registration = registration_service
        .cancel_own(user_id, event_id, payload.reason)
        .await?;

    Ok((StatusCode::OK, Json(RegistrationDto::from(registration))).into_response())
}

/// Apply a lifecycle transition to a registration
#[utoipa::path(
    post,
    path = "/api/registrations/{id}/status",
    tag = REGISTRATION_TAG,
    params(("id" = i32, Path, description = "Registration ID")),
    request_body = SetRegistrationStatusDto,
    responses(
        (status = 200, description = "Status updated", body = RegistrationDto),
        (status = 404, description = "User or registration not found", body = ErrorDto),
        (status = 409, description = "Transition not permitted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_registration_status(
    State(state): State<AppState>,
    session: Session,
    Path(registration_id): Path<i32>,
    Json(payload): Json<SetRegistrationStatusDto>,
) -> Result<impl IntoResponse, Error> {
    SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::UserNotInSession)?;

    let registration_service = RegistrationService::new(&state.db);
    let registration = registration_service
        .set_status(registration_id, payload.status.into())
        .await?;

    Ok((StatusCode::OK, Json(RegistrationDto::from(registration))).into_response())
}
