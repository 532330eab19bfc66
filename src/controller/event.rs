use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    data::event::EventRepository,
    error::{auth::AuthError, event::EventError, Error},
    model::{
        api::ErrorDto,
        app::AppState,
        event::{CreateEventDto, EventDto},
        session::SessionUserId,
    },
};

pub static EVENT_TAG: &str = "event";

fn to_event_dto(event: entity::trip_event::Model) -> Result<EventDto, Error> {
    let room_types: Vec<String> = serde_json::from_value(event.room_types).map_err(|e| {
        Error::ParseError(format!(
            "Failed to parse room types for event ID {}: {}",
            event.id, e
        ))
    })?;

    Ok(EventDto {
        id: event.id,
        name: event.name,
        room_types,
    })
}

/// Create a trip event
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 200, description = "Event created", body = EventDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, Error> {
    SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::UserNotInSession)?;

    let event_repository = EventRepository::new(&state.db);
    let event = event_repository
        .create(payload.name, payload.room_types)
        .await?;

    Ok((StatusCode::OK, Json(to_event_dto(event)?)).into_response())
}

/// Get a trip event by its ID
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "The event", body = EventDto),
        (status = 404, description = "User or event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::UserNotInSession)?;

    let event_repository = EventRepository::new(&state.db);
    let event = event_repository
        .get(event_id)
        .await?
        .ok_or(EventError::NotFound(event_id))?;

    Ok((StatusCode::OK, Json(to_event_dto(event)?)).into_response())
}
