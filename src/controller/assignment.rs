use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::group_flight_assignment::AssignmentStatus;
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, Error},
    model::{
        api::ErrorDto,
        app::AppState,
        assignment::{AssignmentDto, UpsertAssignmentDto},
        session::SessionUserId,
    },
    service::assignment::{AssignmentService, UpsertAssignment},
};

pub static ASSIGNMENT_TAG: &str = "assignment";

/// Create or update a group flight assignment
#[utoipa::path(
    put,
    path = "/api/group-flight-assignments",
    tag = ASSIGNMENT_TAG,
    request_body = UpsertAssignmentDto,
    responses(
        (status = 200, description = "Assignment stored", body = AssignmentDto),
        (status = 400, description = "Assignment is internally inconsistent", body = ErrorDto),
        (status = 404, description = "User, flight, or assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_assignment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertAssignmentDto>,
) -> Result<impl IntoResponse, Error> {
    SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::UserNotInSession)?;

    let assignment_service = AssignmentService::new(&state.db);
    let assignment = assignment_service
        .upsert_assignment(UpsertAssignment {
            id: payload.id,
            event_id: payload.event_id.unwrap_or(state.default_event_id),
            group_name: payload.group_name,
            departure_airport_code: payload.departure_airport_code,
            outbound_flight_id: payload.outbound_flight_id,
            return_flight_id: payload.return_flight_id,
            status: payload
                .status
                .map(Into::into)
                .unwrap_or(AssignmentStatus::Active),
            priority: payload.priority.unwrap_or(0),
            capacity_max: payload.capacity_max,
        })
        .await?;

    Ok((StatusCode::OK, Json(AssignmentDto::from(assignment))).into_response())
}

/// Claim a seat on an assignment
#[utoipa::path(
    post,
    path = "/api/group-flight-assignments/{id}/increment-capacity",
    tag = ASSIGNMENT_TAG,
    params(("id" = i32, Path, description = "Assignment ID")),
    responses(
        (status = 200, description = "Capacity incremented", body = AssignmentDto),
        (status = 404, description = "User or assignment not found", body = ErrorDto),
        (status = 409, description = "Assignment is at capacity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn increment_capacity(
    State(state): State<AppState>,
    session: Session,
    Path(assignment_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::UserNotInSession)?;

    let assignment_service = AssignmentService::new(&state.db);
    let assignment = assignment_service.increment_capacity(assignment_id).await?;

    Ok((StatusCode::OK, Json(AssignmentDto::from(assignment))).into_response())
}

/// Release a seat on an assignment
#[utoipa::path(
    post,
    path = "/api/group-flight-assignments/{id}/decrement-capacity",
    tag = ASSIGNMENT_TAG,
    params(("id" = i32, Path, description = "Assignment ID")),
    responses(
        (status = 200, description = "Capacity decremented", body = AssignmentDto),
        (status = 404, description = "User or assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decrement_capacity(
    State(state): State<AppState>,
    session: Session,
    Path(assignment_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::UserNotInSession)?;

    let assignment_service = AssignmentService::new(&state.db);
    let assignment = assignment_service.decrement_capacity(assignment_id).await?;

    Ok((StatusCode::OK, Json(AssignmentDto::from(assignment))).into_response())
}
