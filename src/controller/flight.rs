use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    data::flight::NewFlight,
    error::{auth::AuthError, Error},
    model::{
        api::ErrorDto,
        app::AppState,
        flight::{CreateFlightDto, FlightDirectionDto, FlightDto},
        session::SessionUserId,
    },
    service::flight::FlightService,
};

pub static FLIGHT_TAG: &str = "flight";

#[derive(Debug, serde::Deserialize, utoipa::IntoParams)]
pub struct FlightQuery {
    pub direction: FlightDirectionDto,
    pub group: String,
    /// Defaults to the deployment's configured event when omitted
    pub event_id: Option<i32>,
}

/// Add a flight to the directory
#[utoipa::path(
    post,
    path = "/api/flights",
    tag = FLIGHT_TAG,
    request_body = CreateFlightDto,
    responses(
        (status = 200, description = "Flight created", body = FlightDto),
        (status = 404, description = "User or event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_flight(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateFlightDto>,
) -> Result<impl IntoResponse, Error> {
    SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::UserNotInSession)?;

    let event_id = payload.event_id.unwrap_or(state.default_event_id);

    let flight_service = FlightService::new(&state.db);
    let flight = flight_service
        .create_flight(
            event_id,
            NewFlight {
                direction: payload.direction.into(),
                departure_group: payload.departure_group,
                departure_airport: payload.departure_airport,
                departure_iata: payload.departure_iata,
                departure_date: payload.departure_date,
                departure_time: payload.departure_time,
                arrival_airport: payload.arrival_airport,
                arrival_iata: payload.arrival_iata,
                arrival_date: payload.arrival_date,
                arrival_time: payload.arrival_time,
                carrier: payload.carrier,
                flight_number: payload.flight_number,
                duration_minutes: payload.duration_minutes,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(FlightDto::from(flight))).into_response())
}

/// Find flights by direction and departure group
#[utoipa::path(
    get,
    path = "/api/flights",
    tag = FLIGHT_TAG,
    params(FlightQuery),
    responses(
        (status = 200, description = "Matching flights", body = Vec<FlightDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_flights(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<FlightQuery>,
) -> Result<impl IntoResponse, Error> {
    SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::UserNotInSession)?;

    let event_id = query.event_id.unwrap_or(state.default_event_id);

    let flight_service = FlightService::new(&state.db);
    let flights = flight_service
        .find_by_direction_and_group(event_id, query.direction.into(), &query.group)
        .await?;

    let flight_dtos: Vec<FlightDto> = flights.into_iter().map(FlightDto::from).collect();

    Ok((StatusCode::OK, Json(flight_dtos)).into_response())
}

/// Get a flight by its ID
#[utoipa::path(
    get,
    path = "/api/flights/{id}",
    tag = FLIGHT_TAG,
    params(("id" = i32, Path, description = "Flight ID")),
    responses(
        (status = 200, description = "The flight", body = FlightDto),
        (status = 404, description = "User or flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight(
    State(state): State<AppState>,
    session: Session,
    Path(flight_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::UserNotInSession)?;

    let flight_service = FlightService::new(&state.db);
    let flight = flight_service.get_flight(flight_id).await?;

    Ok((StatusCode::OK, Json(FlightDto::from(flight))).into_response())
}
