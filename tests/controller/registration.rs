//! Tests for the registration endpoints.
//!
//! These drive the controller handlers directly against an in-memory SQLite
//! database with the real migrations applied, so the uniqueness behavior
//! under resubmission matches production.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tripdesk::{
    controller::registration::{
        cancel_own_registration, get_own_registration, set_registration_status,
        submit_registration, EventQuery,
    },
    model::{
        api::FieldErrorsDto,
        app::AppState,
        registration::{
            CancelRegistrationDto, RegistrationDto, RegistrationStatusDto,
            SetRegistrationStatusDto,
        },
        session::SessionUserId,
    },
};
use tripdesk_test_utils::prelude::*;

use crate::util::{read_json, valid_payload};

/// Expect a stored pending registration carrying the assigned flight pair
#[tokio::test]
async fn submit_stores_registration_with_resolved_flights() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let db = &test.state.db;
    let event = fixtures::insert_event(db, TEST_EVENT_NAME, &[]).await?;
    let (outbound, inbound, _) = fixtures::insert_route(
        db,
        event.id,
        TEST_AIRPORT_MALPENSA,
        TEST_AIRPORT_MALPENSA,
        TEST_IATA_MALPENSA,
    )
    .await?;
    SessionUserId::insert(&test.session, TEST_USER_ID)
        .await
        .unwrap();

    let result = submit_registration(
        State(test.state::<AppState>()),
        test.session.clone(),
        Query(EventQuery { event_id: None }),
        Json(valid_payload()),
    )
    .await;

    assert!(result.is_ok());
    let registration: RegistrationDto =
        read_json(result.unwrap().into_response(), StatusCode::OK).await;

    assert_eq!(registration.outbound_flight_id, outbound.id);
    assert_eq!(registration.return_flight_id, inbound.id);
    assert_eq!(registration.status, RegistrationStatusDto::Pending);

    Ok(())
}

/// Expect resubmission to keep the registration id and update the form data
#[tokio::test]
async fn resubmit_updates_registration_in_place() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let db = &test.state.db;
    let event = fixtures::insert_event(db, TEST_EVENT_NAME, &[]).await?;
    fixtures::insert_route(
        db,
        event.id,
        TEST_AIRPORT_MALPENSA,
        TEST_AIRPORT_MALPENSA,
        TEST_IATA_MALPENSA,
    )
    .await?;
    SessionUserId::insert(&test.session, TEST_USER_ID)
        .await
        .unwrap();

    let first = submit_registration(
        State(test.state::<AppState>()),
        test.session.clone(),
        Query(EventQuery { event_id: None }),
        Json(valid_payload()),
    )
    .await
    .unwrap();
    let first: RegistrationDto = read_json(first.into_response(), StatusCode::OK).await;

    let mut payload = valid_payload();
    payload.room_type = Some("Doppia uso singola".to_string());

    let second = submit_registration(
        State(test.state::<AppState>()),
        test.session.clone(),
        Query(EventQuery { event_id: None }),
        Json(payload),
    )
    .await
    .unwrap();
    let second: RegistrationDto = read_json(second.into_response(), StatusCode::OK).await;

    assert_eq!(first.id, second.id);
    assert_eq!(
        second.form_data.get("roomType"),
        Some(&serde_json::json!("Doppia uso singola"))
    );
    assert!(second.submitted_at >= first.submitted_at);

    Ok(())
}

/// Expect a field error on departureAirport when no assignment exists
#[tokio::test]
async fn submit_rejects_airport_without_assignment() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let db = &test.state.db;
    let event = fixtures::insert_event(db, TEST_EVENT_NAME, &[]).await?;
    fixtures::insert_route(
        db,
        event.id,
        TEST_AIRPORT_MALPENSA,
        TEST_AIRPORT_MALPENSA,
        TEST_IATA_MALPENSA,
    )
    .await?;
    SessionUserId::insert(&test.session, TEST_USER_ID)
        .await
        .unwrap();

    let mut payload = valid_payload();
    payload.departure_airport = Some(TEST_AIRPORT_VENEZIA.to_string());

    let result = submit_registration(
        State(test.state::<AppState>()),
        test.session.clone(),
        Query(EventQuery { event_id: None }),
        Json(payload),
    )
    .await;

    let response = result.into_response();
    let errors: FieldErrorsDto = read_json(response, StatusCode::BAD_REQUEST).await;

    assert_eq!(errors.errors.len(), 1);
    assert_eq!(errors.errors[0].field, "departureAirport");

    Ok(())
}

/// Expect a field error naming the missing companion field
#[tokio::test]
async fn submit_rejects_missing_companion_field() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let db = &test.state.db;
    let event = fixtures::insert_event(db, TEST_EVENT_NAME, &[]).await?;
    fixtures::insert_route(
        db,
        event.id,
        TEST_AIRPORT_MALPENSA,
        TEST_AIRPORT_MALPENSA,
        TEST_IATA_MALPENSA,
    )
    .await?;
    SessionUserId::insert(&test.session, TEST_USER_ID)
        .await
        .unwrap();

    let mut payload = valid_payload();
    payload.has_companion = true;

    let result = submit_registration(
        State(test.state::<AppState>()),
        test.session.clone(),
        Query(EventQuery { event_id: None }),
        Json(payload),
    )
    .await;

    let response = result.into_response();
    let errors: FieldErrorsDto = read_json(response, StatusCode::BAD_REQUEST).await;

    assert!(errors.errors.iter().any(|e| e.field == "companionFirstName"));

    Ok(())
}

/// Expect 404 when submitting without a logged in user
#[tokio::test]
async fn submit_requires_session_user() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let db = &test.state.db;
    fixtures::insert_event(db, TEST_EVENT_NAME, &[]).await?;

    let result = submit_registration(
        State(test.state::<AppState>()),
        test.session.clone(),
        Query(EventQuery { event_id: None }),
        Json(valid_payload()),
    )
    .await;

    let response = result.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 before submission and 200 after
#[tokio::test]
async fn get_own_registration_round_trip() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let db = &test.state.db;
    let event = fixtures::insert_event(db, TEST_EVENT_NAME, &[]).await?;
    fixtures::insert_route(
        db,
        event.id,
        TEST_AIRPORT_MALPENSA,
        TEST_AIRPORT_MALPENSA,
        TEST_IATA_MALPENSA,
    )
    .await?;
    SessionUserId::insert(&test.session, TEST_USER_ID)
        .await
        .unwrap();

    let missing = get_own_registration(
        State(test.state::<AppState>()),
        test.session.clone(),
        Query(EventQuery { event_id: None }),
    )
    .await
    .unwrap();
    assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

    submit_registration(
        State(test.state::<AppState>()),
        test.session.clone(),
        Query(EventQuery { event_id: None }),
        Json(valid_payload()),
    )
    .await
    .unwrap();

    let found = get_own_registration(
        State(test.state::<AppState>()),
        test.session.clone(),
        Query(EventQuery { event_id: None }),
    )
    .await
    .unwrap();
    let registration: RegistrationDto = read_json(found.into_response(), StatusCode::OK).await;

    assert_eq!(registration.user_id, TEST_USER_ID);

    Ok(())
}

/// Expect cancellation to succeed once and conflict afterwards
#[tokio::test]
async fn cancel_own_registration_is_terminal() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let db = &test.state.db;
    let event = fixtures::insert_event(db, TEST_EVENT_NAME, &[]).await?;
    fixtures::insert_route(
        db,
        event.id,
        TEST_AIRPORT_MALPENSA,
        TEST_AIRPORT_MALPENSA,
        TEST_IATA_MALPENSA,
    )
    .await?;
    SessionUserId::insert(&test.session, TEST_USER_ID)
        .await
        .unwrap();

    submit_registration(
        State(test.state::<AppState>()),
        test.session.clone(),
        Query(EventQuery { event_id: None }),
        Json(valid_payload()),
    )
    .await
    .unwrap();

    let cancelled = cancel_own_registration(
        State(test.state::<AppState>()),
        test.session.clone(),
        Query(EventQuery { event_id: None }),
        Json(CancelRegistrationDto {
            reason: Some("Change of plans".to_string()),
        }),
    )
    .await
    .unwrap();
    let cancelled: RegistrationDto = read_json(cancelled.into_response(), StatusCode::OK).await;

    assert_eq!(cancelled.status, RegistrationStatusDto::Cancelled);
    assert_eq!(cancelled.cancel_reason.as_deref(), Some("Change of plans"));

    let again = cancel_own_registration(
        State(test.state::<AppState>()),
        test.session.clone(),
        Query(EventQuery { event_id: None }),
        Json(CancelRegistrationDto { reason: None }),
    )
    .await;

    let response = again.into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect admin transitions to honor the lifecycle state machine
#[tokio::test]
async fn set_registration_status_enforces_transitions() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let db = &test.state.db;
    let event = fixtures::insert_event(db, TEST_EVENT_NAME, &[]).await?;
    fixtures::insert_route(
        db,
        event.id,
        TEST_AIRPORT_MALPENSA,
        TEST_AIRPORT_MALPENSA,
        TEST_IATA_MALPENSA,
    )
    .await?;
    SessionUserId::insert(&test.session, TEST_USER_ID)
        .await
        .unwrap();

    let registration = submit_registration(
        State(test.state::<AppState>()),
        test.session.clone(),
        Query(EventQuery { event_id: None }),
        Json(valid_payload()),
    )
    .await
    .unwrap();
    let registration: RegistrationDto =
        read_json(registration.into_response(), StatusCode::OK).await;

    let confirmed = set_registration_status(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path(registration.id),
        Json(SetRegistrationStatusDto {
            status: RegistrationStatusDto::Confirmed,
        }),
    )
    .await
    .unwrap();
    let confirmed: RegistrationDto = read_json(confirmed.into_response(), StatusCode::OK).await;
    assert_eq!(confirmed.status, RegistrationStatusDto::Confirmed);

    let rejected = set_registration_status(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path(registration.id),
        Json(SetRegistrationStatusDto {
            status: RegistrationStatusDto::Waitlisted,
        }),
    )
    .await;

    let response = rejected.into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    Ok(())
}
