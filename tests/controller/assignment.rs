//! Tests for the group flight assignment endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tripdesk::{
    controller::assignment::{decrement_capacity, increment_capacity, upsert_assignment},
    model::{
        app::AppState,
        assignment::{AssignmentDto, AssignmentStatusDto, UpsertAssignmentDto},
        session::SessionUserId,
    },
};
use tripdesk_test_utils::prelude::*;

use crate::util::read_json;

fn upsert_payload(
    event_id: i32,
    outbound_flight_id: i32,
    return_flight_id: i32,
    capacity_max: Option<i32>,
) -> UpsertAssignmentDto {
    UpsertAssignmentDto {
        id: None,
        event_id: Some(event_id),
        group_name: "Milano Malpensa".to_string(),
        departure_airport_code: TEST_AIRPORT_MALPENSA.to_string(),
        outbound_flight_id,
        return_flight_id,
        status: None,
        priority: None,
        capacity_max,
    }
}

/// Expect a consistent assignment to be created active
#[tokio::test]
async fn upsert_creates_active_assignment() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let db = &test.state.db;
    let event = fixtures::insert_event(db, TEST_EVENT_NAME, &[]).await?;
    let (outbound, inbound) = fixtures::insert_flight_pair(
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

    let result = upsert_assignment(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(upsert_payload(event.id, outbound.id, inbound.id, None)),
    )
    .await;

    assert!(result.is_ok());
    let assignment: AssignmentDto =
        read_json(result.unwrap().into_response(), StatusCode::OK).await;

    assert_eq!(assignment.status, AssignmentStatusDto::Active);
    assert_eq!(assignment.outbound_flight_id, outbound.id);

    Ok(())
}

/// Expect 400 when the flight pair directions are swapped
#[tokio::test]
async fn upsert_rejects_inconsistent_assignment() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let db = &test.state.db;
    let event = fixtures::insert_event(db, TEST_EVENT_NAME, &[]).await?;
    let (outbound, inbound) = fixtures::insert_flight_pair(
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

    let result = upsert_assignment(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(upsert_payload(event.id, inbound.id, outbound.id, None)),
    )
    .await;

    let response = result.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 when a second active assignment targets the same route
#[tokio::test]
async fn upsert_rejects_duplicate_active_route() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let db = &test.state.db;
    let event = fixtures::insert_event(db, TEST_EVENT_NAME, &[]).await?;
    let (outbound, inbound, _) = fixtures::insert_route(
        db,
        event.id,
        "Milano Malpensa",
        TEST_AIRPORT_MALPENSA,
        TEST_IATA_MALPENSA,
    )
    .await?;
    SessionUserId::insert(&test.session, TEST_USER_ID)
        .await
        .unwrap();

    let result = upsert_assignment(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(upsert_payload(event.id, outbound.id, inbound.id, None)),
    )
    .await;

    let response = result.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect capacity to fill up, conflict, then reopen after a decrement
#[tokio::test]
async fn capacity_round_trip() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let db = &test.state.db;
    let event = fixtures::insert_event(db, TEST_EVENT_NAME, &[]).await?;
    let (outbound, inbound) = fixtures::insert_flight_pair(
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

    let created = upsert_assignment(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(upsert_payload(event.id, outbound.id, inbound.id, Some(1))),
    )
    .await
    .unwrap();
    let created: AssignmentDto = read_json(created.into_response(), StatusCode::OK).await;

    let filled = increment_capacity(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path(created.id),
    )
    .await
    .unwrap();
    let filled: AssignmentDto = read_json(filled.into_response(), StatusCode::OK).await;

    assert_eq!(filled.capacity_current, 1);
    assert_eq!(filled.status, AssignmentStatusDto::Full);

    let rejected = increment_capacity(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path(created.id),
    )
    .await;

    let response = rejected.into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let reopened = decrement_capacity(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path(created.id),
    )
    .await
    .unwrap();
    let reopened: AssignmentDto = read_json(reopened.into_response(), StatusCode::OK).await;

    assert_eq!(reopened.capacity_current, 0);
    assert_eq!(reopened.status, AssignmentStatusDto::Active);

    Ok(())
}
