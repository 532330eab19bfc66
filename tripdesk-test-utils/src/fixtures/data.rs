//! Insert helpers for trip fixtures.
//!
//! These write directly through the entity ActiveModels rather than the main
//! crate's repositories, so the test-utils crate stays free of a circular
//! dependency on `tripdesk` itself.

use chrono::{NaiveDate, NaiveTime, Utc};
use entity::{
    flight::{self, FlightDirection},
    group_flight_assignment::{self, AssignmentStatus},
    trip_event,
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

/// Inserts a trip event with the given room type options.
pub async fn insert_event(
    db: &DatabaseConnection,
    name: &str,
    room_types: &[&str],
) -> Result<trip_event::Model, TestError> {
    let now = Utc::now().naive_utc();
    let room_types: Vec<String> = room_types.iter().map(|r| r.to_string()).collect();

    let event = trip_event::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        room_types: ActiveValue::Set(serde_json::json!(room_types)),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(event.insert(db).await?)
}

/// Inserts a flight with canned endpoint data for the given direction and
/// departure group.
pub async fn insert_flight(
    db: &DatabaseConnection,
    event_id: i32,
    direction: FlightDirection,
    group: &str,
    airport: &str,
    iata: &str,
    flight_number: &str,
) -> Result<flight::Model, TestError> {
    let now = Utc::now().naive_utc();
    let date = match direction {
        FlightDirection::Outbound => NaiveDate::from_ymd_opt(2026, 9, 18).unwrap(),
        FlightDirection::Return => NaiveDate::from_ymd_opt(2026, 9, 21).unwrap(),
    };
    let time = NaiveTime::from_hms_opt(10, 30, 0).unwrap();

    // The destination is fixed; tests only ever discriminate on the
    // departure side of the flight.
    let (dep_airport, dep_iata, arr_airport, arr_iata) = match direction {
        FlightDirection::Outbound => (airport, iata, "Palma di Maiorca", "PMI"),
        FlightDirection::Return => ("Palma di Maiorca", "PMI", airport, iata),
    };

    let flight = flight::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        direction: ActiveValue::Set(direction),
        departure_group: ActiveValue::Set(group.to_string()),
        departure_airport: ActiveValue::Set(dep_airport.to_string()),
        departure_iata: ActiveValue::Set(dep_iata.to_string()),
        departure_date: ActiveValue::Set(date),
        departure_time: ActiveValue::Set(time),
        arrival_airport: ActiveValue::Set(arr_airport.to_string()),
        arrival_iata: ActiveValue::Set(arr_iata.to_string()),
        arrival_date: ActiveValue::Set(date),
        arrival_time: ActiveValue::Set(NaiveTime::from_hms_opt(12, 40, 0).unwrap()),
        carrier: ActiveValue::Set("Neos".to_string()),
        flight_number: ActiveValue::Set(flight_number.to_string()),
        duration_minutes: ActiveValue::Set(130),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(flight.insert(db).await?)
}

/// Inserts an outbound/return flight pair for a departure group.
pub async fn insert_flight_pair(
    db: &DatabaseConnection,
    event_id: i32,
    group: &str,
    airport: &str,
    iata: &str,
) -> Result<(flight::Model, flight::Model), TestError> {
    let outbound = insert_flight(
        db,
        event_id,
        FlightDirection::Outbound,
        group,
        airport,
        iata,
        "NO 1826",
    )
    .await?;
    let inbound = insert_flight(
        db,
        event_id,
        FlightDirection::Return,
        group,
        airport,
        iata,
        "NO 1827",
    )
    .await?;

    Ok((outbound, inbound))
}

/// Inserts an active assignment with default priority and no capacity limit.
pub async fn insert_assignment(
    db: &DatabaseConnection,
    event_id: i32,
    group: &str,
    airport: &str,
    outbound_flight_id: i32,
    return_flight_id: i32,
) -> Result<group_flight_assignment::Model, TestError> {
    insert_assignment_with(
        db,
        event_id,
        group,
        airport,
        outbound_flight_id,
        return_flight_id,
        AssignmentStatus::Active,
        0,
        None,
        0,
    )
    .await
}

/// Inserts an assignment with explicit status, priority, and capacity.
#[allow(clippy::too_many_arguments)]
pub async fn insert_assignment_with(
    db: &DatabaseConnection,
    event_id: i32,
    group: &str,
    airport: &str,
    outbound_flight_id: i32,
    return_flight_id: i32,
    status: AssignmentStatus,
    priority: i32,
    capacity_max: Option<i32>,
    capacity_current: i32,
) -> Result<group_flight_assignment::Model, TestError> {
    let now = Utc::now().naive_utc();

    let assignment = group_flight_assignment::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        group_name: ActiveValue::Set(group.to_string()),
        departure_airport_code: ActiveValue::Set(airport.to_string()),
        outbound_flight_id: ActiveValue::Set(outbound_flight_id),
        return_flight_id: ActiveValue::Set(return_flight_id),
        status: ActiveValue::Set(status),
        priority: ActiveValue::Set(priority),
        capacity_max: ActiveValue::Set(capacity_max),
        capacity_current: ActiveValue::Set(capacity_current),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(assignment.insert(db).await?)
}

/// Inserts a full departure route: flight pair plus its active assignment.
pub async fn insert_route(
    db: &DatabaseConnection,
    event_id: i32,
    group: &str,
    airport: &str,
    iata: &str,
) -> Result<
    (
        flight::Model,
        flight::Model,
        group_flight_assignment::Model,
    ),
    TestError,
> {
    let (outbound, inbound) = insert_flight_pair(db, event_id, group, airport, iata).await?;
    let assignment =
        insert_assignment(db, event_id, group, airport, outbound.id, inbound.id).await?;

    Ok((outbound, inbound, assignment))
}
