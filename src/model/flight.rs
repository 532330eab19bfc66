use chrono::{NaiveDate, NaiveTime};
use entity::flight::FlightDirection;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FlightDirectionDto {
    Outbound,
    Return,
}

impl From<FlightDirectionDto> for FlightDirection {
    fn from(direction: FlightDirectionDto) -> Self {
        match direction {
            FlightDirectionDto::Outbound => FlightDirection::Outbound,
            FlightDirectionDto::Return => FlightDirection::Return,
        }
    }
}

impl From<FlightDirection> for FlightDirectionDto {
    fn from(direction: FlightDirection) -> Self {
        match direction {
            FlightDirection::Outbound => FlightDirectionDto::Outbound,
            FlightDirection::Return => FlightDirectionDto::Return,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FlightDto {
    pub id: i32,
    pub event_id: i32,
    pub direction: FlightDirectionDto,
    pub departure_group: String,
    pub departure_airport: String,
    pub departure_iata: String,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub arrival_airport: String,
    pub arrival_iata: String,
    pub arrival_date: NaiveDate,
    pub arrival_time: NaiveTime,
    pub carrier: String,
    pub flight_number: String,
    pub duration_minutes: i32,
}

impl From<entity::flight::Model> for FlightDto {
    fn from(model: entity::flight::Model) -> Self {
        Self {
            id: model.id,
            event_id: model.event_id,
            direction: model.direction.into(),
            departure_group: model.departure_group,
            departure_airport: model.departure_airport,
            departure_iata: model.departure_iata,
            departure_date: model.departure_date,
            departure_time: model.departure_time,
            arrival_airport: model.arrival_airport,
            arrival_iata: model.arrival_iata,
            arrival_date: model.arrival_date,
            arrival_time: model.arrival_time,
            carrier: model.carrier,
            flight_number: model.flight_number,
            duration_minutes: model.duration_minutes,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateFlightDto {
    /// Defaults to the deployment's configured event when omitted.
    pub event_id: Option<i32>,
    pub direction: FlightDirectionDto,
    pub departure_group: String,
    pub departure_airport: String,
    pub departure_iata: String,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub arrival_airport: String,
    pub arrival_iata: String,
    pub arrival_date: NaiveDate,
    pub arrival_time: NaiveTime,
    pub carrier: String,
    pub flight_number: String,
    pub duration_minutes: i32,
}
