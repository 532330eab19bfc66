use chrono::{NaiveDate, NaiveTime, Utc};
use entity::flight::FlightDirection;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

/// Column values for a new flight, minus the owning event.
pub struct NewFlight {
    pub direction: FlightDirection,
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

pub struct FlightRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightRepository<'a> {
    /// Creates a new instance of [`FlightRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new flight owned by the given event
    pub async fn create(
        &self,
        event_id: i32,
        flight: NewFlight,
    ) -> Result<entity::flight::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let flight = entity::flight::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            direction: ActiveValue::Set(flight.direction),
            departure_group: ActiveValue::Set(flight.departure_group),
            departure_airport: ActiveValue::Set(flight.departure_airport),
            departure_iata: ActiveValue::Set(flight.departure_iata),
            departure_date: ActiveValue::Set(flight.departure_date),
            departure_time: ActiveValue::Set(flight.departure_time),
            arrival_airport: ActiveValue::Set(flight.arrival_airport),
            arrival_iata: ActiveValue::Set(flight.arrival_iata),
            arrival_date: ActiveValue::Set(flight.arrival_date),
            arrival_time: ActiveValue::Set(flight.arrival_time),
            carrier: ActiveValue::Set(flight.carrier),
            flight_number: ActiveValue::Set(flight.flight_number),
            duration_minutes: ActiveValue::Set(flight.duration_minutes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        flight.insert(self.db).await
    }

    /// Gets a flight by its ID
    pub async fn get(&self, flight_id: i32) -> Result<Option<entity::flight::Model>, DbErr> {
        entity::prelude::Flight::find_by_id(flight_id)
            .one(self.db)
            .await
    }

    /// Gets all flights for an event matching a direction and departure
    /// group. A group can have several legs in one direction, e.g. a
    /// connecting flight routed through a different departure airport.
    pub async fn find_by_direction_and_group(
        &self,
        event_id: i32,
        direction: FlightDirection,
        group: &str,
    ) -> Result<Vec<entity::flight::Model>, DbErr> {
        entity::prelude::Flight::find()
            .filter(entity::flight::Column::EventId.eq(event_id))
            .filter(entity::flight::Column::Direction.eq(direction))
            .filter(entity::flight::Column::DepartureGroup.eq(group))
            .all(self.db)
            .await
    }
}
