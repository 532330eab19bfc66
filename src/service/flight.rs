use entity::flight::FlightDirection;
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        event::EventRepository,
        flight::{FlightRepository, NewFlight},
    },
    error::{event::EventError, flight::FlightError, Error},
};

/// Lookup service over the flight directory.
///
/// No logic beyond retrieval lives here; assignments decide which flights a
/// group actually uses.
pub struct FlightService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightService<'a> {
    /// Creates a new instance of [`FlightService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a flight by ID, failing with [`FlightError::NotFound`] when the
    /// id does not exist. Callers must not treat this as retryable.
    pub async fn get_flight(&self, flight_id: i32) -> Result<entity::flight::Model, Error> {
        let flight_repository = FlightRepository::new(self.db);

        flight_repository
            .get(flight_id)
            .await?
            .ok_or_else(|| FlightError::NotFound(flight_id).into())
    }

    /// Gets all flights for an event matching a direction and departure group
    pub async fn find_by_direction_and_group(
        &self,
        event_id: i32,
        direction: FlightDirection,
        group: &str,
    ) -> Result<Vec<entity::flight::Model>, Error> {
        let flight_repository = FlightRepository::new(self.db);

        Ok(flight_repository
            .find_by_direction_and_group(event_id, direction, group)
            .await?)
    }

    /// Creates a flight after confirming the owning event exists
    pub async fn create_flight(
        &self,
        event_id: i32,
        flight: NewFlight,
    ) -> Result<entity::flight::Model, Error> {
        let event_repository = EventRepository::new(self.db);

        if event_repository.get(event_id).await?.is_none() {
            return Err(EventError::NotFound(event_id).into());
        }

        let flight_repository = FlightRepository::new(self.db);

        Ok(flight_repository.create(event_id, flight).await?)
    }
}
