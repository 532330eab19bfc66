pub use super::flight::Entity as Flight;
pub use super::group_flight_assignment::Entity as GroupFlightAssignment;
pub use super::registration::Entity as Registration;
pub use super::trip_event::Entity as TripEvent;
