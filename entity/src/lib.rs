pub mod prelude;

pub mod flight;
pub mod group_flight_assignment;
pub mod registration;
pub mod trip_event;
