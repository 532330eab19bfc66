pub use sea_orm_migration::prelude::*;

mod m20260115_000001_create_trip_event_table;
mod m20260115_000002_create_flight_table;
mod m20260115_000003_create_group_flight_assignment_table;
mod m20260115_000004_create_registration_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_create_trip_event_table::Migration),
            Box::new(m20260115_000002_create_flight_table::Migration),
            Box::new(m20260115_000003_create_group_flight_assignment_table::Migration),
            Box::new(m20260115_000004_create_registration_table::Migration),
        ]
    }
}
