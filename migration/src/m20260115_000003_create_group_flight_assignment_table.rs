use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000001_create_trip_event_table::TripEvent,
    m20260115_000002_create_flight_table::Flight,
};

static IDX_ASSIGNMENT_EVENT_AIRPORT_STATUS: &str =
    "idx_group_flight_assignment_event_airport_status";
static FK_ASSIGNMENT_EVENT_ID: &str = "fk_group_flight_assignment_event_id";
static FK_ASSIGNMENT_OUTBOUND_FLIGHT_ID: &str = "fk_group_flight_assignment_outbound_flight_id";
static FK_ASSIGNMENT_RETURN_FLIGHT_ID: &str = "fk_group_flight_assignment_return_flight_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroupFlightAssignment::Table)
                    .if_not_exists()
                    .col(pk_auto(GroupFlightAssignment::Id))
                    .col(integer(GroupFlightAssignment::EventId))
                    .col(string(GroupFlightAssignment::GroupName))
                    .col(string(GroupFlightAssignment::DepartureAirportCode))
                    .col(integer(GroupFlightAssignment::OutboundFlightId))
                    .col(integer(GroupFlightAssignment::ReturnFlightId))
                    .col(string_len(GroupFlightAssignment::Status, 16))
                    .col(integer(GroupFlightAssignment::Priority).default(0))
                    .col(integer_null(GroupFlightAssignment::CapacityMax))
                    .col(integer(GroupFlightAssignment::CapacityCurrent).default(0))
                    .col(timestamp(GroupFlightAssignment::CreatedAt))
                    .col(timestamp(GroupFlightAssignment::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ASSIGNMENT_EVENT_ID)
                            .from(
                                GroupFlightAssignment::Table,
                                GroupFlightAssignment::EventId,
                            )
                            .to(TripEvent::Table, TripEvent::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ASSIGNMENT_OUTBOUND_FLIGHT_ID)
                            .from(
                                GroupFlightAssignment::Table,
                                GroupFlightAssignment::OutboundFlightId,
                            )
                            .to(Flight::Table, Flight::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ASSIGNMENT_RETURN_FLIGHT_ID)
                            .from(
                                GroupFlightAssignment::Table,
                                GroupFlightAssignment::ReturnFlightId,
                            )
                            .to(Flight::Table, Flight::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSIGNMENT_EVENT_AIRPORT_STATUS)
                    .table(GroupFlightAssignment::Table)
                    .col(GroupFlightAssignment::EventId)
                    .col(GroupFlightAssignment::DepartureAirportCode)
                    .col(GroupFlightAssignment::Status)
                    .to_owned(),
            )
            .await?;

        // Partial unique index backing the at-most-one-active-assignment
        // invariant per (event, group, airport). Expressed as raw SQL since
        // the index builder has no WHERE clause support; the statement is
        // valid on both Postgres and SQLite.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX idx_group_flight_assignment_active_route \
                 ON group_flight_assignment (event_id, group_name, departure_airport_code) \
                 WHERE status = 'active'",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX idx_group_flight_assignment_active_route")
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASSIGNMENT_EVENT_AIRPORT_STATUS)
                    .table(GroupFlightAssignment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(GroupFlightAssignment::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum GroupFlightAssignment {
    Table,
    Id,
    EventId,
    GroupName,
    DepartureAirportCode,
    OutboundFlightId,
    ReturnFlightId,
    Status,
    Priority,
    CapacityMax,
    CapacityCurrent,
    CreatedAt,
    UpdatedAt,
}
