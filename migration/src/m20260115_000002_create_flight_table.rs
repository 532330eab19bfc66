use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_create_trip_event_table::TripEvent;

static IDX_FLIGHT_EVENT_DIRECTION_GROUP: &str = "idx_flight_event_direction_group";
static FK_FLIGHT_EVENT_ID: &str = "fk_flight_event_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flight::Table)
                    .if_not_exists()
                    .col(pk_auto(Flight::Id))
                    .col(integer(Flight::EventId))
                    .col(string_len(Flight::Direction, 16))
                    .col(string(Flight::DepartureGroup))
                    .col(string(Flight::DepartureAirport))
                    .col(string(Flight::DepartureIata))
                    .col(date(Flight::DepartureDate))
                    .col(time(Flight::DepartureTime))
                    .col(string(Flight::ArrivalAirport))
                    .col(string(Flight::ArrivalIata))
                    .col(date(Flight::ArrivalDate))
                    .col(time(Flight::ArrivalTime))
                    .col(string(Flight::Carrier))
                    .col(string(Flight::FlightNumber))
                    .col(integer(Flight::DurationMinutes))
                    .col(timestamp(Flight::CreatedAt))
                    .col(timestamp(Flight::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FLIGHT_EVENT_ID)
                            .from(Flight::Table, Flight::EventId)
                            .to(TripEvent::Table, TripEvent::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FLIGHT_EVENT_DIRECTION_GROUP)
                    .table(Flight::Table)
                    .col(Flight::EventId)
                    .col(Flight::Direction)
                    .col(Flight::DepartureGroup)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FLIGHT_EVENT_DIRECTION_GROUP)
                    .table(Flight::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Flight::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Flight {
    Table,
    Id,
    EventId,
    Direction,
    DepartureGroup,
    DepartureAirport,
    DepartureIata,
    DepartureDate,
    DepartureTime,
    ArrivalAirport,
    ArrivalIata,
    ArrivalDate,
    ArrivalTime,
    Carrier,
    FlightNumber,
    DurationMinutes,
    CreatedAt,
    UpdatedAt,
}
