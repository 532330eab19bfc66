use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000001_create_trip_event_table::TripEvent,
    m20260115_000002_create_flight_table::Flight,
};

static IDX_REGISTRATION_USER_EVENT: &str = "idx_registration_user_event";
static FK_REGISTRATION_EVENT_ID: &str = "fk_registration_event_id";
static FK_REGISTRATION_OUTBOUND_FLIGHT_ID: &str = "fk_registration_outbound_flight_id";
static FK_REGISTRATION_RETURN_FLIGHT_ID: &str = "fk_registration_return_flight_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Registration::Table)
                    .if_not_exists()
                    .col(pk_auto(Registration::Id))
                    .col(integer(Registration::UserId))
                    .col(integer(Registration::EventId))
                    .col(integer(Registration::OutboundFlightId))
                    .col(integer(Registration::ReturnFlightId))
                    .col(string(Registration::GroupName))
                    .col(string_len(Registration::Status, 16))
                    .col(timestamp(Registration::SubmittedAt))
                    .col(timestamp_null(Registration::CancelledAt))
                    .col(string_null(Registration::CancelReason))
                    .col(json(Registration::FormData))
                    .col(timestamp(Registration::CreatedAt))
                    .col(timestamp(Registration::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REGISTRATION_EVENT_ID)
                            .from(Registration::Table, Registration::EventId)
                            .to(TripEvent::Table, TripEvent::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REGISTRATION_OUTBOUND_FLIGHT_ID)
                            .from(Registration::Table, Registration::OutboundFlightId)
                            .to(Flight::Table, Flight::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REGISTRATION_RETURN_FLIGHT_ID)
                            .from(Registration::Table, Registration::ReturnFlightId)
                            .to(Flight::Table, Flight::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // The storage-level uniqueness constraint serializing concurrent
        // submissions from the same user into one surviving row.
        manager
            .create_index(
                Index::create()
                    .name(IDX_REGISTRATION_USER_EVENT)
                    .table(Registration::Table)
                    .col(Registration::UserId)
                    .col(Registration::EventId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REGISTRATION_USER_EVENT)
                    .table(Registration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Registration::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Registration {
    Table,
    Id,
    UserId,
    EventId,
    OutboundFlightId,
    ReturnFlightId,
    GroupName,
    Status,
    SubmittedAt,
    CancelledAt,
    CancelReason,
    FormData,
    CreatedAt,
    UpdatedAt,
}
