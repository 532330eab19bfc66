use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TripEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(TripEvent::Id))
                    .col(string(TripEvent::Name))
                    .col(json(TripEvent::RoomTypes))
                    .col(timestamp(TripEvent::CreatedAt))
                    .col(timestamp(TripEvent::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TripEvent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TripEvent {
    Table,
    Id,
    Name,
    RoomTypes,
    CreatedAt,
    UpdatedAt,
}
