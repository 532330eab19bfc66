use sea_orm::entity::prelude::*;

/// A single user's registration for a trip event.
///
/// The (user_id, event_id) pair is unique at the storage layer; resubmission
/// overwrites the existing row rather than creating a second one.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "registration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub event_id: i32,
    pub outbound_flight_id: i32,
    pub return_flight_id: i32,
    pub group_name: String,
    pub status: RegistrationStatus,
    pub submitted_at: DateTime,
    pub cancelled_at: Option<DateTime>,
    pub cancel_reason: Option<String>,
    /// The submitted form payload, stored verbatim.
    pub form_data: Json,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum RegistrationStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
    #[sea_orm(string_value = "waitlisted")]
    Waitlisted,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::trip_event::Entity",
        from = "Column::EventId",
        to = "super::trip_event::Column::Id"
    )]
    TripEvent,
    #[sea_orm(
        belongs_to = "super::flight::Entity",
        from = "Column::OutboundFlightId",
        to = "super::flight::Column::Id"
    )]
    OutboundFlight,
    #[sea_orm(
        belongs_to = "super::flight::Entity",
        from = "Column::ReturnFlightId",
        to = "super::flight::Column::Id"
    )]
    ReturnFlight,
}

impl Related<super::trip_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
