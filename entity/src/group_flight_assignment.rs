use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "group_flight_assignment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: i32,
    pub group_name: String,
    pub departure_airport_code: String,
    pub outbound_flight_id: i32,
    pub return_flight_id: i32,
    pub status: AssignmentStatus,
    /// Higher priority wins when several active assignments share a
    /// departure airport across different groups.
    pub priority: i32,
    pub capacity_max: Option<i32>,
    pub capacity_current: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum AssignmentStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "inactive")]
    Inactive,
    #[sea_orm(string_value = "full")]
    Full,
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
