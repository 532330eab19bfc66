use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flight")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: i32,
    pub direction: FlightDirection,
    pub departure_group: String,
    pub departure_airport: String,
    pub departure_iata: String,
    pub departure_date: Date,
    pub departure_time: Time,
    pub arrival_airport: String,
    pub arrival_iata: String,
    pub arrival_date: Date,
    pub arrival_time: Time,
    pub carrier: String,
    pub flight_number: String,
    pub duration_minutes: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum FlightDirection {
    #[sea_orm(string_value = "outbound")]
    Outbound,
    #[sea_orm(string_value = "return")]
    Return,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::trip_event::Entity",
        from = "Column::EventId",
        to = "super::trip_event::Column::Id"
    )]
    TripEvent,
}

impl Related<super::trip_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
