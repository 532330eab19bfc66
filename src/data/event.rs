use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new trip event
    pub async fn create(
        &self,
        name: String,
        room_types: Vec<String>,
    ) -> Result<entity::trip_event::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let event = entity::trip_event::ActiveModel {
            name: ActiveValue::Set(name),
            room_types: ActiveValue::Set(serde_json::json!(room_types)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        event.insert(self.db).await
    }

    /// Gets a trip event by its ID
    pub async fn get(&self, event_id: i32) -> Result<Option<entity::trip_event::Model>, DbErr> {
        entity::prelude::TripEvent::find_by_id(event_id)
            .one(self.db)
            .await
    }
}
