use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Event registrations fall back to when the request names none. The
    /// core always receives an explicit event id; this constant only exists
    /// at the API layer for single-event deployments.
    pub default_event_id: i32,
}

impl From<(DatabaseConnection, i32)> for AppState {
    fn from((db, default_event_id): (DatabaseConnection, i32)) -> Self {
        Self {
            db,
            default_event_id,
        }
    }
}
