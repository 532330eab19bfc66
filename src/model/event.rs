use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub name: String,
    pub room_types: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateEventDto {
    pub name: String,
    /// Room type options offered on the registration form, merged with the
    /// built-in defaults at validation time.
    #[serde(default)]
    pub room_types: Vec<String>,
}
