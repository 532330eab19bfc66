use entity::group_flight_assignment::AssignmentStatus;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatusDto {
    Active,
    Inactive,
    Full,
}

impl From<AssignmentStatusDto> for AssignmentStatus {
    fn from(status: AssignmentStatusDto) -> Self {
        match status {
            AssignmentStatusDto::Active => AssignmentStatus::Active,
            AssignmentStatusDto::Inactive => AssignmentStatus::Inactive,
            AssignmentStatusDto::Full => AssignmentStatus::Full,
        }
    }
}

impl From<AssignmentStatus> for AssignmentStatusDto {
    fn from(status: AssignmentStatus) -> Self {
        match status {
            AssignmentStatus::Active => AssignmentStatusDto::Active,
            AssignmentStatus::Inactive => AssignmentStatusDto::Inactive,
            AssignmentStatus::Full => AssignmentStatusDto::Full,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AssignmentDto {
    pub id: i32,
    pub event_id: i32,
    pub group_name: String,
    pub departure_airport_code: String,
    pub outbound_flight_id: i32,
    pub return_flight_id: i32,
    pub status: AssignmentStatusDto,
    pub priority: i32,
    pub capacity_max: Option<i32>,
    pub capacity_current: i32,
}

impl From<entity::group_flight_assignment::Model> for AssignmentDto {
    fn from(model: entity::group_flight_assignment::Model) -> Self {
        Self {
            id: model.id,
            event_id: model.event_id,
            group_name: model.group_name,
            departure_airport_code: model.departure_airport_code,
            outbound_flight_id: model.outbound_flight_id,
            return_flight_id: model.return_flight_id,
            status: model.status.into(),
            priority: model.priority,
            capacity_max: model.capacity_max,
            capacity_current: model.capacity_current,
        }
    }
}

/// Create-or-update payload for a group flight assignment; an `id` means
/// update, no `id` means create.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpsertAssignmentDto {
    pub id: Option<i32>,
    /// Defaults to the deployment's configured event when omitted.
    pub event_id: Option<i32>,
    pub group_name: String,
    pub departure_airport_code: String,
    pub outbound_flight_id: i32,
    pub return_flight_id: i32,
    #[serde(default)]
    pub status: Option<AssignmentStatusDto>,
    #[serde(default)]
    pub priority: Option<i32>,
    #[serde(default)]
    pub capacity_max: Option<i32>,
}
