use chrono::{NaiveDate, NaiveDateTime};
use entity::registration::RegistrationStatus;
use serde::{Deserialize, Serialize};

/// The registration form as submitted by the traveler.
///
/// A flat bag of named optional fields using the legacy form's camelCase
/// wire names; which of them are required (and when) is decided by the
/// validator, not by deserialization, so an incomplete submission still
/// parses and yields field-level errors instead of a generic 422.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationFormDto {
    pub company_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub mobile_phone: Option<String>,
    pub email: Option<String>,
    pub passport_number: Option<String>,
    pub passport_issue_date: Option<NaiveDate>,
    pub passport_expiry_date: Option<NaiveDate>,
    /// When the passport is being renewed the number may not be known yet;
    /// the validator waives `passportNumber` in that case.
    #[serde(default)]
    pub passport_in_renewal: bool,
    pub room_type: Option<String>,
    pub departure_airport: Option<String>,
    pub business_class: Option<bool>,
    pub billing_name: Option<String>,
    pub billing_address: Option<String>,
    pub billing_vat: Option<String>,
    pub billing_sdi_code: Option<String>,
    #[serde(default)]
    pub data_processing_consent: bool,
    #[serde(default)]
    pub penalties_acknowledged: bool,
    #[serde(default)]
    pub has_companion: bool,
    pub companion_first_name: Option<String>,
    pub companion_last_name: Option<String>,
    pub companion_birth_date: Option<NaiveDate>,
    pub companion_nationality: Option<String>,
    pub companion_passport_number: Option<String>,
    pub companion_passport_issue_date: Option<NaiveDate>,
    pub companion_passport_expiry_date: Option<NaiveDate>,
    pub companion_attends_meeting: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatusDto {
    Pending,
    Confirmed,
    Cancelled,
    Waitlisted,
}

impl From<RegistrationStatusDto> for RegistrationStatus {
    fn from(status: RegistrationStatusDto) -> Self {
        match status {
            RegistrationStatusDto::Pending => RegistrationStatus::Pending,
            RegistrationStatusDto::Confirmed => RegistrationStatus::Confirmed,
            RegistrationStatusDto::Cancelled => RegistrationStatus::Cancelled,
            RegistrationStatusDto::Waitlisted => RegistrationStatus::Waitlisted,
        }
    }
}

impl From<RegistrationStatus> for RegistrationStatusDto {
    fn from(status: RegistrationStatus) -> Self {
        match status {
            RegistrationStatus::Pending => RegistrationStatusDto::Pending,
            RegistrationStatus::Confirmed => RegistrationStatusDto::Confirmed,
            RegistrationStatus::Cancelled => RegistrationStatusDto::Cancelled,
            RegistrationStatus::Waitlisted => RegistrationStatusDto::Waitlisted,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDto {
    pub id: i32,
    pub user_id: i32,
    pub event_id: i32,
    pub outbound_flight_id: i32,
    pub return_flight_id: i32,
    pub group_name: String,
    pub status: RegistrationStatusDto,
    pub submitted_at: NaiveDateTime,
    pub cancelled_at: Option<NaiveDateTime>,
    pub cancel_reason: Option<String>,
    /// The form payload exactly as submitted.
    #[schema(value_type = Object)]
    pub form_data: serde_json::Value,
}

impl From<entity::registration::Model> for RegistrationDto {
    fn from(model: entity::registration::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            event_id: model.event_id,
            outbound_flight_id: model.outbound_flight_id,
            return_flight_id: model.return_flight_id,
            group_name: model.group_name,
            status: model.status.into(),
            submitted_at: model.submitted_at,
            cancelled_at: model.cancelled_at,
            cancel_reason: model.cancel_reason,
            form_data: model.form_data,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CancelRegistrationDto {
    pub reason: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SetRegistrationStatusDto {
    pub status: RegistrationStatusDto,
}
