//! Shared helpers for integration tests.

use axum::{body::to_bytes, http::StatusCode, response::Response};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tripdesk::model::registration::RegistrationFormDto;

/// A registration form with every always-required field filled, departing
/// from Milano Malpensa without a companion.
pub fn valid_payload() -> RegistrationFormDto {
    RegistrationFormDto {
        company_name: Some("Rossi S.r.l.".to_string()),
        first_name: Some("Mario".to_string()),
        last_name: Some("Rossi".to_string()),
        birth_date: NaiveDate::from_ymd_opt(1980, 4, 12),
        nationality: Some("Italiana".to_string()),
        mobile_phone: Some("+39 333 1234567".to_string()),
        email: Some("mario.rossi@example.com".to_string()),
        passport_number: Some("YA1234567".to_string()),
        passport_issue_date: NaiveDate::from_ymd_opt(2020, 1, 15),
        passport_expiry_date: NaiveDate::from_ymd_opt(2030, 1, 14),
        passport_in_renewal: false,
        room_type: Some("Matrimoniale".to_string()),
        departure_airport: Some("Milano Malpensa".to_string()),
        business_class: Some(false),
        billing_name: Some("Rossi S.r.l.".to_string()),
        billing_address: Some("Via Roma 1, Milano".to_string()),
        billing_vat: Some("IT01234567890".to_string()),
        billing_sdi_code: Some("M5UXCR1".to_string()),
        data_processing_consent: true,
        penalties_acknowledged: true,
        has_companion: false,
        companion_first_name: None,
        companion_last_name: None,
        companion_birth_date: None,
        companion_nationality: None,
        companion_passport_number: None,
        companion_passport_issue_date: None,
        companion_passport_expiry_date: None,
        companion_attends_meeting: None,
    }
}

/// Asserts a response status and deserializes its JSON body.
pub async fn read_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> T {
    assert_eq!(response.status(), expected_status);

    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Failed to deserialize response body")
}
