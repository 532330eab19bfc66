//! Registration form validation.
//!
//! A pure function over (payload, config): no persistence, no side effects.
//! The config is a fresh immutable value assembled per request from the
//! event record and its active assignments, never a shared mutable
//! structure, so admin edits are picked up on the next request without any
//! cross-request state.

use chrono::NaiveDate;

use crate::{error::registration::FieldError, model::registration::RegistrationFormDto};

/// Room types every event offers; admin-configured ones are merged on top.
pub const DEFAULT_ROOM_TYPES: [&str; 3] = ["Matrimoniale", "Doppia uso singola", "Singola"];

/// Option lists the validator checks choice fields against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    pub room_types: Vec<String>,
    pub departure_airports: Vec<String>,
}

impl FormConfig {
    /// Merges the built-in room types with the event's configured ones,
    /// preserving order and dropping duplicates.
    pub fn new(event_room_types: Vec<String>, departure_airports: Vec<String>) -> Self {
        let mut room_types: Vec<String> =
            DEFAULT_ROOM_TYPES.iter().map(|r| r.to_string()).collect();

        for room_type in event_room_types {
            if !room_types.contains(&room_type) {
                room_types.push(room_type);
            }
        }

        Self {
            room_types,
            departure_airports,
        }
    }
}

/// Checks a submitted payload against the required-field rules.
///
/// Returns every violation at once so the form can render all messages in
/// one round trip. Companion fields are only required when `hasCompanion`
/// is set; a passport under renewal waives the passport number but not its
/// issue/expiry dates.
pub fn validate(
    payload: &RegistrationFormDto,
    config: &FormConfig,
) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    require_string(&mut errors, "companyName", &payload.company_name);
    require_string(&mut errors, "firstName", &payload.first_name);
    require_string(&mut errors, "lastName", &payload.last_name);
    require_date(&mut errors, "birthDate", &payload.birth_date);
    require_string(&mut errors, "nationality", &payload.nationality);
    require_string(&mut errors, "mobilePhone", &payload.mobile_phone);
    require_string(&mut errors, "email", &payload.email);

    if !payload.passport_in_renewal {
        require_string(&mut errors, "passportNumber", &payload.passport_number);
    }
    require_date(&mut errors, "passportIssueDate", &payload.passport_issue_date);
    require_date(
        &mut errors,
        "passportExpiryDate",
        &payload.passport_expiry_date,
    );

    match trimmed(&payload.room_type) {
        None => errors.push(FieldError::new("roomType", "This field is required")),
        Some(room_type) if !config.room_types.iter().any(|r| r == room_type) => {
            errors.push(FieldError::new(
                "roomType",
                "This room type is not offered for this trip",
            ));
        }
        Some(_) => {}
    }

    match trimmed(&payload.departure_airport) {
        None => errors.push(FieldError::new(
            "departureAirport",
            "This field is required",
        )),
        Some(airport) if !config.departure_airports.iter().any(|a| a == airport) => {
            errors.push(FieldError::new(
                "departureAirport",
                "No flights are available for this departure airport",
            ));
        }
        Some(_) => {}
    }

    require_choice(&mut errors, "businessClass", &payload.business_class);

    require_string(&mut errors, "billingName", &payload.billing_name);
    require_string(&mut errors, "billingAddress", &payload.billing_address);
    require_string(&mut errors, "billingVat", &payload.billing_vat);
    require_string(&mut errors, "billingSdiCode", &payload.billing_sdi_code);

    if !payload.data_processing_consent {
        errors.push(FieldError::new(
            "dataProcessingConsent",
            "Consent to data processing is required",
        ));
    }
    if !payload.penalties_acknowledged {
        errors.push(FieldError::new(
            "penaltiesAcknowledged",
            "The cancellation penalties must be acknowledged",
        ));
    }

    if payload.has_companion {
        require_string(
            &mut errors,
            "companionFirstName",
            &payload.companion_first_name,
        );
        require_string(
            &mut errors,
            "companionLastName",
            &payload.companion_last_name,
        );
        require_date(
            &mut errors,
            "companionBirthDate",
            &payload.companion_birth_date,
        );
        require_string(
            &mut errors,
            "companionNationality",
            &payload.companion_nationality,
        );
        require_string(
            &mut errors,
            "companionPassportNumber",
            &payload.companion_passport_number,
        );
        require_date(
            &mut errors,
            "companionPassportIssueDate",
            &payload.companion_passport_issue_date,
        );
        require_date(
            &mut errors,
            "companionPassportExpiryDate",
            &payload.companion_passport_expiry_date,
        );
        require_choice(
            &mut errors,
            "companionAttendsMeeting",
            &payload.companion_attends_meeting,
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn trimmed(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn require_string(errors: &mut Vec<FieldError>, field: &str, value: &Option<String>) {
    if trimmed(value).is_none() {
        errors.push(FieldError::new(field, "This field is required"));
    }
}

fn require_date(errors: &mut Vec<FieldError>, field: &str, value: &Option<NaiveDate>) {
    if value.is_none() {
        errors.push(FieldError::new(field, "This field is required"));
    }
}

fn require_choice(errors: &mut Vec<FieldError>, field: &str, value: &Option<bool>) {
    if value.is_none() {
        errors.push(FieldError::new(field, "A choice is required"));
    }
}
