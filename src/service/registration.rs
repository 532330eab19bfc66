use entity::registration::RegistrationStatus;
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        assignment::AssignmentRepository,
        event::EventRepository,
        registration::{NewRegistration, RegistrationRepository},
    },
    error::{event::EventError, registration::RegistrationError, Error},
    model::registration::RegistrationFormDto,
    service::{
        assignment::AssignmentService,
        validator::{self, FormConfig},
    },
};

/// Orchestrates a registration submission: resolve the flight pair, validate
/// the payload, then upsert. This is the only entry point the API layer
/// calls for registrations.
pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationService<'a> {
    /// Creates a new instance of [`RegistrationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a registration for (user, event).
    ///
    /// Resolution and validation run before any write, so a failed
    /// submission never leaves a partial record behind. The admin may have
    /// reassigned flights since the user last looked at the form; the pair
    /// stored is the one assigned to the selected airport *now*.
    pub async fn submit(
        &self,
        user_id: i32,
        event_id: i32,
        payload: RegistrationFormDto,
    ) -> Result<entity::registration::Model, Error> {
        let event_repository = EventRepository::new(self.db);
        let event = event_repository
            .get(event_id)
            .await?
            .ok_or(EventError::NotFound(event_id))?;

        let airport = payload
            .departure_airport
            .as_deref()
            .map(str::trim)
            .unwrap_or_default();

        let assignment_service = AssignmentService::new(self.db);
        let pair = assignment_service
            .resolve_flight_pair(event_id, airport)
            .await?;

        let room_types: Vec<String> =
            serde_json::from_value(event.room_types).map_err(|e| {
                Error::ParseError(format!(
                    "Failed to parse room types for event ID {}: {}",
                    event_id, e
                ))
            })?;

        let assignment_repository = AssignmentRepository::new(self.db);
        let config = FormConfig::new(
            room_types,
            assignment_repository.list_active_airports(event_id).await?,
        );

        validator::validate(&payload, &config).map_err(RegistrationError::ValidationFailed)?;

        let form_data = serde_json::to_value(&payload)
            .map_err(|e| Error::ParseError(format!("Failed to serialize form payload: {}", e)))?;

        let registration_repository = RegistrationRepository::new(self.db);
        let registration = registration_repository
            .upsert(
                user_id,
                event_id,
                NewRegistration {
                    outbound_flight_id: pair.outbound_flight_id,
                    return_flight_id: pair.return_flight_id,
                    group_name: pair.group_name,
                    form_data,
                },
            )
            .await?;

        tracing::info!(
            registration_id = registration.id,
            user_id,
            event_id,
            group = %registration.group_name,
            "stored registration"
        );

        Ok(registration)
    }

    /// Gets the registration a user submitted for an event, if any
    pub async fn get_own(
        &self,
        user_id: i32,
        event_id: i32,
    ) -> Result<Option<entity::registration::Model>, Error> {
        let registration_repository = RegistrationRepository::new(self.db);

        Ok(registration_repository
            .find_by_user_and_event(user_id, event_id)
            .await?)
    }

    /// Cancels a user's own registration, recording the reason
    pub async fn cancel_own(
        &self,
        user_id: i32,
        event_id: i32,
        reason: Option<String>,
    ) -> Result<entity::registration::Model, Error> {
        let registration_repository = RegistrationRepository::new(self.db);

        let registration = registration_repository
            .find_by_user_and_event(user_id, event_id)
            .await?
            .ok_or(RegistrationError::NotFound)?;

        if !transition_allowed(registration.status, RegistrationStatus::Cancelled) {
            return Err(RegistrationError::InvalidTransition {
                from: registration.status,
                to: RegistrationStatus::Cancelled,
            }
            .into());
        }

        Ok(registration_repository.cancel(registration, reason).await?)
    }

    /// Applies an admin lifecycle transition to a registration
    pub async fn set_status(
        &self,
        registration_id: i32,
        status: RegistrationStatus,
    ) -> Result<entity::registration::Model, Error> {
        let registration_repository = RegistrationRepository::new(self.db);

        let registration = registration_repository
            .get(registration_id)
            .await?
            .ok_or(RegistrationError::NotFound)?;

        if !transition_allowed(registration.status, status) {
            return Err(RegistrationError::InvalidTransition {
                from: registration.status,
                to: status,
            }
            .into());
        }

        if status == RegistrationStatus::Cancelled {
            Ok(registration_repository.cancel(registration, None).await?)
        } else {
            Ok(registration_repository
                .update_status(registration, status)
                .await?)
        }
    }
}

/// The registration lifecycle: `cancelled` is terminal, `confirmed` can only
/// be cancelled, and anything not listed is rejected rather than coerced.
pub fn transition_allowed(from: RegistrationStatus, to: RegistrationStatus) -> bool {
    use RegistrationStatus::*;

    matches!(
        (from, to),
        (Pending, Confirmed)
            | (Pending, Cancelled)
            | (Pending, Waitlisted)
            | (Confirmed, Cancelled)
            | (Waitlisted, Confirmed)
            | (Waitlisted, Cancelled)
    )
}
