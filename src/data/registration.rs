use chrono::Utc;
use entity::registration::{Column, RegistrationStatus};
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter,
};

/// The resolved and validated content of a submission, minus its owners.
pub struct NewRegistration {
    pub outbound_flight_id: i32,
    pub return_flight_id: i32,
    pub group_name: String,
    pub form_data: serde_json::Value,
}

pub struct RegistrationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationRepository<'a> {
    /// Creates a new instance of [`RegistrationRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the registration for (user, event), or overwrites the
    /// existing one in place.
    ///
    /// The write rides on the (user_id, event_id) unique index, so
    /// concurrent submissions from the same user serialize into a single
    /// surviving row at the storage layer instead of racing into two
    /// records. Resubmission resets status to `pending` and refreshes
    /// `submitted_at`.
    pub async fn upsert(
        &self,
        user_id: i32,
        event_id: i32,
        registration: NewRegistration,
    ) -> Result<entity::registration::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let registration = entity::registration::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            event_id: ActiveValue::Set(event_id),
            outbound_flight_id: ActiveValue::Set(registration.outbound_flight_id),
            return_flight_id: ActiveValue::Set(registration.return_flight_id),
            group_name: ActiveValue::Set(registration.group_name),
            status: ActiveValue::Set(RegistrationStatus::Pending),
            submitted_at: ActiveValue::Set(now),
            cancelled_at: ActiveValue::Set(None),
            cancel_reason: ActiveValue::Set(None),
            form_data: ActiveValue::Set(registration.form_data),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::Registration::insert(registration)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::EventId])
                    .update_columns([
                        Column::OutboundFlightId,
                        Column::ReturnFlightId,
                        Column::GroupName,
                        Column::Status,
                        Column::SubmittedAt,
                        Column::CancelledAt,
                        Column::CancelReason,
                        Column::FormData,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Gets a registration by its ID
    pub async fn get(
        &self,
        registration_id: i32,
    ) -> Result<Option<entity::registration::Model>, DbErr> {
        entity::prelude::Registration::find_by_id(registration_id)
            .one(self.db)
            .await
    }

    /// Gets the registration a user submitted for an event, if any
    pub async fn find_by_user_and_event(
        &self,
        user_id: i32,
        event_id: i32,
    ) -> Result<Option<entity::registration::Model>, DbErr> {
        entity::prelude::Registration::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::EventId.eq(event_id))
            .one(self.db)
            .await
    }

    /// Writes a new lifecycle status; transition legality is the service's
    /// concern, not the repository's
    pub async fn update_status(
        &self,
        registration: entity::registration::Model,
        status: RegistrationStatus,
    ) -> Result<entity::registration::Model, DbErr> {
        let mut registration = registration.into_active_model();
        registration.status = ActiveValue::Set(status);
        registration.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        registration.update(self.db).await
    }

    /// Transitions a registration to `cancelled`, recording the reason and
    /// the cancellation timestamp
    pub async fn cancel(
        &self,
        registration: entity::registration::Model,
        reason: Option<String>,
    ) -> Result<entity::registration::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let mut registration = registration.into_active_model();
        registration.status = ActiveValue::Set(RegistrationStatus::Cancelled);
        registration.cancelled_at = ActiveValue::Set(Some(now));
        registration.cancel_reason = ActiveValue::Set(reason);
        registration.updated_at = ActiveValue::Set(now);

        registration.update(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use entity::registration::RegistrationStatus;
    use sea_orm::EntityTrait;
    use tripdesk_test_utils::prelude::*;

    use crate::data::registration::{NewRegistration, RegistrationRepository};

    fn new_registration(
        outbound_flight_id: i32,
        return_flight_id: i32,
        room_type: &str,
    ) -> NewRegistration {
        NewRegistration {
            outbound_flight_id,
            return_flight_id,
            group_name: "Milano Malpensa".to_string(),
            form_data: serde_json::json!({ "roomType": room_type }),
        }
    }

    mod upsert_tests {
        use super::*;

        /// Expect a new registration with status pending on first submission
        #[tokio::test]
        async fn test_upsert_creates_pending_registration() -> Result<(), TestError> {
            let test = test_setup_with_schema!()?;
            let db = &test.state.db;
            let event = fixtures::insert_event(db, TEST_EVENT_NAME, &[]).await?;
            let (outbound, inbound) = fixtures::insert_flight_pair(
                db,
                event.id,
                TEST_AIRPORT_MALPENSA,
                TEST_AIRPORT_MALPENSA,
                TEST_IATA_MALPENSA,
            )
            .await?;

            let registration_repository = RegistrationRepository::new(db);

            let registration = registration_repository
                .upsert(
                    TEST_USER_ID,
                    event.id,
                    new_registration(outbound.id, inbound.id, "Matrimoniale"),
                )
                .await?;

            assert_eq!(registration.user_id, TEST_USER_ID);
            assert_eq!(registration.status, RegistrationStatus::Pending);
            assert_eq!(registration.outbound_flight_id, outbound.id);
            assert_eq!(registration.return_flight_id, inbound.id);

            Ok(())
        }

        /// Expect resubmission to overwrite the existing row rather than
        /// create a second one
        #[tokio::test]
        async fn test_upsert_overwrites_existing_registration() -> Result<(), TestError> {
            let test = test_setup_with_schema!()?;
            let db = &test.state.db;
            let event = fixtures::insert_event(db, TEST_EVENT_NAME, &[]).await?;
            let (outbound, inbound) = fixtures::insert_flight_pair(
                db,
                event.id,
                TEST_AIRPORT_MALPENSA,
                TEST_AIRPORT_MALPENSA,
                TEST_IATA_MALPENSA,
            )
            .await?;

            let registration_repository = RegistrationRepository::new(db);

            let first = registration_repository
                .upsert(
                    TEST_USER_ID,
                    event.id,
                    new_registration(outbound.id, inbound.id, "Matrimoniale"),
                )
                .await?;
            let second = registration_repository
                .upsert(
                    TEST_USER_ID,
                    event.id,
                    new_registration(outbound.id, inbound.id, "Doppia uso singola"),
                )
                .await?;

            assert_eq!(first.id, second.id);
            assert_eq!(
                second.form_data,
                serde_json::json!({ "roomType": "Doppia uso singola" })
            );
            assert!(second.submitted_at >= first.submitted_at);

            let all = entity::prelude::Registration::find().all(db).await?;
            assert_eq!(all.len(), 1);

            Ok(())
        }

        /// Expect different users to get independent registrations for the
        /// same event
        #[tokio::test]
        async fn test_upsert_isolates_users() -> Result<(), TestError> {
            let test = test_setup_with_schema!()?;
            let db = &test.state.db;
            let event = fixtures::insert_event(db, TEST_EVENT_NAME, &[]).await?;
            let (outbound, inbound) = fixtures::insert_flight_pair(
                db,
                event.id,
                TEST_AIRPORT_MALPENSA,
                TEST_AIRPORT_MALPENSA,
                TEST_IATA_MALPENSA,
            )
            .await?;

            let registration_repository = RegistrationRepository::new(db);

            let first = registration_repository
                .upsert(
                    1,
                    event.id,
                    new_registration(outbound.id, inbound.id, "Matrimoniale"),
                )
                .await?;
            let second = registration_repository
                .upsert(
                    2,
                    event.id,
                    new_registration(outbound.id, inbound.id, "Matrimoniale"),
                )
                .await?;

            assert_ne!(first.id, second.id);

            Ok(())
        }

        /// Expect the unique index to reject a plain insert that bypasses
        /// the upsert for an existing (user, event) pair
        #[tokio::test]
        async fn test_plain_duplicate_insert_fails() -> Result<(), TestError> {
            use chrono::Utc;
            use sea_orm::{ActiveModelTrait, ActiveValue};

            let test = test_setup_with_schema!()?;
            let db = &test.state.db;
            let event = fixtures::insert_event(db, TEST_EVENT_NAME, &[]).await?;
            let (outbound, inbound) = fixtures::insert_flight_pair(
                db,
                event.id,
                TEST_AIRPORT_MALPENSA,
                TEST_AIRPORT_MALPENSA,
                TEST_IATA_MALPENSA,
            )
            .await?;

            let registration_repository = RegistrationRepository::new(db);
            registration_repository
                .upsert(
                    TEST_USER_ID,
                    event.id,
                    new_registration(outbound.id, inbound.id, "Matrimoniale"),
                )
                .await?;

            let now = Utc::now().naive_utc();
            let duplicate = entity::registration::ActiveModel {
                user_id: ActiveValue::Set(TEST_USER_ID),
                event_id: ActiveValue::Set(event.id),
                outbound_flight_id: ActiveValue::Set(outbound.id),
                return_flight_id: ActiveValue::Set(inbound.id),
                group_name: ActiveValue::Set("Milano Malpensa".to_string()),
                status: ActiveValue::Set(RegistrationStatus::Pending),
                submitted_at: ActiveValue::Set(now),
                cancelled_at: ActiveValue::Set(None),
                cancel_reason: ActiveValue::Set(None),
                form_data: ActiveValue::Set(serde_json::json!({})),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            };

            let result = duplicate.insert(db).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod find_tests {
        use super::*;

        /// Expect Some for the submitting user and None for another user
        #[tokio::test]
        async fn test_find_by_user_and_event() -> Result<(), TestError> {
            let test = test_setup_with_schema!()?;
            let db = &test.state.db;
            let event = fixtures::insert_event(db, TEST_EVENT_NAME, &[]).await?;
            let (outbound, inbound) = fixtures::insert_flight_pair(
                db,
                event.id,
                TEST_AIRPORT_MALPENSA,
                TEST_AIRPORT_MALPENSA,
                TEST_IATA_MALPENSA,
            )
            .await?;

            let registration_repository = RegistrationRepository::new(db);
            let registration = registration_repository
                .upsert(
                    TEST_USER_ID,
                    event.id,
                    new_registration(outbound.id, inbound.id, "Matrimoniale"),
                )
                .await?;

            let found = registration_repository
                .find_by_user_and_event(TEST_USER_ID, event.id)
                .await?;
            assert_eq!(found, Some(registration));

            let missing = registration_repository
                .find_by_user_and_event(2, event.id)
                .await?;
            assert!(missing.is_none());

            Ok(())
        }
    }

    mod cancel_tests {
        use super::*;

        /// Expect cancel to record status, reason, and timestamp
        #[tokio::test]
        async fn test_cancel_records_reason_and_timestamp() -> Result<(), TestError> {
            let test = test_setup_with_schema!()?;
            let db = &test.state.db;
            let event = fixtures::insert_event(db, TEST_EVENT_NAME, &[]).await?;
            let (outbound, inbound) = fixtures::insert_flight_pair(
                db,
                event.id,
                TEST_AIRPORT_MALPENSA,
                TEST_AIRPORT_MALPENSA,
                TEST_IATA_MALPENSA,
            )
            .await?;

            let registration_repository = RegistrationRepository::new(db);
            let registration = registration_repository
                .upsert(
                    TEST_USER_ID,
                    event.id,
                    new_registration(outbound.id, inbound.id, "Matrimoniale"),
                )
                .await?;

            let cancelled = registration_repository
                .cancel(registration, Some("Change of plans".to_string()))
                .await?;

            assert_eq!(cancelled.status, RegistrationStatus::Cancelled);
            assert_eq!(cancelled.cancel_reason.as_deref(), Some("Change of plans"));
            assert!(cancelled.cancelled_at.is_some());

            Ok(())
        }
    }
}
