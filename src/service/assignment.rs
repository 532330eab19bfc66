use chrono::Utc;
use entity::{
    flight::FlightDirection,
    group_flight_assignment::AssignmentStatus,
};
use sea_orm::{ActiveValue, DatabaseConnection, IntoActiveModel};

use crate::{
    data::{
        assignment::{AssignmentRepository, NewAssignment},
        flight::FlightRepository,
    },
    error::{assignment::AssignmentError, flight::FlightError, Error},
};

/// The flight pair a departure airport maps to right now, which may differ
/// from what the user saw when they picked the airport if an admin
/// reassigned flights in the meantime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFlightPair {
    pub assignment_id: i32,
    pub group_name: String,
    pub outbound_flight_id: i32,
    pub return_flight_id: i32,
}

/// Create-or-update command for an assignment; `id` present means update.
pub struct UpsertAssignment {
    pub id: Option<i32>,
    pub event_id: i32,
    pub group_name: String,
    pub departure_airport_code: String,
    pub outbound_flight_id: i32,
    pub return_flight_id: i32,
    pub status: AssignmentStatus,
    pub priority: i32,
    pub capacity_max: Option<i32>,
}

pub struct AssignmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssignmentService<'a> {
    /// Creates a new instance of [`AssignmentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the flight pair currently assigned to a departure airport.
    ///
    /// The highest-priority active assignment wins. Several groups may share
    /// an airport; an equal highest priority among them means the data gives
    /// no answer, so it fails rather than resolving by first-match.
    pub async fn resolve_flight_pair(
        &self,
        event_id: i32,
        airport: &str,
    ) -> Result<ResolvedFlightPair, Error> {
        let assignment_repository = AssignmentRepository::new(self.db);

        let candidates = assignment_repository
            .find_active_by_event_and_airport(event_id, airport)
            .await?;

        let Some(assignment) = candidates.first() else {
            return Err(AssignmentError::NoActiveAssignment {
                event_id,
                airport: airport.to_string(),
            }
            .into());
        };

        if candidates.len() > 1 && candidates[1].priority == assignment.priority {
            return Err(AssignmentError::AmbiguousAssignment {
                event_id,
                airport: airport.to_string(),
                priority: assignment.priority,
            }
            .into());
        }

        Ok(ResolvedFlightPair {
            assignment_id: assignment.id,
            group_name: assignment.group_name.clone(),
            outbound_flight_id: assignment.outbound_flight_id,
            return_flight_id: assignment.return_flight_id,
        })
    }

    /// Creates or updates an assignment after checking its internal
    /// consistency rules. All checks happen before any write.
    pub async fn upsert_assignment(
        &self,
        assignment: UpsertAssignment,
    ) -> Result<entity::group_flight_assignment::Model, Error> {
        self.validate_flight_pair(&assignment).await?;

        let assignment_repository = AssignmentRepository::new(self.db);

        // Two conflicting flight pairs must never be simultaneously active
        // for the same route. Checked here for a readable admin error; the
        // partial unique index backs it up against concurrent writes.
        if assignment.status == AssignmentStatus::Active {
            let duplicates = assignment_repository
                .find_active_by_route(
                    assignment.event_id,
                    &assignment.group_name,
                    &assignment.departure_airport_code,
                    assignment.id,
                )
                .await?;

            if !duplicates.is_empty() {
                return Err(AssignmentError::DuplicateActiveAssignment {
                    event_id: assignment.event_id,
                    group_name: assignment.group_name,
                    airport: assignment.departure_airport_code,
                }
                .into());
            }
        }

        match assignment.id {
            None => {
                let created = assignment_repository
                    .create(
                        assignment.event_id,
                        NewAssignment {
                            group_name: assignment.group_name,
                            departure_airport_code: assignment.departure_airport_code,
                            outbound_flight_id: assignment.outbound_flight_id,
                            return_flight_id: assignment.return_flight_id,
                            status: assignment.status,
                            priority: assignment.priority,
                            capacity_max: assignment.capacity_max,
                        },
                    )
                    .await?;

                tracing::info!(
                    assignment_id = created.id,
                    event_id = created.event_id,
                    group = %created.group_name,
                    "created group flight assignment"
                );

                Ok(created)
            }
            Some(id) => {
                let existing = assignment_repository
                    .get(id)
                    .await?
                    .ok_or(AssignmentError::NotFound(id))?;

                let mut active = existing.into_active_model();
                active.event_id = ActiveValue::Set(assignment.event_id);
                active.group_name = ActiveValue::Set(assignment.group_name);
                active.departure_airport_code =
                    ActiveValue::Set(assignment.departure_airport_code);
                active.outbound_flight_id = ActiveValue::Set(assignment.outbound_flight_id);
                active.return_flight_id = ActiveValue::Set(assignment.return_flight_id);
                active.status = ActiveValue::Set(assignment.status);
                active.priority = ActiveValue::Set(assignment.priority);
                active.capacity_max = ActiveValue::Set(assignment.capacity_max);
                active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

                Ok(assignment_repository.update(active).await?)
            }
        }
    }

    /// Claims a seat on the assignment, failing once capacity is reached
    pub async fn increment_capacity(
        &self,
        assignment_id: i32,
    ) -> Result<entity::group_flight_assignment::Model, Error> {
        let assignment_repository = AssignmentRepository::new(self.db);

        let rows_affected = assignment_repository
            .increment_capacity(assignment_id)
            .await?;

        if rows_affected == 0 {
            return match assignment_repository.get(assignment_id).await? {
                None => Err(AssignmentError::NotFound(assignment_id).into()),
                Some(_) => {
                    // Keep the status honest even when the counter was
                    // already at max before this call.
                    assignment_repository
                        .sync_capacity_status(assignment_id)
                        .await?;

                    Err(AssignmentError::AssignmentFull(assignment_id).into())
                }
            };
        }

        assignment_repository
            .sync_capacity_status(assignment_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Assignment ID {} disappeared between capacity increment and status sync",
                    assignment_id
                ))
            })
    }

    /// Releases a seat on the assignment; never fails on an empty counter
    pub async fn decrement_capacity(
        &self,
        assignment_id: i32,
    ) -> Result<entity::group_flight_assignment::Model, Error> {
        let assignment_repository = AssignmentRepository::new(self.db);

        assignment_repository
            .decrement_capacity(assignment_id)
            .await?;

        assignment_repository
            .sync_capacity_status(assignment_id)
            .await?
            .ok_or_else(|| AssignmentError::NotFound(assignment_id).into())
    }

    /// Checks the flight pair referenced by an assignment write: both
    /// flights must exist, point the right way, belong to the assignment's
    /// event, and the outbound leg must depart from the assignment's airport.
    async fn validate_flight_pair(&self, assignment: &UpsertAssignment) -> Result<(), Error> {
        let flight_repository = FlightRepository::new(self.db);

        let outbound = flight_repository
            .get(assignment.outbound_flight_id)
            .await?
            .ok_or(FlightError::NotFound(assignment.outbound_flight_id))?;
        let inbound = flight_repository
            .get(assignment.return_flight_id)
            .await?
            .ok_or(FlightError::NotFound(assignment.return_flight_id))?;

        if outbound.direction != FlightDirection::Outbound {
            return Err(AssignmentError::OutboundDirectionMismatch(outbound.id).into());
        }
        if inbound.direction != FlightDirection::Return {
            return Err(AssignmentError::ReturnDirectionMismatch(inbound.id).into());
        }
        if outbound.event_id != assignment.event_id {
            return Err(AssignmentError::EventMismatch {
                flight_id: outbound.id,
                expected_event_id: assignment.event_id,
            }
            .into());
        }
        if inbound.event_id != assignment.event_id {
            return Err(AssignmentError::EventMismatch {
                flight_id: inbound.id,
                expected_event_id: assignment.event_id,
            }
            .into());
        }

        // Legacy admin data keys some routes by airport display name rather
        // than IATA code, so either is accepted as a match.
        if outbound.departure_airport != assignment.departure_airport_code
            && outbound.departure_iata != assignment.departure_airport_code
        {
            return Err(AssignmentError::AirportMismatch {
                airport: assignment.departure_airport_code.clone(),
                flight_departure: outbound.departure_airport,
            }
            .into());
        }

        Ok(())
    }
}
