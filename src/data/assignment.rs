use chrono::Utc;
use entity::group_flight_assignment::{AssignmentStatus, Column};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, ExprTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

/// Column values for a new assignment, minus the owning event.
pub struct NewAssignment {
    pub group_name: String,
    pub departure_airport_code: String,
    pub outbound_flight_id: i32,
    pub return_flight_id: i32,
    pub status: AssignmentStatus,
    pub priority: i32,
    pub capacity_max: Option<i32>,
}

pub struct AssignmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssignmentRepository<'a> {
    /// Creates a new instance of [`AssignmentRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new group flight assignment
    pub async fn create(
        &self,
        event_id: i32,
        assignment: NewAssignment,
    ) -> Result<entity::group_flight_assignment::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let assignment = entity::group_flight_assignment::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            group_name: ActiveValue::Set(assignment.group_name),
            departure_airport_code: ActiveValue::Set(assignment.departure_airport_code),
            outbound_flight_id: ActiveValue::Set(assignment.outbound_flight_id),
            return_flight_id: ActiveValue::Set(assignment.return_flight_id),
            status: ActiveValue::Set(assignment.status),
            priority: ActiveValue::Set(assignment.priority),
            capacity_max: ActiveValue::Set(assignment.capacity_max),
            capacity_current: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        assignment.insert(self.db).await
    }

    /// Applies new column values to an existing assignment
    pub async fn update(
        &self,
        assignment: entity::group_flight_assignment::ActiveModel,
    ) -> Result<entity::group_flight_assignment::Model, DbErr> {
        assignment.update(self.db).await
    }

    /// Gets an assignment by its ID
    pub async fn get(
        &self,
        assignment_id: i32,
    ) -> Result<Option<entity::group_flight_assignment::Model>, DbErr> {
        entity::prelude::GroupFlightAssignment::find_by_id(assignment_id)
            .one(self.db)
            .await
    }

    /// Gets all active assignments for an event and departure airport,
    /// highest priority first
    pub async fn find_active_by_event_and_airport(
        &self,
        event_id: i32,
        airport: &str,
    ) -> Result<Vec<entity::group_flight_assignment::Model>, DbErr> {
        entity::prelude::GroupFlightAssignment::find()
            .filter(Column::EventId.eq(event_id))
            .filter(Column::DepartureAirportCode.eq(airport))
            .filter(Column::Status.eq(AssignmentStatus::Active))
            .order_by_desc(Column::Priority)
            .all(self.db)
            .await
    }

    /// Gets active assignments matching the full (event, group, airport)
    /// route, optionally excluding one assignment ID (used when updating an
    /// assignment in place)
    pub async fn find_active_by_route(
        &self,
        event_id: i32,
        group: &str,
        airport: &str,
        exclude_id: Option<i32>,
    ) -> Result<Vec<entity::group_flight_assignment::Model>, DbErr> {
        let mut query = entity::prelude::GroupFlightAssignment::find()
            .filter(Column::EventId.eq(event_id))
            .filter(Column::GroupName.eq(group))
            .filter(Column::DepartureAirportCode.eq(airport))
            .filter(Column::Status.eq(AssignmentStatus::Active));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(Column::Id.ne(exclude_id));
        }

        query.all(self.db).await
    }

    /// Gets the distinct departure airport codes with an active assignment
    /// for an event
    pub async fn list_active_airports(&self, event_id: i32) -> Result<Vec<String>, DbErr> {
        entity::prelude::GroupFlightAssignment::find()
            .select_only()
            .column(Column::DepartureAirportCode)
            .filter(Column::EventId.eq(event_id))
            .filter(Column::Status.eq(AssignmentStatus::Active))
            .distinct()
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Increments the capacity counter in a single conditional UPDATE so
    /// concurrent registrations cannot lose updates.
    ///
    /// Returns the number of affected rows: zero means the assignment is
    /// either missing or already at capacity, which the caller tells apart
    /// with a follow-up [`AssignmentRepository::get`].
    pub async fn increment_capacity(&self, assignment_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::GroupFlightAssignment::update_many()
            .col_expr(
                Column::CapacityCurrent,
                Expr::col(Column::CapacityCurrent).add(1),
            )
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().naive_utc()))
            .filter(Column::Id.eq(assignment_id))
            .filter(
                Condition::any()
                    .add(Column::CapacityMax.is_null())
                    .add(Expr::col(Column::CapacityCurrent).lt(Expr::col(Column::CapacityMax))),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Decrements the capacity counter, clamping at zero
    pub async fn decrement_capacity(&self, assignment_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::GroupFlightAssignment::update_many()
            .col_expr(
                Column::CapacityCurrent,
                Expr::col(Column::CapacityCurrent).sub(1),
            )
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().naive_utc()))
            .filter(Column::Id.eq(assignment_id))
            .filter(Column::CapacityCurrent.gt(0))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Reconciles the status field with the capacity counters: a counter at
    /// max flips `active` to `full`, a counter back under max flips `full`
    /// to `active`. `inactive` is never touched.
    pub async fn sync_capacity_status(
        &self,
        assignment_id: i32,
    ) -> Result<Option<entity::group_flight_assignment::Model>, DbErr> {
        let Some(assignment) = self.get(assignment_id).await? else {
            return Ok(None);
        };

        let desired = match assignment.capacity_max {
            Some(max) if assignment.capacity_current >= max => match assignment.status {
                AssignmentStatus::Active => Some(AssignmentStatus::Full),
                _ => None,
            },
            Some(_) | None => match assignment.status {
                AssignmentStatus::Full => Some(AssignmentStatus::Active),
                _ => None,
            },
        };

        let Some(status) = desired else {
            return Ok(Some(assignment));
        };

        let mut active = assignment.into_active_model();
        active.status = ActiveValue::Set(status);
        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(active.update(self.db).await?))
    }
}
