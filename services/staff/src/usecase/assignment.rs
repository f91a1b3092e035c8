use chrono::{NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use crate::domain::repository::{AssignmentRepository, EmployeeRepository, PositionRepository};
use crate::domain::types::Assignment;
use crate::error::StaffServiceError;

// ── AssignPosition (replace) ─────────────────────────────────────────────────

pub struct AssignPositionInput {
    pub position_id: Uuid,
    pub start_date: NaiveDate,
}

/// Replaces whatever position an employee holds: every existing link row of
/// the employee is deleted, then one new row is inserted.
///
/// The two steps are separate statements with no lock. Two callers replacing
/// the same employee at once may interleave delete, delete, insert, insert
/// and leave two rows behind.
pub struct AssignPositionUseCase<E, P, A>
where
    E: EmployeeRepository,
    P: PositionRepository,
    A: AssignmentRepository,
{
    pub employees: E,
    pub positions: P,
    pub assignments: A,
}

impl<E, P, A> AssignPositionUseCase<E, P, A>
where
    E: EmployeeRepository,
    P: PositionRepository,
    A: AssignmentRepository,
{
    pub async fn execute(
        &self,
        employee_id: Uuid,
        input: AssignPositionInput,
    ) -> Result<Assignment, StaffServiceError> {
        if self.employees.find_by_id(employee_id).await?.is_none() {
            return Err(StaffServiceError::EmployeeNotFound);
        }
        if self.positions.find_by_id(input.position_id).await?.is_none() {
            return Err(StaffServiceError::PositionNotFound);
        }

        let removed = self.assignments.delete_by_employee(employee_id).await?;

        let assignment = Assignment {
            id: Uuid::now_v7(),
            employee_id,
            position_id: input.position_id,
            start_date: input.start_date,
            created_at: Utc::now(),
        };
        let assignment = self.assignments.create(&assignment).await?;
        info!(
            employee_id = %employee_id,
            position_id = %assignment.position_id,
            replaced = removed,
            "assigned position"
        );
        Ok(assignment)
    }
}

// ── RemoveAssignment ─────────────────────────────────────────────────────────

pub struct RemoveAssignmentUseCase<A: AssignmentRepository> {
    pub repo: A,
}

impl<A: AssignmentRepository> RemoveAssignmentUseCase<A> {
    pub async fn execute(&self, id: Uuid) -> Result<(), StaffServiceError> {
        if !self.repo.delete(id).await? {
            return Err(StaffServiceError::AssignmentNotFound);
        }
        Ok(())
    }
}
