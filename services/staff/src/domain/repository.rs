#![allow(async_fn_in_trait)]

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::types::{
    Assignment, ClockEntry, ClockEntryChanges, Employee, EmployeeChanges, EmployeeView, Position,
    PositionChanges, Schedule, ScheduleChanges,
};
use crate::error::StaffServiceError;

/// Repository for employees. Every read joins the current position.
pub trait EmployeeRepository: Send + Sync {
    /// All employees, newest first.
    async fn list(&self) -> Result<Vec<EmployeeView>, StaffServiceError>;

    /// Case-insensitive match on name, email or username, ordered by name.
    async fn search(&self, term: &str) -> Result<Vec<EmployeeView>, StaffServiceError>;

    /// Employees holding an assignment to `position_id`, ordered by name.
    async fn list_by_position(
        &self,
        position_id: Uuid,
    ) -> Result<Vec<EmployeeView>, StaffServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<EmployeeView>, StaffServiceError>;

    /// Insert the row. Returns the employee as stored.
    async fn create(
        &self,
        employee: &Employee,
        password: &str,
    ) -> Result<Employee, StaffServiceError>;

    /// Apply the supplied fields. Returns `false` if no row has this id.
    async fn update(&self, id: Uuid, changes: &EmployeeChanges)
    -> Result<bool, StaffServiceError>;

    /// Delete the employee row only. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, StaffServiceError>;
}

/// Repository for job positions.
pub trait PositionRepository: Send + Sync {
    /// All positions ordered by title.
    async fn list(&self) -> Result<Vec<Position>, StaffServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Position>, StaffServiceError>;

    /// Insert the row. Returns the position as stored, salary included.
    async fn create(&self, position: &Position) -> Result<Position, StaffServiceError>;

    /// Apply the supplied fields. Returns the updated row, `None` if missing.
    async fn update(
        &self,
        id: Uuid,
        changes: &PositionChanges,
    ) -> Result<Option<Position>, StaffServiceError>;

    /// Delete the position row only. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, StaffServiceError>;
}

/// Repository for employee-position link rows.
pub trait AssignmentRepository: Send + Sync {
    async fn create(&self, assignment: &Assignment) -> Result<Assignment, StaffServiceError>;

    /// Delete one link row. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, StaffServiceError>;

    /// Delete every link row of an employee. Returns the number of rows removed.
    async fn delete_by_employee(&self, employee_id: Uuid) -> Result<u64, StaffServiceError>;

    /// Delete every link row pointing at a position. Returns the number of rows removed.
    async fn delete_by_position(&self, position_id: Uuid) -> Result<u64, StaffServiceError>;
}

/// Repository for work schedules.
pub trait ScheduleRepository: Send + Sync {
    /// Schedules of one employee ordered by ingress time.
    async fn list_by_employee(&self, employee_id: Uuid)
    -> Result<Vec<Schedule>, StaffServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Schedule>, StaffServiceError>;

    async fn create(&self, schedule: &Schedule) -> Result<Schedule, StaffServiceError>;

    async fn update(
        &self,
        id: Uuid,
        changes: &ScheduleChanges,
    ) -> Result<Option<Schedule>, StaffServiceError>;

    async fn delete(&self, id: Uuid) -> Result<bool, StaffServiceError>;

    async fn delete_by_employee(&self, employee_id: Uuid) -> Result<u64, StaffServiceError>;
}

/// Repository for time-clock entries.
pub trait ClockEntryRepository: Send + Sync {
    /// Entries of one employee, newest date and time first, optionally for a single day.
    async fn list_by_employee(
        &self,
        employee_id: Uuid,
        date: Option<NaiveDate>,
    ) -> Result<Vec<ClockEntry>, StaffServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ClockEntry>, StaffServiceError>;

    async fn create(&self, entry: &ClockEntry) -> Result<ClockEntry, StaffServiceError>;

    async fn update(
        &self,
        id: Uuid,
        changes: &ClockEntryChanges,
    ) -> Result<Option<ClockEntry>, StaffServiceError>;

    async fn delete(&self, id: Uuid) -> Result<bool, StaffServiceError>;

    async fn delete_by_employee(&self, employee_id: Uuid) -> Result<u64, StaffServiceError>;
}
