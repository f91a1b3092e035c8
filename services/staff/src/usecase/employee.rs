use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::repository::{
    AssignmentRepository, ClockEntryRepository, EmployeeRepository, ScheduleRepository,
};
use crate::domain::types::{
    Employee, EmployeeChanges, EmployeeView, validate_age, validate_email, validate_name,
    validate_password, validate_username,
};
use crate::error::StaffServiceError;

/// Check every supplied field; absent fields are not checked.
fn validate_changes(changes: &EmployeeChanges) -> Result<(), StaffServiceError> {
    if changes.name.as_deref().is_some_and(|v| !validate_name(v)) {
        return Err(StaffServiceError::InvalidName);
    }
    if changes.email.as_deref().is_some_and(|v| !validate_email(v)) {
        return Err(StaffServiceError::InvalidEmail);
    }
    if changes.username.as_deref().is_some_and(|v| !validate_username(v)) {
        return Err(StaffServiceError::InvalidUsername);
    }
    if changes.password.as_deref().is_some_and(|v| !validate_password(v)) {
        return Err(StaffServiceError::InvalidPassword);
    }
    if changes.age.is_some_and(|v| !validate_age(v)) {
        return Err(StaffServiceError::InvalidAge);
    }
    Ok(())
}

// ── ListEmployees ────────────────────────────────────────────────────────────

/// Which employees to list.
#[derive(Debug, Clone, Default)]
pub enum EmployeeFilter {
    #[default]
    All,
    Search(String),
    Position(Uuid),
}

pub struct ListEmployeesUseCase<R: EmployeeRepository> {
    pub repo: R,
}

impl<R: EmployeeRepository> ListEmployeesUseCase<R> {
    pub async fn execute(
        &self,
        filter: EmployeeFilter,
    ) -> Result<Vec<EmployeeView>, StaffServiceError> {
        match filter {
            EmployeeFilter::Search(term) if !term.trim().is_empty() => {
                self.repo.search(&term).await
            }
            EmployeeFilter::Position(position_id) => self.repo.list_by_position(position_id).await,
            EmployeeFilter::All | EmployeeFilter::Search(_) => self.repo.list().await,
        }
    }
}

// ── GetEmployee ──────────────────────────────────────────────────────────────

pub struct GetEmployeeUseCase<R: EmployeeRepository> {
    pub repo: R,
}

impl<R: EmployeeRepository> GetEmployeeUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<EmployeeView, StaffServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StaffServiceError::EmployeeNotFound)
    }
}

// ── CreateEmployee ───────────────────────────────────────────────────────────

pub struct CreateEmployeeInput {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub age: u8,
}

pub struct CreateEmployeeUseCase<R: EmployeeRepository> {
    pub repo: R,
}

impl<R: EmployeeRepository> CreateEmployeeUseCase<R> {
    pub async fn execute(
        &self,
        input: CreateEmployeeInput,
    ) -> Result<EmployeeView, StaffServiceError> {
        validate_changes(&EmployeeChanges {
            name: Some(input.name.clone()),
            email: Some(input.email.clone()),
            username: Some(input.username.clone()),
            password: Some(input.password.clone()),
            age: Some(input.age),
        })?;
        let now = Utc::now();
        let employee = Employee {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            username: input.username,
            age: input.age,
            created_at: now,
            updated_at: now,
        };
        let employee = self.repo.create(&employee, &input.password).await?;
        info!(employee_id = %employee.id, "created employee");
        Ok(EmployeeView {
            employee,
            current_position: None,
        })
    }
}

// ── UpdateEmployee ───────────────────────────────────────────────────────────

pub struct UpdateEmployeeUseCase<R: EmployeeRepository> {
    pub repo: R,
}

impl<R: EmployeeRepository> UpdateEmployeeUseCase<R> {
    pub async fn execute(
        &self,
        id: Uuid,
        changes: EmployeeChanges,
    ) -> Result<EmployeeView, StaffServiceError> {
        if changes.is_empty() {
            return Err(StaffServiceError::MissingData);
        }
        validate_changes(&changes)?;
        if !self.repo.update(id, &changes).await? {
            return Err(StaffServiceError::EmployeeNotFound);
        }
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StaffServiceError::EmployeeNotFound)
    }
}

// ── DeleteEmployee (cascading) ───────────────────────────────────────────────

/// Removes schedules, clock entries and assignments of an employee, then the
/// employee row, one step after the other.
///
/// The first failing step aborts the sequence. Steps already completed stay
/// applied: there is no transaction around the cascade.
pub struct DeleteEmployeeUseCase<E, S, C, A>
where
    E: EmployeeRepository,
    S: ScheduleRepository,
    C: ClockEntryRepository,
    A: AssignmentRepository,
{
    pub employees: E,
    pub schedules: S,
    pub clock_entries: C,
    pub assignments: A,
}

impl<E, S, C, A> DeleteEmployeeUseCase<E, S, C, A>
where
    E: EmployeeRepository,
    S: ScheduleRepository,
    C: ClockEntryRepository,
    A: AssignmentRepository,
{
    pub async fn execute(&self, id: Uuid) -> Result<(), StaffServiceError> {
        let schedules = self.schedules.delete_by_employee(id).await?;
        info!(employee_id = %id, removed = schedules, "deleted schedules of employee");

        let clock_entries = self.clock_entries.delete_by_employee(id).await?;
        info!(employee_id = %id, removed = clock_entries, "deleted clock entries of employee");

        let assignments = self.assignments.delete_by_employee(id).await?;
        info!(employee_id = %id, removed = assignments, "deleted assignments of employee");

        if !self.employees.delete(id).await? {
            return Err(StaffServiceError::EmployeeNotFound);
        }
        info!(employee_id = %id, "deleted employee");
        Ok(())
    }
}
