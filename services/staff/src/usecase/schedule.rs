use chrono::{NaiveTime, Utc};
use uuid::Uuid;

use crate::domain::repository::{EmployeeRepository, ScheduleRepository};
use crate::domain::types::{Schedule, ScheduleChanges};
use crate::error::StaffServiceError;

// ── ListSchedules ────────────────────────────────────────────────────────────

pub struct ListSchedulesUseCase<R: ScheduleRepository> {
    pub repo: R,
}

impl<R: ScheduleRepository> ListSchedulesUseCase<R> {
    pub async fn execute(&self, employee_id: Uuid) -> Result<Vec<Schedule>, StaffServiceError> {
        self.repo.list_by_employee(employee_id).await
    }
}

// ── GetSchedule ──────────────────────────────────────────────────────────────

pub struct GetScheduleUseCase<R: ScheduleRepository> {
    pub repo: R,
}

impl<R: ScheduleRepository> GetScheduleUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Schedule, StaffServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StaffServiceError::ScheduleNotFound)
    }
}

// ── CreateSchedule ───────────────────────────────────────────────────────────

pub struct CreateScheduleInput {
    pub ingress: NaiveTime,
    pub egress: NaiveTime,
}

/// Overlapping windows and egress before ingress are both accepted.
pub struct CreateScheduleUseCase<S: ScheduleRepository, E: EmployeeRepository> {
    pub schedules: S,
    pub employees: E,
}

impl<S: ScheduleRepository, E: EmployeeRepository> CreateScheduleUseCase<S, E> {
    pub async fn execute(
        &self,
        employee_id: Uuid,
        input: CreateScheduleInput,
    ) -> Result<Schedule, StaffServiceError> {
        if self.employees.find_by_id(employee_id).await?.is_none() {
            return Err(StaffServiceError::EmployeeNotFound);
        }
        let schedule = Schedule {
            id: Uuid::now_v7(),
            employee_id,
            ingress: input.ingress,
            egress: input.egress,
            created_at: Utc::now(),
        };
        self.schedules.create(&schedule).await
    }
}

// ── UpdateSchedule ───────────────────────────────────────────────────────────

pub struct UpdateScheduleUseCase<R: ScheduleRepository> {
    pub repo: R,
}

impl<R: ScheduleRepository> UpdateScheduleUseCase<R> {
    pub async fn execute(
        &self,
        id: Uuid,
        changes: ScheduleChanges,
    ) -> Result<Schedule, StaffServiceError> {
        if changes.is_empty() {
            return Err(StaffServiceError::MissingData);
        }
        self.repo
            .update(id, &changes)
            .await?
            .ok_or(StaffServiceError::ScheduleNotFound)
    }
}

// ── DeleteSchedule ───────────────────────────────────────────────────────────

pub struct DeleteScheduleUseCase<R: ScheduleRepository> {
    pub repo: R,
}

impl<R: ScheduleRepository> DeleteScheduleUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), StaffServiceError> {
        if !self.repo.delete(id).await? {
            return Err(StaffServiceError::ScheduleNotFound);
        }
        Ok(())
    }
}
