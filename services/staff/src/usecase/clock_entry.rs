use chrono::{NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use crate::domain::repository::{ClockEntryRepository, EmployeeRepository};
use crate::domain::types::{ClockEntry, ClockEntryChanges, ClockKind};
use crate::error::StaffServiceError;

// ── ListClockEntries ─────────────────────────────────────────────────────────

pub struct ListClockEntriesUseCase<R: ClockEntryRepository> {
    pub repo: R,
}

impl<R: ClockEntryRepository> ListClockEntriesUseCase<R> {
    pub async fn execute(
        &self,
        employee_id: Uuid,
        date: Option<NaiveDate>,
    ) -> Result<Vec<ClockEntry>, StaffServiceError> {
        self.repo.list_by_employee(employee_id, date).await
    }
}

// ── GetClockEntry ────────────────────────────────────────────────────────────

pub struct GetClockEntryUseCase<R: ClockEntryRepository> {
    pub repo: R,
}

impl<R: ClockEntryRepository> GetClockEntryUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<ClockEntry, StaffServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StaffServiceError::ClockEntryNotFound)
    }
}

// ── RecordClockEntry ─────────────────────────────────────────────────────────

pub struct RecordClockEntryInput {
    pub kind: ClockKind,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Records a punch. Lateness is not evaluated against schedules, so `late`
/// and `early` are stored as `false`.
pub struct RecordClockEntryUseCase<C: ClockEntryRepository, E: EmployeeRepository> {
    pub clock_entries: C,
    pub employees: E,
}

impl<C: ClockEntryRepository, E: EmployeeRepository> RecordClockEntryUseCase<C, E> {
    pub async fn execute(
        &self,
        employee_id: Uuid,
        input: RecordClockEntryInput,
    ) -> Result<ClockEntry, StaffServiceError> {
        if self.employees.find_by_id(employee_id).await?.is_none() {
            return Err(StaffServiceError::EmployeeNotFound);
        }
        let entry = ClockEntry {
            id: Uuid::now_v7(),
            employee_id,
            kind: input.kind,
            date: input.date,
            time: input.time,
            late: false,
            early: false,
            created_at: Utc::now(),
        };
        self.clock_entries.create(&entry).await
    }
}

// ── UpdateClockEntry ─────────────────────────────────────────────────────────

pub struct UpdateClockEntryUseCase<R: ClockEntryRepository> {
    pub repo: R,
}

impl<R: ClockEntryRepository> UpdateClockEntryUseCase<R> {
    pub async fn execute(
        &self,
        id: Uuid,
        changes: ClockEntryChanges,
    ) -> Result<ClockEntry, StaffServiceError> {
        if changes.is_empty() {
            return Err(StaffServiceError::MissingData);
        }
        self.repo
            .update(id, &changes)
            .await?
            .ok_or(StaffServiceError::ClockEntryNotFound)
    }
}

// ── DeleteClockEntry ─────────────────────────────────────────────────────────

pub struct DeleteClockEntryUseCase<R: ClockEntryRepository> {
    pub repo: R,
}

impl<R: ClockEntryRepository> DeleteClockEntryUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), StaffServiceError> {
        if !self.repo.delete(id).await? {
            return Err(StaffServiceError::ClockEntryNotFound);
        }
        Ok(())
    }
}
