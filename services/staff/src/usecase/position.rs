use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::domain::repository::{AssignmentRepository, PositionRepository};
use crate::domain::types::{Position, PositionChanges, validate_salary, validate_title};
use crate::error::StaffServiceError;

fn validate_changes(changes: &PositionChanges) -> Result<(), StaffServiceError> {
    if changes.title.as_deref().is_some_and(|v| !validate_title(v)) {
        return Err(StaffServiceError::InvalidTitle);
    }
    if changes.salary.is_some_and(|v| !validate_salary(v)) {
        return Err(StaffServiceError::InvalidSalary);
    }
    Ok(())
}

// ── ListPositions ────────────────────────────────────────────────────────────

pub struct ListPositionsUseCase<R: PositionRepository> {
    pub repo: R,
}

impl<R: PositionRepository> ListPositionsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Position>, StaffServiceError> {
        self.repo.list().await
    }
}

// ── GetPosition ──────────────────────────────────────────────────────────────

pub struct GetPositionUseCase<R: PositionRepository> {
    pub repo: R,
}

impl<R: PositionRepository> GetPositionUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Position, StaffServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StaffServiceError::PositionNotFound)
    }
}

// ── CreatePosition ───────────────────────────────────────────────────────────

pub struct CreatePositionInput {
    pub title: String,
    pub salary: Decimal,
}

pub struct CreatePositionUseCase<R: PositionRepository> {
    pub repo: R,
}

impl<R: PositionRepository> CreatePositionUseCase<R> {
    pub async fn execute(&self, input: CreatePositionInput) -> Result<Position, StaffServiceError> {
        validate_changes(&PositionChanges {
            title: Some(input.title.clone()),
            salary: Some(input.salary),
        })?;
        let position = Position {
            id: Uuid::now_v7(),
            title: input.title,
            salary: input.salary,
            created_at: Utc::now(),
        };
        let position = self.repo.create(&position).await?;
        info!(position_id = %position.id, "created position");
        Ok(position)
    }
}

// ── UpdatePosition ───────────────────────────────────────────────────────────

pub struct UpdatePositionUseCase<R: PositionRepository> {
    pub repo: R,
}

impl<R: PositionRepository> UpdatePositionUseCase<R> {
    pub async fn execute(
        &self,
        id: Uuid,
        changes: PositionChanges,
    ) -> Result<Position, StaffServiceError> {
        if changes.is_empty() {
            return Err(StaffServiceError::MissingData);
        }
        validate_changes(&changes)?;
        self.repo
            .update(id, &changes)
            .await?
            .ok_or(StaffServiceError::PositionNotFound)
    }
}

// ── DeletePosition (cascading) ───────────────────────────────────────────────

/// Removes every assignment pointing at the position, then the position row.
/// A failure after the first step leaves the assignments deleted.
pub struct DeletePositionUseCase<P: PositionRepository, A: AssignmentRepository> {
    pub positions: P,
    pub assignments: A,
}

impl<P: PositionRepository, A: AssignmentRepository> DeletePositionUseCase<P, A> {
    pub async fn execute(&self, id: Uuid) -> Result<(), StaffServiceError> {
        let assignments = self.assignments.delete_by_position(id).await?;
        info!(position_id = %id, removed = assignments, "deleted assignments of position");

        if !self.positions.delete(id).await? {
            return Err(StaffServiceError::PositionNotFound);
        }
        info!(position_id = %id, "deleted position");
        Ok(())
    }
}
