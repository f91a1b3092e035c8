use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StaffServiceError;
use crate::state::AppState;
use crate::usecase::assignment::{
    AssignPositionInput, AssignPositionUseCase, RemoveAssignmentUseCase,
};

#[derive(Serialize)]
pub struct AssignmentResponse {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub position_id: Uuid,
    pub start_date: NaiveDate,
    #[serde(serialize_with = "staffdesk_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// ── PUT /employees/{id}/position ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AssignPositionRequest {
    pub position_id: Uuid,
    pub start_date: NaiveDate,
}

pub async fn assign_position(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    Json(body): Json<AssignPositionRequest>,
) -> Result<Json<AssignmentResponse>, StaffServiceError> {
    let usecase = AssignPositionUseCase {
        employees: state.employee_repo(),
        positions: state.position_repo(),
        assignments: state.assignment_repo(),
    };
    let assignment = usecase
        .execute(
            employee_id,
            AssignPositionInput {
                position_id: body.position_id,
                start_date: body.start_date,
            },
        )
        .await?;
    Ok(Json(AssignmentResponse {
        id: assignment.id,
        employee_id: assignment.employee_id,
        position_id: assignment.position_id,
        start_date: assignment.start_date,
        created_at: assignment.created_at,
    }))
}

// ── DELETE /assignments/{id} ─────────────────────────────────────────────────

pub async fn remove_assignment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StaffServiceError> {
    let usecase = RemoveAssignmentUseCase {
        repo: state.assignment_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
