use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::StaffServiceError;
use crate::handlers::employee::EmployeeResponse;
use crate::handlers::position::PositionResponse;
use crate::state::AppState;
use crate::usecase::overview::LoadOverviewUseCase;

#[derive(Serialize)]
pub struct OverviewResponse {
    pub employees: Vec<EmployeeResponse>,
    pub positions: Vec<PositionResponse>,
}

// ── GET /overview ────────────────────────────────────────────────────────────

pub async fn get_overview(
    State(state): State<AppState>,
) -> Result<Json<OverviewResponse>, StaffServiceError> {
    let usecase = LoadOverviewUseCase {
        employees: state.employee_repo(),
        positions: state.position_repo(),
    };
    let overview = usecase.execute().await?;
    Ok(Json(OverviewResponse {
        employees: overview.employees.into_iter().map(Into::into).collect(),
        positions: overview.positions.into_iter().map(Into::into).collect(),
    }))
}
