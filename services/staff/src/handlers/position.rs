use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{Position, PositionChanges};
use crate::error::StaffServiceError;
use crate::state::AppState;
use crate::usecase::position::{
    CreatePositionInput, CreatePositionUseCase, DeletePositionUseCase, GetPositionUseCase,
    ListPositionsUseCase, UpdatePositionUseCase,
};

#[derive(Serialize)]
pub struct PositionResponse {
    pub id: Uuid,
    pub title: String,
    pub salary: Decimal,
    #[serde(serialize_with = "staffdesk_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Position> for PositionResponse {
    fn from(p: Position) -> Self {
        Self {
            id: p.id,
            title: p.title,
            salary: p.salary,
            created_at: p.created_at,
        }
    }
}

// ── GET /positions ───────────────────────────────────────────────────────────

pub async fn get_positions(
    State(state): State<AppState>,
) -> Result<Json<Vec<PositionResponse>>, StaffServiceError> {
    let usecase = ListPositionsUseCase {
        repo: state.position_repo(),
    };
    let positions = usecase.execute().await?;
    Ok(Json(positions.into_iter().map(Into::into).collect()))
}

// ── GET /positions/{id} ──────────────────────────────────────────────────────

pub async fn get_position(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PositionResponse>, StaffServiceError> {
    let usecase = GetPositionUseCase {
        repo: state.position_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── POST /positions ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreatePositionRequest {
    pub title: String,
    pub salary: Decimal,
}

pub async fn create_position(
    State(state): State<AppState>,
    Json(body): Json<CreatePositionRequest>,
) -> Result<(StatusCode, Json<PositionResponse>), StaffServiceError> {
    let usecase = CreatePositionUseCase {
        repo: state.position_repo(),
    };
    let position = usecase
        .execute(CreatePositionInput {
            title: body.title,
            salary: body.salary,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(position.into())))
}

// ── PATCH /positions/{id} ────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UpdatePositionRequest {
    pub title: Option<String>,
    pub salary: Option<Decimal>,
}

pub async fn update_position(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdatePositionRequest>,
) -> Result<Json<PositionResponse>, StaffServiceError> {
    let usecase = UpdatePositionUseCase {
        repo: state.position_repo(),
    };
    let changes = PositionChanges {
        title: body.title,
        salary: body.salary,
    };
    Ok(Json(usecase.execute(id, changes).await?.into()))
}

// ── DELETE /positions/{id} ───────────────────────────────────────────────────

pub async fn delete_position(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StaffServiceError> {
    let usecase = DeletePositionUseCase {
        positions: state.position_repo(),
        assignments: state.assignment_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
