use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{Schedule, ScheduleChanges};
use crate::error::StaffServiceError;
use crate::state::AppState;
use crate::usecase::schedule::{
    CreateScheduleInput, CreateScheduleUseCase, DeleteScheduleUseCase, GetScheduleUseCase,
    ListSchedulesUseCase, UpdateScheduleUseCase,
};

#[derive(Serialize)]
pub struct ScheduleResponse {
    pub id: Uuid,
    pub employee_id: Uuid,
    #[serde(serialize_with = "staffdesk_core::serde::to_time_of_day")]
    pub ingress: NaiveTime,
    #[serde(serialize_with = "staffdesk_core::serde::to_time_of_day")]
    pub egress: NaiveTime,
    #[serde(serialize_with = "staffdesk_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Schedule> for ScheduleResponse {
    fn from(s: Schedule) -> Self {
        Self {
            id: s.id,
            employee_id: s.employee_id,
            ingress: s.ingress,
            egress: s.egress,
            created_at: s.created_at,
        }
    }
}

// ── GET /employees/{id}/schedules ────────────────────────────────────────────

pub async fn get_schedules(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
) -> Result<Json<Vec<ScheduleResponse>>, StaffServiceError> {
    let usecase = ListSchedulesUseCase {
        repo: state.schedule_repo(),
    };
    let schedules = usecase.execute(employee_id).await?;
    Ok(Json(schedules.into_iter().map(Into::into).collect()))
}

// ── POST /employees/{id}/schedules ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateScheduleRequest {
    #[serde(deserialize_with = "staffdesk_core::serde::from_time_of_day")]
    pub ingress: NaiveTime,
    #[serde(deserialize_with = "staffdesk_core::serde::from_time_of_day")]
    pub egress: NaiveTime,
}

pub async fn create_schedule(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    Json(body): Json<CreateScheduleRequest>,
) -> Result<(StatusCode, Json<ScheduleResponse>), StaffServiceError> {
    let usecase = CreateScheduleUseCase {
        schedules: state.schedule_repo(),
        employees: state.employee_repo(),
    };
    let schedule = usecase
        .execute(
            employee_id,
            CreateScheduleInput {
                ingress: body.ingress,
                egress: body.egress,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(schedule.into())))
}

// ── GET /schedules/{id} ──────────────────────────────────────────────────────

pub async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScheduleResponse>, StaffServiceError> {
    let usecase = GetScheduleUseCase {
        repo: state.schedule_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── PATCH /schedules/{id} ────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UpdateScheduleRequest {
    #[serde(default, deserialize_with = "staffdesk_core::serde::from_time_of_day_opt")]
    pub ingress: Option<NaiveTime>,
    #[serde(default, deserialize_with = "staffdesk_core::serde::from_time_of_day_opt")]
    pub egress: Option<NaiveTime>,
}

pub async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateScheduleRequest>,
) -> Result<Json<ScheduleResponse>, StaffServiceError> {
    let usecase = UpdateScheduleUseCase {
        repo: state.schedule_repo(),
    };
    let changes = ScheduleChanges {
        ingress: body.ingress,
        egress: body.egress,
    };
    Ok(Json(usecase.execute(id, changes).await?.into()))
}

// ── DELETE /schedules/{id} ───────────────────────────────────────────────────

pub async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StaffServiceError> {
    let usecase = DeleteScheduleUseCase {
        repo: state.schedule_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
