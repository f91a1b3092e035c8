use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{ClockEntry, ClockEntryChanges, ClockKind};
use crate::error::StaffServiceError;
use crate::state::AppState;
use crate::usecase::clock_entry::{
    DeleteClockEntryUseCase, GetClockEntryUseCase, ListClockEntriesUseCase,
    RecordClockEntryInput, RecordClockEntryUseCase, UpdateClockEntryUseCase,
};

#[derive(Serialize)]
pub struct ClockEntryResponse {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub kind: &'static str,
    pub date: NaiveDate,
    #[serde(serialize_with = "staffdesk_core::serde::to_time_of_day")]
    pub time: NaiveTime,
    pub late: bool,
    pub early: bool,
    #[serde(serialize_with = "staffdesk_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ClockEntry> for ClockEntryResponse {
    fn from(c: ClockEntry) -> Self {
        Self {
            id: c.id,
            employee_id: c.employee_id,
            kind: c.kind.as_str(),
            date: c.date,
            time: c.time,
            late: c.late,
            early: c.early,
            created_at: c.created_at,
        }
    }
}

fn parse_kind(raw: &str) -> Result<ClockKind, StaffServiceError> {
    ClockKind::parse(raw).ok_or(StaffServiceError::InvalidClockKind)
}

// ── GET /employees/{id}/clock-entries ────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct ClockEntryListQuery {
    pub date: Option<NaiveDate>,
}

pub async fn get_clock_entries(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    Query(query): Query<ClockEntryListQuery>,
) -> Result<Json<Vec<ClockEntryResponse>>, StaffServiceError> {
    let usecase = ListClockEntriesUseCase {
        repo: state.clock_entry_repo(),
    };
    let entries = usecase.execute(employee_id, query.date).await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

// ── POST /employees/{id}/clock-entries ───────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateClockEntryRequest {
    pub kind: String,
    pub date: NaiveDate,
    #[serde(deserialize_with = "staffdesk_core::serde::from_time_of_day")]
    pub time: NaiveTime,
}

pub async fn create_clock_entry(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    Json(body): Json<CreateClockEntryRequest>,
) -> Result<(StatusCode, Json<ClockEntryResponse>), StaffServiceError> {
    let usecase = RecordClockEntryUseCase {
        clock_entries: state.clock_entry_repo(),
        employees: state.employee_repo(),
    };
    let entry = usecase
        .execute(
            employee_id,
            RecordClockEntryInput {
                kind: parse_kind(&body.kind)?,
                date: body.date,
                time: body.time,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(entry.into())))
}

// ── GET /clock-entries/{id} ──────────────────────────────────────────────────

pub async fn get_clock_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClockEntryResponse>, StaffServiceError> {
    let usecase = GetClockEntryUseCase {
        repo: state.clock_entry_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── PATCH /clock-entries/{id} ────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UpdateClockEntryRequest {
    pub kind: Option<String>,
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "staffdesk_core::serde::from_time_of_day_opt")]
    pub time: Option<NaiveTime>,
}

pub async fn update_clock_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateClockEntryRequest>,
) -> Result<Json<ClockEntryResponse>, StaffServiceError> {
    let usecase = UpdateClockEntryUseCase {
        repo: state.clock_entry_repo(),
    };
    let changes = ClockEntryChanges {
        kind: body.kind.as_deref().map(parse_kind).transpose()?,
        date: body.date,
        time: body.time,
    };
    Ok(Json(usecase.execute(id, changes).await?.into()))
}

// ── DELETE /clock-entries/{id} ───────────────────────────────────────────────

pub async fn delete_clock_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StaffServiceError> {
    let usecase = DeleteClockEntryUseCase {
        repo: state.clock_entry_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
