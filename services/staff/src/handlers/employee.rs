use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{CurrentPosition, EmployeeChanges, EmployeeView};
use crate::error::StaffServiceError;
use crate::state::AppState;
use crate::usecase::employee::{
    CreateEmployeeInput, CreateEmployeeUseCase, DeleteEmployeeUseCase, EmployeeFilter,
    GetEmployeeUseCase, ListEmployeesUseCase, UpdateEmployeeUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CurrentPositionResponse {
    pub assignment_id: Uuid,
    pub position_id: Uuid,
    pub title: String,
    pub salary: Decimal,
    pub start_date: NaiveDate,
}

#[derive(Serialize)]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub username: String,
    pub age: u8,
    pub current_position: Option<CurrentPositionResponse>,
    #[serde(serialize_with = "staffdesk_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "staffdesk_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<CurrentPosition> for CurrentPositionResponse {
    fn from(p: CurrentPosition) -> Self {
        Self {
            assignment_id: p.assignment_id,
            position_id: p.position_id,
            title: p.title,
            salary: p.salary,
            start_date: p.start_date,
        }
    }
}

impl From<EmployeeView> for EmployeeResponse {
    fn from(view: EmployeeView) -> Self {
        let e = view.employee;
        Self {
            id: e.id,
            name: e.name,
            email: e.email,
            username: e.username,
            age: e.age,
            current_position: view.current_position.map(Into::into),
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

/// Ages outside `u8` are reported as invalid ages, not as malformed JSON.
fn to_age(age: i64) -> Result<u8, StaffServiceError> {
    u8::try_from(age).map_err(|_| StaffServiceError::InvalidAge)
}

// ── GET /employees ───────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct EmployeeListQuery {
    pub search: Option<String>,
    pub position_id: Option<Uuid>,
}

pub async fn get_employees(
    State(state): State<AppState>,
    Query(query): Query<EmployeeListQuery>,
) -> Result<Json<Vec<EmployeeResponse>>, StaffServiceError> {
    let filter = match (query.position_id, query.search) {
        (Some(position_id), _) => EmployeeFilter::Position(position_id),
        (None, Some(term)) => EmployeeFilter::Search(term),
        (None, None) => EmployeeFilter::All,
    };
    let usecase = ListEmployeesUseCase {
        repo: state.employee_repo(),
    };
    let employees = usecase.execute(filter).await?;
    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

// ── GET /employees/{id} ──────────────────────────────────────────────────────

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EmployeeResponse>, StaffServiceError> {
    let usecase = GetEmployeeUseCase {
        repo: state.employee_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── POST /employees ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub age: i64,
}

pub async fn create_employee(
    State(state): State<AppState>,
    Json(body): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), StaffServiceError> {
    let usecase = CreateEmployeeUseCase {
        repo: state.employee_repo(),
    };
    let view = usecase
        .execute(CreateEmployeeInput {
            name: body.name,
            email: body.email,
            username: body.username,
            password: body.password,
            age: to_age(body.age)?,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(view.into())))
}

// ── PATCH /employees/{id} ────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UpdateEmployeeRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub age: Option<i64>,
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateEmployeeRequest>,
) -> Result<Json<EmployeeResponse>, StaffServiceError> {
    let usecase = UpdateEmployeeUseCase {
        repo: state.employee_repo(),
    };
    let changes = EmployeeChanges {
        name: body.name,
        email: body.email,
        username: body.username,
        password: body.password,
        age: body.age.map(to_age).transpose()?,
    };
    Ok(Json(usecase.execute(id, changes).await?.into()))
}

// ── DELETE /employees/{id} ───────────────────────────────────────────────────

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StaffServiceError> {
    let usecase = DeleteEmployeeUseCase {
        employees: state.employee_repo(),
        schedules: state.schedule_repo(),
        clock_entries: state.clock_entry_repo(),
        assignments: state.assignment_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
