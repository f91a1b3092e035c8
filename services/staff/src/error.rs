use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Staff service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum StaffServiceError {
    #[error("employee not found")]
    EmployeeNotFound,
    #[error("position not found")]
    PositionNotFound,
    #[error("assignment not found")]
    AssignmentNotFound,
    #[error("schedule not found")]
    ScheduleNotFound,
    #[error("clock entry not found")]
    ClockEntryNotFound,
    #[error("name is required")]
    InvalidName,
    #[error("email is not valid")]
    InvalidEmail,
    #[error("username is required")]
    InvalidUsername,
    #[error("password is required")]
    InvalidPassword,
    #[error("age must be between 1 and 120")]
    InvalidAge,
    #[error("title is required")]
    InvalidTitle,
    #[error("salary must be between 0 and 9999999999.99 with at most two decimals")]
    InvalidSalary,
    #[error("clock kind must be entrada or salida")]
    InvalidClockKind,
    #[error("missing data")]
    MissingData,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl StaffServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmployeeNotFound => "EMPLOYEE_NOT_FOUND",
            Self::PositionNotFound => "POSITION_NOT_FOUND",
            Self::AssignmentNotFound => "ASSIGNMENT_NOT_FOUND",
            Self::ScheduleNotFound => "SCHEDULE_NOT_FOUND",
            Self::ClockEntryNotFound => "CLOCK_ENTRY_NOT_FOUND",
            Self::InvalidName => "INVALID_NAME",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidUsername => "INVALID_USERNAME",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::InvalidAge => "INVALID_AGE",
            Self::InvalidTitle => "INVALID_TITLE",
            Self::InvalidSalary => "INVALID_SALARY",
            Self::InvalidClockKind => "INVALID_CLOCK_KIND",
            Self::MissingData => "MISSING_DATA",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for StaffServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::EmployeeNotFound
            | Self::PositionNotFound
            | Self::AssignmentNotFound
            | Self::ScheduleNotFound
            | Self::ClockEntryNotFound => StatusCode::NOT_FOUND,
            Self::InvalidName
            | Self::InvalidEmail
            | Self::InvalidUsername
            | Self::InvalidPassword
            | Self::InvalidAge
            | Self::InvalidTitle
            | Self::InvalidSalary
            | Self::InvalidClockKind
            | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are expected client errors; TraceLayer already records their status.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
