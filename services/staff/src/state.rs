use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAssignmentRepository, DbClockEntryRepository, DbEmployeeRepository, DbPositionRepository,
    DbScheduleRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn employee_repo(&self) -> DbEmployeeRepository {
        DbEmployeeRepository {
            db: self.db.clone(),
        }
    }

    pub fn position_repo(&self) -> DbPositionRepository {
        DbPositionRepository {
            db: self.db.clone(),
        }
    }

    pub fn assignment_repo(&self) -> DbAssignmentRepository {
        DbAssignmentRepository {
            db: self.db.clone(),
        }
    }

    pub fn schedule_repo(&self) -> DbScheduleRepository {
        DbScheduleRepository {
            db: self.db.clone(),
        }
    }

    pub fn clock_entry_repo(&self) -> DbClockEntryRepository {
        DbClockEntryRepository {
            db: self.db.clone(),
        }
    }
}

impl FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
