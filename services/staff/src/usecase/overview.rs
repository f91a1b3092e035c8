use crate::domain::repository::{EmployeeRepository, PositionRepository};
use crate::domain::types::{EmployeeView, Position};
use crate::error::StaffServiceError;

/// Everything the dashboard needs on first load.
#[derive(Debug, Clone)]
pub struct Overview {
    pub employees: Vec<EmployeeView>,
    pub positions: Vec<Position>,
}

/// Loads employees and positions concurrently. Either failure fails the whole load.
pub struct LoadOverviewUseCase<E: EmployeeRepository, P: PositionRepository> {
    pub employees: E,
    pub positions: P,
}

impl<E: EmployeeRepository, P: PositionRepository> LoadOverviewUseCase<E, P> {
    pub async fn execute(&self) -> Result<Overview, StaffServiceError> {
        let (employees, positions) =
            tokio::try_join!(self.employees.list(), self.positions.list())?;
        Ok(Overview {
            employees,
            positions,
        })
    }
}
