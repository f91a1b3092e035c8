use std::collections::HashMap;

use anyhow::Context as _;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel as _, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use staffdesk_core::sea_ext::ContainsIgnoreCase;

use staffdesk_staff_schema::{assignments, clock_entries, employees, positions, schedules};

use crate::domain::repository::{
    AssignmentRepository, ClockEntryRepository, EmployeeRepository, PositionRepository,
    ScheduleRepository,
};
use crate::domain::types::{
    Assignment, ClockEntry, ClockEntryChanges, ClockKind, Employee, EmployeeChanges, EmployeeView,
    Position, PositionChanges, Schedule, ScheduleChanges, current_position,
};
use crate::error::StaffServiceError;

// ── Employee repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEmployeeRepository {
    pub db: DatabaseConnection,
}

impl DbEmployeeRepository {
    /// Join assignment and position rows for `models` and flatten them into views.
    async fn with_current_positions(
        &self,
        models: Vec<employees::Model>,
    ) -> Result<Vec<EmployeeView>, StaffServiceError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = models.iter().map(|model| model.id).collect();
        let links = assignments::Entity::find()
            .filter(assignments::Column::EmployeeId.is_in(ids))
            .find_also_related(positions::Entity)
            .all(&self.db)
            .await
            .context("list assignments with positions")?;

        let mut by_employee: HashMap<Uuid, Vec<(Assignment, Position)>> = HashMap::new();
        for (link, position) in links {
            // Dangling link rows (position gone) never count as current.
            if let Some(position) = position {
                by_employee
                    .entry(link.employee_id)
                    .or_default()
                    .push((assignment_from_model(link), position_from_model(position)));
            }
        }

        Ok(models
            .into_iter()
            .map(|model| {
                let links = by_employee.remove(&model.id).unwrap_or_default();
                EmployeeView {
                    employee: employee_from_model(model),
                    current_position: current_position(links),
                }
            })
            .collect())
    }
}

impl EmployeeRepository for DbEmployeeRepository {
    async fn list(&self) -> Result<Vec<EmployeeView>, StaffServiceError> {
        let models = employees::Entity::find()
            .order_by_desc(employees::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list employees")?;
        self.with_current_positions(models).await
    }

    async fn search(&self, term: &str) -> Result<Vec<EmployeeView>, StaffServiceError> {
        let models = employees::Entity::find()
            .contains_ignore_case(
                &[
                    employees::Column::Name,
                    employees::Column::Email,
                    employees::Column::Username,
                ],
                term,
            )
            .order_by_asc(employees::Column::Name)
            .all(&self.db)
            .await
            .context("search employees")?;
        self.with_current_positions(models).await
    }

    async fn list_by_position(
        &self,
        position_id: Uuid,
    ) -> Result<Vec<EmployeeView>, StaffServiceError> {
        let employee_ids: Vec<Uuid> = assignments::Entity::find()
            .filter(assignments::Column::PositionId.eq(position_id))
            .all(&self.db)
            .await
            .context("list assignments by position")?
            .into_iter()
            .map(|link| link.employee_id)
            .collect();
        if employee_ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = employees::Entity::find()
            .filter(employees::Column::Id.is_in(employee_ids))
            .order_by_asc(employees::Column::Name)
            .all(&self.db)
            .await
            .context("list employees by position")?;
        self.with_current_positions(models).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<EmployeeView>, StaffServiceError> {
        let model = employees::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find employee by id")?;
        let Some(model) = model else {
            return Ok(None);
        };
        Ok(self.with_current_positions(vec![model]).await?.pop())
    }

    async fn create(
        &self,
        employee: &Employee,
        password: &str,
    ) -> Result<Employee, StaffServiceError> {
        let model = employees::ActiveModel {
            id: Set(employee.id),
            name: Set(employee.name.clone()),
            email: Set(employee.email.clone()),
            username: Set(employee.username.clone()),
            password: Set(password.to_owned()),
            age: Set(employee.age as i16),
            created_at: Set(employee.created_at),
            updated_at: Set(employee.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create employee")?;
        Ok(employee_from_model(model))
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &EmployeeChanges,
    ) -> Result<bool, StaffServiceError> {
        let existing = employees::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find employee for update")?;
        let Some(row) = existing else {
            return Ok(false);
        };
        let mut employee = row.into_active_model();
        if let Some(name) = &changes.name {
            employee.name = Set(name.clone());
        }
        if let Some(email) = &changes.email {
            employee.email = Set(email.clone());
        }
        if let Some(username) = &changes.username {
            employee.username = Set(username.clone());
        }
        if let Some(password) = &changes.password {
            employee.password = Set(password.clone());
        }
        if let Some(age) = changes.age {
            employee.age = Set(age as i16);
        }
        employee.updated_at = Set(Utc::now());
        employee
            .update(&self.db)
            .await
            .context("update employee")?;
        Ok(true)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StaffServiceError> {
        let result = employees::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete employee")?;
        Ok(result.rows_affected > 0)
    }
}

fn employee_from_model(model: employees::Model) -> Employee {
    Employee {
        id: model.id,
        name: model.name,
        email: model.email,
        username: model.username,
        age: model.age as u8,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Position repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPositionRepository {
    pub db: DatabaseConnection,
}

impl PositionRepository for DbPositionRepository {
    async fn list(&self) -> Result<Vec<Position>, StaffServiceError> {
        let models = positions::Entity::find()
            .order_by_asc(positions::Column::Title)
            .all(&self.db)
            .await
            .context("list positions")?;
        Ok(models.into_iter().map(position_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Position>, StaffServiceError> {
        let model = positions::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find position by id")?;
        Ok(model.map(position_from_model))
    }

    async fn create(&self, position: &Position) -> Result<Position, StaffServiceError> {
        let model = positions::ActiveModel {
            id: Set(position.id),
            title: Set(position.title.clone()),
            salary: Set(position.salary),
            created_at: Set(position.created_at),
        }
        .insert(&self.db)
        .await
        .context("create position")?;
        Ok(position_from_model(model))
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &PositionChanges,
    ) -> Result<Option<Position>, StaffServiceError> {
        let existing = positions::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find position for update")?;
        let Some(row) = existing else {
            return Ok(None);
        };
        let mut position = row.into_active_model();
        if let Some(title) = &changes.title {
            position.title = Set(title.clone());
        }
        if let Some(salary) = changes.salary {
            position.salary = Set(salary);
        }
        let model = position
            .update(&self.db)
            .await
            .context("update position")?;
        Ok(Some(position_from_model(model)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StaffServiceError> {
        let result = positions::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete position")?;
        Ok(result.rows_affected > 0)
    }
}

fn position_from_model(model: positions::Model) -> Position {
    Position {
        id: model.id,
        title: model.title,
        salary: model.salary,
        created_at: model.created_at,
    }
}

// ── Assignment repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAssignmentRepository {
    pub db: DatabaseConnection,
}

impl AssignmentRepository for DbAssignmentRepository {
    async fn create(&self, assignment: &Assignment) -> Result<Assignment, StaffServiceError> {
        let model = assignments::ActiveModel {
            id: Set(assignment.id),
            employee_id: Set(assignment.employee_id),
            position_id: Set(assignment.position_id),
            start_date: Set(assignment.start_date),
            created_at: Set(assignment.created_at),
        }
        .insert(&self.db)
        .await
        .context("create assignment")?;
        Ok(assignment_from_model(model))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StaffServiceError> {
        let result = assignments::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete assignment")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_by_employee(&self, employee_id: Uuid) -> Result<u64, StaffServiceError> {
        let result = assignments::Entity::delete_many()
            .filter(assignments::Column::EmployeeId.eq(employee_id))
            .exec(&self.db)
            .await
            .context("delete assignments of employee")?;
        Ok(result.rows_affected)
    }

    async fn delete_by_position(&self, position_id: Uuid) -> Result<u64, StaffServiceError> {
        let result = assignments::Entity::delete_many()
            .filter(assignments::Column::PositionId.eq(position_id))
            .exec(&self.db)
            .await
            .context("delete assignments of position")?;
        Ok(result.rows_affected)
    }
}

fn assignment_from_model(model: assignments::Model) -> Assignment {
    Assignment {
        id: model.id,
        employee_id: model.employee_id,
        position_id: model.position_id,
        start_date: model.start_date,
        created_at: model.created_at,
    }
}

// ── Schedule repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbScheduleRepository {
    pub db: DatabaseConnection,
}

impl ScheduleRepository for DbScheduleRepository {
    async fn list_by_employee(
        &self,
        employee_id: Uuid,
    ) -> Result<Vec<Schedule>, StaffServiceError> {
        let models = schedules::Entity::find()
            .filter(schedules::Column::EmployeeId.eq(employee_id))
            .order_by_asc(schedules::Column::Ingress)
            .all(&self.db)
            .await
            .context("list schedules of employee")?;
        Ok(models.into_iter().map(schedule_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Schedule>, StaffServiceError> {
        let model = schedules::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find schedule by id")?;
        Ok(model.map(schedule_from_model))
    }

    async fn create(&self, schedule: &Schedule) -> Result<Schedule, StaffServiceError> {
        let model = schedules::ActiveModel {
            id: Set(schedule.id),
            employee_id: Set(schedule.employee_id),
            ingress: Set(schedule.ingress),
            egress: Set(schedule.egress),
            created_at: Set(schedule.created_at),
        }
        .insert(&self.db)
        .await
        .context("create schedule")?;
        Ok(schedule_from_model(model))
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &ScheduleChanges,
    ) -> Result<Option<Schedule>, StaffServiceError> {
        let existing = schedules::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find schedule for update")?;
        let Some(row) = existing else {
            return Ok(None);
        };
        let mut schedule = row.into_active_model();
        if let Some(ingress) = changes.ingress {
            schedule.ingress = Set(ingress);
        }
        if let Some(egress) = changes.egress {
            schedule.egress = Set(egress);
        }
        let model = schedule
            .update(&self.db)
            .await
            .context("update schedule")?;
        Ok(Some(schedule_from_model(model)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StaffServiceError> {
        let result = schedules::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete schedule")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_by_employee(&self, employee_id: Uuid) -> Result<u64, StaffServiceError> {
        let result = schedules::Entity::delete_many()
            .filter(schedules::Column::EmployeeId.eq(employee_id))
            .exec(&self.db)
            .await
            .context("delete schedules of employee")?;
        Ok(result.rows_affected)
    }
}

fn schedule_from_model(model: schedules::Model) -> Schedule {
    Schedule {
        id: model.id,
        employee_id: model.employee_id,
        ingress: model.ingress,
        egress: model.egress,
        created_at: model.created_at,
    }
}

// ── Clock entry repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbClockEntryRepository {
    pub db: DatabaseConnection,
}

impl ClockEntryRepository for DbClockEntryRepository {
    async fn list_by_employee(
        &self,
        employee_id: Uuid,
        date: Option<NaiveDate>,
    ) -> Result<Vec<ClockEntry>, StaffServiceError> {
        let mut query =
            clock_entries::Entity::find().filter(clock_entries::Column::EmployeeId.eq(employee_id));
        if let Some(date) = date {
            query = query.filter(clock_entries::Column::Date.eq(date));
        }
        let models = query
            .order_by_desc(clock_entries::Column::Date)
            .order_by_desc(clock_entries::Column::Time)
            .all(&self.db)
            .await
            .context("list clock entries of employee")?;
        let entries = models
            .into_iter()
            .map(clock_entry_from_model)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(entries)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ClockEntry>, StaffServiceError> {
        let model = clock_entries::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find clock entry by id")?;
        Ok(model.map(clock_entry_from_model).transpose()?)
    }

    async fn create(&self, entry: &ClockEntry) -> Result<ClockEntry, StaffServiceError> {
        let model = clock_entries::ActiveModel {
            id: Set(entry.id),
            employee_id: Set(entry.employee_id),
            kind: Set(entry.kind.as_str().to_owned()),
            date: Set(entry.date),
            time: Set(entry.time),
            late: Set(entry.late),
            early: Set(entry.early),
            created_at: Set(entry.created_at),
        }
        .insert(&self.db)
        .await
        .context("create clock entry")?;
        Ok(clock_entry_from_model(model)?)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &ClockEntryChanges,
    ) -> Result<Option<ClockEntry>, StaffServiceError> {
        let existing = clock_entries::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find clock entry for update")?;
        let Some(row) = existing else {
            return Ok(None);
        };
        let mut entry = row.into_active_model();
        if let Some(kind) = changes.kind {
            entry.kind = Set(kind.as_str().to_owned());
        }
        if let Some(date) = changes.date {
            entry.date = Set(date);
        }
        if let Some(time) = changes.time {
            entry.time = Set(time);
        }
        let model = entry
            .update(&self.db)
            .await
            .context("update clock entry")?;
        Ok(Some(clock_entry_from_model(model)?))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StaffServiceError> {
        let result = clock_entries::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete clock entry")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_by_employee(&self, employee_id: Uuid) -> Result<u64, StaffServiceError> {
        let result = clock_entries::Entity::delete_many()
            .filter(clock_entries::Column::EmployeeId.eq(employee_id))
            .exec(&self.db)
            .await
            .context("delete clock entries of employee")?;
        Ok(result.rows_affected)
    }
}

fn clock_entry_from_model(model: clock_entries::Model) -> anyhow::Result<ClockEntry> {
    let kind = ClockKind::parse(&model.kind)
        .with_context(|| format!("unknown clock entry kind `{}`", model.kind))?;
    Ok(ClockEntry {
        id: model.id,
        employee_id: model.employee_id,
        kind,
        date: model.date,
        time: model.time,
        late: model.late,
        early: model.early,
        created_at: model.created_at,
    })
}
