use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use staffdesk_staff::domain::repository::{
    AssignmentRepository, ClockEntryRepository, EmployeeRepository, PositionRepository,
    ScheduleRepository,
};
use staffdesk_staff::domain::types::{
    Assignment, ClockEntry, ClockEntryChanges, ClockKind, Employee, EmployeeChanges, EmployeeView,
    Position, PositionChanges, Schedule, ScheduleChanges, current_position,
};
use staffdesk_staff::error::StaffServiceError;

// ── Fault injection ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Employees,
    Positions,
    Assignments,
    Schedules,
    ClockEntries,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Read,
    Create,
    Update,
    Delete,
    DeleteByEmployee,
    DeleteByPosition,
}

// ── InMemoryStore ────────────────────────────────────────────────────────────

#[derive(Default)]
struct Tables {
    employees: Vec<(Employee, String)>,
    positions: Vec<Position>,
    assignments: Vec<Assignment>,
    schedules: Vec<Schedule>,
    clock_entries: Vec<ClockEntry>,
    faults: HashSet<(Table, Op)>,
}

impl Tables {
    fn check(&self, table: Table, op: Op) -> Result<(), StaffServiceError> {
        if self.faults.contains(&(table, op)) {
            return Err(StaffServiceError::Internal(anyhow::anyhow!(
                "injected fault on {table:?} {op:?}"
            )));
        }
        Ok(())
    }

    fn view(&self, employee: &Employee) -> EmployeeView {
        let links = self
            .assignments
            .iter()
            .filter(|a| a.employee_id == employee.id)
            .filter_map(|a| {
                self.positions
                    .iter()
                    .find(|p| p.id == a.position_id)
                    .map(|p| (a.clone(), p.clone()))
            });
        EmployeeView {
            employee: employee.clone(),
            current_position: current_position(links),
        }
    }

    fn views_by_name<'a>(&self, employees: impl Iterator<Item = &'a Employee>) -> Vec<EmployeeView> {
        let mut views: Vec<EmployeeView> = employees.map(|e| self.view(e)).collect();
        views.sort_by(|a, b| a.employee.name.cmp(&b.employee.name));
        views
    }
}

/// Shared in-memory tables. Every repository handle created from one store
/// sees the same rows.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later call of `op` on `table` fail with an internal error.
    pub fn fail(&self, table: Table, op: Op) {
        self.tables.lock().unwrap().faults.insert((table, op));
    }

    pub fn employee_repo(&self) -> MemEmployeeRepo {
        MemEmployeeRepo {
            store: self.clone(),
        }
    }

    pub fn position_repo(&self) -> MemPositionRepo {
        MemPositionRepo {
            store: self.clone(),
        }
    }

    pub fn assignment_repo(&self) -> MemAssignmentRepo {
        MemAssignmentRepo {
            store: self.clone(),
        }
    }

    pub fn schedule_repo(&self) -> MemScheduleRepo {
        MemScheduleRepo {
            store: self.clone(),
        }
    }

    pub fn clock_entry_repo(&self) -> MemClockEntryRepo {
        MemClockEntryRepo {
            store: self.clone(),
        }
    }

    pub fn insert_employee(&self, employee: Employee) {
        self.tables
            .lock()
            .unwrap()
            .employees
            .push((employee, "secret".to_owned()));
    }

    pub fn insert_position(&self, position: Position) {
        self.tables.lock().unwrap().positions.push(position);
    }

    pub fn insert_assignment(&self, assignment: Assignment) {
        self.tables.lock().unwrap().assignments.push(assignment);
    }

    pub fn insert_schedule(&self, schedule: Schedule) {
        self.tables.lock().unwrap().schedules.push(schedule);
    }

    pub fn insert_clock_entry(&self, entry: ClockEntry) {
        self.tables.lock().unwrap().clock_entries.push(entry);
    }

    pub fn has_employee(&self, id: Uuid) -> bool {
        self.tables
            .lock()
            .unwrap()
            .employees
            .iter()
            .any(|(e, _)| e.id == id)
    }

    pub fn has_position(&self, id: Uuid) -> bool {
        self.tables
            .lock()
            .unwrap()
            .positions
            .iter()
            .any(|p| p.id == id)
    }

    pub fn password_of(&self, id: Uuid) -> Option<String> {
        self.tables
            .lock()
            .unwrap()
            .employees
            .iter()
            .find(|(e, _)| e.id == id)
            .map(|(_, p)| p.clone())
    }

    pub fn assignments_of(&self, employee_id: Uuid) -> Vec<Assignment> {
        self.tables
            .lock()
            .unwrap()
            .assignments
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .cloned()
            .collect()
    }

    pub fn assignment_count(&self) -> usize {
        self.tables.lock().unwrap().assignments.len()
    }

    pub fn schedule_count(&self, employee_id: Uuid) -> usize {
        self.tables
            .lock()
            .unwrap()
            .schedules
            .iter()
            .filter(|s| s.employee_id == employee_id)
            .count()
    }

    pub fn clock_entry_count(&self, employee_id: Uuid) -> usize {
        self.tables
            .lock()
            .unwrap()
            .clock_entries
            .iter()
            .filter(|c| c.employee_id == employee_id)
            .count()
    }
}

// ── MemEmployeeRepo ──────────────────────────────────────────────────────────

pub struct MemEmployeeRepo {
    store: InMemoryStore,
}

impl EmployeeRepository for MemEmployeeRepo {
    async fn list(&self) -> Result<Vec<EmployeeView>, StaffServiceError> {
        let tables = self.store.tables.lock().unwrap();
        tables.check(Table::Employees, Op::Read)?;
        let mut views: Vec<EmployeeView> =
            tables.employees.iter().map(|(e, _)| tables.view(e)).collect();
        views.sort_by(|a, b| b.employee.created_at.cmp(&a.employee.created_at));
        Ok(views)
    }

    async fn search(&self, term: &str) -> Result<Vec<EmployeeView>, StaffServiceError> {
        let tables = self.store.tables.lock().unwrap();
        tables.check(Table::Employees, Op::Read)?;
        let term = term.trim().to_lowercase();
        let matches = tables.employees.iter().map(|(e, _)| e).filter(|e| {
            [&e.name, &e.email, &e.username]
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
        });
        Ok(tables.views_by_name(matches))
    }

    async fn list_by_position(
        &self,
        position_id: Uuid,
    ) -> Result<Vec<EmployeeView>, StaffServiceError> {
        let tables = self.store.tables.lock().unwrap();
        tables.check(Table::Employees, Op::Read)?;
        let holders = tables.employees.iter().map(|(e, _)| e).filter(|e| {
            tables
                .assignments
                .iter()
                .any(|a| a.employee_id == e.id && a.position_id == position_id)
        });
        Ok(tables.views_by_name(holders))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<EmployeeView>, StaffServiceError> {
        let tables = self.store.tables.lock().unwrap();
        tables.check(Table::Employees, Op::Read)?;
        Ok(tables
            .employees
            .iter()
            .find(|(e, _)| e.id == id)
            .map(|(e, _)| tables.view(e)))
    }

    async fn create(
        &self,
        employee: &Employee,
        password: &str,
    ) -> Result<Employee, StaffServiceError> {
        let mut tables = self.store.tables.lock().unwrap();
        tables.check(Table::Employees, Op::Create)?;
        tables
            .employees
            .push((employee.clone(), password.to_owned()));
        Ok(employee.clone())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &EmployeeChanges,
    ) -> Result<bool, StaffServiceError> {
        let mut tables = self.store.tables.lock().unwrap();
        tables.check(Table::Employees, Op::Update)?;
        let Some((employee, password)) = tables.employees.iter_mut().find(|(e, _)| e.id == id)
        else {
            return Ok(false);
        };
        if let Some(v) = &changes.name {
            employee.name = v.clone();
        }
        if let Some(v) = &changes.email {
            employee.email = v.clone();
        }
        if let Some(v) = &changes.username {
            employee.username = v.clone();
        }
        if let Some(v) = &changes.password {
            *password = v.clone();
        }
        if let Some(v) = changes.age {
            employee.age = v;
        }
        employee.updated_at = Utc::now();
        Ok(true)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StaffServiceError> {
        let mut tables = self.store.tables.lock().unwrap();
        tables.check(Table::Employees, Op::Delete)?;
        let before = tables.employees.len();
        tables.employees.retain(|(e, _)| e.id != id);
        Ok(tables.employees.len() < before)
    }
}

// ── MemPositionRepo ──────────────────────────────────────────────────────────

pub struct MemPositionRepo {
    store: InMemoryStore,
}

impl PositionRepository for MemPositionRepo {
    async fn list(&self) -> Result<Vec<Position>, StaffServiceError> {
        let tables = self.store.tables.lock().unwrap();
        tables.check(Table::Positions, Op::Read)?;
        let mut positions = tables.positions.clone();
        positions.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(positions)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Position>, StaffServiceError> {
        let tables = self.store.tables.lock().unwrap();
        tables.check(Table::Positions, Op::Read)?;
        Ok(tables.positions.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, position: &Position) -> Result<Position, StaffServiceError> {
        let mut tables = self.store.tables.lock().unwrap();
        tables.check(Table::Positions, Op::Create)?;
        tables.positions.push(position.clone());
        Ok(position.clone())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &PositionChanges,
    ) -> Result<Option<Position>, StaffServiceError> {
        let mut tables = self.store.tables.lock().unwrap();
        tables.check(Table::Positions, Op::Update)?;
        let Some(position) = tables.positions.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        if let Some(v) = &changes.title {
            position.title = v.clone();
        }
        if let Some(v) = changes.salary {
            position.salary = v;
        }
        Ok(Some(position.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StaffServiceError> {
        let mut tables = self.store.tables.lock().unwrap();
        tables.check(Table::Positions, Op::Delete)?;
        let before = tables.positions.len();
        tables.positions.retain(|p| p.id != id);
        Ok(tables.positions.len() < before)
    }
}

// ── MemAssignmentRepo ────────────────────────────────────────────────────────

pub struct MemAssignmentRepo {
    store: InMemoryStore,
}

impl AssignmentRepository for MemAssignmentRepo {
    async fn create(&self, assignment: &Assignment) -> Result<Assignment, StaffServiceError> {
        let mut tables = self.store.tables.lock().unwrap();
        tables.check(Table::Assignments, Op::Create)?;
        tables.assignments.push(assignment.clone());
        Ok(assignment.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StaffServiceError> {
        let mut tables = self.store.tables.lock().unwrap();
        tables.check(Table::Assignments, Op::Delete)?;
        let before = tables.assignments.len();
        tables.assignments.retain(|a| a.id != id);
        Ok(tables.assignments.len() < before)
    }

    async fn delete_by_employee(&self, employee_id: Uuid) -> Result<u64, StaffServiceError> {
        let mut tables = self.store.tables.lock().unwrap();
        tables.check(Table::Assignments, Op::DeleteByEmployee)?;
        let before = tables.assignments.len();
        tables.assignments.retain(|a| a.employee_id != employee_id);
        Ok((before - tables.assignments.len()) as u64)
    }

    async fn delete_by_position(&self, position_id: Uuid) -> Result<u64, StaffServiceError> {
        let mut tables = self.store.tables.lock().unwrap();
        tables.check(Table::Assignments, Op::DeleteByPosition)?;
        let before = tables.assignments.len();
        tables.assignments.retain(|a| a.position_id != position_id);
        Ok((before - tables.assignments.len()) as u64)
    }
}

// ── MemScheduleRepo ──────────────────────────────────────────────────────────

pub struct MemScheduleRepo {
    store: InMemoryStore,
}

impl ScheduleRepository for MemScheduleRepo {
    async fn list_by_employee(
        &self,
        employee_id: Uuid,
    ) -> Result<Vec<Schedule>, StaffServiceError> {
        let tables = self.store.tables.lock().unwrap();
        tables.check(Table::Schedules, Op::Read)?;
        let mut schedules: Vec<Schedule> = tables
            .schedules
            .iter()
            .filter(|s| s.employee_id == employee_id)
            .cloned()
            .collect();
        schedules.sort_by_key(|s| s.ingress);
        Ok(schedules)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Schedule>, StaffServiceError> {
        let tables = self.store.tables.lock().unwrap();
        tables.check(Table::Schedules, Op::Read)?;
        Ok(tables.schedules.iter().find(|s| s.id == id).cloned())
    }

    async fn create(&self, schedule: &Schedule) -> Result<Schedule, StaffServiceError> {
        let mut tables = self.store.tables.lock().unwrap();
        tables.check(Table::Schedules, Op::Create)?;
        tables.schedules.push(schedule.clone());
        Ok(schedule.clone())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &ScheduleChanges,
    ) -> Result<Option<Schedule>, StaffServiceError> {
        let mut tables = self.store.tables.lock().unwrap();
        tables.check(Table::Schedules, Op::Update)?;
        let Some(schedule) = tables.schedules.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        if let Some(v) = changes.ingress {
            schedule.ingress = v;
        }
        if let Some(v) = changes.egress {
            schedule.egress = v;
        }
        Ok(Some(schedule.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StaffServiceError> {
        let mut tables = self.store.tables.lock().unwrap();
        tables.check(Table::Schedules, Op::Delete)?;
        let before = tables.schedules.len();
        tables.schedules.retain(|s| s.id != id);
        Ok(tables.schedules.len() < before)
    }

    async fn delete_by_employee(&self, employee_id: Uuid) -> Result<u64, StaffServiceError> {
        let mut tables = self.store.tables.lock().unwrap();
        tables.check(Table::Schedules, Op::DeleteByEmployee)?;
        let before = tables.schedules.len();
        tables.schedules.retain(|s| s.employee_id != employee_id);
        Ok((before - tables.schedules.len()) as u64)
    }
}

// ── MemClockEntryRepo ────────────────────────────────────────────────────────

pub struct MemClockEntryRepo {
    store: InMemoryStore,
}

impl ClockEntryRepository for MemClockEntryRepo {
    async fn list_by_employee(
        &self,
        employee_id: Uuid,
        date: Option<NaiveDate>,
    ) -> Result<Vec<ClockEntry>, StaffServiceError> {
        let tables = self.store.tables.lock().unwrap();
        tables.check(Table::ClockEntries, Op::Read)?;
        let mut entries: Vec<ClockEntry> = tables
            .clock_entries
            .iter()
            .filter(|c| c.employee_id == employee_id)
            .filter(|c| date.is_none_or(|d| c.date == d))
            .cloned()
            .collect();
        entries.sort_by(|a, b| (b.date, b.time).cmp(&(a.date, a.time)));
        Ok(entries)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ClockEntry>, StaffServiceError> {
        let tables = self.store.tables.lock().unwrap();
        tables.check(Table::ClockEntries, Op::Read)?;
        Ok(tables.clock_entries.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, entry: &ClockEntry) -> Result<ClockEntry, StaffServiceError> {
        let mut tables = self.store.tables.lock().unwrap();
        tables.check(Table::ClockEntries, Op::Create)?;
        tables.clock_entries.push(entry.clone());
        Ok(entry.clone())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &ClockEntryChanges,
    ) -> Result<Option<ClockEntry>, StaffServiceError> {
        let mut tables = self.store.tables.lock().unwrap();
        tables.check(Table::ClockEntries, Op::Update)?;
        let Some(entry) = tables.clock_entries.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        if let Some(v) = changes.kind {
            entry.kind = v;
        }
        if let Some(v) = changes.date {
            entry.date = v;
        }
        if let Some(v) = changes.time {
            entry.time = v;
        }
        Ok(Some(entry.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StaffServiceError> {
        let mut tables = self.store.tables.lock().unwrap();
        tables.check(Table::ClockEntries, Op::Delete)?;
        let before = tables.clock_entries.len();
        tables.clock_entries.retain(|c| c.id != id);
        Ok(tables.clock_entries.len() < before)
    }

    async fn delete_by_employee(&self, employee_id: Uuid) -> Result<u64, StaffServiceError> {
        let mut tables = self.store.tables.lock().unwrap();
        tables.check(Table::ClockEntries, Op::DeleteByEmployee)?;
        let before = tables.clock_entries.len();
        tables.clock_entries.retain(|c| c.employee_id != employee_id);
        Ok((before - tables.clock_entries.len()) as u64)
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_employee(name: &str) -> Employee {
    let now = Utc::now();
    Employee {
        id: Uuid::now_v7(),
        name: name.to_owned(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        username: name.to_lowercase().replace(' ', "_"),
        age: 30,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_position(title: &str, salary: Decimal) -> Position {
    Position {
        id: Uuid::now_v7(),
        title: title.to_owned(),
        salary,
        created_at: Utc::now(),
    }
}

pub fn test_assignment(employee_id: Uuid, position_id: Uuid, start_date: NaiveDate) -> Assignment {
    Assignment {
        id: Uuid::now_v7(),
        employee_id,
        position_id,
        start_date,
        created_at: Utc::now(),
    }
}

pub fn test_schedule(employee_id: Uuid, ingress: (u32, u32), egress: (u32, u32)) -> Schedule {
    Schedule {
        id: Uuid::now_v7(),
        employee_id,
        ingress: hm(ingress.0, ingress.1),
        egress: hm(egress.0, egress.1),
        created_at: Utc::now(),
    }
}

pub fn test_clock_entry(employee_id: Uuid, kind: ClockKind, date: NaiveDate) -> ClockEntry {
    ClockEntry {
        id: Uuid::now_v7(),
        employee_id,
        kind,
        date,
        time: hm(8, 0),
        late: false,
        early: false,
        created_at: Utc::now(),
    }
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}
