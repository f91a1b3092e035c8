use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Employee profile. The password is write-only and never part of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub username: String,
    pub age: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Job position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub id: Uuid,
    pub title: String,
    pub salary: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Row of the employee-position join table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub position_id: Uuid,
    pub start_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Position an employee currently holds, flattened from the join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentPosition {
    pub assignment_id: Uuid,
    pub position_id: Uuid,
    pub title: String,
    pub salary: Decimal,
    pub start_date: NaiveDate,
}

/// Employee together with its denormalized current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeView {
    pub employee: Employee,
    pub current_position: Option<CurrentPosition>,
}

/// Daily working window. Several per employee, overlaps allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub ingress: NaiveTime,
    pub egress: NaiveTime,
    pub created_at: DateTime<Utc>,
}

/// Direction of a time-clock punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockKind {
    Entrada,
    Salida,
}

impl ClockKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entrada => "entrada",
            Self::Salida => "salida",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "entrada" => Some(Self::Entrada),
            "salida" => Some(Self::Salida),
            _ => None,
        }
    }
}

/// Time-clock punch.
///
/// `late` and `early` are stored but nothing computes them yet; new entries
/// always carry `false` for both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockEntry {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub kind: ClockKind,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub late: bool,
    pub early: bool,
    pub created_at: DateTime<Utc>,
}

// ── Change sets ──────────────────────────────────────────────────────────────
//
// `None` leaves the stored value untouched.

#[derive(Debug, Clone, Default)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub age: Option<u8>,
}

impl EmployeeChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.username.is_none()
            && self.password.is_none()
            && self.age.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PositionChanges {
    pub title: Option<String>,
    pub salary: Option<Decimal>,
}

impl PositionChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.salary.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleChanges {
    pub ingress: Option<NaiveTime>,
    pub egress: Option<NaiveTime>,
}

impl ScheduleChanges {
    pub fn is_empty(&self) -> bool {
        self.ingress.is_none() && self.egress.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClockEntryChanges {
    pub kind: Option<ClockKind>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

impl ClockEntryChanges {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.date.is_none() && self.time.is_none()
    }
}

/// Pick the current position out of an employee's assignment rows.
///
/// The latest `start_date` wins, ties go to the most recently created row.
/// Storage order is never relied upon.
pub fn current_position<I>(links: I) -> Option<CurrentPosition>
where
    I: IntoIterator<Item = (Assignment, Position)>,
{
    links
        .into_iter()
        .max_by_key(|(assignment, _)| (assignment.start_date, assignment.created_at))
        .map(|(assignment, position)| CurrentPosition {
            assignment_id: assignment.id,
            position_id: position.id,
            title: position.title,
            salary: position.salary,
            start_date: assignment.start_date,
        })
}

// ── Validation ───────────────────────────────────────────────────────────────

pub fn validate_name(name: &str) -> bool {
    !name.trim().is_empty()
}

pub fn validate_username(username: &str) -> bool {
    !username.trim().is_empty()
}

pub fn validate_password(password: &str) -> bool {
    !password.trim().is_empty()
}

/// Age must be 1–120 inclusive.
pub fn validate_age(age: u8) -> bool {
    (1..=120).contains(&age)
}

/// `local@domain.tld`: exactly one '@', no whitespace, and a dot inside the
/// domain with text on both sides.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn validate_title(title: &str) -> bool {
    !title.trim().is_empty()
}

/// Non-negative, at most two decimals and below 10^10, so the value is
/// stored in `NUMERIC(12,2)` exactly as given.
pub fn validate_salary(salary: Decimal) -> bool {
    salary >= Decimal::ZERO
        && salary.normalize().scale() <= 2
        && salary < Decimal::new(1_000_000_000_000, 2)
}
