use rust_decimal::Decimal;

use staffdesk_staff::domain::types::ClockKind;
use staffdesk_staff::error::StaffServiceError;
use staffdesk_staff::usecase::employee::DeleteEmployeeUseCase;
use staffdesk_staff::usecase::position::DeletePositionUseCase;

use crate::helpers::{
    InMemoryStore, Op, Table, test_assignment, test_clock_entry, test_employee, test_position,
    test_schedule, ymd,
};

/// Employee with two schedules, three clock entries and one assignment.
fn seeded_store() -> (InMemoryStore, uuid::Uuid) {
    let store = InMemoryStore::new();
    let employee = test_employee("Ana Perez");
    let position = test_position("Cashier", Decimal::new(1200, 0));
    let id = employee.id;

    store.insert_employee(employee);
    store.insert_assignment(test_assignment(id, position.id, ymd(2024, 1, 8)));
    store.insert_position(position);
    store.insert_schedule(test_schedule(id, (8, 0), (12, 0)));
    store.insert_schedule(test_schedule(id, (13, 0), (17, 0)));
    for day in 1..=3 {
        store.insert_clock_entry(test_clock_entry(id, ClockKind::Entrada, ymd(2024, 3, day)));
    }
    (store, id)
}

fn delete_employee_usecase(
    store: &InMemoryStore,
) -> DeleteEmployeeUseCase<
    crate::helpers::MemEmployeeRepo,
    crate::helpers::MemScheduleRepo,
    crate::helpers::MemClockEntryRepo,
    crate::helpers::MemAssignmentRepo,
> {
    DeleteEmployeeUseCase {
        employees: store.employee_repo(),
        schedules: store.schedule_repo(),
        clock_entries: store.clock_entry_repo(),
        assignments: store.assignment_repo(),
    }
}

#[tokio::test]
async fn should_remove_every_dependent_row_then_the_employee() {
    let (store, id) = seeded_store();
    let bystander = test_employee("Luis Gomez");
    let bystander_id = bystander.id;
    store.insert_employee(bystander);
    store.insert_schedule(test_schedule(bystander_id, (9, 0), (18, 0)));

    delete_employee_usecase(&store).execute(id).await.unwrap();

    assert_eq!(store.schedule_count(id), 0);
    assert_eq!(store.clock_entry_count(id), 0);
    assert!(store.assignments_of(id).is_empty());
    assert!(!store.has_employee(id));

    // Rows of other employees are untouched.
    assert!(store.has_employee(bystander_id));
    assert_eq!(store.schedule_count(bystander_id), 1);
}

#[tokio::test]
async fn should_stop_cascade_at_failing_clock_entry_step() {
    let (store, id) = seeded_store();
    store.fail(Table::ClockEntries, Op::DeleteByEmployee);

    let result = delete_employee_usecase(&store).execute(id).await;

    assert!(
        matches!(result, Err(StaffServiceError::Internal(_))),
        "expected Internal, got {result:?}"
    );
    // Schedules were removed before the failure and stay removed.
    assert_eq!(store.schedule_count(id), 0);
    assert_eq!(store.clock_entry_count(id), 3);
    assert_eq!(store.assignments_of(id).len(), 1);
    assert!(store.has_employee(id));
}

#[tokio::test]
async fn should_report_missing_employee_after_dependents_are_cleared() {
    let store = InMemoryStore::new();
    let result = delete_employee_usecase(&store)
        .execute(uuid::Uuid::now_v7())
        .await;
    assert!(matches!(result, Err(StaffServiceError::EmployeeNotFound)));
}

#[tokio::test]
async fn should_remove_assignments_before_deleting_position() {
    let store = InMemoryStore::new();
    let position = test_position("Cook", Decimal::new(1500, 0));
    let position_id = position.id;
    store.insert_position(position);
    for name in ["Ana Perez", "Luis Gomez"] {
        let employee = test_employee(name);
        store.insert_assignment(test_assignment(employee.id, position_id, ymd(2024, 2, 1)));
        store.insert_employee(employee);
    }

    let usecase = DeletePositionUseCase {
        positions: store.position_repo(),
        assignments: store.assignment_repo(),
    };
    usecase.execute(position_id).await.unwrap();

    assert_eq!(store.assignment_count(), 0);
    assert!(!store.has_position(position_id));
}

#[tokio::test]
async fn should_keep_position_when_assignment_step_fails() {
    let store = InMemoryStore::new();
    let position = test_position("Cook", Decimal::new(1500, 0));
    let position_id = position.id;
    store.insert_position(position);
    store.fail(Table::Assignments, Op::DeleteByPosition);

    let usecase = DeletePositionUseCase {
        positions: store.position_repo(),
        assignments: store.assignment_repo(),
    };
    let result = usecase.execute(position_id).await;

    assert!(matches!(result, Err(StaffServiceError::Internal(_))));
    assert!(store.has_position(position_id));
}

#[tokio::test]
async fn should_leave_dependents_deleted_when_employee_delete_fails() {
    let (store, id) = seeded_store();
    store.fail(Table::Employees, Op::Delete);

    let result = delete_employee_usecase(&store).execute(id).await;

    assert!(
        matches!(result, Err(StaffServiceError::Internal(_))),
        "expected Internal, got {result:?}"
    );
    assert_eq!(store.schedule_count(id), 0);
    assert_eq!(store.clock_entry_count(id), 0);
    assert!(store.assignments_of(id).is_empty());
    assert!(store.has_employee(id));
}

#[tokio::test]
async fn should_leave_assignments_deleted_when_position_delete_fails() {
    let store = InMemoryStore::new();
    let position = test_position("Cook", Decimal::new(1500, 0));
    let position_id = position.id;
    store.insert_position(position);
    let employee = test_employee("Ana Perez");
    store.insert_assignment(test_assignment(employee.id, position_id, ymd(2024, 2, 1)));
    store.insert_employee(employee);
    store.fail(Table::Positions, Op::Delete);

    let usecase = DeletePositionUseCase {
        positions: store.position_repo(),
        assignments: store.assignment_repo(),
    };
    let result = usecase.execute(position_id).await;

    assert!(matches!(result, Err(StaffServiceError::Internal(_))));
    assert_eq!(store.assignment_count(), 0);
    assert!(store.has_position(position_id));
}
