use axum::{
    Router,
    routing::{delete, get, put},
};
use tower::ServiceBuilder;

use staffdesk_core::health::{healthz, readyz};
use staffdesk_core::middleware::{request_id_layer, trace_layer};

use crate::handlers::{
    assignment::{assign_position, remove_assignment},
    clock_entry::{
        create_clock_entry, delete_clock_entry, get_clock_entries, get_clock_entry,
        update_clock_entry,
    },
    employee::{create_employee, delete_employee, get_employee, get_employees, update_employee},
    overview::get_overview,
    position::{create_position, delete_position, get_position, get_positions, update_position},
    schedule::{create_schedule, delete_schedule, get_schedule, get_schedules, update_schedule},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Dashboard
        .route("/overview", get(get_overview))
        // Employees
        .route("/employees", get(get_employees).post(create_employee))
        .route(
            "/employees/{id}",
            get(get_employee)
                .patch(update_employee)
                .delete(delete_employee),
        )
        // Assignments
        .route("/employees/{id}/position", put(assign_position))
        .route("/assignments/{id}", delete(remove_assignment))
        // Schedules
        .route(
            "/employees/{id}/schedules",
            get(get_schedules).post(create_schedule),
        )
        .route(
            "/schedules/{id}",
            get(get_schedule)
                .patch(update_schedule)
                .delete(delete_schedule),
        )
        // Clock entries
        .route(
            "/employees/{id}/clock-entries",
            get(get_clock_entries).post(create_clock_entry),
        )
        .route(
            "/clock-entries/{id}",
            get(get_clock_entry)
                .patch(update_clock_entry)
                .delete(delete_clock_entry),
        )
        // Positions
        .route("/positions", get(get_positions).post(create_position))
        .route(
            "/positions/{id}",
            get(get_position)
                .patch(update_position)
                .delete(delete_position),
        )
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(trace_layer()),
        )
        .with_state(state)
}
