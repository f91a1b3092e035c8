pub use sea_orm_migration::prelude::*;

mod m20261018_000001_create_employees;
mod m20261018_000002_create_positions;
mod m20261018_000003_create_employee_positions;
mod m20261018_000004_create_schedules;
mod m20261018_000005_create_clock_entries;
mod m20261018_000006_add_employee_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_create_employees::Migration),
            Box::new(m20261018_000002_create_positions::Migration),
            Box::new(m20261018_000003_create_employee_positions::Migration),
            Box::new(m20261018_000004_create_schedules::Migration),
            Box::new(m20261018_000005_create_clock_entries::Migration),
            Box::new(m20261018_000006_add_employee_indexes::Migration),
        ]
    }
}
