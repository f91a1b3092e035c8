use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(EmployeePositions::Table)
                    .col(EmployeePositions::EmployeeId)
                    .name("idx_employee_positions_employee_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(EmployeePositions::Table)
                    .col(EmployeePositions::PositionId)
                    .name("idx_employee_positions_position_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Schedules::Table)
                    .col(Schedules::EmployeeId)
                    .name("idx_schedules_employee_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(ClockEntries::Table)
                    .col(ClockEntries::EmployeeId)
                    .col(ClockEntries::Date)
                    .name("idx_clock_entries_employee_id_date")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_clock_entries_employee_id_date",
            "idx_schedules_employee_id",
            "idx_employee_positions_position_id",
            "idx_employee_positions_employee_id",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(Iden)]
enum EmployeePositions {
    Table,
    EmployeeId,
    PositionId,
}

#[derive(Iden)]
enum Schedules {
    Table,
    EmployeeId,
}

#[derive(Iden)]
enum ClockEntries {
    Table,
    EmployeeId,
    Date,
}
