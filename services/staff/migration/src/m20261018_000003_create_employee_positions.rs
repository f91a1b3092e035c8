use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No unique index on employee_id and no ON DELETE CASCADE: the service
        // deletes link rows itself before replacing or removing a parent.
        manager
            .create_table(
                Table::create()
                    .table(EmployeePositions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmployeePositions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EmployeePositions::EmployeeId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeePositions::PositionId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeePositions::StartDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeePositions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EmployeePositions::Table, EmployeePositions::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EmployeePositions::Table, EmployeePositions::PositionId)
                            .to(Positions::Table, Positions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployeePositions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum EmployeePositions {
    Table,
    Id,
    EmployeeId,
    PositionId,
    StartDate,
    CreatedAt,
}

#[derive(Iden)]
enum Employees {
    Table,
    Id,
}

#[derive(Iden)]
enum Positions {
    Table,
    Id,
}
