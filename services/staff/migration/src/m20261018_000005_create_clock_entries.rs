use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClockEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClockEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ClockEntries::EmployeeId).uuid().not_null())
                    .col(ColumnDef::new(ClockEntries::Kind).string_len(16).not_null())
                    .col(ColumnDef::new(ClockEntries::Date).date().not_null())
                    .col(ColumnDef::new(ClockEntries::Time).time().not_null())
                    .col(
                        ColumnDef::new(ClockEntries::Late)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ClockEntries::Early)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ClockEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClockEntries::Table, ClockEntries::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClockEntries::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ClockEntries {
    Table,
    Id,
    EmployeeId,
    Kind,
    Date,
    Time,
    Late,
    Early,
    CreatedAt,
}

#[derive(Iden)]
enum Employees {
    Table,
    Id,
}
