use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(staffdesk_staff_migration::Migrator).await;
}
