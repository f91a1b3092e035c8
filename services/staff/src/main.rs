use anyhow::Context;
use sea_orm::Database;
use tracing::info;

use staffdesk_core::tracing::init_tracing;
use staffdesk_staff::config::StaffConfig;
use staffdesk_staff::router::build_router;
use staffdesk_staff::state::AppState;
use staffdesk_staff_migration::{Migrator, MigratorTrait};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("staffdesk_staff=info,tower_http=info,sea_orm=warn");

    let config = StaffConfig::from_env()?;

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .context("failed to run migrations")?;
        info!("migrations applied");
    }

    let router = build_router(AppState { db });
    let http_addr = format!("0.0.0.0:{}", config.staff_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("failed to bind {http_addr}"))?;

    info!("staff service listening on {http_addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
