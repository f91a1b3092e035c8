use anyhow::Context;

/// Staff service configuration loaded from environment variables.
#[derive(Debug)]
pub struct StaffConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3120). Env var: `STAFF_PORT`.
    pub staff_port: u16,
    /// Apply pending migrations before serving (default false). Env var: `STAFF_RUN_MIGRATIONS`.
    pub run_migrations: bool,
}

impl StaffConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        let staff_port = match lookup("STAFF_PORT") {
            Some(v) => v.parse().context("STAFF_PORT must be a port number")?,
            None => 3120,
        };
        let run_migrations = match lookup("STAFF_RUN_MIGRATIONS") {
            Some(v) => v
                .parse()
                .context("STAFF_RUN_MIGRATIONS must be true or false")?,
            None => false,
        };
        Ok(Self {
            database_url,
            staff_port,
            run_migrations,
        })
    }
}
