pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use anyhow::Result;
use infrastructure::{axum_http::http_serve, sqlite::sqlite_connection};
use tracing::info;

pub async fn run() -> Result<()> {
    observability::init_observability()?;

    let dotenvy_env = config::config_loader::load()?;
    info!(stage = %dotenvy_env.stage, "ENV has been loaded");

    let sqlite_pool = sqlite_connection::establish_connection(&dotenvy_env.database)?;
    info!(
        database_url = %dotenvy_env.database.url,
        "SQLite connection pool has been established"
    );

    http_serve::start(Arc::new(dotenvy_env), Arc::new(sqlite_pool)).await?;

    Ok(())
}
