use anyhow::{Result, anyhow};
use diesel::{
    SqliteConnection,
    connection::SimpleConnection,
    r2d2::{ConnectionManager, CustomizeConnection, Error as R2d2Error, Pool},
};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::config::config_model::Database;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const BUSY_TIMEOUT_MS: u32 = 5_000;

/// Applied to every new pooled connection. SQLite serializes writers itself,
/// so a second writer waits on the lock instead of failing with SQLITE_BUSY.
#[derive(Debug)]
struct ConnectionPragmas {
    busy_timeout_ms: u32,
}

impl CustomizeConnection<SqliteConnection, R2d2Error> for ConnectionPragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> std::result::Result<(), R2d2Error> {
        conn.batch_execute(&format!("PRAGMA busy_timeout = {};", self.busy_timeout_ms))
            .map_err(R2d2Error::QueryError)
    }
}

pub type SqlitePoolSquad = Pool<ConnectionManager<SqliteConnection>>;

pub fn establish_connection(database: &Database) -> Result<SqlitePoolSquad> {
    let manager = ConnectionManager::<SqliteConnection>::new(database.url.as_str());
    let pool = Pool::builder()
        .max_size(database.max_connections)
        .connection_customizer(Box::new(ConnectionPragmas {
            busy_timeout_ms: BUSY_TIMEOUT_MS,
        }))
        .build(manager)?;

    run_migrations(&pool)?;

    Ok(pool)
}

/// Brings the schema up to date. Already-applied migrations are skipped, so
/// this is safe to call on every start.
pub fn run_migrations(pool: &SqlitePoolSquad) -> Result<()> {
    let mut pooled = pool.get()?;
    let conn: &mut SqliteConnection = &mut pooled;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow!(err))?;

    info!(applied = applied.len(), "sqlite: migrations are up to date");

    Ok(())
}
