use std::time::Duration;

use anyhow::Result;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::info;

/// Embed all diesel migrations at compile time
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Type alias for SQLite connection pool
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Applied to every pooled connection: concurrent writers wait instead of
/// failing with `database is locked`.
#[derive(Debug)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {}; PRAGMA foreign_keys = ON;",
            BUSY_TIMEOUT.as_millis()
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create database connection pool and run migrations
///
/// This function should be called **once at application startup**.
///
/// Responsibilities:
/// - Build r2d2 connection pool
/// - Automatically run all pending Diesel migrations
pub fn init_db_pool(database_url: &str) -> Result<DbPool> {
    // `:memory:` databases are per connection; keep a single one so every
    // caller sees the same schema.
    let max_size = if database_url == ":memory:" { 1 } else { 4 };
    init_db_pool_with_size(database_url, max_size)
}

pub fn init_db_pool_with_size(database_url: &str, max_size: u32) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    let pool = Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)
        .map_err(|e| anyhow::anyhow!("Failed to create database pool: {}", e))?;

    run_migrations(&pool)?;

    Ok(pool)
}

/// Run embedded Diesel migrations
fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get()?;

    info!("Running database migrations...");
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    info!("Database migrations completed");

    Ok(())
}
