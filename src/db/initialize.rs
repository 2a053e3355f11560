use crate::db::migrate::{run_pending_migrations, run_pending_migrations_quiet};
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn).map_err(|e| AppError::Migration(e.to_string()))?;
    Ok(())
}

/// Make sure the schema is current before a command touches it.
///
/// Commands call this on every open, so a database created by an older
/// release (or never initialized) is upgraded silently.
pub fn ensure_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    run_pending_migrations_quiet(conn).map_err(|e| AppError::Migration(e.to_string()))?;
    Ok(())
}
