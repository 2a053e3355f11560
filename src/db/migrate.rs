use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// A schema step, applied once and recorded in the `log` table.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20251103_0001_create_accounts",
        description: "Created accounts table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS accounts (
            id             TEXT PRIMARY KEY,
            password_hash  TEXT NOT NULL,
            created_at     TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20251103_0002_create_sessions",
        description: "Created sessions table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS sessions (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            account_id  TEXT NOT NULL,
            academy     TEXT NOT NULL CHECK (length(trim(academy)) > 0),
            group_name  TEXT NOT NULL CHECK (length(trim(group_name)) > 0),
            date        TEXT NOT NULL,          -- YYYY-MM-DD
            hours       REAL NOT NULL CHECK (hours > 0),
            rate        REAL NOT NULL CHECK (rate >= 0),
            amount      REAL NOT NULL,          -- hours * rate
            notes       TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20251103_0003_create_preferences",
        description: "Created preferences table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS preferences (
            account_id    TEXT PRIMARY KEY,
            academy_names TEXT NOT NULL DEFAULT '[]',  -- JSON array
            group_names   TEXT NOT NULL DEFAULT '[]',  -- JSON array
            default_rate  REAL NOT NULL DEFAULT 200.0
        );
        "#,
    },
    Migration {
        version: "20251119_0004_index_sessions_account_date",
        description: "Added (account_id, date) index on sessions",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_sessions_account_date ON sessions(account_id, date);
        "#,
    },
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration, verbose: bool) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()?;

    if verbose {
        success(format!("Migration applied: {} → {}", m.version, m.description));
    }
    Ok(())
}

/// Versions of the migrations not yet recorded in `log`.
pub fn pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations, in order.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    run_migrations(conn, true)
}

/// Same as [`run_pending_migrations`] without console output.
pub fn run_pending_migrations_quiet(conn: &Connection) -> Result<usize> {
    run_migrations(conn, false)
}

fn run_migrations(conn: &Connection, verbose: bool) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m, verbose)?;
        applied += 1;
    }

    Ok(applied)
}
