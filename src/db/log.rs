use crate::errors::AppResult;
use crate::models::account::AccountContext;
use chrono::Local;
use rusqlite::{Connection, params};

/// One row of the internal audit log.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Audit a mutation made on behalf of an account.
/// The target is `<account>` or `<account>#<session id>`.
pub fn audit(
    conn: &Connection,
    ctx: &AccountContext,
    operation: &str,
    session_id: Option<i64>,
    message: &str,
) -> AppResult<()> {
    let target = match session_id {
        Some(id) => format!("{}#{}", ctx.id(), id),
        None => ctx.id().to_string(),
    };
    ttlog(conn, operation, &target, message)
}

/// Load the log, oldest first. `limit` keeps only the most recent rows.
pub fn load_log(conn: &Connection, limit: Option<usize>) -> AppResult<Vec<LogEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message
         FROM log
         ORDER BY id DESC
         LIMIT ?1",
    )?;

    // SQLite treats a negative LIMIT as "no limit"
    let lim: i64 = limit.map(|l| l as i64).unwrap_or(-1);

    let rows = stmt.query_map([lim], |row| {
        Ok(LogEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get(3)?,
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    out.reverse();
    Ok(out)
}
