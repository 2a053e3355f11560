//! Raw SQL access to the `sessions` table.
//!
//! Every query is scoped by `account_id`; validation and auditing live in
//! `core::sessions`.

use crate::errors::{AppError, AppResult};
use crate::models::account::AccountContext;
use crate::models::session::{Session, SessionInput};
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_COLUMNS: &str = "SELECT id, account_id, academy, group_name, date, hours, rate, amount, notes, created_at
     FROM sessions";

pub fn map_row(row: &Row) -> Result<Session> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(Session {
        id: row.get("id")?,
        account_id: row.get("account_id")?,
        academy: row.get("academy")?,
        group: row.get("group_name")?,
        date,
        hours: row.get("hours")?,
        rate: row.get("rate")?,
        amount: row.get("amount")?,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert a session and return its new id. `amount` is derived here.
pub fn insert_session(conn: &Connection, ctx: &AccountContext, input: &SessionInput) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO sessions (account_id, academy, group_name, date, hours, rate, amount, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
    )?;

    stmt.execute(params![
        ctx.id(),
        input.academy,
        input.group,
        input.date.format("%Y-%m-%d").to_string(),
        input.hours,
        input.rate,
        input.amount(),
        input.notes,
        Local::now().to_rfc3339(),
    ])?;

    Ok(conn.last_insert_rowid())
}

/// Replace every mutable column of a session. Returns the number of rows touched.
pub fn update_session(
    conn: &Connection,
    ctx: &AccountContext,
    id: i64,
    input: &SessionInput,
) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE sessions
         SET academy = ?1, group_name = ?2, date = ?3, hours = ?4, rate = ?5, amount = ?6, notes = ?7
         WHERE id = ?8 AND account_id = ?9",
        params![
            input.academy,
            input.group,
            input.date.format("%Y-%m-%d").to_string(),
            input.hours,
            input.rate,
            input.amount(),
            input.notes,
            id,
            ctx.id(),
        ],
    )?;
    Ok(n)
}

pub fn load_sessions(conn: &Connection, ctx: &AccountContext) -> AppResult<Vec<Session>> {
    let sql = format!("{SELECT_COLUMNS} WHERE account_id = ?1 ORDER BY date ASC, id ASC");
    let mut stmt = conn.prepare_cached(&sql)?;

    let rows = stmt.query_map([ctx.id()], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Sessions whose date falls in `[start, end]`, both inclusive.
pub fn load_sessions_between(
    conn: &Connection,
    ctx: &AccountContext,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<Session>> {
    let sql = format!(
        "{SELECT_COLUMNS} WHERE account_id = ?1 AND date BETWEEN ?2 AND ?3 ORDER BY date ASC, id ASC"
    );
    let mut stmt = conn.prepare_cached(&sql)?;

    let rows = stmt.query_map(
        params![
            ctx.id(),
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_session(conn: &Connection, ctx: &AccountContext, id: i64) -> AppResult<Option<Session>> {
    let sql = format!("{SELECT_COLUMNS} WHERE id = ?1 AND account_id = ?2");
    let mut stmt = conn.prepare_cached(&sql)?;
    let s = stmt.query_row(params![id, ctx.id()], map_row).optional()?;
    Ok(s)
}

pub fn delete_session(conn: &Connection, ctx: &AccountContext, id: i64) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM sessions WHERE id = ?1 AND account_id = ?2",
        params![id, ctx.id()],
    )?;
    Ok(n)
}

pub fn delete_all_sessions(conn: &Connection, ctx: &AccountContext) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM sessions WHERE account_id = ?1", [ctx.id()])?;
    Ok(n)
}

pub fn count_sessions(conn: &Connection, ctx: &AccountContext) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM sessions WHERE account_id = ?1",
        [ctx.id()],
        |row| row.get(0),
    )?;
    Ok(n)
}
