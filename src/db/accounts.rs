use crate::errors::AppResult;
use crate::models::account::Account;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub fn load_account(conn: &Connection, id: &str) -> AppResult<Option<Account>> {
    let mut stmt =
        conn.prepare_cached("SELECT id, password_hash, created_at FROM accounts WHERE id = ?1")?;

    let acc = stmt
        .query_row([id], |row| {
            Ok(Account {
                id: row.get(0)?,
                password_hash: row.get(1)?,
                created_at: row.get(2)?,
            })
        })
        .optional()?;

    Ok(acc)
}

pub fn account_exists(conn: &Connection, id: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM accounts WHERE id = ?1")?;
    Ok(stmt.exists([id])?)
}

/// Insert a new account row. The caller checks for duplicates first;
/// the primary key still rejects a race.
pub fn insert_account(conn: &Connection, id: &str, password_hash: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO accounts (id, password_hash, created_at) VALUES (?1, ?2, ?3)",
        params![id, password_hash, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn count_accounts(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM accounts", [], |row| row.get(0))?)
}
