use crate::db::accounts::count_accounts;
use crate::db::migrate::pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) COUNTS
    //
    let accounts = count_accounts(&pool.conn)?;
    let sessions: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))?;

    println!("{}• Accounts:{} {}{}{}", CYAN, RESET, GREEN, accounts, RESET);
    println!("{}• Sessions:{} {}{}{}", CYAN, RESET, GREEN, sessions, RESET);

    //
    // 3) DATE RANGE
    //
    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row("SELECT MIN(date), MAX(date) FROM sessions", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?;

    let (first, last) = range.unwrap_or((None, None));
    let dash = format!("{GREY}--{RESET}");

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(|| dash.clone()));
    println!("    to:   {}", last.unwrap_or(dash));

    //
    // 4) SCHEMA
    //
    let pending = pending_migrations(&pool.conn)?;
    if pending.is_empty() {
        println!("{}• Schema:{} up to date", CYAN, RESET);
    } else {
        println!(
            "{}• Schema:{} {}{} pending migration(s){}",
            CYAN,
            RESET,
            YELLOW,
            pending.len(),
            RESET
        );
    }

    println!();
    Ok(())
}
