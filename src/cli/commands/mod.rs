pub mod account;
pub mod add;
pub mod analytics;
pub mod bulk;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod prefs;
pub mod report;

use crate::config::Config;
use crate::core::auth::AccountLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::account::AccountContext;
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Open the configured database and resolve the account commands act on.
pub(crate) fn open_account(cfg: &Config) -> AppResult<(DbPool, AccountContext)> {
    let pool = DbPool::new(&cfg.database_path().to_string_lossy())?;

    let email = cfg.current_account.as_deref().ok_or(AppError::NoAccount)?;
    let ctx = AccountLogic::resolve(&pool.conn, email)?;

    Ok((pool, ctx))
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Read one line from stdin after printing `prompt`.
pub(crate) fn prompt_line(prompt: &str) -> AppResult<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim_end_matches(['\r', '\n']).to_string())
}
