//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid batch entry '{0}' (expected ACADEMY|GROUP|HOURS|RATE)")]
    InvalidBatchEntry(String),

    // ---------------------------
    // Records
    // ---------------------------
    #[error("Session #{0} not found")]
    NotFound(i64),

    // ---------------------------
    // Accounts
    // ---------------------------
    #[error("An account already exists for {0}")]
    DuplicateAccount(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Unknown account: {0}")]
    UnknownAccount(String),

    #[error("No account selected: run `tutorlog account login` or pass --account")]
    NoAccount,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
