#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;
use tutorlog::core::auth::AccountLogic;
use tutorlog::db::pool::DbPool;
use tutorlog::models::account::AccountContext;
use tutorlog::models::session::{Session, SessionInput};

pub const EMAIL: &str = "teacher@example.com";
pub const PASSWORD: &str = "s3cret-pass";

pub fn tutorlog() -> Command {
    cargo_bin_cmd!("tutorlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tutorlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `tutorlog --db <db> --account <EMAIL> --test <args…>`
pub fn run_as(db_path: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    tutorlog()
        .args(["--db", db_path, "--account", EMAIL, "--test"])
        .args(args)
        .assert()
}

/// Initialize the DB and sign up the test account
pub fn init_db_with_account(db_path: &str) {
    tutorlog()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    tutorlog()
        .args([
            "--db",
            db_path,
            "--test",
            "account",
            "signup",
            "--email",
            EMAIL,
            "--password",
            PASSWORD,
            "--confirm",
            PASSWORD,
        ])
        .assert()
        .success();
}

/// Initialize DB, account and a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db_with_account(db_path);

    run_as(
        db_path,
        &[
            "add",
            "Tech Academy",
            "AI Group A",
            "--date",
            "2025-09-01",
            "--hours",
            "2",
            "--rate",
            "250",
        ],
    )
    .success();

    run_as(
        db_path,
        &[
            "add",
            "Data School",
            "Python Basics",
            "--date",
            "2025-09-15",
            "--hours",
            "3",
            "--rate",
            "200",
            "--notes",
            "online",
        ],
    )
    .success();
}

// ---------------------------------------------------------------------------
// Library-level helpers
// ---------------------------------------------------------------------------

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

/// In-memory database with one signed-up account.
pub fn memory_account() -> (DbPool, AccountContext) {
    let pool = DbPool::in_memory().expect("in-memory db");
    let ctx = AccountLogic::sign_up(&pool.conn, EMAIL, PASSWORD, PASSWORD).expect("sign up");
    (pool, ctx)
}

pub fn input(academy: &str, group: &str, date: NaiveDate, hours: f64, rate: f64) -> SessionInput {
    SessionInput::new(academy, group, date, hours, rate)
}

/// Detached session value for pure aggregation tests.
pub fn session(id: i64, academy: &str, date: NaiveDate, hours: f64, rate: f64) -> Session {
    input(academy, "G", date, hours, rate).into_session(id, EMAIL)
}
