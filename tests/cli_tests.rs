use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{
    EMAIL, PASSWORD, init_db_with_account, init_db_with_data, run_as, setup_test_db, temp_out,
    tutorlog,
};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    tutorlog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    tutorlog()
        .args(["--db", &db_path, "--test", "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Sessions").and(contains("up to date")));
}

#[test]
fn test_commands_need_an_account() {
    let db_path = setup_test_db("cli_no_account");
    init_db_with_account(&db_path);

    tutorlog()
        .args(["--db", &db_path, "--test", "--account", "ghost@example.com", "list"])
        .assert()
        .failure()
        .stderr(contains("Unknown account"));
}

#[test]
fn test_signup_twice_fails() {
    let db_path = setup_test_db("cli_signup_twice");
    init_db_with_account(&db_path);

    tutorlog()
        .args([
            "--db", &db_path, "--test", "account", "signup", "--email", EMAIL, "--password", "x",
            "--confirm", "x",
        ])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_login_with_wrong_password_fails() {
    let db_path = setup_test_db("cli_login");
    init_db_with_account(&db_path);

    tutorlog()
        .args([
            "--db", &db_path, "--test", "account", "login", "--email", EMAIL, "--password", "nope",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid email or password"));

    tutorlog()
        .args([
            "--db", &db_path, "--test", "account", "login", "--email", EMAIL, "--password",
            PASSWORD,
        ])
        .assert()
        .success()
        .stdout(contains("Logged in as"));
}

#[test]
fn test_whoami_counts_sessions() {
    let db_path = setup_test_db("cli_whoami");
    init_db_with_data(&db_path);

    run_as(&db_path, &["account", "whoami"])
        .success()
        .stdout(contains(EMAIL).and(contains("(2 sessions)")));
}

#[test]
fn test_add_and_list() {
    let db_path = setup_test_db("cli_add_list");
    init_db_with_data(&db_path);

    run_as(&db_path, &["list"])
        .success()
        .stdout(
            contains("Tech Academy")
                .and(contains("Data School"))
                .and(contains("2025-09-01"))
                .and(contains("1,100.00 EGP")),
        );

    run_as(&db_path, &["list", "--academy", "Data School"])
        .success()
        .stdout(contains("Python Basics").and(contains("Tech Academy").not()));
}

#[test]
fn test_add_rejects_hours_out_of_range() {
    let db_path = setup_test_db("cli_add_hours");
    init_db_with_account(&db_path);

    run_as(&db_path, &["add", "A", "G", "--hours", "13"])
        .failure()
        .stderr(contains("hours must be between"));
}

#[test]
fn test_add_uses_default_rate() {
    let db_path = setup_test_db("cli_default_rate");
    init_db_with_account(&db_path);

    run_as(&db_path, &["prefs", "set-rate", "300"]).success();
    run_as(&db_path, &["add", "A", "G", "--date", "2025-01-10", "--hours", "2"])
        .success()
        .stdout(contains("600.00 EGP"));
}

#[test]
fn test_edit_recomputes_amount() {
    let db_path = setup_test_db("cli_edit");
    init_db_with_data(&db_path);

    run_as(&db_path, &["edit", "1", "--hours", "4"])
        .success()
        .stdout(contains("500.00 EGP").and(contains("1,000.00 EGP")));

    run_as(&db_path, &["list", "--month", "2025-09"])
        .success()
        .stdout(contains("1,000.00"));
}

#[test]
fn test_del_missing_id_fails() {
    let db_path = setup_test_db("cli_del_missing");
    init_db_with_data(&db_path);

    run_as(&db_path, &["del", "99", "--yes"])
        .failure()
        .stderr(contains("Session #99 not found"));

    run_as(&db_path, &["list"])
        .success()
        .stdout(contains("2 session(s)"));
}

#[test]
fn test_del_by_id_and_all() {
    let db_path = setup_test_db("cli_del");
    init_db_with_data(&db_path);

    run_as(&db_path, &["del", "1", "--yes"])
        .success()
        .stdout(contains("Session #1 has been deleted"));

    tutorlog()
        .args(["--db", &db_path, "--account", EMAIL, "--test", "del", "--all"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("1 session(s) deleted"));

    run_as(&db_path, &["list"])
        .success()
        .stdout(contains("No sessions found"));
}

#[test]
fn test_bulk_weekly() {
    let db_path = setup_test_db("cli_bulk_weekly");
    init_db_with_account(&db_path);

    run_as(
        &db_path,
        &[
            "bulk", "weekly", "--academy", "Tech Academy", "--group", "AI Group A", "--hours", "2",
            "--rate", "250", "--start", "2024-11-01", "--weeks", "2", "--days", "fri,mon",
        ],
    )
    .success()
    .stdout(contains("Imported 4 session(s)"));

    run_as(&db_path, &["list"])
        .success()
        .stdout(
            contains("2024-11-04")
                .and(contains("2024-11-11"))
                .and(contains("2,000.00 EGP")),
        );
}

#[test]
fn test_bulk_weekly_bad_weekday() {
    let db_path = setup_test_db("cli_bulk_weekday");
    init_db_with_account(&db_path);

    run_as(
        &db_path,
        &[
            "bulk", "weekly", "--academy", "A", "--group", "G", "--hours", "1", "--days",
            "mon,funday",
        ],
    )
    .failure()
    .stderr(contains("Invalid weekday: funday"));
}

#[test]
fn test_bulk_batch_reports_invalid_entry() {
    let db_path = setup_test_db("cli_bulk_batch");
    init_db_with_account(&db_path);

    run_as(
        &db_path,
        &[
            "bulk", "batch", "--date", "2024-11-03", "--entry", "Tech Academy|AI Group A|2|250",
            "--entry", "broken", "--entry", "Data School|Python Basics|3",
        ],
    )
    .success()
    .stdout(contains("Imported 2 session(s)").and(contains("Entry 2:")));
}

#[test]
fn test_bulk_text_from_stdin() {
    let db_path = setup_test_db("cli_bulk_text");
    init_db_with_account(&db_path);

    tutorlog()
        .args(["--db", &db_path, "--account", EMAIL, "--test", "bulk", "text"])
        .write_stdin(
            "2024-11-01, Tech Academy, AI Group A, 2, 250\n\
             2024-11-02, Data School, Python Basics, 3, 200\n\
             bad-line-only-3-fields, x, y\n",
        )
        .assert()
        .success()
        .stdout(contains("Imported 2 session(s)").and(contains("Line 3:")));
}

#[test]
fn test_bulk_dry_run_stores_nothing() {
    let db_path = setup_test_db("cli_bulk_dry");
    init_db_with_account(&db_path);

    run_as(
        &db_path,
        &[
            "bulk", "--dry-run", "batch", "--date", "2024-11-03", "--entry", "A|G|1|100",
        ],
    )
    .success()
    .stdout(contains("Dry run: 1 session(s)"));

    run_as(&db_path, &["list"])
        .success()
        .stdout(contains("No sessions found"));
}

#[test]
fn test_report_for_month() {
    let db_path = setup_test_db("cli_report");
    init_db_with_data(&db_path);

    run_as(&db_path, &["report", "2025-09"])
        .success()
        .stdout(
            contains("September 2025")
                .and(contains("Subtotal: 600.00 EGP"))
                .and(contains("Subtotal: 500.00 EGP"))
                .and(contains("1,100.00 EGP")),
        );

    run_as(&db_path, &["report", "--months"])
        .success()
        .stdout(contains("2025-09"));
}

#[test]
fn test_analytics_and_dashboard_run() {
    let db_path = setup_test_db("cli_analytics");
    init_db_with_data(&db_path);

    run_as(&db_path, &["analytics", "--months", "1200", "--bins", "4"])
        .success()
        .stdout(
            contains("Per academy")
                .and(contains("Average hourly rate by academy"))
                .and(contains("250.00"))
                .and(contains("Rate distribution")),
        );

    run_as(&db_path, &["dashboard"])
        .success()
        .stdout(contains("Earnings").and(contains("All time: 2 session(s)")));
}

#[test]
fn test_prefs_add_is_idempotent() {
    let db_path = setup_test_db("cli_prefs");
    init_db_with_data(&db_path);

    run_as(&db_path, &["prefs", "add-academy", "Tech Academy"])
        .success()
        .stdout(contains("added"));
    run_as(&db_path, &["prefs", "add-academy", "Tech Academy"])
        .success()
        .stdout(contains("already saved"));

    run_as(&db_path, &["prefs", "sync"])
        .success()
        .stdout(contains("1 academy(ies), 2 group(s) added"));

    run_as(&db_path, &["prefs", "show"])
        .success()
        .stdout(contains("Tech Academy, Data School"));
}

#[test]
fn test_export_csv_range() {
    let db_path = setup_test_db("cli_export_csv");
    init_db_with_data(&db_path);
    let out = temp_out("cli_export_csv", "csv");

    run_as(
        &db_path,
        &["export", "--format", "csv", "--file", &out, "--range", "2025-09-10:2025-09-30"],
    )
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,date,academy,group,hours,rate,amount,notes"));
    assert!(content.contains("2025-09-15"));
    assert!(!content.contains("2025-09-01"));
}

#[test]
fn test_export_json_and_xlsx() {
    let db_path = setup_test_db("cli_export_json");
    init_db_with_data(&db_path);

    let json = temp_out("cli_export_json", "json");
    run_as(&db_path, &["export", "--format", "json", "--file", &json]).success();
    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json).expect("read json")).expect("valid json");
    assert_eq!(doc["account"], EMAIL);
    assert_eq!(doc["currency"], "EGP");
    assert_eq!(doc["totals"]["sessions"], 2);
    assert_eq!(doc["totals"]["amount"], 1100.0);
    assert_eq!(doc["sessions"].as_array().map(Vec::len), Some(2));
    assert_eq!(doc["sessions"][1]["notes"], "online");

    let xlsx = temp_out("cli_export_xlsx", "xlsx");
    run_as(&db_path, &["export", "--format", "xlsx", "--file", &xlsx]).success();
    assert!(fs::metadata(&xlsx).expect("xlsx written").len() > 0);
}

#[test]
fn test_export_keeps_existing_file_unless_confirmed() {
    let db_path = setup_test_db("cli_export_overwrite");
    init_db_with_data(&db_path);
    let out = temp_out("cli_export_overwrite", "csv");
    fs::write(&out, "keep me").expect("seed file");

    tutorlog()
        .args(["--db", &db_path, "--account", EMAIL, "--test", "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Export cancelled"));
    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    run_as(&db_path, &["export", "--file", &out, "--force"]).success();
    assert!(fs::read_to_string(&out).expect("read").starts_with("id,date"));
}

#[test]
fn test_export_refuses_relative_path() {
    let db_path = setup_test_db("cli_export_relative");
    init_db_with_data(&db_path);

    run_as(&db_path, &["export", "--format", "csv", "--file", "out.csv"])
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_log_print_shows_mutations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data(&db_path);

    tutorlog()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(
            contains("migration_applied")
                .and(contains("signup"))
                .and(contains("add")),
        );
}
