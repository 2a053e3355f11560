mod common;
use common::{EMAIL, PASSWORD, d, input, memory_account};
use tutorlog::core::auth::{AccountLogic, verify_password};
use tutorlog::core::preferences::PreferenceLogic;
use tutorlog::core::sessions::SessionLogic;
use tutorlog::db::accounts::load_account;
use tutorlog::db::log::load_log;
use tutorlog::db::migrate::{pending_migrations, run_pending_migrations_quiet};
use tutorlog::db::pool::DbPool;
use tutorlog::errors::AppError;
use tutorlog::export::{ExportFormat, ExportLogic};
use tutorlog::models::preferences::DEFAULT_RATE;

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

#[test]
fn create_derives_amount_and_trims_fields() {
    let (pool, ctx) = memory_account();

    let id = SessionLogic::create(
        &pool.conn,
        &ctx,
        &input("  Tech Academy ", "AI Group A", d(2024, 11, 1), 2.0, 250.0).with_notes(" room 4 "),
    )
    .unwrap();

    let s = SessionLogic::get(&pool.conn, &ctx, id).unwrap();
    assert_eq!(s.academy, "Tech Academy");
    assert_eq!(s.notes, "room 4");
    assert_eq!(s.amount, 500.0);
    assert_eq!(s.account_id, EMAIL);
}

#[test]
fn invalid_input_writes_nothing() {
    let (pool, ctx) = memory_account();

    for bad in [
        input("", "G", d(2024, 11, 1), 1.0, 100.0),
        input("A", " ", d(2024, 11, 1), 1.0, 100.0),
        input("A", "G", d(2024, 11, 1), 0.0, 100.0),
        input("A", "G", d(2024, 11, 1), f64::NAN, 100.0),
        input("A", "G", d(2024, 11, 1), 1.0, -5.0),
    ] {
        let err = SessionLogic::create(&pool.conn, &ctx, &bad).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "{bad:?}");
    }

    assert!(SessionLogic::list(&pool.conn, &ctx).unwrap().is_empty());
}

#[test]
fn edit_recomputes_amount() {
    let (pool, ctx) = memory_account();
    let id = SessionLogic::create(&pool.conn, &ctx, &input("A", "G", d(2024, 11, 1), 2.0, 250.0))
        .unwrap();

    let mut changed = SessionLogic::get(&pool.conn, &ctx, id).unwrap().to_input();
    changed.hours = 3.0;
    changed.rate = 300.0;
    SessionLogic::update(&pool.conn, &ctx, id, &changed).unwrap();

    let s = SessionLogic::get(&pool.conn, &ctx, id).unwrap();
    assert_eq!(s.hours, 3.0);
    assert_eq!(s.amount, 900.0);
}

#[test]
fn update_of_missing_id_is_not_found() {
    let (pool, ctx) = memory_account();
    let err = SessionLogic::update(&pool.conn, &ctx, 42, &input("A", "G", d(2024, 11, 1), 1.0, 1.0))
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(42)));
}

#[test]
fn delete_of_missing_id_leaves_everything_in_place() {
    let (pool, ctx) = memory_account();
    for day in 1..=3 {
        SessionLogic::create(&pool.conn, &ctx, &input("A", "G", d(2024, 11, day), 1.0, 100.0))
            .unwrap();
    }
    let before = SessionLogic::list(&pool.conn, &ctx).unwrap();

    let err = SessionLogic::delete(&pool.conn, &ctx, 999).unwrap_err();
    assert!(matches!(err, AppError::NotFound(999)));

    assert_eq!(SessionLogic::list(&pool.conn, &ctx).unwrap(), before);
}

#[test]
fn delete_removes_only_the_given_id() {
    let (pool, ctx) = memory_account();
    let a = SessionLogic::create(&pool.conn, &ctx, &input("A", "G", d(2024, 11, 1), 1.0, 100.0))
        .unwrap();
    let b = SessionLogic::create(&pool.conn, &ctx, &input("B", "G", d(2024, 11, 2), 1.0, 100.0))
        .unwrap();

    SessionLogic::delete(&pool.conn, &ctx, a).unwrap();

    let ids: Vec<i64> = SessionLogic::list(&pool.conn, &ctx)
        .unwrap()
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, [b]);
}

#[test]
fn accounts_do_not_see_each_other() {
    let (pool, alice) = memory_account();
    let bob = AccountLogic::sign_up(&pool.conn, "bob@example.com", "pw", "pw").unwrap();

    let id = SessionLogic::create(&pool.conn, &alice, &input("A", "G", d(2024, 11, 1), 1.0, 100.0))
        .unwrap();

    assert!(SessionLogic::list(&pool.conn, &bob).unwrap().is_empty());
    assert!(matches!(
        SessionLogic::delete(&pool.conn, &bob, id),
        Err(AppError::NotFound(_))
    ));
    assert_eq!(SessionLogic::delete_all(&pool.conn, &bob).unwrap(), 0);
    assert_eq!(SessionLogic::list(&pool.conn, &alice).unwrap().len(), 1);
}

#[test]
fn mutations_are_audited() {
    let (pool, ctx) = memory_account();
    let id = SessionLogic::create(&pool.conn, &ctx, &input("A", "G", d(2024, 11, 1), 1.0, 100.0))
        .unwrap();
    SessionLogic::delete(&pool.conn, &ctx, id).unwrap();

    let ops: Vec<String> = load_log(&pool.conn, Some(2))
        .unwrap()
        .into_iter()
        .map(|e| format!("{} {}", e.operation, e.target))
        .collect();
    assert_eq!(ops, [format!("add {EMAIL}#{id}"), format!("del {EMAIL}#{id}")]);
}

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

#[test]
fn preferences_default_until_changed() {
    let (pool, ctx) = memory_account();
    let prefs = PreferenceLogic::get(&pool.conn, &ctx).unwrap();

    assert!(prefs.academies.is_empty());
    assert!(prefs.groups.is_empty());
    assert_eq!(prefs.default_rate, DEFAULT_RATE);
}

#[test]
fn repeated_adds_never_duplicate() {
    let (pool, ctx) = memory_account();

    assert!(PreferenceLogic::add_academy(&pool.conn, &ctx, "Tech Academy").unwrap());
    assert!(!PreferenceLogic::add_academy(&pool.conn, &ctx, "Tech Academy").unwrap());
    assert!(!PreferenceLogic::add_academy(&pool.conn, &ctx, " Tech Academy ").unwrap());
    assert!(PreferenceLogic::add_group(&pool.conn, &ctx, "AI Group A").unwrap());

    let prefs = PreferenceLogic::get(&pool.conn, &ctx).unwrap();
    assert_eq!(prefs.academies, ["Tech Academy"]);
    assert_eq!(prefs.groups, ["AI Group A"]);

    assert!(matches!(
        PreferenceLogic::add_group(&pool.conn, &ctx, "   "),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn remove_reports_whether_something_changed() {
    let (pool, ctx) = memory_account();
    PreferenceLogic::add_group(&pool.conn, &ctx, "G1").unwrap();

    assert!(PreferenceLogic::remove_group(&pool.conn, &ctx, "G1").unwrap());
    assert!(!PreferenceLogic::remove_group(&pool.conn, &ctx, "G1").unwrap());
    assert!(!PreferenceLogic::remove_academy(&pool.conn, &ctx, "nope").unwrap());
}

#[test]
fn default_rate_must_be_non_negative() {
    let (pool, ctx) = memory_account();

    PreferenceLogic::set_default_rate(&pool.conn, &ctx, 275.0).unwrap();
    assert_eq!(PreferenceLogic::get(&pool.conn, &ctx).unwrap().default_rate, 275.0);

    assert!(PreferenceLogic::set_default_rate(&pool.conn, &ctx, -1.0).is_err());
    assert!(PreferenceLogic::set_default_rate(&pool.conn, &ctx, f64::INFINITY).is_err());
    assert_eq!(PreferenceLogic::get(&pool.conn, &ctx).unwrap().default_rate, 275.0);
}

#[test]
fn import_from_sessions_appends_after_existing_names() {
    let (pool, ctx) = memory_account();
    PreferenceLogic::add_academy(&pool.conn, &ctx, "Zeta Institute").unwrap();

    for (academy, group, day) in [
        ("Tech Academy", "AI Group A", 1),
        ("Data School", "Python Basics", 2),
        ("Tech Academy", "AI Group B", 3),
        ("Zeta Institute", "AI Group A", 4),
    ] {
        SessionLogic::create(&pool.conn, &ctx, &input(academy, group, d(2024, 11, day), 1.0, 1.0))
            .unwrap();
    }

    let added = PreferenceLogic::import_from_sessions(&pool.conn, &ctx).unwrap();
    assert_eq!(added, (2, 3));

    let prefs = PreferenceLogic::get(&pool.conn, &ctx).unwrap();
    assert_eq!(prefs.academies, ["Zeta Institute", "Tech Academy", "Data School"]);
    assert_eq!(prefs.groups, ["AI Group A", "Python Basics", "AI Group B"]);

    // second run adds nothing
    assert_eq!(
        PreferenceLogic::import_from_sessions(&pool.conn, &ctx).unwrap(),
        (0, 0)
    );
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

#[test]
fn duplicate_sign_up_is_rejected_without_overwrite() {
    let (pool, _) = memory_account();
    let original = load_account(&pool.conn, EMAIL).unwrap().unwrap();

    let err = AccountLogic::sign_up(&pool.conn, EMAIL, "other", "other").unwrap_err();
    assert!(matches!(err, AppError::DuplicateAccount(_)));

    let after = load_account(&pool.conn, EMAIL).unwrap().unwrap();
    assert_eq!(after.password_hash, original.password_hash);
}

#[test]
fn sign_up_validates_input() {
    let pool = DbPool::in_memory().unwrap();

    assert!(matches!(
        AccountLogic::sign_up(&pool.conn, "", "pw", "pw"),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        AccountLogic::sign_up(&pool.conn, "x@example.com", "pw", "different"),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn login_checks_the_password() {
    let (pool, _) = memory_account();

    let ctx = AccountLogic::login(&pool.conn, " Teacher@Example.com ", PASSWORD).unwrap();
    assert_eq!(ctx.id(), EMAIL);

    assert!(matches!(
        AccountLogic::login(&pool.conn, EMAIL, "wrong"),
        Err(AppError::InvalidCredentials)
    ));
    assert!(matches!(
        AccountLogic::login(&pool.conn, "nobody@example.com", PASSWORD),
        Err(AppError::InvalidCredentials)
    ));
}

#[test]
fn password_hashes_are_salted() {
    let (pool, _) = memory_account();
    AccountLogic::sign_up(&pool.conn, "twin@example.com", PASSWORD, PASSWORD).unwrap();

    let a = load_account(&pool.conn, EMAIL).unwrap().unwrap();
    let b = load_account(&pool.conn, "twin@example.com").unwrap().unwrap();

    assert_ne!(a.password_hash, PASSWORD);
    assert_ne!(a.password_hash, b.password_hash);
    assert!(a.password_hash.starts_with("$argon2id$"));
    assert!(verify_password(PASSWORD, &b.password_hash).unwrap());
}

#[test]
fn resolve_requires_an_existing_account() {
    let (pool, _) = memory_account();
    assert!(AccountLogic::resolve(&pool.conn, EMAIL).is_ok());
    assert!(matches!(
        AccountLogic::resolve(&pool.conn, "ghost@example.com"),
        Err(AppError::UnknownAccount(_))
    ));
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

#[test]
fn migrations_are_applied_once() {
    let pool = DbPool::in_memory().unwrap();
    assert!(pending_migrations(&pool.conn).unwrap().is_empty());
    assert_eq!(run_pending_migrations_quiet(&pool.conn).unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[test]
fn export_does_not_replace_a_file_without_overwrite() {
    let (pool, ctx) = memory_account();
    SessionLogic::create(&pool.conn, &ctx, &input("A", "G", d(2025, 1, 5), 2.0, 100.0)).unwrap();

    let path = std::env::temp_dir().join("repo_export_overwrite.json");
    std::fs::write(&path, "old").unwrap();
    let file = path.to_string_lossy().to_string();

    let err = ExportLogic::export(&pool.conn, &ctx, ExportFormat::Json, &file, None, false, "EGP")
        .unwrap_err();
    assert!(matches!(err, AppError::Export(_)));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "old");

    let n = ExportLogic::export(&pool.conn, &ctx, ExportFormat::Json, &file, None, true, "EGP")
        .unwrap();
    assert_eq!(n, 1);
    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc["totals"]["amount"], 200.0);
}
