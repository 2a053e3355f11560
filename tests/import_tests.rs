mod common;
use chrono::Weekday;
use common::{d, memory_account};
use tutorlog::core::import::{
    BatchEntry, BatchForm, ERROR_PREVIEW, Generated, ImportLogic, WeeklySchedule, parse_text,
};
use tutorlog::core::sessions::SessionLogic;
use tutorlog::errors::AppError;

fn schedule(days: Vec<Weekday>, weeks: u32) -> WeeklySchedule {
    WeeklySchedule {
        academy: "Tech Academy".into(),
        group: "AI Group A".into(),
        hours: 2.0,
        rate: 250.0,
        notes: String::new(),
        start: d(2024, 11, 1),
        weeks,
        days,
    }
}

#[test]
fn weekly_generates_matching_weekdays_in_order() {
    let out = schedule(vec![Weekday::Fri, Weekday::Mon], 2)
        .generate()
        .unwrap();

    let dates: Vec<_> = out.iter().map(|s| s.date).collect();
    assert_eq!(
        dates,
        [d(2024, 11, 1), d(2024, 11, 4), d(2024, 11, 8), d(2024, 11, 11)]
    );
    assert!(out.iter().all(|s| s.academy == "Tech Academy"
        && s.group == "AI Group A"
        && s.hours == 2.0
        && s.rate == 250.0));
}

#[test]
fn weekly_without_weekdays_is_a_validation_error() {
    let err = schedule(Vec::new(), 2).generate().unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let mut s = schedule(vec![Weekday::Mon], 2);
    s.academy = "  ".into();
    assert!(matches!(s.generate(), Err(AppError::Validation(_))));

    assert!(matches!(
        schedule(vec![Weekday::Mon], 0).generate(),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn text_import_stores_valid_lines_and_reports_bad_ones() {
    let (pool, ctx) = memory_account();
    let text = "2024-11-01, Tech Academy, AI Group A, 2, 250\n\
                2024-11-02, Data School, Python Basics, 3, 200\n\
                bad-line-only-3-fields, x, y\n";

    let report = ImportLogic::commit(&pool.conn, &ctx, "text", parse_text(text)).unwrap();

    assert_eq!(report.imported, 2);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].index, 3);
    assert!(report.errors[0].to_string().starts_with("Line 3:"));

    let stored = SessionLogic::list(&pool.conn, &ctx).unwrap();
    let amounts: Vec<f64> = stored.iter().map(|s| s.amount).collect();
    assert_eq!(amounts, [500.0, 600.0]);
}

#[test]
fn text_import_accepts_other_date_layouts() {
    let g = parse_text(
        "11/05/2024, A, G, 1, 100\n\
         25/12/2024, A, G, 1, 100\n\
         Dec 1, 2024, A, G, 1, 100\n\
         2024-13-01, A, G, 1, 100",
    );

    let dates: Vec<_> = g.sessions.iter().map(|c| c.input.date).collect();
    // month-first wins when both readings are valid
    assert_eq!(dates, [d(2024, 11, 5), d(2024, 12, 25)]);

    // "Dec 1, 2024" splits into two fields, so line 3 has a bad date field
    let lines: Vec<usize> = g.errors.iter().map(|e| e.index).collect();
    assert_eq!(lines, [3, 4]);
}

#[test]
fn text_import_rejects_empty_academy() {
    let g = parse_text("2024-11-01, , G, 1, 100");
    assert!(g.sessions.is_empty());
    assert!(g.errors[0].message.contains("academy"));
}

#[test]
fn batch_reports_invalid_entries_and_keeps_the_rest() {
    let (pool, ctx) = memory_account();
    let form = BatchForm {
        date: d(2024, 11, 3),
        entries: vec![
            BatchEntry::parse("Tech Academy|AI Group A|2|250", 200.0).unwrap(),
            BatchEntry::parse(" |Python Basics|3", 200.0).unwrap(),
            BatchEntry::parse("Data School|Python Basics|3", 200.0).unwrap(),
        ],
    };

    let report = ImportLogic::commit(&pool.conn, &ctx, "batch", form.generate().unwrap()).unwrap();

    assert_eq!(report.imported, 2);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].to_string(), "Entry 2: academy is required");

    let stored = SessionLogic::list(&pool.conn, &ctx).unwrap();
    assert!(stored.iter().all(|s| s.date == d(2024, 11, 3)));
    // omitted rate falls back to the default
    assert_eq!(stored[1].rate, 200.0);
}

#[test]
fn batch_entries_outside_the_hours_range_are_reported() {
    let (pool, ctx) = memory_account();
    let form = BatchForm {
        date: d(2024, 11, 3),
        entries: vec![
            BatchEntry::parse("A|G|50|100", 200.0).unwrap(),
            BatchEntry::parse("A|G|0.25|100", 200.0).unwrap(),
            BatchEntry::parse("A|G|12|100", 200.0).unwrap(),
        ],
    };

    let g = form.generate().unwrap();
    let bad: Vec<usize> = g.errors.iter().map(|e| e.index).collect();
    assert_eq!(bad, [1, 2]);
    assert!(g.errors[0].to_string().starts_with("Entry 1: hours must be between 0.5 and 12"));

    let report = ImportLogic::commit(&pool.conn, &ctx, "batch", g).unwrap();
    assert_eq!(report.imported, 1);
    let stored = SessionLogic::list(&pool.conn, &ctx).unwrap();
    assert_eq!(stored[0].hours, 12.0);
}

#[test]
fn batch_shorthand_must_have_three_or_four_parts() {
    assert!(matches!(
        BatchEntry::parse("A|G", 200.0),
        Err(AppError::InvalidBatchEntry(_))
    ));
    assert!(BatchEntry::parse("A|G|x|1", 200.0).is_err());

    let empty = BatchForm {
        date: d(2024, 11, 3),
        entries: Vec::new(),
    };
    assert!(matches!(empty.generate(), Err(AppError::Validation(_))));
}

#[test]
fn later_failures_do_not_undo_earlier_imports() {
    let (pool, ctx) = memory_account();

    let mut lines = vec!["2024-11-01, A, G, 1, 100".to_string()];
    for i in 0..7 {
        lines.push(format!("nonsense {i}"));
    }
    let report =
        ImportLogic::commit(&pool.conn, &ctx, "text", parse_text(&lines.join("\n"))).unwrap();

    assert_eq!(report.imported, 1);
    assert_eq!(report.errors.len(), 7);
    assert_eq!(report.preview(ERROR_PREVIEW).len(), 5);
    assert_eq!(SessionLogic::list(&pool.conn, &ctx).unwrap().len(), 1);
}

#[test]
fn weekly_candidates_go_through_the_create_path() {
    let (pool, ctx) = memory_account();
    let inputs = schedule(vec![Weekday::Wed], 3).generate().unwrap();

    let report =
        ImportLogic::commit(&pool.conn, &ctx, "weekly", Generated::from_inputs(inputs)).unwrap();

    assert_eq!(report.imported, 3);
    assert_eq!(report.ids.len(), 3);
    let stored = SessionLogic::list(&pool.conn, &ctx).unwrap();
    assert!(stored.iter().all(|s| s.amount == 500.0));
}
