use crate::cli::commands::open_account;
use crate::cli::parser::{BulkArgs, BulkMode};
use crate::config::Config;
use crate::core::import::{
    BatchEntry, BatchForm, ERROR_PREVIEW, Generated, ImportError, ImportLogic, WeeklySchedule,
    parse_text,
};
use crate::core::preferences::PreferenceLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{detail, info, success, warning};
use crate::utils::date;
use crate::utils::formatting::{hours, money, thousands};
use crate::utils::table::{Column, Table};
use std::fs;
use std::io::{self, Read};

pub fn handle(args: &BulkArgs, cfg: &Config) -> AppResult<()> {
    let (pool, ctx) = open_account(cfg)?;

    let (source, generated) = match &args.mode {
        BulkMode::Weekly {
            academy,
            group,
            hours,
            rate,
            notes,
            start,
            weeks,
            days,
        } => {
            let start = match start {
                Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
                None => date::today(),
            };
            let days = date::parse_weekdays(days).map_err(AppError::InvalidWeekday)?;
            let rate = match rate {
                Some(r) => *r,
                None => PreferenceLogic::get(&pool.conn, &ctx)?.default_rate,
            };

            let schedule = WeeklySchedule {
                academy: academy.clone(),
                group: group.clone(),
                hours: *hours,
                rate,
                notes: notes.clone().unwrap_or_default(),
                start,
                weeks: *weeks,
                days,
            };
            ("weekly", Generated::from_inputs(schedule.generate()?))
        }

        BulkMode::Batch { date: d, entries } => {
            let d = match d {
                Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
                None => date::today(),
            };
            let default_rate = PreferenceLogic::get(&pool.conn, &ctx)?.default_rate;

            // unparsable shorthand is reported like any other invalid entry
            let mut parsed = Vec::new();
            let mut shorthand_errors = Vec::new();
            for (idx, raw) in entries.iter().enumerate() {
                match BatchEntry::parse(raw, default_rate) {
                    Ok(e) => parsed.push((idx + 1, e)),
                    Err(e) => shorthand_errors.push(ImportError::entry(idx + 1, &e)),
                }
            }

            let mut generated = if parsed.is_empty() {
                Generated::default()
            } else {
                let form = BatchForm {
                    date: d,
                    entries: parsed.iter().map(|(_, e)| e.clone()).collect(),
                };
                let mut g = form.generate()?;
                // map form positions back to command-line positions
                for c in &mut g.sessions {
                    c.index = parsed[c.index - 1].0;
                }
                for e in &mut g.errors {
                    e.index = parsed[e.index - 1].0;
                }
                g
            };
            generated.errors.extend(shorthand_errors);
            generated.errors.sort_by_key(|e| e.index);
            ("batch", generated)
        }

        BulkMode::Text { file } => {
            let text = match file {
                Some(path) => fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            ("text", parse_text(&text))
        }
    };

    if args.dry_run {
        preview(&generated, cfg);
        return Ok(());
    }

    let report = ImportLogic::commit(&pool.conn, &ctx, source, generated)?;

    if report.imported > 0 {
        success(format!("Imported {} session(s).", report.imported));
    } else {
        warning("No sessions imported.");
    }

    if report.has_errors() {
        warning(format!("{} problem(s):", report.errors.len()));
        for e in report.preview(ERROR_PREVIEW) {
            detail(e);
        }
        if report.errors.len() > ERROR_PREVIEW {
            detail(format!("… and {} more", report.errors.len() - ERROR_PREVIEW));
        }
    }

    Ok(())
}

fn preview(generated: &Generated, cfg: &Config) {
    info(format!(
        "Dry run: {} session(s) would be created.",
        generated.sessions.len()
    ));

    if !generated.sessions.is_empty() {
        let mut table = Table::new(vec![
            Column::right("#"),
            Column::left("Date"),
            Column::left("Academy"),
            Column::left("Group"),
            Column::right("Hours"),
            Column::right("Rate"),
            Column::right("Amount"),
        ])
        .with_separator(&cfg.separator_char);

        for c in &generated.sessions {
            let i = &c.input;
            table.add_row(vec![
                c.index.to_string(),
                i.date.format("%Y-%m-%d %a").to_string(),
                i.academy.clone(),
                i.group.clone(),
                hours(i.hours),
                thousands(i.rate),
                thousands(i.amount()),
            ]);
        }
        print!("{}", table.render());

        let total: f64 = generated.sessions.iter().map(|c| c.input.amount()).sum();
        println!("Total: {}", money(total, &cfg.currency));
    }

    for e in &generated.errors {
        detail(e);
    }
}
