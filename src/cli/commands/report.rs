use crate::cli::commands::open_account;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{available_months, build_monthly_report};
use crate::core::sessions::SessionLogic;
use crate::errors::{AppError, AppResult};
use crate::models::rollup::MonthKey;
use crate::ui::messages::{header, info};
use crate::utils::date::month_name;
use crate::utils::formatting::{bold, hours, money, thousands};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Report { month, months } = cmd else {
        return Ok(());
    };

    let (pool, ctx) = open_account(cfg)?;
    let sessions = SessionLogic::list(&pool.conn, &ctx)?;
    let available = available_months(&sessions);

    if *months {
        if available.is_empty() {
            info("No sessions yet.");
        }
        for m in &available {
            println!("{m}  {} {}", month_name(m.month), m.year);
        }
        return Ok(());
    }

    let key = match month {
        Some(m) => MonthKey::parse(m).ok_or_else(|| AppError::InvalidDate(m.clone()))?,
        None => match available.first() {
            Some(latest) => *latest,
            None => {
                info("No sessions yet.");
                return Ok(());
            }
        },
    };

    let report = build_monthly_report(&sessions, key);

    header(
        format!("🧾 Report for {} {}", month_name(key.month), key.year),
        &cfg.separator_char,
    );

    if report.is_empty() {
        info(format!("No sessions in {key}."));
        return Ok(());
    }

    for academy in &report.academies {
        println!(
            "\n{}  ({} session(s), {})",
            bold(&academy.academy),
            academy.sessions.len(),
            hours(academy.hours)
        );

        let mut table = Table::new(vec![
            Column::left("Date"),
            Column::left("Group"),
            Column::right("Hours"),
            Column::right("Rate"),
            Column::right("Amount"),
        ])
        .with_separator(&cfg.separator_char);
        for s in &academy.sessions {
            table.add_row(vec![
                s.date_str(),
                s.group.clone(),
                hours(s.hours),
                thousands(s.rate),
                thousands(s.amount),
            ]);
        }
        print!("{}", table.render());
        println!("Subtotal: {}", money(academy.amount, &cfg.currency));
    }

    println!(
        "\n{} {} session(s) | {} | {}",
        bold("Total:"),
        report.totals.sessions,
        hours(report.totals.hours),
        bold(&money(report.totals.amount, &cfg.currency))
    );

    Ok(())
}
