use crate::cli::commands::open_account;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::{
    SessionFilter, academy_rollup, average_rate_by_academy, monthly_rollup, rate_distribution, rate_histogram, totals,
};
use crate::core::sessions::SessionLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::date::today;
use crate::utils::formatting::{bar, hours, money, thousands};
use crate::utils::table::{Column, Table};

const BAR_WIDTH: usize = 30;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Analytics { months, bins } = cmd else {
        return Ok(());
    };

    let months = months.unwrap_or(cfg.analytics_months);
    let bins = bins.unwrap_or(cfg.histogram_bins);

    let (pool, ctx) = open_account(cfg)?;
    let sessions = SessionLogic::list(&pool.conn, &ctx)?;
    let window = SessionFilter::since_months(today(), months).apply(&sessions);

    if window.is_empty() {
        info(format!("No sessions in the last {months} month(s)."));
        return Ok(());
    }

    let t = totals(window.iter().copied());
    header(format!("📈 Last {months} month(s)"), &cfg.separator_char);
    println!(
        "{} session(s) | {} | {}",
        t.sessions,
        hours(t.hours),
        money(t.amount, &cfg.currency)
    );

    // Monthly trend
    let monthly = monthly_rollup(window.iter().copied());
    let max_amount = monthly.iter().map(|m| m.amount).fold(0.0, f64::max);

    header("Earnings per month", &cfg.separator_char);
    let mut table = Table::new(vec![
        Column::left("Month"),
        Column::right("Sessions"),
        Column::right("Hours"),
        Column::right("Amount"),
        Column::left(""),
    ])
    .with_separator(&cfg.separator_char);
    for m in &monthly {
        table.add_row(vec![
            m.month.to_string(),
            m.sessions.to_string(),
            hours(m.hours),
            thousands(m.amount),
            bar(m.amount, max_amount, BAR_WIDTH),
        ]);
    }
    print!("{}", table.render());

    // Academy breakdown
    let academies = academy_rollup(window.iter().copied());
    header("Per academy", &cfg.separator_char);
    let mut table = Table::new(vec![
        Column::left("Academy"),
        Column::right("Sessions"),
        Column::right("Hours"),
        Column::right("Amount"),
        Column::right("Share"),
    ])
    .with_separator(&cfg.separator_char);
    for a in &academies {
        let share = if t.amount > 0.0 {
            a.amount / t.amount * 100.0
        } else {
            0.0
        };
        table.add_row(vec![
            a.academy.clone(),
            a.sessions.to_string(),
            hours(a.hours),
            thousands(a.amount),
            format!("{share:.1}%"),
        ]);
    }
    print!("{}", table.render());

    let averages = average_rate_by_academy(window.iter().copied());
    let max_rate = averages.iter().map(|(_, r)| *r).fold(0.0, f64::max);
    header("Average hourly rate by academy", &cfg.separator_char);
    let mut table = Table::new(vec![
        Column::left("Academy"),
        Column::right("Rate"),
        Column::left(""),
    ])
    .with_separator(&cfg.separator_char);
    for (academy, rate) in &averages {
        table.add_row(vec![
            academy.clone(),
            thousands(*rate),
            bar(*rate, max_rate, BAR_WIDTH),
        ]);
    }
    print!("{}", table.render());

    // Rate distribution
    let rates = rate_distribution(window.iter().copied());
    let buckets = rate_histogram(&rates, bins);
    let max_count = buckets.iter().map(|b| b.count).max().unwrap_or(0) as f64;

    header(
        format!("Rate distribution ({} bucket(s))", buckets.len()),
        &cfg.separator_char,
    );
    let mut table = Table::new(vec![
        Column::right("From"),
        Column::right("To"),
        Column::right("Count"),
        Column::left(""),
    ])
    .with_separator(&cfg.separator_char);
    for b in buckets.iter().filter(|b| b.count > 0) {
        table.add_row(vec![
            thousands(b.lower),
            thousands(b.upper),
            b.count.to_string(),
            bar(b.count as f64, max_count, BAR_WIDTH),
        ]);
    }
    print!("{}", table.render());

    Ok(())
}
