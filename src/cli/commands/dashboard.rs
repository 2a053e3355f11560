use crate::cli::commands::list::sessions_table;
use crate::cli::commands::open_account;
use crate::config::Config;
use crate::core::calculator::{academy_rollup, current_month_snapshot, month_snapshot, totals};
use crate::core::sessions::SessionLogic;
use crate::errors::AppResult;
use crate::models::rollup::MonthKey;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_delta};
use crate::utils::date::{month_name, today};
use crate::utils::formatting::{hours, money, thousands};
use crate::utils::table::{Column, Table};

const RECENT: usize = 5;
const TOP_ACADEMIES: usize = 5;

/// Current month snapshot, change against last month, top academies and the
/// latest sessions.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let (pool, ctx) = open_account(cfg)?;
    let sessions = SessionLogic::list(&pool.conn, &ctx)?;

    let today = today();
    let month = MonthKey::from_date(today);
    let snap = current_month_snapshot(&sessions, today);

    header(
        format!("📊 {} {} · {}", month_name(month.month), month.year, ctx.id()),
        &cfg.separator_char,
    );
    println!("Earnings  : {}", money(snap.amount, &cfg.currency));
    println!("Hours     : {}", hours(snap.hours));
    println!("Sessions  : {}", snap.sessions);
    println!("Academies : {}", snap.academies);

    if let Some(prev) = today
        .checked_sub_months(chrono::Months::new(1))
        .map(MonthKey::from_date)
    {
        let last = month_snapshot(&sessions, prev);
        let delta = snap.amount - last.amount;
        let sign = if delta > 0.0 { "+" } else { "" };
        println!(
            "vs {prev}   : {}{sign}{}{RESET} ({} last month)",
            color_for_delta(delta),
            thousands(delta),
            money(last.amount, &cfg.currency)
        );
    }

    if sessions.is_empty() {
        println!();
        info("No sessions yet. Add one with `tutorlog add <ACADEMY> <GROUP> --hours <H>`.");
        return Ok(());
    }

    let this_month: Vec<_> = sessions.iter().filter(|s| month.contains(s.date)).collect();
    let top = academy_rollup(this_month.iter().copied());
    if !top.is_empty() {
        header("Top academies this month", &cfg.separator_char);
        let mut table = Table::new(vec![
            Column::left("Academy"),
            Column::right("Sessions"),
            Column::right("Hours"),
            Column::right("Amount"),
        ])
        .with_separator(&cfg.separator_char);
        for r in top.iter().take(TOP_ACADEMIES) {
            table.add_row(vec![
                r.academy.clone(),
                r.sessions.to_string(),
                hours(r.hours),
                thousands(r.amount),
            ]);
        }
        print!("{}", table.render());
    }

    header("Recent sessions", &cfg.separator_char);
    let mut recent: Vec<_> = sessions.iter().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    recent.truncate(RECENT);
    print!("{}", sessions_table(&recent, cfg).render());

    let all = totals(&sessions);
    println!(
        "\nAll time: {} session(s) | {} | {}",
        all.sessions,
        hours(all.hours),
        money(all.amount, &cfg.currency)
    );

    Ok(())
}
