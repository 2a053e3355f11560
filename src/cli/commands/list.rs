use crate::cli::commands::open_account;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::{SessionFilter, totals};
use crate::core::sessions::SessionLogic;
use crate::errors::{AppError, AppResult};
use crate::export::range::parse_range;
use crate::models::rollup::MonthKey;
use crate::models::session::Session;
use crate::ui::messages::info;
use crate::utils::formatting::{bold, hours, money, thousands};
use crate::utils::table::{Column, Table};

const NOTES_WIDTH: usize = 30;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        academy,
        group,
        month,
        range,
    } = cmd
    {
        let mut filter = SessionFilter::all();
        if let Some(a) = academy {
            filter = filter.academy(a.trim());
        }
        if let Some(g) = group {
            filter = filter.group(g.trim());
        }
        if let Some(m) = month {
            let key = MonthKey::parse(m).ok_or_else(|| AppError::InvalidDate(m.clone()))?;
            filter = filter.month(key);
        }
        if let Some(r) = range {
            let (from, to) = parse_range(r)?;
            filter = filter.between(from, to);
        }

        let (pool, ctx) = open_account(cfg)?;
        let sessions = SessionLogic::list(&pool.conn, &ctx)?;
        let selected = filter.apply(&sessions);

        if selected.is_empty() {
            info("No sessions found.");
            return Ok(());
        }

        print!("{}", sessions_table(&selected, cfg).render());

        let t = totals(selected.iter().copied());
        println!(
            "\n{} session(s) | {} | {}",
            t.sessions,
            hours(t.hours),
            bold(&money(t.amount, &cfg.currency))
        );
    }
    Ok(())
}

pub(crate) fn sessions_table(sessions: &[&Session], cfg: &Config) -> Table {
    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("Date"),
        Column::left("Academy"),
        Column::left("Group"),
        Column::right("Hours"),
        Column::right("Rate"),
        Column::right("Amount"),
        Column::left("Notes").wrap(NOTES_WIDTH),
    ])
    .with_separator(&cfg.separator_char);

    for s in sessions {
        table.add_row(vec![
            s.id.to_string(),
            s.date_str(),
            s.academy.clone(),
            s.group.clone(),
            hours(s.hours),
            thousands(s.rate),
            thousands(s.amount),
            if s.notes.is_empty() { "-".to_string() } else { s.notes.clone() },
        ]);
    }

    table
}
