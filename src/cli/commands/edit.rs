use crate::cli::commands::open_account;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sessions::SessionLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::formatting::money;

/// Replace a session with its current values overlaid by the given flags.
/// The amount is recomputed from the resulting hours and rate.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        academy,
        group,
        date: date_arg,
        hours,
        rate,
        notes,
    } = cmd
    {
        let (pool, ctx) = open_account(cfg)?;

        let current = SessionLogic::get(&pool.conn, &ctx, *id)?;
        let mut input = current.to_input();

        if let Some(a) = academy {
            input.academy = a.clone();
        }
        if let Some(g) = group {
            input.group = g.clone();
        }
        if let Some(s) = date_arg {
            input.date = date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?;
        }
        if let Some(h) = hours {
            input.hours = *h;
        }
        if let Some(r) = rate {
            input.rate = *r;
        }
        if let Some(n) = notes {
            input.notes = n.clone();
        }

        if input == current.to_input() {
            info(format!("Session #{id}: nothing to change."));
            return Ok(());
        }

        SessionLogic::update(&pool.conn, &ctx, *id, &input)?;

        success(format!(
            "Session #{id} updated: {} → {}",
            money(current.amount, &cfg.currency),
            money(input.amount(), &cfg.currency)
        ));
    }

    Ok(())
}
