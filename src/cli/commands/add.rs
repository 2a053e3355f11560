use crate::cli::commands::open_account;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::preferences::PreferenceLogic;
use crate::core::sessions::SessionLogic;
use crate::errors::{AppError, AppResult};
use crate::models::session::SessionInput;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::{hours, money};

/// Log one session. The rate falls back to the account's default rate.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        academy,
        group,
        date: date_arg,
        hours: h,
        rate,
        notes,
    } = cmd
    {
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let (pool, ctx) = open_account(cfg)?;

        let rate = match rate {
            Some(r) => *r,
            None => PreferenceLogic::get(&pool.conn, &ctx)?.default_rate,
        };

        let input = SessionInput::new(academy.as_str(), group.as_str(), d, *h, rate)
            .with_notes(notes.clone().unwrap_or_default());

        let id = SessionLogic::create(&pool.conn, &ctx, &input)?;

        success(format!(
            "Session #{id} added: {} | {} / {} | {} x {} = {}",
            d,
            input.academy.trim(),
            input.group.trim(),
            hours(*h),
            rate,
            money(input.amount(), &cfg.currency)
        ));
    }

    Ok(())
}
