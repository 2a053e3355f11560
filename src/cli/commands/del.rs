use crate::cli::commands::{ask_confirmation, open_account};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sessions::SessionLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, all, yes } = cmd {
        let (pool, ctx) = open_account(cfg)?;

        if *all {
            if !*yes
                && !ask_confirmation(&format!(
                    "Delete ALL sessions of {}? This action is irreversible.",
                    ctx.id()
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let n = SessionLogic::delete_all(&pool.conn, &ctx)?;
            success(format!("{n} session(s) deleted."));
            return Ok(());
        }

        if let Some(id) = id {
            // fail on a missing id before prompting
            let s = SessionLogic::get(&pool.conn, &ctx, *id)?;

            if !*yes
                && !ask_confirmation(&format!(
                    "Delete session #{id} ({} | {} / {})? This action is irreversible.",
                    s.date, s.academy, s.group
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            SessionLogic::delete(&pool.conn, &ctx, *id)?;
            success(format!("Session #{id} has been deleted."));
        }
    }

    Ok(())
}
