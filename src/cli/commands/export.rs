use crate::cli::commands::{ask_confirmation, open_account};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let mut overwrite = *force;
        let target = expand_tilde(file);
        if !overwrite && target.is_absolute() && target.exists() {
            if !ask_confirmation(&format!(
                "The file '{}' already exists. Overwrite it?",
                target.display()
            )) {
                info("Export cancelled.");
                return Ok(());
            }
            overwrite = true;
        }

        let (pool, ctx) = open_account(cfg)?;
        ExportLogic::export(
            &pool.conn,
            &ctx,
            *format,
            file,
            range.as_deref(),
            overwrite,
            &cfg.currency,
        )?;
    }
    Ok(())
}
