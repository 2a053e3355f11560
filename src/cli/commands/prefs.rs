use crate::cli::commands::open_account;
use crate::cli::parser::{Commands, PrefsAction};
use crate::config::Config;
use crate::core::preferences::PreferenceLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, success, warning};
use crate::utils::formatting::money;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Prefs { action } = cmd else {
        return Ok(());
    };

    let (pool, ctx) = open_account(cfg)?;
    let conn = &pool.conn;

    match action {
        PrefsAction::Show => {
            let prefs = PreferenceLogic::get(conn, &ctx)?;
            header(format!("⚙️  Preferences · {}", ctx.id()), &cfg.separator_char);
            println!("Default rate : {}", money(prefs.default_rate, &cfg.currency));
            println!("Academies    : {}", list_or_dash(&prefs.academies));
            println!("Groups       : {}", list_or_dash(&prefs.groups));
        }
        PrefsAction::AddAcademy { name } => {
            if PreferenceLogic::add_academy(conn, &ctx, name)? {
                success(format!("Academy '{}' added.", name.trim()));
            } else {
                warning(format!("Academy '{}' is already saved.", name.trim()));
            }
        }
        PrefsAction::RemoveAcademy { name } => {
            if PreferenceLogic::remove_academy(conn, &ctx, name)? {
                success(format!("Academy '{}' removed.", name.trim()));
            } else {
                warning(format!("Academy '{}' was not saved.", name.trim()));
            }
        }
        PrefsAction::AddGroup { name } => {
            if PreferenceLogic::add_group(conn, &ctx, name)? {
                success(format!("Group '{}' added.", name.trim()));
            } else {
                warning(format!("Group '{}' is already saved.", name.trim()));
            }
        }
        PrefsAction::RemoveGroup { name } => {
            if PreferenceLogic::remove_group(conn, &ctx, name)? {
                success(format!("Group '{}' removed.", name.trim()));
            } else {
                warning(format!("Group '{}' was not saved.", name.trim()));
            }
        }
        PrefsAction::SetRate { rate } => {
            PreferenceLogic::set_default_rate(conn, &ctx, *rate)?;
            success(format!("Default rate set to {}.", money(*rate, &cfg.currency)));
        }
        PrefsAction::Sync => {
            let (academies, groups) = PreferenceLogic::import_from_sessions(conn, &ctx)?;
            success(format!(
                "Synced from sessions: {academies} academy(ies), {groups} group(s) added."
            ));
        }
    }

    Ok(())
}

fn list_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
