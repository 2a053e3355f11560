use crate::cli::commands::{open_account, prompt_line};
use crate::cli::parser::{AccountAction, Cli, Commands};
use crate::config::Config;
use crate::core::auth::AccountLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::sessions::count_sessions;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle `account signup|login|logout|whoami`.
///
/// Login and logout persist `current_account` to the config file, except in
/// test mode.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Account { action } = &cli.command else {
        return Ok(());
    };

    match action {
        AccountAction::Signup {
            email,
            password,
            confirm,
        } => {
            let password = match password {
                Some(p) => p.clone(),
                None => prompt_line("Password: ")?,
            };
            let confirm = match confirm {
                Some(c) => c.clone(),
                None => prompt_line("Confirm password: ")?,
            };

            let pool = DbPool::new(&cfg.database_path().to_string_lossy())?;
            let ctx = AccountLogic::sign_up(&pool.conn, email, &password, &confirm)?;

            success(format!("Account created: {}", ctx.id()));
            remember(cli, Some(ctx.id()))?;
        }

        AccountAction::Login { email, password } => {
            let password = match password {
                Some(p) => p.clone(),
                None => prompt_line("Password: ")?,
            };

            let pool = DbPool::new(&cfg.database_path().to_string_lossy())?;
            let ctx = AccountLogic::login(&pool.conn, email, &password)?;

            success(format!("Logged in as {}", ctx.id()));
            remember(cli, Some(ctx.id()))?;
        }

        AccountAction::Logout => {
            if let Some(current) = &cfg.current_account
                && let Ok(pool) = DbPool::new(&cfg.database_path().to_string_lossy())
            {
                ttlog(&pool.conn, "logout", current, "Logged out")?;
            }
            remember(cli, None)?;
            success("Logged out.");
        }

        AccountAction::Whoami => {
            if cfg.current_account.is_none() {
                info("Not logged in. Run `tutorlog account login --email <EMAIL>`.");
                return Ok(());
            }
            let (pool, ctx) = open_account(cfg)?;
            let n = count_sessions(&pool.conn, &ctx)?;
            println!("{} ({n} sessions)", ctx.id());
        }
    }

    Ok(())
}

/// Store (or clear) the current account in the config file.
fn remember(cli: &Cli, account: Option<&str>) -> AppResult<()> {
    if cli.test {
        return Ok(());
    }

    // reload so the --db override of this run is not persisted
    let mut on_disk = Config::load()?;
    on_disk.current_account = account.map(str::to_string);
    on_disk.save()
}
