use crate::db::log::audit;
use crate::db::preferences::{load_preferences, save_preferences};
use crate::db::sessions::load_sessions;
use crate::errors::{AppError, AppResult};
use crate::models::account::AccountContext;
use crate::models::preferences::Preferences;
use rusqlite::Connection;

/// Which preference list an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefList {
    Academies,
    Groups,
}

impl PrefList {
    fn label(&self) -> &'static str {
        match self {
            PrefList::Academies => "academy",
            PrefList::Groups => "group",
        }
    }
}

pub struct PreferenceLogic;

impl PreferenceLogic {
    /// Stored preferences, or the defaults (`[]`, `[]`, 200.0) when unset.
    pub fn get(conn: &Connection, ctx: &AccountContext) -> AppResult<Preferences> {
        Ok(load_preferences(conn, ctx)?.unwrap_or_else(|| Preferences::new(ctx.id())))
    }

    pub fn add_academy(conn: &Connection, ctx: &AccountContext, name: &str) -> AppResult<bool> {
        Self::add(conn, ctx, PrefList::Academies, name)
    }

    pub fn add_group(conn: &Connection, ctx: &AccountContext, name: &str) -> AppResult<bool> {
        Self::add(conn, ctx, PrefList::Groups, name)
    }

    pub fn remove_academy(conn: &Connection, ctx: &AccountContext, name: &str) -> AppResult<bool> {
        Self::remove(conn, ctx, PrefList::Academies, name)
    }

    pub fn remove_group(conn: &Connection, ctx: &AccountContext, name: &str) -> AppResult<bool> {
        Self::remove(conn, ctx, PrefList::Groups, name)
    }

    /// Add a name to a list. Returns `false` (and writes nothing) when it is already there.
    pub fn add(
        conn: &Connection,
        ctx: &AccountContext,
        list: PrefList,
        name: &str,
    ) -> AppResult<bool> {
        if name.trim().is_empty() {
            return Err(AppError::Validation(format!("{} name is required", list.label())));
        }

        let mut prefs = Self::get(conn, ctx)?;
        let added = match list {
            PrefList::Academies => prefs.add_academy(name),
            PrefList::Groups => prefs.add_group(name),
        };

        if added {
            save_preferences(conn, &prefs)?;
            audit(
                conn,
                ctx,
                "prefs",
                None,
                &format!("Added {} '{}'", list.label(), name.trim()),
            )?;
        }
        Ok(added)
    }

    pub fn remove(
        conn: &Connection,
        ctx: &AccountContext,
        list: PrefList,
        name: &str,
    ) -> AppResult<bool> {
        let mut prefs = Self::get(conn, ctx)?;
        let removed = match list {
            PrefList::Academies => prefs.remove_academy(name),
            PrefList::Groups => prefs.remove_group(name),
        };

        if removed {
            save_preferences(conn, &prefs)?;
            audit(
                conn,
                ctx,
                "prefs",
                None,
                &format!("Removed {} '{}'", list.label(), name.trim()),
            )?;
        }
        Ok(removed)
    }

    pub fn set_default_rate(conn: &Connection, ctx: &AccountContext, rate: f64) -> AppResult<()> {
        if !rate.is_finite() || rate < 0.0 {
            return Err(AppError::Validation(format!(
                "default rate must be zero or positive (got {rate})"
            )));
        }

        let mut prefs = Self::get(conn, ctx)?;
        prefs.default_rate = rate;
        save_preferences(conn, &prefs)?;

        audit(conn, ctx, "prefs", None, &format!("Default rate set to {rate}"))?;
        Ok(())
    }

    /// Union every academy/group used by the account's sessions into the lists.
    /// Returns `(academies_added, groups_added)`.
    pub fn import_from_sessions(conn: &Connection, ctx: &AccountContext) -> AppResult<(usize, usize)> {
        let sessions = load_sessions(conn, ctx)?;
        let mut prefs = Self::get(conn, ctx)?;

        let (academies, groups) = prefs.merge_from_sessions(&sessions);

        if academies + groups > 0 {
            save_preferences(conn, &prefs)?;
            audit(
                conn,
                ctx,
                "prefs",
                None,
                &format!("Imported {academies} academies and {groups} groups from sessions"),
            )?;
        }

        Ok((academies, groups))
    }
}
