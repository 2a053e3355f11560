use crate::errors::AppResult;
use crate::models::account::AccountContext;
use crate::models::preferences::Preferences;
use rusqlite::{Connection, OptionalExtension, params};

/// Load stored preferences; `None` when the account never saved any.
pub fn load_preferences(conn: &Connection, ctx: &AccountContext) -> AppResult<Option<Preferences>> {
    let mut stmt = conn.prepare_cached(
        "SELECT academy_names, group_names, default_rate FROM preferences WHERE account_id = ?1",
    )?;

    let raw = stmt
        .query_row([ctx.id()], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, f64>(2)?,
            ))
        })
        .optional()?;

    let Some((academies, groups, default_rate)) = raw else {
        return Ok(None);
    };

    Ok(Some(Preferences {
        account_id: ctx.id().to_string(),
        academies: serde_json::from_str(&academies)?,
        groups: serde_json::from_str(&groups)?,
        default_rate,
    }))
}

/// Insert or replace the whole preferences row.
pub fn save_preferences(conn: &Connection, prefs: &Preferences) -> AppResult<()> {
    conn.execute(
        "INSERT INTO preferences (account_id, academy_names, group_names, default_rate)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(account_id) DO UPDATE SET
            academy_names = excluded.academy_names,
            group_names = excluded.group_names,
            default_rate = excluded.default_rate",
        params![
            prefs.account_id,
            serde_json::to_string(&prefs.academies)?,
            serde_json::to_string(&prefs.groups)?,
            prefs.default_rate,
        ],
    )?;
    Ok(())
}
