use crate::db::log::audit;
use crate::db::sessions::{
    delete_all_sessions, delete_session, find_session, insert_session, load_sessions,
    update_session,
};
use crate::errors::{AppError, AppResult};
use crate::models::account::AccountContext;
use crate::models::session::{Session, SessionInput};
use rusqlite::Connection;

fn describe(input: &SessionInput) -> String {
    format!(
        "{} | {} | {} | {}h x {} = {}",
        input.date,
        input.academy,
        input.group,
        input.hours,
        input.rate,
        input.amount()
    )
}

/// Session repository: the only write path to the `sessions` table.
///
/// Validation happens before any SQL is issued, so a rejected record leaves
/// the table untouched. No versioning: the last write wins.
pub struct SessionLogic;

impl SessionLogic {
    pub fn create(conn: &Connection, ctx: &AccountContext, input: &SessionInput) -> AppResult<i64> {
        let input = input.clone().normalized();
        input.validate()?;

        let id = insert_session(conn, ctx, &input)?;

        audit(conn, ctx, "add", Some(id), &describe(&input))?;

        Ok(id)
    }

    pub fn list(conn: &Connection, ctx: &AccountContext) -> AppResult<Vec<Session>> {
        load_sessions(conn, ctx)
    }

    pub fn get(conn: &Connection, ctx: &AccountContext, id: i64) -> AppResult<Session> {
        find_session(conn, ctx, id)?.ok_or(AppError::NotFound(id))
    }

    /// Full replace of the mutable fields; `amount` is recomputed.
    pub fn update(
        conn: &Connection,
        ctx: &AccountContext,
        id: i64,
        input: &SessionInput,
    ) -> AppResult<()> {
        let input = input.clone().normalized();
        input.validate()?;

        if update_session(conn, ctx, id, &input)? == 0 {
            return Err(AppError::NotFound(id));
        }

        audit(conn, ctx, "edit", Some(id), &describe(&input))?;

        Ok(())
    }

    pub fn delete(conn: &Connection, ctx: &AccountContext, id: i64) -> AppResult<()> {
        if delete_session(conn, ctx, id)? == 0 {
            return Err(AppError::NotFound(id));
        }

        audit(conn, ctx, "del", Some(id), "Session deleted")?;
        Ok(())
    }

    pub fn delete_all(conn: &Connection, ctx: &AccountContext) -> AppResult<usize> {
        let n = delete_all_sessions(conn, ctx)?;
        audit(conn, ctx, "del", None, &format!("Deleted all sessions ({n})"))?;
        Ok(n)
    }
}
