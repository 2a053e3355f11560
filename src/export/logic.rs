// src/export/logic.rs

use crate::db::log::audit;
use crate::db::sessions::{load_sessions, load_sessions_between};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::document::{ExportDocument, write_csv, write_json};
use crate::export::model::SessionExport;
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::models::account::AccountContext;
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use rusqlite::Connection;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the account's sessions.
    ///
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `range`: `None`, `"all"` or `YYYY`, `YYYY-MM`, `YYYY-MM-DD`,
    ///   optionally as `start:end` of the same shape
    ///
    /// An existing file is replaced only when `overwrite` is set. Returns
    /// the number of exported rows; nothing is written when the selection
    /// is empty.
    pub fn export(
        conn: &Connection,
        ctx: &AccountContext,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        overwrite: bool,
        currency: &str,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let sessions = match range {
            None => load_sessions(conn, ctx)?,
            Some(r) if r.eq_ignore_ascii_case("all") => load_sessions(conn, ctx)?,
            Some(r) => {
                let (start, end) = parse_range(r)?;
                load_sessions_between(conn, ctx, start, end)?
            }
        };

        if sessions.is_empty() {
            warning("No sessions found for the selected range.");
            return Ok(0);
        }

        if path.exists() && !overwrite {
            return Err(AppError::Export(format!(
                "'{}' already exists (use --force to overwrite)",
                path.display()
            )));
        }

        info(format!(
            "Exporting {} session(s) to {}: {}",
            sessions.len(),
            format.as_str().to_uppercase(),
            path.display()
        ));

        let rows = || -> Vec<SessionExport> { sessions.iter().map(SessionExport::from).collect() };
        match format {
            ExportFormat::Csv => write_csv(&rows(), &path)?,
            ExportFormat::Json => {
                write_json(&ExportDocument::new(ctx, &sessions, currency, range), &path)?
            }
            ExportFormat::Xlsx => export_xlsx(&rows(), &path, currency)?,
        }

        audit(
            conn,
            ctx,
            "export",
            None,
            &format!(
                "{} session(s) to {} ({})",
                sessions.len(),
                path.display(),
                format.as_str()
            ),
        )?;

        Ok(sessions.len())
    }
}
