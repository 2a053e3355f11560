use crate::core::calculator::totals;
use crate::errors::AppResult;
use crate::export::{SessionExport, notify_export_success};
use crate::models::account::AccountContext;
use crate::models::rollup::Totals;
use crate::models::session::Session;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// JSON export body: the rows plus who they belong to and what they add up to.
#[derive(Serialize, Debug)]
pub struct ExportDocument<'a> {
    pub account: &'a str,
    pub currency: &'a str,
    pub exported_at: String,
    pub range: Option<&'a str>,
    pub totals: Totals,
    pub sessions: Vec<SessionExport>,
}

impl<'a> ExportDocument<'a> {
    pub fn new(
        ctx: &'a AccountContext,
        sessions: &[Session],
        currency: &'a str,
        range: Option<&'a str>,
    ) -> Self {
        Self {
            account: ctx.id(),
            currency,
            exported_at: chrono::Local::now().to_rfc3339(),
            range,
            totals: totals(sessions),
            sessions: sessions.iter().map(SessionExport::from).collect(),
        }
    }
}

pub(crate) fn write_json(doc: &ExportDocument<'_>, path: &Path) -> AppResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, doc)?;
    out.flush()?;

    notify_export_success("JSON", path);
    Ok(())
}

/// One row per session; the header comes from the `SessionExport` field names.
pub(crate) fn write_csv(rows: &[SessionExport], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
