//! Bulk import: three generators feeding the same `SessionLogic::create` path.
//!
//! Generators are pure and return candidates plus the problems found while
//! parsing. [`ImportLogic::commit`] persists candidates one by one, so a
//! failure on one item never undoes the items stored before it.

pub mod batch;
pub mod text;
pub mod weekly;

pub use batch::{BatchEntry, BatchForm};
pub use text::parse_text;
pub use weekly::WeeklySchedule;

use crate::core::sessions::SessionLogic;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::models::account::AccountContext;
use crate::models::session::SessionInput;
use rusqlite::Connection;
use std::fmt;

/// How many errors are worth printing after an import.
pub const ERROR_PREVIEW: usize = 5;

/// A problem with a single input item. `index` is 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportError {
    pub label: &'static str, // "Line", "Entry" or "Session"
    pub index: usize,
    pub message: String,
}

impl ImportError {
    pub fn line(index: usize, message: impl Into<String>) -> Self {
        Self {
            label: "Line",
            index,
            message: message.into(),
        }
    }

    pub fn entry(index: usize, err: &AppError) -> Self {
        Self {
            label: "Entry",
            index,
            message: plain_message(err),
        }
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.label, self.index, self.message)
    }
}

/// A parsed record waiting to be stored, with the position it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub label: &'static str,
    pub index: usize,
    pub input: SessionInput,
}

/// Output of a generator.
#[derive(Debug, Clone, Default)]
pub struct Generated {
    pub sessions: Vec<Candidate>,
    pub errors: Vec<ImportError>,
}

impl Generated {
    /// Wrap already-valid inputs (weekly schedule) as numbered candidates.
    pub fn from_inputs(inputs: Vec<SessionInput>) -> Self {
        Self {
            sessions: inputs
                .into_iter()
                .enumerate()
                .map(|(i, input)| Candidate {
                    label: "Session",
                    index: i + 1,
                    input,
                })
                .collect(),
            errors: Vec::new(),
        }
    }
}

/// Result of a bulk import: how many records were stored and every problem met.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub imported: usize,
    pub ids: Vec<i64>,
    pub errors: Vec<ImportError>,
}

impl ImportReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// First `n` errors, for display. The full list stays in `errors`.
    pub fn preview(&self, n: usize) -> &[ImportError] {
        &self.errors[..self.errors.len().min(n)]
    }
}

pub struct ImportLogic;

impl ImportLogic {
    /// Store every candidate through the regular create path.
    ///
    /// Parse errors from the generator come first in the report; create
    /// failures are appended with the candidate's own position.
    pub fn commit(
        conn: &Connection,
        ctx: &AccountContext,
        source: &str,
        generated: Generated,
    ) -> AppResult<ImportReport> {
        let mut report = ImportReport {
            errors: generated.errors,
            ..ImportReport::default()
        };

        for c in generated.sessions {
            match SessionLogic::create(conn, ctx, &c.input) {
                Ok(id) => {
                    report.imported += 1;
                    report.ids.push(id);
                }
                Err(e @ AppError::Validation(_)) => report.errors.push(ImportError {
                    label: c.label,
                    index: c.index,
                    message: plain_message(&e),
                }),
                Err(e) => return Err(e),
            }
        }

        report.errors.sort_by_key(|e| e.index);

        audit(
            conn,
            ctx,
            "import",
            None,
            &format!(
                "{source}: imported {} session(s), {} error(s)",
                report.imported,
                report.errors.len()
            ),
        )?;

        Ok(report)
    }
}

fn plain_message(err: &AppError) -> String {
    match err {
        AppError::Validation(m) => m.clone(),
        AppError::Parse { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
