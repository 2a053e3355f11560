use crate::errors::{AppError, AppResult};
use crate::models::rollup::MonthKey;
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Accepted session length at entry time.
pub const MIN_HOURS: f64 = 0.5;
pub const MAX_HOURS: f64 = 12.0;

/// One logged teaching engagement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub id: i64,
    pub account_id: String, // ⇔ sessions.account_id, never changes after insert
    pub academy: String,
    pub group: String,      // ⇔ sessions.group_name
    pub date: NaiveDate,    // ⇔ sessions.date (TEXT "YYYY-MM-DD")
    pub hours: f64,
    pub rate: f64,
    pub amount: f64,        // always hours * rate of the same row
    pub notes: String,
    pub created_at: String, // RFC 3339
}

impl Session {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    /// The editable part of the record, e.g. to merge CLI overrides before an update.
    pub fn to_input(&self) -> SessionInput {
        SessionInput {
            academy: self.academy.clone(),
            group: self.group.clone(),
            date: self.date,
            hours: self.hours,
            rate: self.rate,
            notes: self.notes.clone(),
        }
    }
}

/// The mutable fields of a session, as submitted by a form, an import or an edit.
///
/// There is no `amount` here: the repository derives it on every write.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionInput {
    pub academy: String,
    pub group: String,
    pub date: NaiveDate,
    pub hours: f64,
    pub rate: f64,
    pub notes: String,
}

impl SessionInput {
    pub fn new(
        academy: impl Into<String>,
        group: impl Into<String>,
        date: NaiveDate,
        hours: f64,
        rate: f64,
    ) -> Self {
        Self {
            academy: academy.into(),
            group: group.into(),
            date,
            hours,
            rate,
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn amount(&self) -> f64 {
        self.hours * self.rate
    }

    /// Trim the free-text fields in place.
    pub fn normalized(mut self) -> Self {
        self.academy = self.academy.trim().to_string();
        self.group = self.group.trim().to_string();
        self.notes = self.notes.trim().to_string();
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.academy.trim().is_empty() {
            return Err(AppError::Validation("academy is required".into()));
        }
        if self.group.trim().is_empty() {
            return Err(AppError::Validation("group is required".into()));
        }
        if !self.hours.is_finite() || self.hours <= 0.0 {
            return Err(AppError::Validation(format!(
                "hours must be a positive number (got {})",
                self.hours
            )));
        }
        if !self.rate.is_finite() || self.rate < 0.0 {
            return Err(AppError::Validation(format!(
                "rate must be zero or positive (got {})",
                self.rate
            )));
        }
        Ok(())
    }

    /// Range accepted when a session is entered (form, shorthand or flag).
    pub fn check_entry_hours(&self) -> AppResult<()> {
        if !(MIN_HOURS..=MAX_HOURS).contains(&self.hours) {
            return Err(AppError::Validation(format!(
                "hours must be between {MIN_HOURS} and {MAX_HOURS} (got {})",
                self.hours
            )));
        }
        Ok(())
    }

    pub fn into_session(self, id: i64, account_id: &str) -> Session {
        let amount = self.amount();
        Session {
            id,
            account_id: account_id.to_string(),
            academy: self.academy,
            group: self.group,
            date: self.date,
            hours: self.hours,
            rate: self.rate,
            amount,
            notes: self.notes,
            created_at: Local::now().to_rfc3339(),
        }
    }
}
