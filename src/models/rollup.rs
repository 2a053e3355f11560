//! Aggregated views over a set of sessions.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Calendar month key (`YYYY-MM`), ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse `YYYY-MM`.
    pub fn parse(s: &str) -> Option<Self> {
        let (y, m) = s.trim().split_once('-')?;
        if y.len() != 4 || m.len() != 2 {
            return None;
        }
        Self::new(y.parse().ok()?, m.parse().ok()?)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        let first = self.first_day()?;
        first
            .checked_add_months(chrono::Months::new(1))
            .and_then(|d| d.pred_opt())
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub hours: f64,
    pub amount: f64,
    pub sessions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRollup {
    pub month: MonthKey,
    pub hours: f64,
    pub amount: f64,
    pub sessions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcademyRollup {
    pub academy: String,
    pub hours: f64,
    pub amount: f64,
    pub sessions: usize,
    pub average_rate: f64,
}

/// Dashboard figures for a single month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSnapshot {
    pub month: MonthKey,
    pub hours: f64,
    pub amount: f64,
    pub sessions: usize,
    pub academies: usize,
}

impl MonthSnapshot {
    pub fn empty(month: MonthKey) -> Self {
        Self {
            month,
            hours: 0.0,
            amount: 0.0,
            sessions: 0,
            academies: 0,
        }
    }
}

/// One histogram bucket: `[lower, upper)`, the last bucket is closed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateBucket {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}
