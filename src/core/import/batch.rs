use crate::core::import::{Candidate, Generated, ImportError};
use crate::errors::{AppError, AppResult};
use crate::models::session::SessionInput;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub academy: String,
    pub group: String,
    pub hours: f64,
    pub rate: f64,
}

impl BatchEntry {
    /// Parse the CLI shorthand `ACADEMY|GROUP|HOURS|RATE`.
    /// An omitted rate (`ACADEMY|GROUP|HOURS`) falls back to `default_rate`.
    pub fn parse(raw: &str, default_rate: f64) -> AppResult<Self> {
        let parts: Vec<&str> = raw.split('|').map(str::trim).collect();
        if !(3..=4).contains(&parts.len()) {
            return Err(AppError::InvalidBatchEntry(raw.to_string()));
        }

        let hours = parts[2]
            .parse::<f64>()
            .map_err(|_| AppError::InvalidBatchEntry(raw.to_string()))?;
        let rate = match parts.get(3) {
            Some(r) => r
                .parse::<f64>()
                .map_err(|_| AppError::InvalidBatchEntry(raw.to_string()))?,
            None => default_rate,
        };

        Ok(Self {
            academy: parts[0].to_string(),
            group: parts[1].to_string(),
            hours,
            rate,
        })
    }
}

/// Several sessions sharing one date.
#[derive(Debug, Clone)]
pub struct BatchForm {
    pub date: NaiveDate,
    pub entries: Vec<BatchEntry>,
}

impl BatchForm {
    /// Valid entries become sessions; invalid ones are reported as
    /// `Entry N: ...` errors (1-based), never silently dropped.
    pub fn generate(&self) -> AppResult<Generated> {
        if self.entries.is_empty() {
            return Err(AppError::Validation("add at least one session entry".into()));
        }

        let mut out = Generated::default();

        for (idx, e) in self.entries.iter().enumerate() {
            let input = SessionInput::new(
                e.academy.trim(),
                e.group.trim(),
                self.date,
                e.hours,
                e.rate,
            );

            match input.validate().and_then(|()| input.check_entry_hours()) {
                Ok(()) => out.sessions.push(Candidate {
                    label: "Entry",
                    index: idx + 1,
                    input,
                }),
                Err(err) => out.errors.push(ImportError::entry(idx + 1, &err)),
            }
        }

        Ok(out)
    }
}
