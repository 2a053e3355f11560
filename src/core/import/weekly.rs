use crate::errors::{AppError, AppResult};
use crate::models::session::SessionInput;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// A recurring weekly class: same academy/group/hours/rate on a set of weekdays.
#[derive(Debug, Clone)]
pub struct WeeklySchedule {
    pub academy: String,
    pub group: String,
    pub hours: f64,
    pub rate: f64,
    pub notes: String,
    pub start: NaiveDate,
    pub weeks: u32,
    pub days: Vec<Weekday>,
}

impl WeeklySchedule {
    /// One session per (week, weekday) hit, ascending by date.
    ///
    /// Week `w` covers `start + 7w .. start + 7w + 6`; a day is emitted when
    /// its own weekday is selected, whatever weekday `start` falls on.
    pub fn generate(&self) -> AppResult<Vec<SessionInput>> {
        if self.academy.trim().is_empty() {
            return Err(AppError::Validation("academy is required".into()));
        }
        if self.group.trim().is_empty() {
            return Err(AppError::Validation("group is required".into()));
        }
        if self.days.is_empty() {
            return Err(AppError::Validation("select at least one weekday".into()));
        }
        if self.weeks == 0 {
            return Err(AppError::Validation("week count must be at least 1".into()));
        }

        let mut out = Vec::new();

        for week in 0..u64::from(self.weeks) {
            for day in 0..7u64 {
                let offset = week * 7 + day;
                let date = self
                    .start
                    .checked_add_days(Days::new(offset))
                    .ok_or_else(|| AppError::InvalidDate(format!("{} + {offset} days", self.start)))?;

                if self.days.contains(&date.weekday()) {
                    out.push(
                        SessionInput::new(
                            self.academy.trim(),
                            self.group.trim(),
                            date,
                            self.hours,
                            self.rate,
                        )
                        .with_notes(self.notes.trim()),
                    );
                }
            }
        }

        Ok(out)
    }
}
