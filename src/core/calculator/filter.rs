use crate::models::rollup::MonthKey;
use crate::models::session::Session;
use chrono::{Months, NaiveDate};

/// Narrow a session set before aggregating it. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct SessionFilter {
    pub academy: Option<String>,
    pub group: Option<String>,
    pub month: Option<MonthKey>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl SessionFilter {
    pub fn all() -> Self {
        Self::default()
    }

    /// Sessions dated on or after `today` minus `months` calendar months.
    pub fn since_months(today: NaiveDate, months: u32) -> Self {
        let cutoff = today
            .checked_sub_months(Months::new(months))
            .unwrap_or(NaiveDate::MIN);
        Self {
            from: Some(cutoff),
            ..Self::default()
        }
    }

    pub fn academy(mut self, academy: impl Into<String>) -> Self {
        self.academy = Some(academy.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn month(mut self, month: MonthKey) -> Self {
        self.month = Some(month);
        self
    }

    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    pub fn matches(&self, s: &Session) -> bool {
        if let Some(a) = &self.academy
            && &s.academy != a
        {
            return false;
        }
        if let Some(g) = &self.group
            && &s.group != g
        {
            return false;
        }
        if let Some(m) = &self.month
            && !m.contains(s.date)
        {
            return false;
        }
        if let Some(from) = self.from
            && s.date < from
        {
            return false;
        }
        if let Some(to) = self.to
            && s.date > to
        {
            return false;
        }
        true
    }

    pub fn apply<'a>(&self, sessions: &'a [Session]) -> Vec<&'a Session> {
        sessions.iter().filter(|s| self.matches(s)).collect()
    }
}
