use crate::models::rollup::{MonthKey, MonthSnapshot};
use crate::models::session::Session;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Dashboard figures for the month containing `today`.
pub fn current_month_snapshot<'a, I>(sessions: I, today: NaiveDate) -> MonthSnapshot
where
    I: IntoIterator<Item = &'a Session>,
{
    month_snapshot(sessions, MonthKey::from_date(today))
}

pub fn month_snapshot<'a, I>(sessions: I, month: MonthKey) -> MonthSnapshot
where
    I: IntoIterator<Item = &'a Session>,
{
    let mut snap = MonthSnapshot::empty(month);
    let mut academies: HashSet<&str> = HashSet::new();

    for s in sessions.into_iter().filter(|s| month.contains(s.date)) {
        snap.hours += s.hours;
        snap.amount += s.amount;
        snap.sessions += 1;
        academies.insert(s.academy.as_str());
    }

    snap.academies = academies.len();
    snap
}
