use crate::models::rollup::{MonthKey, MonthlyRollup};
use crate::models::session::Session;
use std::collections::BTreeMap;

/// Group by calendar month; chronological order (oldest first).
pub fn monthly_rollup<'a, I>(sessions: I) -> Vec<MonthlyRollup>
where
    I: IntoIterator<Item = &'a Session>,
{
    let mut by_month: BTreeMap<MonthKey, MonthlyRollup> = BTreeMap::new();

    for s in sessions {
        let month = s.month();
        let entry = by_month.entry(month).or_insert_with(|| MonthlyRollup {
            month,
            hours: 0.0,
            amount: 0.0,
            sessions: 0,
        });
        entry.hours += s.hours;
        entry.amount += s.amount;
        entry.sessions += 1;
    }

    by_month.into_values().collect()
}
