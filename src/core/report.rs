use crate::core::calculator::totals;
use crate::models::report::{AcademyReport, MonthlyReport};
use crate::models::rollup::MonthKey;
use crate::models::session::Session;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

/// Months that have at least one session, newest first.
pub fn available_months(sessions: &[Session]) -> Vec<MonthKey> {
    let set: BTreeSet<MonthKey> = sessions.iter().map(Session::month).collect();
    set.into_iter().rev().collect()
}

/// Per-academy breakdown for one month.
///
/// Academies are ordered by amount (largest first, ties by name); the
/// sessions inside each academy by date, then id.
pub fn build_monthly_report(sessions: &[Session], month: MonthKey) -> MonthlyReport {
    let in_month: Vec<&Session> = sessions.iter().filter(|s| month.contains(s.date)).collect();

    let mut by_academy: HashMap<&str, Vec<Session>> = HashMap::new();
    for s in &in_month {
        by_academy
            .entry(s.academy.as_str())
            .or_default()
            .push((*s).clone());
    }

    let mut academies: Vec<AcademyReport> = by_academy
        .into_iter()
        .map(|(name, mut list)| {
            list.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
            let t = totals(&list);
            AcademyReport {
                academy: name.to_string(),
                sessions: list,
                hours: t.hours,
                amount: t.amount,
            }
        })
        .collect();

    academies.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.academy.cmp(&b.academy))
    });

    MonthlyReport {
        month,
        academies,
        totals: totals(in_month),
    }
}
