use crate::models::rollup::AcademyRollup;
use crate::models::session::Session;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Group by academy, largest amount first (ties: name ascending).
/// `average_rate` is the plain mean of the session rates.
pub fn academy_rollup<'a, I>(sessions: I) -> Vec<AcademyRollup>
where
    I: IntoIterator<Item = &'a Session>,
{
    let mut by_academy: HashMap<&str, (AcademyRollup, f64)> = HashMap::new();

    for s in sessions {
        let (entry, rate_sum) = by_academy.entry(s.academy.as_str()).or_insert_with(|| {
            (
                AcademyRollup {
                    academy: s.academy.clone(),
                    hours: 0.0,
                    amount: 0.0,
                    sessions: 0,
                    average_rate: 0.0,
                },
                0.0,
            )
        });
        entry.hours += s.hours;
        entry.amount += s.amount;
        entry.sessions += 1;
        *rate_sum += s.rate;
    }

    let mut out: Vec<AcademyRollup> = by_academy
        .into_values()
        .map(|(mut r, rate_sum)| {
            r.average_rate = rate_sum / r.sessions as f64;
            r
        })
        .collect();

    out.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.academy.cmp(&b.academy))
    });

    out
}

/// Average rate per academy, highest first.
pub fn average_rate_by_academy<'a, I>(sessions: I) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = &'a Session>,
{
    let mut out: Vec<(String, f64)> = academy_rollup(sessions)
        .into_iter()
        .map(|r| (r.academy, r.average_rate))
        .collect();

    out.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    out
}
