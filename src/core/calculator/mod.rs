//! Aggregation engine.
//!
//! Pure functions over a session set: no database, no clock. Callers pass
//! "today" in when a computation depends on it.

pub mod academy;
pub mod filter;
pub mod monthly;
pub mod rates;
pub mod snapshot;

pub use academy::{academy_rollup, average_rate_by_academy};
pub use filter::SessionFilter;
pub use monthly::monthly_rollup;
pub use rates::{DEFAULT_HISTOGRAM_BINS, rate_distribution, rate_histogram};
pub use snapshot::{current_month_snapshot, month_snapshot};

use crate::models::rollup::Totals;
use crate::models::session::Session;

/// Hours, amount and count over any session set.
pub fn totals<'a, I>(sessions: I) -> Totals
where
    I: IntoIterator<Item = &'a Session>,
{
    sessions.into_iter().fold(Totals::default(), |mut t, s| {
        t.hours += s.hours;
        t.amount += s.amount;
        t.sessions += 1;
        t
    })
}
