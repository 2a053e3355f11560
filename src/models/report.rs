use crate::models::rollup::{MonthKey, Totals};
use crate::models::session::Session;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AcademyReport {
    pub academy: String,
    pub sessions: Vec<Session>, // date ascending
    pub hours: f64,
    pub amount: f64,
}

/// What is owed per academy for one month.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyReport {
    pub month: MonthKey,
    pub academies: Vec<AcademyReport>,
    pub totals: Totals,
}

impl MonthlyReport {
    pub fn is_empty(&self) -> bool {
        self.totals.sessions == 0
    }
}
