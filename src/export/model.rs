// src/export/model.rs

use crate::models::session::Session;
use serde::Serialize;

/// Flat row shape shared by every export format.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SessionExport {
    pub id: i64,
    pub date: String,
    pub academy: String,
    pub group: String,
    pub hours: f64,
    pub rate: f64,
    pub amount: f64,
    pub notes: String,
}

impl From<&Session> for SessionExport {
    fn from(s: &Session) -> Self {
        Self {
            id: s.id,
            date: s.date_str(),
            academy: s.academy.clone(),
            group: s.group.clone(),
            hours: s.hours,
            rate: s.rate,
            amount: s.amount,
            notes: s.notes.clone(),
        }
    }
}

pub(crate) fn get_headers() -> [&'static str; 8] {
    [
        "id", "date", "academy", "group", "hours", "rate", "amount", "notes",
    ]
}
