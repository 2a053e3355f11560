// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::models::rollup::MonthKey;
use chrono::NaiveDate;

/// Parse a `--range` expression into inclusive date bounds.
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    let (start, end) = match r.split_once(':') {
        Some((start_raw, end_raw)) => {
            let start = start_raw.trim();
            let end = end_raw.trim();

            if start.len() != end.len() {
                return Err(AppError::InvalidRange(format!(
                    "{r}: start and end must have the same format"
                )));
            }

            (bounds(start)?.0, bounds(end)?.1)
        }
        None => bounds(r)?,
    };

    if start > end {
        return Err(AppError::InvalidRange(format!("{r}: start is after end")));
    }

    Ok((start, end))
}

/// First and last day covered by a single year, month or day.
fn bounds(part: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidRange(part.to_string());

    match part.len() {
        // YYYY
        4 => {
            let y: i32 = part.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let m = MonthKey::parse(part).ok_or_else(invalid)?;
            Ok((
                m.first_day().ok_or_else(invalid)?,
                m.last_day().ok_or_else(invalid)?,
            ))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(part, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidRange(format!(
            "{part}: expected YYYY, YYYY-MM or YYYY-MM-DD"
        ))),
    }
}
