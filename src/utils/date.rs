use chrono::{NaiveDate, NaiveDateTime, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Strict `YYYY-MM-DD`, used for CLI arguments.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Date-only layouts accepted by the text importer, tried in order.
/// Slash dates are read month-first before day-first.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y%m%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%A %d %B %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Lenient calendar-date parsing for pasted text.
///
/// Accepts ISO dates, the common numeric layouts, month names
/// ("Nov 1 2024", "1 November 2024") and timestamps (time part dropped).
pub fn parse_flexible_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let cleaned = s.split_whitespace().collect::<Vec<_>>().join(" ");

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(&cleaned, fmt) {
            return Some(d);
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&cleaned, fmt) {
            return Some(dt.date());
        }
    }

    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Parse a weekday name or abbreviation ("mon", "Monday", "fri").
pub fn parse_weekday(s: &str) -> Option<Weekday> {
    s.trim().parse::<Weekday>().ok()
}

/// Parse a comma separated weekday list ("mon,fri"). Duplicates collapse.
pub fn parse_weekdays(s: &str) -> Result<Vec<Weekday>, String> {
    let mut out: Vec<Weekday> = Vec::new();

    for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let day = parse_weekday(part).ok_or_else(|| part.to_string())?;
        if !out.contains(&day) {
            out.push(day);
        }
    }

    Ok(out)
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flexible_dates_are_single_fields() {
        let nov1 = NaiveDate::from_ymd_opt(2024, 11, 1);
        assert_eq!(parse_flexible_date("Nov 1 2024"), nov1);
        assert_eq!(parse_flexible_date(" 1  November 2024 "), nov1);
        assert_eq!(parse_flexible_date("2024-11-01T09:30:00"), nov1);
        // a comma never reaches here from a split line
        assert_eq!(parse_flexible_date("Nov 1, 2024"), None);
    }
}
