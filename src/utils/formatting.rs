//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Left-align to a display width (CJK and emoji aware).
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{s}{}", " ".repeat(pad))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{s}", " ".repeat(pad))
}

/// `1234567.5` → `"1,234,567.50"`.
pub fn thousands(value: f64) -> String {
    let raw = format!("{:.2}", value.abs());
    let (int_part, frac) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && raw != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac}")
}

/// `(1500.0, "EGP")` → `"1,500.00 EGP"`.
pub fn money(value: f64, currency: &str) -> String {
    format!("{} {currency}", thousands(value))
}

/// Hours with at most two decimals, trailing zeros dropped: `2h`, `1.5h`.
pub fn hours(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    format!("{s}h")
}

/// Plain-text bar of `width` cells scaled to `max`.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0.0), "0.00");
        assert_eq!(thousands(999.0), "999.00");
        assert_eq!(thousands(1500.0), "1,500.00");
        assert_eq!(thousands(1234567.5), "1,234,567.50");
        assert_eq!(thousands(-2500.25), "-2,500.25");
    }

    #[test]
    fn hours_drops_trailing_zeros() {
        assert_eq!(hours(2.0), "2h");
        assert_eq!(hours(1.5), "1.5h");
        assert_eq!(hours(0.25), "0.25h");
    }

    #[test]
    fn bar_is_scaled() {
        assert_eq!(bar(50.0, 100.0, 10).chars().count(), 5);
        assert_eq!(bar(0.0, 100.0, 10), "");
        assert_eq!(bar(1.0, 1000.0, 10).chars().count(), 1);
    }
}
