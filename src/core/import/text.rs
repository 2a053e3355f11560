use crate::core::import::{Candidate, Generated, ImportError};
use crate::errors::{AppError, AppResult};
use crate::models::session::SessionInput;
use crate::utils::date::parse_flexible_date;

const MIN_FIELDS: usize = 5;

/// Parse pasted text, one session per line:
///
/// ```text
/// date, academy, group, hours, rate[, notes]
/// ```
///
/// Line numbers are 1-based over the raw input, so an error points at the
/// line the user sees in their editor. Blank lines before the first and
/// after the last record are padding and ignored; a blank line between
/// records is reported as not having enough fields. Extra fields past the
/// sixth are part of the notes (notes may contain commas).
pub fn parse_text(text: &str) -> Generated {
    let mut out = Generated::default();

    let lines: Vec<&str> = text.lines().collect();
    let Some(first) = lines.iter().position(|l| !l.trim().is_empty()) else {
        return out;
    };
    let last = lines.iter().rposition(|l| !l.trim().is_empty()).unwrap_or(first);

    for (idx, raw) in lines.iter().enumerate().take(last + 1).skip(first) {
        let line_no = idx + 1;
        let line = raw.trim();

        match parse_line(line_no, line) {
            Ok(input) => out.sessions.push(Candidate {
                label: "Line",
                index: line_no,
                input,
            }),
            Err(AppError::Parse { line, message }) => {
                out.errors.push(ImportError::line(line, message))
            }
            Err(other) => out.errors.push(ImportError::line(line_no, other.to_string())),
        }
    }

    out
}

fn parse_line(line_no: usize, line: &str) -> AppResult<SessionInput> {
    let fail = |message: String| AppError::Parse {
        line: line_no,
        message,
    };

    let fields: Vec<&str> = if line.is_empty() {
        Vec::new()
    } else {
        line.split(',').map(str::trim).collect()
    };
    if fields.len() < MIN_FIELDS {
        return Err(fail(format!(
            "Not enough fields (expected at least {MIN_FIELDS}, got {})",
            fields.len()
        )));
    }

    let date = parse_flexible_date(fields[0])
        .ok_or_else(|| fail(format!("invalid date '{}'", fields[0])))?;
    let hours = fields[3]
        .parse::<f64>()
        .map_err(|_| fail(format!("invalid hours '{}'", fields[3])))?;
    let rate = fields[4]
        .parse::<f64>()
        .map_err(|_| fail(format!("invalid rate '{}'", fields[4])))?;
    let notes = fields[MIN_FIELDS..].join(", ");

    let input = SessionInput::new(fields[1], fields[2], date, hours, rate).with_notes(notes.trim());

    input.validate().map_err(|e| match e {
        AppError::Validation(m) => fail(m),
        other => other,
    })?;

    Ok(input)
}
