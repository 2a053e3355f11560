// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::get_headers;
use crate::export::{SessionExport, notify_export_success};
use chrono::NaiveDate;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const COL_HOURS: u16 = 4;
const COL_AMOUNT: u16 = 6;

/// Export XLSX with banded rows, typed cells and auto column widths.
/// A totals row follows the data.
pub(crate) fn export_xlsx(rows: &[SessionExport], path: &Path, currency: &str) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Sessions").map_err(to_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, s) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let bg = if row_index % 2 == 0 { band1 } else { band2 };

        let cells: [Cell<'_>; 8] = [
            Cell::Number(s.id as f64, "0"),
            Cell::Date(&s.date),
            Cell::Text(&s.academy),
            Cell::Text(&s.group),
            Cell::Number(s.hours, "0.00"),
            Cell::Number(s.rate, "#,##0.00"),
            Cell::Number(s.amount, "#,##0.00"),
            Cell::Text(&s.notes),
        ];

        for (col, cell) in cells.iter().enumerate() {
            let shown = write_cell(worksheet, row, col as u16, cell, bg)?;
            col_widths[col] = col_widths[col].max(shown);
        }
    }

    // ---------------------------
    // Totals
    // ---------------------------
    let total_row = rows.len() as u32 + 1;
    let total_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_num_format("#,##0.00")
        .set_align(FormatAlign::Right);

    let hours: f64 = rows.iter().map(|r| r.hours).sum();
    let amount: f64 = rows.iter().map(|r| r.amount).sum();

    worksheet
        .write_with_format(total_row, 0, format!("Total ({currency})"), &Format::new().set_bold())
        .map_err(to_app_error)?;
    worksheet
        .write_with_format(total_row, COL_HOURS, hours, &total_format)
        .map_err(to_app_error)?;
    worksheet
        .write_with_format(total_row, COL_AMOUNT, amount, &total_format)
        .map_err(to_app_error)?;

    // ---------------------------
    // Column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

enum Cell<'a> {
    Text(&'a str),
    Number(f64, &'static str),
    Date(&'a str),
}

/// Write one cell and return its displayed width.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell<'_>,
    bg: Color,
) -> AppResult<usize> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match cell {
        Cell::Text(s) => {
            worksheet
                .write_with_format(row, col, *s, &base)
                .map_err(to_app_error)?;
            Ok(UnicodeWidthStr::width(*s))
        }
        Cell::Number(n, num_format) => {
            let fmt = base.set_num_format(*num_format).set_align(FormatAlign::Right);
            worksheet
                .write_with_format(row, col, *n, &fmt)
                .map_err(to_app_error)?;
            Ok(format!("{n:.2}").len())
        }
        Cell::Date(s) => match excel_serial(s) {
            Some(serial) => {
                let fmt = base.set_num_format("yyyy-mm-dd");
                worksheet
                    .write_with_format(row, col, serial, &fmt)
                    .map_err(to_app_error)?;
                Ok(10)
            }
            None => {
                worksheet
                    .write_with_format(row, col, *s, &base)
                    .map_err(to_app_error)?;
                Ok(UnicodeWidthStr::width(*s))
            }
        },
    }
}

/// Days since the Excel epoch (1899-12-30) for a `YYYY-MM-DD` string.
fn excel_serial(s: &str) -> Option<f64> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - epoch).num_days() as f64)
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::excel_serial;

    #[test]
    fn serial_matches_excel() {
        // 2024-11-01 is 45597 in Excel
        assert_eq!(excel_serial("2024-11-01"), Some(45597.0));
        assert_eq!(excel_serial("not a date"), None);
    }
}
