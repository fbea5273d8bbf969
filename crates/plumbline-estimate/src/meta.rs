//! Client/project/date extraction from the sheet's header block.

use chrono::NaiveDate;

use plumbline_core::{CellValue, SheetGrid};

use crate::model::EstimateMeta;
use crate::normalize::normalize_label;

/// How many leading rows are scanned for meta labels
const META_SCAN_ROWS: usize = 10;

/// Excel's serial-date range: 1900-01-01 through 9999-12-31
const SERIAL_DATE_MIN: f64 = 1.0;
const SERIAL_DATE_MAX: f64 = 2_958_465.0;

/// Scan the top of the sheet for "client" / "project" / "date" labels and
/// take the first non-empty cell to the right of each as its value.
///
/// First match wins per field; fields with no label found stay `None`.
/// A numeric date cell is rendered as an ISO date via the Excel serial
/// epoch.
pub fn extract_meta(grid: &SheetGrid) -> EstimateMeta {
    let mut meta = EstimateMeta::default();
    let scan_rows = META_SCAN_ROWS.min(grid.row_count());

    for row in 0..scan_rows {
        let cells = grid.row(row);
        for (col, cell) in cells.iter().enumerate() {
            let Some(text) = cell.as_text() else { continue };
            let label = normalize_label(text);

            // Summary labels ("Project Subtotal") share keywords with meta
            // labels and must not capture their row's amount
            if label.contains("total") {
                continue;
            }

            if meta.client.is_none() && label.contains("client") {
                meta.client = value_right_of(cells, col);
            }
            if meta.project.is_none() && label.contains("project") {
                meta.project = value_right_of(cells, col);
            }
            if meta.date.is_none() && label.contains("date") {
                meta.date = value_right_of(cells, col);
            }
        }
    }

    meta
}

/// First non-empty cell to the right of `col`, rendered as trimmed text
fn value_right_of(cells: &[CellValue], col: usize) -> Option<String> {
    cells.iter().skip(col + 1).find_map(render_value)
}

fn render_value(cell: &CellValue) -> Option<String> {
    if let CellValue::Number(n) = cell {
        if let Some(iso) = serial_to_iso_date(*n) {
            return Some(iso);
        }
    }

    let text = cell.to_display_string();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Render an Excel serial date number as `YYYY-MM-DD`.
///
/// Excel serials count days from an epoch of 1899-12-30 (the off-by-two
/// accounts for the fictitious 1900-02-29). Values outside the serial range
/// are not dates and pass through as plain numbers.
fn serial_to_iso_date(serial: f64) -> Option<String> {
    if !(SERIAL_DATE_MIN..=SERIAL_DATE_MAX).contains(&serial) {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let date = epoch.checked_add_signed(chrono::Duration::days(serial.trunc() as i64))?;
    Some(date.format("%Y-%m-%d").to_string())
}
