//! Bottom-up summary row scanner.
//!
//! Well-formed estimates close with a block of summary rows (project
//! subtotal, overhead & profit, job total). Scanning from the bottom finds
//! the occurrence closest to the end of the sheet without having to know
//! where line items stop, and runs independently of the main top-down scan.

use once_cell::sync::Lazy;
use regex::Regex;

use plumbline_core::{CellValue, SheetGrid};

use crate::columns::ColumnMap;
use crate::normalize::{normalize_label, parse_currency};

/// Text that plausibly denotes a currency amount ("$1,250.50", "300")
static CURRENCY_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\$?\s*-?[\d,]+(\.\d+)?\s*$").unwrap());

/// Declared totals found in the sheet's summary rows.
///
/// `None` means the marker row was never found, which the assembler treats
/// as fatal for the project subtotal and as a zero default for the others.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetTotals {
    pub project_subtotal: Option<f64>,
    pub overhead_and_profit: Option<f64>,
    pub job_total: Option<f64>,
}

/// Scan the sheet bottom-to-top for the three summary markers.
///
/// Per marker, the first matching row from the bottom wins. "Overhead" and
/// "profit" must both appear somewhere in the same row; the other two
/// markers are single substrings.
pub fn scan_totals(grid: &SheetGrid, columns: &ColumnMap) -> SheetTotals {
    let mut totals = SheetTotals::default();

    for row in (0..grid.row_count()).rev() {
        let labels: Vec<String> = grid
            .row(row)
            .iter()
            .filter_map(CellValue::as_text)
            .map(normalize_label)
            .collect();

        if totals.project_subtotal.is_none()
            && labels.iter().any(|l| l.contains("project subtotal"))
        {
            let value = row_value(grid, row, columns);
            log::debug!("found project subtotal at row {}: {:.2}", row, value);
            totals.project_subtotal = Some(value);
        }

        if totals.overhead_and_profit.is_none()
            && labels.iter().any(|l| l.contains("overhead"))
            && labels.iter().any(|l| l.contains("profit"))
        {
            let value = row_value(grid, row, columns);
            log::debug!("found overhead & profit at row {}: {:.2}", row, value);
            totals.overhead_and_profit = Some(value);
        }

        if totals.job_total.is_none() && labels.iter().any(|l| l.contains("job total")) {
            let value = row_value(grid, row, columns);
            log::debug!("found job total at row {}: {:.2}", row, value);
            totals.job_total = Some(value);
        }
    }

    totals
}

/// Extract the currency value carried by a summary row.
///
/// The mapped total column is authoritative when it holds a positive value;
/// otherwise the rightmost cell that reads as a positive currency is taken
/// (summary amounts always sit to the right of their label).
fn row_value(grid: &SheetGrid, row: usize, columns: &ColumnMap) -> f64 {
    if let Some(col) = columns.total_cost {
        let value = parse_currency(grid.cell(row, col));
        if value > 0.0 {
            return value;
        }
    }

    for cell in grid.row(row).iter().rev() {
        let value = match cell {
            CellValue::Number(n) => *n,
            CellValue::Text(s) if CURRENCY_TEXT.is_match(s) => parse_currency(cell),
            _ => continue,
        };
        if value > 0.0 {
            return value;
        }
    }

    0.0
}
