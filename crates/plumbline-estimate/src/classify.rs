//! Row classification: division header, summary marker, or line-item candidate.
//!
//! Division headers and summary rows occupy the same physical columns as line
//! items, so classification is content-driven. Rule order matters: a row can
//! textually resemble both a header and a skip pattern, and header detection
//! takes precedence because summary rows never begin with a bare division
//! numeral.

use once_cell::sync::Lazy;
use regex::Regex;

use plumbline_core::SheetGrid;

use crate::columns::ColumnMap;
use crate::normalize::normalize_label;

/// Bare one-or-two-digit division code ("1", "02")
static BARE_DIVISION_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,2}$").unwrap());

/// Inline division header in the description ("02 - Site Work")
static INLINE_DIVISION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d{2})\s*[-\u{2013}]\s*(\S.*)$").unwrap());

/// Summary/terms rows matched anywhere in the normalized description
static SKIP_CONTAINED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"subtotal|overhead|profit|job total|payment terms|accepted by|warranty|contingency")
        .unwrap()
});

/// Short generic tokens only skipped when they end the description, so
/// ordinary descriptions like "Coffee station" survive
static SKIP_END_ANCHORED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(terms|fee)$").unwrap());

/// Classification of a single data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// Opens a new division; `code` is zero-padded to two digits
    DivisionHeader { code: String, name: String },
    /// Summary/terms/noise row that must never become a line item
    SummaryMarker,
    /// Potential line item, to be handed to the extractor
    Candidate,
}

/// Classify one row of the sheet.
///
/// Detection rules, in priority order:
/// 1. A bare 1-2 digit numeral in the division column (column 0 when no
///    division column is mapped) opens a division; the name comes from the
///    description column of the same row.
/// 2. A description shaped like "NN - Name" opens a division.
/// 3. A description matching the skip table is a summary marker.
/// 4. Everything else is a line-item candidate.
pub fn classify_row(grid: &SheetGrid, row: usize, columns: &ColumnMap) -> RowKind {
    let division_col = columns.division.unwrap_or(0);
    let division_cell = grid.cell(row, division_col).to_display_string();
    let division_cell = division_cell.trim();

    let description = columns
        .description
        .map(|col| grid.cell(row, col).to_display_string())
        .unwrap_or_default();
    let description = description.trim();

    if BARE_DIVISION_CODE.is_match(division_cell) {
        return RowKind::DivisionHeader {
            code: zero_pad_code(division_cell),
            name: description.to_string(),
        };
    }

    if let Some(caps) = INLINE_DIVISION_HEADER.captures(description) {
        return RowKind::DivisionHeader {
            code: caps[1].to_string(),
            name: caps[2].trim().to_string(),
        };
    }

    let label = normalize_label(description);
    if !label.is_empty() && (SKIP_CONTAINED.is_match(&label) || SKIP_END_ANCHORED.is_match(&label))
    {
        return RowKind::SummaryMarker;
    }

    RowKind::Candidate
}

/// Left-pad a 1-digit code to the canonical 2-digit form
fn zero_pad_code(code: &str) -> String {
    format!("{:0>2}", code)
}
