//! # plumbline
//!
//! Deterministic construction-estimate spreadsheet parser.
//!
//! Takes the bytes of a contractor's estimate workbook plus a worksheet name
//! and produces a normalized, reconciled budget tree: CSI-style divisions,
//! their line items with normalized costs/quantities/units, the sheet's own
//! declared summary figures, and a computed grand total that is guaranteed to
//! agree with the declared project subtotal to within one cent.
//!
//! ## Example
//!
//! ```rust,no_run
//! use plumbline::parse_estimate;
//!
//! let bytes = std::fs::read("estimate.xlsx").unwrap();
//! let result = parse_estimate(&bytes, "Estimate - Shed").unwrap();
//!
//! for division in &result.divisions {
//!     println!(
//!         "{} {}: ${:.2} ({} items)",
//!         division.division_code,
//!         division.division_name,
//!         division.division_total,
//!         division.items.len()
//!     );
//! }
//! ```
//!
//! The parse is pure and idempotent: the same bytes always produce identical
//! output, and separate parses share no state, so sheets can be processed
//! concurrently from separate threads without coordination.

pub mod prelude;

use thiserror::Error;

// Re-export core types
pub use plumbline_core::{CellValue, SheetGrid};

// Re-export the parser surface
pub use plumbline_estimate::{
    classify_row, extract_line_item, extract_meta, make_line_id, parse_sheet, scan_totals,
    ColumnMap, Division, DivisionAccumulator, EstimateError, EstimateMeta, LineItem, ParseResult,
    RowKind, SheetTotals, RECONCILIATION_TOLERANCE,
};

// Re-export I/O types
pub use plumbline_xlsx::{WorkbookReader, XlsxError};

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error for the byte-buffer entry points
#[derive(Debug, Error)]
pub enum Error {
    /// The workbook could not be decoded, or the worksheet does not exist
    #[error(transparent)]
    Workbook(#[from] XlsxError),

    /// The sheet decoded but could not be parsed into a reconciled estimate
    #[error(transparent)]
    Estimate(#[from] EstimateError),
}

/// Parse one named worksheet of an in-memory workbook into a reconciled
/// budget tree.
///
/// This is the whole pipeline in one call: decode the worksheet into a
/// [`SheetGrid`], then run [`parse_sheet`] over it.
///
/// # Errors
///
/// [`Error::Workbook`] when the bytes are not a workbook or the named sheet
/// does not exist; [`Error::Estimate`] when the sheet has no project-subtotal
/// row or its declared subtotal disagrees with the parsed items.
pub fn parse_estimate(bytes: &[u8], sheet_name: &str) -> Result<ParseResult> {
    let grid = WorkbookReader::read_sheet(bytes, sheet_name)?;
    Ok(parse_sheet(&grid)?)
}

/// List the worksheet names in an in-memory workbook, in workbook order
pub fn sheet_names(bytes: &[u8]) -> Result<Vec<String>> {
    Ok(WorkbookReader::sheet_names(bytes)?)
}
