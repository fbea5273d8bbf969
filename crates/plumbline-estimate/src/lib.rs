//! # plumbline-estimate
//!
//! Deterministic parser turning a contractor's line-item cost estimate (one
//! worksheet, loaded as a [`plumbline_core::SheetGrid`]) into a normalized,
//! reconciled budget tree.
//!
//! Estimate spreadsheets carry no fixed schema: column meaning is recovered by
//! fuzzy header matching, division headers and summary rows share physical
//! columns with line items, and the only ground truth is the sheet's own
//! arithmetic. The parser leans on that last fact: after grouping line items
//! under their divisions it asserts that the computed grand total agrees with
//! the sheet's declared project subtotal to within one cent, and refuses to
//! emit a result otherwise.
//!
//! ## Pipeline
//!
//! 1. [`ColumnMap::resolve`] scans the top of the sheet once and maps semantic
//!    fields to physical columns.
//! 2. A single top-down row scan drives [`classify_row`]; division headers
//!    open/close the [`DivisionAccumulator`] and candidate rows run through
//!    [`extract_line_item`].
//! 3. [`scan_totals`] independently scans bottom-up for the declared summary
//!    figures.
//! 4. [`parse_sheet`] merges both passes, checks reconciliation, and assembles
//!    the final [`ParseResult`].
//!
//! ## Example
//!
//! ```rust
//! use plumbline_core::{CellValue, SheetGrid};
//! use plumbline_estimate::parse_sheet;
//!
//! let grid = SheetGrid::from_rows(
//!     "Estimate",
//!     vec![
//!         vec!["Division".into(), "Trade Description".into(), "Budget Total".into()],
//!         vec!["01".into(), "General Conditions".into()],
//!         vec![CellValue::Empty, "Supervision".into(), CellValue::Number(1500.0)],
//!         vec![CellValue::Empty, "Project Subtotal".into(), CellValue::Number(1500.0)],
//!     ],
//! );
//!
//! let result = parse_sheet(&grid).unwrap();
//! assert_eq!(result.divisions.len(), 1);
//! assert_eq!(result.grand_total_from_items, 1500.0);
//! ```

pub mod aggregate;
pub mod classify;
pub mod columns;
pub mod error;
pub mod extract;
pub mod meta;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod summary;

// Re-exports for convenience
pub use aggregate::DivisionAccumulator;
pub use classify::{classify_row, RowKind};
pub use columns::ColumnMap;
pub use error::{EstimateError, EstimateResult};
pub use extract::{extract_line_item, make_line_id};
pub use meta::extract_meta;
pub use model::{Division, EstimateMeta, LineItem, ParseResult};
pub use parser::{parse_sheet, RECONCILIATION_TOLERANCE};
pub use summary::{scan_totals, SheetTotals};
