//! Convenience re-exports for typical use.
//!
//! ```rust
//! use plumbline::prelude::*;
//! ```

pub use crate::{parse_estimate, sheet_names, Error, Result};
pub use plumbline_core::{CellValue, SheetGrid};
pub use plumbline_estimate::{
    parse_sheet, Division, EstimateError, EstimateMeta, LineItem, ParseResult,
};
pub use plumbline_xlsx::{WorkbookReader, XlsxError};
