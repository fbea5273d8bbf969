//! # plumbline-xlsx
//!
//! XLSX (Office Open XML) worksheet reader for plumbline.
//!
//! Reads one named worksheet out of an in-memory workbook into a
//! [`plumbline_core::SheetGrid`], and lists the worksheet names a workbook
//! contains so a caller can pick one. Writing is not supported; the estimate
//! parser only ever consumes spreadsheets.

pub mod error;
pub mod reader;

pub use error::{XlsxError, XlsxResult};
pub use reader::WorkbookReader;
