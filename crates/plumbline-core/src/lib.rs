//! # plumbline-core
//!
//! Core data structures for the plumbline estimate parser.
//!
//! This crate provides the read-only sheet representation the parser operates on:
//! - [`CellValue`] - A single cell (blank, number, boolean, or text)
//! - [`SheetGrid`] - An immutable 2D grid of cells loaded from one worksheet
//!
//! ## Example
//!
//! ```rust
//! use plumbline_core::{CellValue, SheetGrid};
//!
//! let grid = SheetGrid::from_rows(
//!     "Estimate",
//!     vec![vec![
//!         CellValue::text("Trade Description"),
//!         CellValue::Number(1250.0),
//!     ]],
//! );
//!
//! assert_eq!(grid.cell(0, 1).as_number(), Some(1250.0));
//! assert!(grid.cell(99, 99).is_empty());
//! ```

pub mod cell;
pub mod grid;

// Re-exports for convenience
pub use cell::CellValue;
pub use grid::SheetGrid;
