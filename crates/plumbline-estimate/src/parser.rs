//! Top-level parse: row scan, summary scan, assembly, reconciliation.

use plumbline_core::SheetGrid;

use crate::aggregate::DivisionAccumulator;
use crate::classify::{classify_row, RowKind};
use crate::columns::ColumnMap;
use crate::error::{EstimateError, EstimateResult};
use crate::extract::extract_line_item;
use crate::meta::extract_meta;
use crate::model::ParseResult;
use crate::normalize::round2;
use crate::summary::scan_totals;

/// Maximum allowed disagreement between computed and declared totals (1 cent)
pub const RECONCILIATION_TOLERANCE: f64 = 0.01;

/// Parse one worksheet grid into a reconciled budget tree.
///
/// The parse is a pure, single-threaded computation: one top-down row scan
/// builds divisions, one independent bottom-up scan finds the declared
/// summary figures, and assembly refuses to emit a result whose division
/// totals disagree with the declared project subtotal by more than
/// [`RECONCILIATION_TOLERANCE`]. Parsing the same grid twice yields
/// identical output.
///
/// # Errors
///
/// - [`EstimateError::MissingSummaryRow`] when no "Project Subtotal" row
///   exists (the reconciliation invariant would be unverifiable).
/// - [`EstimateError::ReconciliationMismatch`] when the sheet's declared
///   subtotal and the computed item totals disagree. This is the primary
///   correctness guard against classifier and extractor bugs; it is never
///   downgraded to a warning.
pub fn parse_sheet(grid: &SheetGrid) -> EstimateResult<ParseResult> {
    let columns = ColumnMap::resolve(grid);
    if columns.is_empty() {
        log::warn!(
            "sheet '{}': no header labels recognized, extraction will degrade",
            grid.name()
        );
    }

    let meta = extract_meta(grid);

    let mut accumulator = DivisionAccumulator::new();
    for row in 0..grid.row_count() {
        match classify_row(grid, row, &columns) {
            RowKind::DivisionHeader { code, name } => accumulator.open_division(code, name),
            RowKind::SummaryMarker => {}
            RowKind::Candidate => {
                let Some(code) = accumulator.current_code().map(str::to_owned) else {
                    continue;
                };
                if let Some(item) = extract_line_item(grid, row, &columns, &code) {
                    accumulator.add_item(item);
                }
            }
        }
    }
    let divisions = accumulator.finish();

    let totals = scan_totals(grid, &columns);
    let project_subtotal = totals
        .project_subtotal
        .ok_or(EstimateError::MissingSummaryRow("Project Subtotal"))?;

    let grand_total_from_items = round2(divisions.iter().map(|d| d.division_total).sum());
    // Compare in whole cents: a raw f64 comparison would reject an exact
    // one-cent disagreement (100.0 - 99.99 is a hair over 0.01 in binary)
    let disagreement_cents = ((project_subtotal - grand_total_from_items) * 100.0)
        .round()
        .abs();
    if disagreement_cents > RECONCILIATION_TOLERANCE * 100.0 {
        return Err(EstimateError::ReconciliationMismatch {
            items_total: grand_total_from_items,
            declared: project_subtotal,
        });
    }

    log::debug!(
        "parse complete: {} divisions, {:.2} total",
        divisions.len(),
        grand_total_from_items
    );

    Ok(ParseResult {
        meta,
        divisions,
        project_subtotal: round2(project_subtotal),
        overhead_and_profit: round2(totals.overhead_and_profit.unwrap_or(0.0)),
        job_total: round2(totals.job_total.unwrap_or(0.0)),
        grand_total_from_items,
    })
}
