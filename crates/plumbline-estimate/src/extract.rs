//! Line-item extraction from candidate rows.

use plumbline_core::{CellValue, SheetGrid};

use crate::columns::ColumnMap;
use crate::model::LineItem;
use crate::normalize::{normalize_unit, parse_currency, parse_quantity, round2, slugify};

/// Longest slug fragment kept in a line id
const LINE_ID_SLUG_LEN: usize = 24;

/// Build the stable synthetic line identifier.
///
/// The id is a pure function of (division code, description, row index), so a
/// re-parse of the same bytes regenerates identical ids and repeated
/// descriptions stay distinguishable through the row index.
pub fn make_line_id(division_code: &str, description: &str, row: usize) -> String {
    let mut slug = slugify(description);
    slug.truncate(LINE_ID_SLUG_LEN);
    let slug = slug.trim_end_matches('-');
    format!("{}-{}-{}", division_code, slug, row)
}

fn cell_at<'a>(grid: &'a SheetGrid, row: usize, col: Option<usize>) -> &'a CellValue {
    static EMPTY: CellValue = CellValue::Empty;
    match col {
        Some(col) => grid.cell(row, col),
        None => &EMPTY,
    }
}

fn text_at(grid: &SheetGrid, row: usize, col: Option<usize>) -> Option<String> {
    let text = cell_at(grid, row, col).to_display_string();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Extract a line item from a candidate row, or `None` when the row is noise.
///
/// A row becomes a line item only if it has a description and at least one of
/// the four cost fields is strictly positive; all-zero rows are discarded.
/// Negative cost cells clamp to zero so emitted items are always
/// non-negative. The explicit total-cost cell wins only when positive,
/// otherwise the three components are summed.
pub fn extract_line_item(
    grid: &SheetGrid,
    row: usize,
    columns: &ColumnMap,
    division_code: &str,
) -> Option<LineItem> {
    let description = text_at(grid, row, columns.description)?;

    let material_cost = parse_currency(cell_at(grid, row, columns.material_cost)).max(0.0);
    let labor_cost = parse_currency(cell_at(grid, row, columns.labor_cost)).max(0.0);
    let sub_equip_cost = parse_currency(cell_at(grid, row, columns.sub_equip_cost)).max(0.0);
    let explicit_total = parse_currency(cell_at(grid, row, columns.total_cost)).max(0.0);

    if material_cost == 0.0 && labor_cost == 0.0 && sub_equip_cost == 0.0 && explicit_total == 0.0
    {
        log::debug!("row {}: all-zero costs, discarding {:?}", row, description);
        return None;
    }

    let total_cost = if explicit_total > 0.0 {
        explicit_total
    } else {
        material_cost + labor_cost + sub_equip_cost
    };

    let unit_cell = text_at(grid, row, columns.unit);
    let unit = unit_cell.as_deref().and_then(normalize_unit);
    if let (Some(raw), None) = (unit_cell.as_deref(), unit) {
        log::warn!("row {}: unrecognized unit {:?}, dropping", row, raw);
    }

    Some(LineItem {
        line_id: make_line_id(division_code, &description, row),
        quantity: parse_quantity(cell_at(grid, row, columns.quantity)).map(round2),
        unit: unit.map(str::to_string),
        material_cost: round2(material_cost),
        labor_cost: round2(labor_cost),
        sub_equip_cost: round2(sub_equip_cost),
        total_cost: round2(total_cost),
        scope_notes: text_at(grid, row, columns.scope_notes),
        estimating_notes: text_at(grid, row, columns.estimating_notes),
        trade_description: description,
    })
}
