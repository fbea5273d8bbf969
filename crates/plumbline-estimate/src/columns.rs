//! Header resolution: mapping semantic fields to physical columns.
//!
//! Estimate sheets put the same information in different columns from one
//! estimator to the next, so columns are located by scanning the first few
//! rows for recognizable header labels instead of assuming positions. The
//! resulting [`ColumnMap`] is built once per sheet and passed around
//! immutably; nothing downstream hard-codes a column index except the
//! division-code fallback the classifier documents.

use plumbline_core::SheetGrid;

use crate::normalize::normalize_label;

/// How many leading rows are scanned for header labels
pub const HEADER_SCAN_ROWS: usize = 8;

/// Semantic fields a column can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Division,
    Description,
    Quantity,
    Unit,
    MaterialCost,
    LaborCost,
    SubEquipCost,
    TotalCost,
    ScopeNotes,
    EstimatingNotes,
}

/// Accepted label variants per field, in resolution order.
///
/// Variants are written in normalized form (see [`normalize_label`]) and
/// matched by containment. Order matters twice over: fields listed earlier
/// claim columns first, and the cost fields sit before `TotalCost` so that
/// "Material Subtotal" can never be mistaken for the grand total column.
const FIELD_VARIANTS: &[(Field, &[&str])] = &[
    (Field::Division, &["division", "div", "section"]),
    (
        Field::Description,
        &["trade description", "description", "item", "desc"],
    ),
    (Field::Quantity, &["qty", "quantity"]),
    (Field::Unit, &["unit", "units", "um", "uom"]),
    (
        Field::MaterialCost,
        &["material subtotal", "materials", "material"],
    ),
    (Field::LaborCost, &["labor subtotal", "labor"]),
    (
        Field::SubEquipCost,
        &[
            "subequip subtotal",
            "subcontractor",
            "equipment",
            "sequip",
            "sub equip",
        ],
    ),
    (Field::TotalCost, &["budget total", "total", "line total"]),
    (Field::ScopeNotes, &["scope notes", "scope"]),
    (
        Field::EstimatingNotes,
        &["estimating notes", "notes"],
    ),
];

/// Semantic field name → physical column index, resolved once per sheet.
///
/// Any field may be unmapped; extraction degrades to its documented default
/// (absent quantity, absent unit, zero cost, no notes) rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub division: Option<usize>,
    pub description: Option<usize>,
    pub quantity: Option<usize>,
    pub unit: Option<usize>,
    pub material_cost: Option<usize>,
    pub labor_cost: Option<usize>,
    pub sub_equip_cost: Option<usize>,
    pub total_cost: Option<usize>,
    pub scope_notes: Option<usize>,
    pub estimating_notes: Option<usize>,
}

impl ColumnMap {
    /// Scan the top of the sheet and resolve header labels to columns.
    ///
    /// First match wins per field, each physical column is claimed at most
    /// once, and fields never remap. Resolution cannot fail; a sheet with no
    /// recognizable headers yields an empty map.
    pub fn resolve(grid: &SheetGrid) -> ColumnMap {
        let mut map = ColumnMap::default();
        let scan_rows = HEADER_SCAN_ROWS.min(grid.row_count());

        for row in 0..scan_rows {
            for (field, variants) in FIELD_VARIANTS {
                if map.get(*field).is_some() {
                    continue;
                }

                for (col, cell) in grid.row(row).iter().enumerate() {
                    if map.is_claimed(col) {
                        continue;
                    }
                    let Some(text) = cell.as_text() else { continue };
                    let label = normalize_label(text);
                    if label.is_empty() {
                        continue;
                    }

                    if variants.iter().any(|v| label.contains(v)) {
                        log::debug!("mapped {:?} -> column {} (header {:?})", field, col, text);
                        map.set(*field, col);
                        break;
                    }
                }
            }
        }

        map
    }

    /// True if no field resolved to a column
    pub fn is_empty(&self) -> bool {
        *self == ColumnMap::default()
    }

    fn get(&self, field: Field) -> Option<usize> {
        match field {
            Field::Division => self.division,
            Field::Description => self.description,
            Field::Quantity => self.quantity,
            Field::Unit => self.unit,
            Field::MaterialCost => self.material_cost,
            Field::LaborCost => self.labor_cost,
            Field::SubEquipCost => self.sub_equip_cost,
            Field::TotalCost => self.total_cost,
            Field::ScopeNotes => self.scope_notes,
            Field::EstimatingNotes => self.estimating_notes,
        }
    }

    fn set(&mut self, field: Field, col: usize) {
        let slot = match field {
            Field::Division => &mut self.division,
            Field::Description => &mut self.description,
            Field::Quantity => &mut self.quantity,
            Field::Unit => &mut self.unit,
            Field::MaterialCost => &mut self.material_cost,
            Field::LaborCost => &mut self.labor_cost,
            Field::SubEquipCost => &mut self.sub_equip_cost,
            Field::TotalCost => &mut self.total_cost,
            Field::ScopeNotes => &mut self.scope_notes,
            Field::EstimatingNotes => &mut self.estimating_notes,
        };
        *slot = Some(col);
    }

    fn is_claimed(&self, col: usize) -> bool {
        FIELD_VARIANTS
            .iter()
            .any(|(field, _)| self.get(*field) == Some(col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plumbline_core::CellValue;
    use pretty_assertions::assert_eq;

    fn grid_of(rows: Vec<Vec<&str>>) -> SheetGrid {
        SheetGrid::from_rows(
            "Estimate",
            rows.into_iter()
                .map(|r| r.into_iter().map(CellValue::from).collect())
                .collect(),
        )
    }

    #[test]
    fn test_resolves_standard_headers() {
        let grid = grid_of(vec![
            vec![],
            vec![
                "Division",
                "",
                "Trade Description",
                "Qty",
                "Unit",
                "",
                "Material Subtotal",
                "Labor Subtotal",
                "Sub/Equip Subtotal",
                "Budget Total",
                "Scope Notes",
                "Estimating Notes",
            ],
        ]);

        let map = ColumnMap::resolve(&grid);
        assert_eq!(map.division, Some(0));
        assert_eq!(map.description, Some(2));
        assert_eq!(map.quantity, Some(3));
        assert_eq!(map.unit, Some(4));
        assert_eq!(map.material_cost, Some(6));
        assert_eq!(map.labor_cost, Some(7));
        assert_eq!(map.sub_equip_cost, Some(8));
        assert_eq!(map.total_cost, Some(9));
        assert_eq!(map.scope_notes, Some(10));
        assert_eq!(map.estimating_notes, Some(11));
    }

    #[test]
    fn test_material_subtotal_does_not_shadow_total() {
        // "Material Subtotal" contains the bare "total" variant; the material
        // field must claim it first so the real total column maps correctly.
        let grid = grid_of(vec![vec![
            "Description",
            "Material Subtotal",
            "Budget Total",
        ]]);

        let map = ColumnMap::resolve(&grid);
        assert_eq!(map.material_cost, Some(1));
        assert_eq!(map.total_cost, Some(2));
    }

    #[test]
    fn test_first_match_wins_never_remaps() {
        let grid = grid_of(vec![
            vec!["Qty"],
            vec!["Quantity"], // second label for the same field is ignored
        ]);

        let map = ColumnMap::resolve(&grid);
        assert_eq!(map.quantity, Some(0));
    }

    #[test]
    fn test_headerless_sheet_yields_empty_map() {
        let grid = grid_of(vec![vec!["Acme Builders", "Shed Project"]]);
        let map = ColumnMap::resolve(&grid);
        assert!(map.is_empty());
    }

    #[test]
    fn test_scan_window_is_bounded() {
        let mut rows: Vec<Vec<&str>> = (0..HEADER_SCAN_ROWS).map(|_| vec![""]).collect();
        rows.push(vec!["Division", "Description"]); // row 8, out of window
        let map = ColumnMap::resolve(&grid_of(rows));
        assert!(map.is_empty());
    }
}
