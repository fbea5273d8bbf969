//! Output contract types.
//!
//! The JSON shape these types serialize to is the one surface downstream
//! storage and prompt assembly depend on bit-exactly: camelCase keys, `null`
//! for absent optionals, 2-decimal-rounded floats for money and quantities.

use serde::{Deserialize, Serialize};

/// One purchasable/buildable cost row within a division
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Stable synthetic id: division code + truncated description slug + row index
    pub line_id: String,
    /// Trimmed description text; rows without one never become items
    pub trade_description: String,
    /// Absent when the source cell is blank or unparseable (distinct from zero)
    pub quantity: Option<f64>,
    /// Canonical unit code (EA, LF, SF, SY, CY, HR, LS, MO) or absent
    pub unit: Option<String>,
    pub material_cost: f64,
    pub labor_cost: f64,
    pub sub_equip_cost: f64,
    /// Explicit total when the sheet declares one (and it is positive), else
    /// the sum of the three components
    pub total_cost: f64,
    pub scope_notes: Option<String>,
    pub estimating_notes: Option<String>,
}

impl LineItem {
    /// Source row index recovered from the line id
    pub fn source_row(&self) -> Option<usize> {
        self.line_id.rsplit('-').next()?.parse().ok()
    }
}

/// One CSI-style cost division and its line items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    /// Two-character zero-padded numeric code, unique within a parse result
    pub division_code: String,
    /// Human label from the header row; may be empty
    pub division_name: String,
    /// Ordered as encountered in the sheet
    pub items: Vec<LineItem>,
    /// Sum of item totals, rounded to 2 decimals
    pub division_total: f64,
}

impl Division {
    /// Render the compact text block handed to the downstream text
    /// normalizer, one bullet per item:
    ///
    /// ```text
    /// DIVISION_CODE: 08
    /// DIVISION_NAME: Electrical
    /// ROWS:
    /// - [row=742] "Electrical Allowance" | qty=null | unit=null | material=0.00 | labor=0.00 | subequip=0.00 | total=25000.00 | scope=null | est=null
    /// ```
    ///
    /// An empty division renders as the empty string.
    pub fn to_pack(&self) -> String {
        if self.items.is_empty() {
            return String::new();
        }

        let mut lines = vec![
            format!("DIVISION_CODE: {}", self.division_code),
            format!("DIVISION_NAME: {}", self.division_name),
            "ROWS:".to_string(),
        ];

        for item in &self.items {
            let row = item
                .source_row()
                .map(|r| r.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            let qty = item
                .quantity
                .map(|q| q.to_string())
                .unwrap_or_else(|| "null".to_string());

            lines.push(format!(
                "- [row={}] {:?} | qty={} | unit={} | material={:.2} | labor={:.2} | subequip={:.2} | total={:.2} | scope={} | est={}",
                row,
                item.trade_description,
                qty,
                quoted_or_null(item.unit.as_deref()),
                item.material_cost,
                item.labor_cost,
                item.sub_equip_cost,
                item.total_cost,
                quoted_or_null(item.scope_notes.as_deref()),
                quoted_or_null(item.estimating_notes.as_deref()),
            ));
        }

        lines.join("\n")
    }
}

fn quoted_or_null(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("{:?}", v),
        None => "null".to_string(),
    }
}

/// Client/project/date header info; each field optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateMeta {
    pub client: Option<String>,
    pub project: Option<String>,
    pub date: Option<String>,
}

/// Top-level parse output.
///
/// A successfully assembled result guarantees
/// `|project_subtotal - grand_total_from_items| <= 0.01`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub meta: EstimateMeta,
    /// Divisions in order of first appearance in the sheet
    pub divisions: Vec<Division>,
    /// Declared by the sheet's summary rows
    pub project_subtotal: f64,
    pub overhead_and_profit: f64,
    pub job_total: f64,
    /// Computed: sum of division totals
    pub grand_total_from_items: f64,
}
