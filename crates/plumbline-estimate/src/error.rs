//! Error types for plumbline-estimate

use thiserror::Error;

/// Result type alias using [`EstimateError`]
pub type EstimateResult<T> = std::result::Result<T, EstimateError>;

/// Fatal parse failures.
///
/// Row-level anomalies (unparseable currency, unrecognized units, unmapped
/// columns) never surface here; they resolve to documented defaults inside the
/// extractor. An error from this enum means no result was produced at all.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// A required summary marker row was never found in the sheet
    #[error("Could not find '{0}' row in sheet")]
    MissingSummaryRow(&'static str),

    /// Computed item totals disagree with the sheet's declared subtotal
    #[error(
        "Parsed items don't reconcile with project subtotal: {items_total:.2} vs {declared:.2}"
    )]
    ReconciliationMismatch {
        /// Sum of division totals computed from parsed items
        items_total: f64,
        /// Project subtotal declared by the sheet's summary row
        declared: f64,
    },
}
