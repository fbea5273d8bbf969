//! Currency, number, unit, and label normalizers.
//!
//! Every function here is total: bad input resolves to a default (`0.0`,
//! `None`, or an empty string), never an error. The zero-vs-absent distinction
//! matters for quantities (a blank cell means "no quantity recorded", not
//! "quantity of zero"), so quantities come back as `Option<f64>` while costs
//! default to `0.0`.

use plumbline_core::CellValue;

/// Canonical unit codes emitted by [`normalize_unit`]
pub const CANONICAL_UNITS: [&str; 8] = ["EA", "LF", "SF", "SY", "CY", "HR", "LS", "MO"];

/// Unit synonyms accepted on input
const UNIT_SYNONYMS: [(&str, &str); 15] = [
    ("EACH", "EA"),
    ("LINEAR", "LF"),
    ("LINEAL", "LF"),
    ("LIN", "LF"),
    ("SQUARE", "SF"),
    ("SQ", "SF"),
    ("SQFT", "SF"),
    ("CUBIC", "CY"),
    ("HOUR", "HR"),
    ("HOURS", "HR"),
    ("LUMP", "LS"),
    ("LUMPSUM", "LS"),
    ("LOT", "LS"),
    ("MONTH", "MO"),
    ("MONTHS", "MO"),
];

/// Round to 2 decimal places (money precision)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert a currency cell to a float, defaulting to `0.0`.
///
/// Numeric cells pass through; text cells are stripped of everything outside
/// `[0-9.\-]` (dollar signs, commas, stray spaces) and parsed. Blank cells,
/// booleans, and unparseable text all read as `0.0`.
pub fn parse_currency(cell: &CellValue) -> f64 {
    match cell {
        CellValue::Number(n) => *n,
        CellValue::Text(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            cleaned.parse::<f64>().unwrap_or(0.0)
        }
        _ => 0.0,
    }
}

/// Convert a quantity cell to a float, or `None` when blank/unparseable
pub fn parse_quantity(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Number(n) => Some(*n),
        CellValue::Text(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Normalize a raw unit label to one of [`CANONICAL_UNITS`].
///
/// Unrecognized labels normalize to `None` rather than passing through, so
/// downstream consumers never see an unknown unit token.
pub fn normalize_unit(raw: &str) -> Option<&'static str> {
    let upper = raw.trim().trim_end_matches('.').to_uppercase();
    if upper.is_empty() {
        return None;
    }

    if let Some(canonical) = CANONICAL_UNITS.iter().find(|u| **u == upper) {
        return Some(*canonical);
    }

    UNIT_SYNONYMS
        .iter()
        .find(|(raw_unit, _)| *raw_unit == upper)
        .map(|(_, canonical)| *canonical)
}

/// Convert free text to a lowercase hyphenated slug
pub fn slugify(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Normalize a header/marker label for fuzzy matching: lowercase, strip
/// punctuation, collapse whitespace
pub fn normalize_label(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency(&CellValue::Number(1250.5)), 1250.5);
        assert_eq!(parse_currency(&CellValue::text("$1,250.50")), 1250.5);
        assert_eq!(parse_currency(&CellValue::text("  $ 300 ")), 300.0);
        assert_eq!(parse_currency(&CellValue::text("-45.10")), -45.1);
        assert_eq!(parse_currency(&CellValue::text("$0.00")), 0.0);
        assert_eq!(parse_currency(&CellValue::text("TBD")), 0.0);
        assert_eq!(parse_currency(&CellValue::Empty), 0.0);
        assert_eq!(parse_currency(&CellValue::Boolean(true)), 0.0);
    }

    #[test]
    fn test_parse_quantity_keeps_zero_and_absent_distinct() {
        assert_eq!(parse_quantity(&CellValue::Number(0.0)), Some(0.0));
        assert_eq!(parse_quantity(&CellValue::text("0")), Some(0.0));
        assert_eq!(parse_quantity(&CellValue::text("12.5")), Some(12.5));
        assert_eq!(parse_quantity(&CellValue::Empty), None);
        assert_eq!(parse_quantity(&CellValue::text("n/a")), None);
        assert_eq!(parse_quantity(&CellValue::Boolean(true)), None);
    }

    #[test]
    fn test_normalize_unit_synonyms() {
        assert_eq!(normalize_unit("EA"), Some("EA"));
        assert_eq!(normalize_unit("each"), Some("EA"));
        assert_eq!(normalize_unit("Lineal"), Some("LF"));
        assert_eq!(normalize_unit("SQ"), Some("SF"));
        assert_eq!(normalize_unit("SqFt"), Some("SF"));
        assert_eq!(normalize_unit("lump"), Some("LS"));
        assert_eq!(normalize_unit("LOT"), Some("LS"));
        assert_eq!(normalize_unit("months"), Some("MO"));
        assert_eq!(normalize_unit("hrs."), None); // HRS is not in the table
        assert_eq!(normalize_unit("EA."), Some("EA"));
        assert_eq!(normalize_unit("BUNDLE"), None);
        assert_eq!(normalize_unit(""), None);
        assert_eq!(normalize_unit("   "), None);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Site Work & Grading"), "site-work-grading");
        assert_eq!(slugify("  Demo / Haul-off  "), "demo-hauloff");
        assert_eq!(slugify("4\" PVC"), "4-pvc");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("Trade  Description:"), "trade description");
        assert_eq!(normalize_label("Sub/Equip Subtotal"), "subequip subtotal");
        assert_eq!(normalize_label("Overhead & Profit (10%)"), "overhead profit 10");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.005), 1.0); // binary representation of 1.005 sits just below
        assert_eq!(round2(2.675000001), 2.68);
        assert_eq!(round2(-1.339), -1.34);
    }

    proptest! {
        #[test]
        fn currency_parse_is_total(s in ".*") {
            // Never panics, always finite for sane input
            let v = parse_currency(&CellValue::text(s));
            prop_assert!(v.is_finite() || v.is_infinite());
        }

        #[test]
        fn unit_closure(s in ".{0,12}") {
            if let Some(u) = normalize_unit(&s) {
                prop_assert!(CANONICAL_UNITS.contains(&u));
            }
        }

        #[test]
        fn slug_alphabet(s in ".*") {
            let slug = slugify(&s);
            prop_assert!(slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        }
    }
}
