//! End-to-end tests: build a real XLSX in memory, parse it, and check the
//! output contract (shape, values, idempotence, error paths).

use std::io::{Cursor, Write};

use plumbline::prelude::*;
use plumbline::EstimateError;
use pretty_assertions::assert_eq;
use zip::write::SimpleFileOptions;

/// Cell content for the workbook builder
#[derive(Clone)]
enum Cell {
    Blank,
    Num(f64),
    Str(&'static str),
}

fn col_letters(mut col: usize) -> String {
    let mut letters = String::new();
    loop {
        letters.insert(0, (b'A' + (col % 26) as u8) as char);
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    letters
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Assemble a single-sheet workbook from rows of cells, using inline strings
/// so no shared-strings part is needed.
fn build_workbook(sheet_name: &str, rows: &[Vec<Cell>]) -> Vec<u8> {
    let mut sheet_xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    for (row_idx, row) in rows.iter().enumerate() {
        sheet_xml.push_str(&format!("<row r=\"{}\">", row_idx + 1));
        for (col_idx, cell) in row.iter().enumerate() {
            let cell_ref = format!("{}{}", col_letters(col_idx), row_idx + 1);
            match cell {
                Cell::Blank => {}
                Cell::Num(n) => {
                    sheet_xml.push_str(&format!("<c r=\"{}\"><v>{}</v></c>", cell_ref, n))
                }
                Cell::Str(s) => sheet_xml.push_str(&format!(
                    "<c r=\"{}\" t=\"inlineStr\"><is><t>{}</t></is></c>",
                    cell_ref,
                    xml_escape(s)
                )),
            }
        }
        sheet_xml.push_str("</row>");
    }
    sheet_xml.push_str("</sheetData></worksheet>");

    let mut zw = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let opts = SimpleFileOptions::default();

    zw.start_file("[Content_Types].xml", opts).unwrap();
    zw.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#,
    )
    .unwrap();

    zw.start_file("xl/workbook.xml", opts).unwrap();
    zw.write_all(
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets><sheet name="{}" sheetId="1" r:id="rId1"/></sheets>
</workbook>"#,
            xml_escape(sheet_name)
        )
        .as_bytes(),
    )
    .unwrap();

    zw.start_file("xl/_rels/workbook.xml.rels", opts).unwrap();
    zw.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
</Relationships>"#,
    )
    .unwrap();

    zw.start_file("xl/worksheets/sheet1.xml", opts).unwrap();
    zw.write_all(sheet_xml.as_bytes()).unwrap();

    zw.finish().unwrap().into_inner()
}

/// A realistic shed-sized estimate: meta block, header row, two divisions,
/// summary block.
fn shed_estimate() -> Vec<u8> {
    use Cell::*;

    let rows: Vec<Vec<Cell>> = vec![
        // Meta block
        vec![Blank, Str("Client:"), Str("Acme Builders")],
        vec![Blank, Str("Project:"), Str("Backyard Shed")],
        vec![Blank, Str("Date:"), Num(45357.0)], // 2024-03-06
        vec![],
        // Header row
        vec![
            Str("Division"),
            Blank,
            Str("Trade Description"),
            Str("Qty"),
            Str("Unit"),
            Blank,
            Blank,
            Str("Material Subtotal"),
            Blank,
            Str("Labor Subtotal"),
            Blank,
            Str("Sub/Equip Subtotal"),
            Str("Budget Total"),
            Str("Scope Notes"),
            Str("Estimating Notes"),
        ],
        // Division 01
        vec![Str("1"), Blank, Str("General Conditions")],
        vec![
            Blank,
            Blank,
            Str("Supervision"),
            Num(40.0),
            Str("HR"),
            Blank,
            Blank,
            Blank,
            Blank,
            Num(2000.0),
        ],
        // Division 03
        vec![Str("3"), Blank, Str("Concrete")],
        vec![
            Blank,
            Blank,
            Str("Slab on grade"),
            Num(120.0),
            Str("SQ"),
            Blank,
            Blank,
            Num(1000.0),
            Blank,
            Num(500.0),
            Blank,
            Blank,
            Blank,
            Str("4\" slab w/ mesh"),
        ],
        // An all-zero placeholder row that must be discarded
        vec![Blank, Blank, Str("Future allowance"), Blank, Blank, Blank, Blank, Num(0.0)],
        // Summary block
        vec![],
        vec![Blank, Blank, Str("Project Subtotal"), Blank, Blank, Blank, Blank, Blank, Blank, Blank, Blank, Blank, Num(3500.0)],
        vec![Blank, Blank, Str("Overhead & Profit (10%)"), Blank, Blank, Blank, Blank, Blank, Blank, Blank, Blank, Blank, Num(350.0)],
        vec![Blank, Blank, Str("Job Total"), Blank, Blank, Blank, Blank, Blank, Blank, Blank, Blank, Blank, Num(3850.0)],
        vec![Blank, Blank, Str("Payment Terms: net 30")],
    ];

    build_workbook("Estimate - Shed", &rows)
}

#[test]
fn parses_full_workbook_to_contract() {
    let bytes = shed_estimate();
    let result = parse_estimate(&bytes, "Estimate - Shed").unwrap();

    assert_eq!(result.meta.client.as_deref(), Some("Acme Builders"));
    assert_eq!(result.meta.project.as_deref(), Some("Backyard Shed"));
    assert_eq!(result.meta.date.as_deref(), Some("2024-03-06"));

    assert_eq!(result.divisions.len(), 2);
    assert_eq!(result.divisions[0].division_code, "01");
    assert_eq!(result.divisions[0].division_total, 2000.0);
    assert_eq!(result.divisions[1].division_code, "03");
    assert_eq!(result.divisions[1].division_total, 1500.0);

    let slab = &result.divisions[1].items[0];
    assert_eq!(slab.unit.as_deref(), Some("SF")); // SQ normalizes
    assert_eq!(slab.total_cost, 1500.0); // summed from components
    assert_eq!(slab.scope_notes.as_deref(), Some("4\" slab w/ mesh"));

    // The placeholder row was discarded
    assert!(result
        .divisions
        .iter()
        .flat_map(|d| d.items.iter())
        .all(|i| i.trade_description != "Future allowance"));

    assert_eq!(result.project_subtotal, 3500.0);
    assert_eq!(result.overhead_and_profit, 350.0);
    assert_eq!(result.job_total, 3850.0);
    assert_eq!(result.grand_total_from_items, 3500.0);
}

#[test]
fn contract_json_shape() {
    let bytes = shed_estimate();
    let result = parse_estimate(&bytes, "Estimate - Shed").unwrap();
    let json = serde_json::to_value(&result).unwrap();

    for key in [
        "meta",
        "divisions",
        "projectSubtotal",
        "overheadAndProfit",
        "jobTotal",
        "grandTotalFromItems",
    ] {
        assert!(json.get(key).is_some(), "missing key {:?}", key);
    }

    let item = &json["divisions"][0]["items"][0];
    for key in [
        "lineId",
        "tradeDescription",
        "quantity",
        "unit",
        "materialCost",
        "laborCost",
        "subEquipCost",
        "totalCost",
        "scopeNotes",
        "estimatingNotes",
    ] {
        assert!(item.get(key).is_some(), "missing item key {:?}", key);
    }

    assert_eq!(item["lineId"], "01-supervision-6");
    assert_eq!(item["unit"], "HR");
    assert_eq!(item["estimatingNotes"], serde_json::Value::Null);
}

#[test]
fn parsing_twice_is_byte_identical() {
    let bytes = shed_estimate();
    let a = serde_json::to_string(&parse_estimate(&bytes, "Estimate - Shed").unwrap()).unwrap();
    let b = serde_json::to_string(&parse_estimate(&bytes, "Estimate - Shed").unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn lists_sheet_names() {
    let bytes = shed_estimate();
    assert_eq!(sheet_names(&bytes).unwrap(), vec!["Estimate - Shed".to_string()]);
}

#[test]
fn missing_sheet_is_a_workbook_error() {
    let bytes = shed_estimate();
    match parse_estimate(&bytes, "Budget") {
        Err(Error::Workbook(XlsxError::SheetNotFound(name))) => assert_eq!(name, "Budget"),
        other => panic!("expected SheetNotFound, got {:?}", other),
    }
}

#[test]
fn garbage_bytes_are_a_workbook_error() {
    assert!(matches!(
        parse_estimate(b"definitely not a workbook", "Sheet1"),
        Err(Error::Workbook(_))
    ));
}

#[test]
fn declared_subtotal_must_reconcile() {
    use Cell::*;
    let rows: Vec<Vec<Cell>> = vec![
        vec![Str("Division"), Str("Trade Description"), Str("Budget Total")],
        vec![Str("1"), Str("General Conditions")],
        vec![Blank, Str("Supervision"), Num(2000.0)],
        vec![Blank, Str("Project Subtotal"), Num(9999.0)],
    ];
    let bytes = build_workbook("Estimate", &rows);

    match parse_estimate(&bytes, "Estimate") {
        Err(Error::Estimate(EstimateError::ReconciliationMismatch {
            items_total,
            declared,
        })) => {
            assert_eq!(items_total, 2000.0);
            assert_eq!(declared, 9999.0);
        }
        other => panic!("expected ReconciliationMismatch, got {:?}", other),
    }
}

#[test]
fn missing_project_subtotal_is_an_estimate_error() {
    use Cell::*;
    let rows: Vec<Vec<Cell>> = vec![
        vec![Str("Division"), Str("Trade Description"), Str("Budget Total")],
        vec![Str("1"), Str("General Conditions")],
        vec![Blank, Str("Supervision"), Num(2000.0)],
    ];
    let bytes = build_workbook("Estimate", &rows);

    assert!(matches!(
        parse_estimate(&bytes, "Estimate"),
        Err(Error::Estimate(EstimateError::MissingSummaryRow(_)))
    ));
}
