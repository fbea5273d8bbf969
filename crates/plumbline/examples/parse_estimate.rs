//! Example: Parse an estimate workbook and print the budget tree
//!
//! Usage: cargo run --example parse_estimate -- estimate.xlsx "Estimate - Shed"

use plumbline::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let (Some(path), Some(sheet)) = (args.next(), args.next()) else {
        eprintln!("usage: parse_estimate <file.xlsx> <sheet name>");
        std::process::exit(2);
    };

    let bytes = std::fs::read(&path).unwrap();
    let result = match parse_estimate(&bytes, &sheet) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("parse failed: {}", err);
            std::process::exit(1);
        }
    };

    if let Some(project) = &result.meta.project {
        println!("Project: {}", project);
    }
    for division in &result.divisions {
        println!(
            "{} {}: ${:.2} ({} items)",
            division.division_code,
            division.division_name,
            division.division_total,
            division.items.len()
        );
        for item in &division.items {
            println!("    {} ${:.2}", item.trade_description, item.total_cost);
        }
    }

    println!("Project subtotal:   ${:.2}", result.project_subtotal);
    println!("Overhead & profit:  ${:.2}", result.overhead_and_profit);
    println!("Job total:          ${:.2}", result.job_total);
}
