//! Plumbline CLI - estimate workbook parsing tool

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use plumbline::prelude::*;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plumb")]
#[command(
    author,
    version,
    about = "Parse construction estimate workbooks into reconciled budget JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a worksheet and output the budget JSON to stdout or a file
    Parse {
        /// Input workbook file (xlsx)
        input: PathBuf,

        /// Worksheet name to parse
        #[arg(short, long)]
        sheet: String,

        /// Output JSON file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// List all worksheets in a workbook
    Sheets {
        /// Input workbook file
        input: PathBuf,
    },

    /// Render division packs (the text blocks handed to downstream normalizers)
    Pack {
        /// Input workbook file
        input: PathBuf,

        /// Worksheet name to parse
        #[arg(short, long)]
        sheet: String,

        /// Only render this division code (default: all divisions)
        #[arg(short, long)]
        division: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            input,
            sheet,
            output,
            compact,
        } => parse(&input, &sheet, output.as_deref(), compact),
        Commands::Sheets { input } => list_sheets(&input),
        Commands::Pack {
            input,
            sheet,
            division,
        } => render_packs(&input, &sheet, division.as_deref()),
    }
}

fn read_workbook(input: &std::path::Path) -> Result<Vec<u8>> {
    fs::read(input).with_context(|| format!("Failed to read '{}'", input.display()))
}

fn parse(
    input: &std::path::Path,
    sheet: &str,
    output: Option<&std::path::Path>,
    compact: bool,
) -> Result<()> {
    let bytes = read_workbook(input)?;
    let result = parse_estimate(&bytes, sheet)
        .with_context(|| format!("Failed to parse sheet '{}'", sheet))?;

    let json = if compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };

    match output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            eprintln!(
                "Parsed {} divisions, ${:.2} total -> {}",
                result.divisions.len(),
                result.grand_total_from_items,
                path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn list_sheets(input: &std::path::Path) -> Result<()> {
    let bytes = read_workbook(input)?;
    for name in sheet_names(&bytes).context("Failed to read workbook")? {
        println!("{}", name);
    }
    Ok(())
}

fn render_packs(input: &std::path::Path, sheet: &str, division: Option<&str>) -> Result<()> {
    let bytes = read_workbook(input)?;
    let result = parse_estimate(&bytes, sheet)
        .with_context(|| format!("Failed to parse sheet '{}'", sheet))?;

    let mut rendered = false;
    for d in &result.divisions {
        if division.is_some_and(|code| code != d.division_code) {
            continue;
        }
        println!("{}\n", d.to_pack());
        rendered = true;
    }

    if let (Some(code), false) = (division, rendered) {
        anyhow::bail!("No division with code '{}' in sheet '{}'", code, sheet);
    }

    Ok(())
}
