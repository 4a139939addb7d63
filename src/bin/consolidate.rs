//! CLI entry point for `phys2log-consolidate`, the workbook preprocessor.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use phys2log::mapping::consolidate;

#[derive(Parser)]
#[command(
    name = "phys2log-consolidate",
    about = "Consolidate per-sheet CSV exports into a flat physical/logical mapping table"
)]
struct Cli {
    /// Directory of per-sheet CSV files (one file per workbook sheet)
    sheet_dir: PathBuf,

    /// Consolidated CSV output path
    #[arg(long, default_value = "consolidated.csv")]
    output: PathBuf,

    /// Print verbose diagnostics
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let consolidation = match consolidate::consolidate_sheets(&cli.sheet_dir) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error consolidating sheets: {e}");
            process::exit(2);
        }
    };

    for sheet in &consolidation.skipped_sheets {
        eprintln!("Skipped sheet '{sheet}': required columns missing");
    }
    if cli.verbose {
        eprintln!(
            "Consolidated {} rows from {}",
            consolidation.rows.len(),
            cli.sheet_dir.display()
        );
    }

    if let Err(e) = consolidate::write_consolidated(&consolidation.rows, &cli.output) {
        eprintln!("Error writing consolidated output: {e}");
        process::exit(2);
    }

    println!(
        "{} rows consolidated into {}",
        consolidation.rows.len(),
        cli.output.display()
    );
}
