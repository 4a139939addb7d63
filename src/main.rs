//! CLI entry point for `phys2log`.

use std::collections::HashSet;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use phys2log::mapping::loader;
use phys2log::output::{formatter, report};
use phys2log::rewrite::engine::{Direction, Rewriter};

#[derive(Parser)]
#[command(
    name = "phys2log",
    about = "Rewrite SQL text between physical database identifiers and logical business names"
)]
struct Cli {
    /// Input SQL files
    #[arg(required_unless_present = "sql_dir")]
    input: Vec<PathBuf>,

    /// Process all .sql files in directory
    #[arg(long)]
    sql_dir: Option<PathBuf>,

    /// Mapping CSV with the table and column name pairs
    #[arg(long)]
    mapping: PathBuf,

    /// Rewrite direction
    #[arg(long, default_value = "physical-to-logical")]
    direction: Direction,

    /// Output directory
    #[arg(long, default_value = "phys2log-output")]
    output_dir: PathBuf,

    /// Print verbose diagnostics
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Collect input files
    let mut sql_files = cli.input.clone();
    if let Some(dir) = &cli.sql_dir {
        match std::fs::read_dir(dir) {
            Ok(entries) => {
                let mut found: Vec<PathBuf> = entries
                    .flatten()
                    .map(|entry| entry.path())
                    .filter(|path| path.extension().is_some_and(|e| e == "sql"))
                    .collect();
                found.sort();
                sql_files.extend(found);
            }
            Err(e) => {
                eprintln!("Error reading SQL directory: {e}");
                process::exit(2);
            }
        }
    }

    if sql_files.is_empty() {
        eprintln!("No input SQL files provided");
        process::exit(2);
    }

    // Reject duplicate output stems up front; they would overwrite each other.
    let mut stems = HashSet::new();
    for path in &sql_files {
        let stem = output_name(path);
        if !stems.insert(stem.to_string()) {
            eprintln!("Duplicate input file stem '{stem}' would overwrite its own output");
            process::exit(2);
        }
    }

    // Stage 1: Load mapping dictionaries
    let mapping = match loader::load_mapping(&cli.mapping) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error loading mapping: {e}");
            process::exit(2);
        }
    };

    if cli.verbose {
        eprintln!(
            "Loaded {} table mappings, {} column mappings ({} partial pairs skipped)",
            mapping.tables.len(),
            mapping.columns.len(),
            mapping.skipped_partial_pairs
        );
    }

    // Stage 2: Compile the rewriter once; it is shared across all inputs.
    let rewriter = match Rewriter::new(&mapping.tables, &mapping.columns, cli.direction) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error compiling mapping patterns: {e}");
            process::exit(2);
        }
    };

    // Stage 3: Rewrite each input independently
    for path in &sql_files {
        let sql = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading {}: {e}", path.display());
                process::exit(2);
            }
        };

        let result = rewriter.rewrite(&sql);

        if cli.verbose {
            for table in &result.matched_tables {
                eprintln!("Matched table '{}' -> '{}'", table.physical, table.logical);
            }
        }

        let name = output_name(path);
        let report = report::build_report(&result.matched_tables);
        if let Err(e) = formatter::write_output(&cli.output_dir, name, &result.text, &report) {
            eprintln!("Error writing output: {e}");
            process::exit(2);
        }

        println!(
            "{} -> {}/{name}.sql ({} tables matched)",
            path.display(),
            cli.output_dir.display(),
            result.matched_tables.len()
        );
    }
}

fn output_name(path: &std::path::Path) -> &str {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("output")
}
