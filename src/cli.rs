//! resumen CLI - tabular cleaning and summary reports.
//!
//! Command-line interface for producing a JSON summary report from a
//! delimited input file. The report goes to standard output (or a file
//! with `--output`); warnings and errors go to the error stream only.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;

use crate::{
    dataset::{CsvOptions, Dataset},
    error::{Error, Result},
    summary::{Summarizer, DEFAULT_CATEGORY_COLUMN, DEFAULT_VALUE_COLUMN},
};

/// Input file read when no path argument is given.
pub const DEFAULT_INPUT: &str = "data.csv";

/// resumen - Tabular Cleaning and Summary Reports in Pure Rust
#[derive(Parser)]
#[command(name = "resumen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the delimited input file
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Name of the numeric column to clean and summarize
    #[arg(long, default_value = DEFAULT_VALUE_COLUMN)]
    value_column: String,

    /// Name of the category column counted for distinct labels
    #[arg(long, default_value = DEFAULT_CATEGORY_COLUMN)]
    category_column: String,

    /// Field delimiter of the input file
    #[arg(short = 'd', long, default_value_t = ',')]
    delimiter: char,

    /// Write the report to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Run the resumen CLI.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cmd_summarize(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Produce a report for one input file.
fn cmd_summarize(cli: &Cli) -> Result<()> {
    let options = CsvOptions::new().with_delimiter(parse_delimiter(cli.delimiter)?);
    let dataset = Dataset::from_csv_with_options(&cli.input, options)?;

    let analysis = Summarizer::new()
        .value_column(&cli.value_column)
        .category_column(&cli.category_column)
        .summarize(&dataset)?;

    for warning in &analysis.warnings {
        eprintln!("Warning: {}", warning);
    }

    let json = analysis.report.to_json()?;
    match &cli.output {
        Some(path) => {
            std::fs::write(path, &json).map_err(|e| Error::io(e, path))?;
            println!("Report written to: {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Maps the delimiter argument onto the single byte the reader expects.
fn parse_delimiter(delimiter: char) -> Result<u8> {
    u8::try_from(delimiter).map_err(|_| {
        Error::invalid_config(format!(
            "delimiter must be a single-byte character, got '{}'",
            delimiter
        ))
    })
}
