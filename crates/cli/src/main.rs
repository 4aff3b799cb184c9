//! # confuser-cli
//!
//! Command-line interface for turning spreadsheet confusion matrices into
//! LaTeX tables.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use confuser_latex::{export_tex, tex_file_name, LatexTable};
use confuser_sheet::{extract_grid, Book, CellRange, FileLoadOptions, Grid, Selection};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const NOT_ENOUGH_DATA: &str = "Not enough data (3x3 cells or more required)";

/// confuser - render a spreadsheet confusion matrix as a LaTeX table
#[derive(Parser)]
#[command(name = "confuser")]
#[command(author, version, about = "Confusion matrix to LaTeX", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the LaTeX code for the matrix
    Display {
        #[command(flatten)]
        source: Source,
    },
    /// Save the LaTeX code for the matrix to a .tex file
    Export {
        #[command(flatten)]
        source: Source,

        /// File name to save as (".tex" is appended when missing).
        /// Prompted for when omitted.
        #[arg(short, long, value_name = "NAME")]
        output: Option<String>,
    },
}

/// Where the matrix is read from.
#[derive(Args)]
struct Source {
    /// Spreadsheet file (csv, tsv, xlsx, xls, ods)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Sheet to read (defaults to the first sheet)
    #[arg(short, long)]
    sheet: Option<String>,

    /// Selected cells in A1 notation, e.g. B2:E5.
    /// Falls back to the whole sheet when smaller than 3x3.
    #[arg(short, long, value_name = "A1:C3")]
    range: Option<CellRange>,

    /// Field delimiter for delimited text files
    #[arg(short, long)]
    delimiter: Option<char>,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(e) = run(cli.command) {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Display { source } => {
            let table = LatexTable::from_grid(&load_grid(&source)?);
            if table.is_empty() {
                warn_not_enough_data();
                return Ok(());
            }
            for line in table.lines() {
                println!("{line}");
            }
            Ok(())
        }
        Command::Export { source, output } => {
            let name = match output {
                Some(name) => name,
                None => prompt_file_name()?,
            };
            // Reject bad names before reading anything
            tex_file_name(&name)?;

            let table = LatexTable::from_grid(&load_grid(&source)?);
            if table.is_empty() {
                warn_not_enough_data();
                return Ok(());
            }

            let path = export_tex(table.lines(), &name)?;
            println!("{} {}", "Saved".green().bold(), path.display());
            Ok(())
        }
    }
}

/// Open the file, pick the sheet and extract the matrix grid.
fn load_grid(source: &Source) -> Result<Grid> {
    let mut options = FileLoadOptions::default();
    if let Some(delimiter) = source.delimiter {
        let Ok(byte) = u8::try_from(delimiter) else {
            bail!("Delimiter must be a single ASCII character, got '{delimiter}'");
        };
        options = options.with_delimiter(byte);
    }

    let mut book = Book::open(&source.file, &options)
        .with_context(|| format!("Failed to read file: {}", source.file.display()))?;

    if let Some(name) = &source.sheet {
        book.set_active_sheet(name)?;
    }
    let sheet = book
        .active_sheet()
        .with_context(|| format!("No sheets in {}", source.file.display()))?;

    let selection = match source.range {
        Some(range) => Selection::range(sheet, range),
        None => Selection::whole(sheet),
    };

    let grid = extract_grid(&selection)?;
    tracing::info!(
        sheet = sheet.name(),
        rows = grid.height(),
        cols = grid.width(),
        "extracted grid"
    );
    Ok(grid)
}

fn warn_not_enough_data() {
    eprintln!("{} {NOT_ENOUGH_DATA}", "Warning:".yellow().bold());
}

/// Ask for the export file name. Cancelling counts as an empty name.
fn prompt_file_name() -> Result<String> {
    let mut rl = DefaultEditor::new()?;
    match rl.readline("Save tex file as: ") {
        Ok(line) => Ok(line.trim().to_string()),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}
