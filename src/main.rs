//! JDIFF command-line interface.
//!
//! Entry point for the jdiff CLI. It uses clap for argument parsing and
//! wires together parsing, comparison, and output rendering.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use jdiff_rs::{diff, format_diff, parse_file, OutputFormat};
use std::path::PathBuf;
use std::process;

/// JDIFF - Structural diff for JSON documents
///
/// Compares two JSON files and reports added, removed, and changed key
/// paths. Paths matching an ignore pattern are suppressed, including
/// everything nested under them.
#[derive(Parser)]
#[command(name = "jdiff")]
#[command(version)]
#[command(about = "Structural diff for JSON documents", long_about = None)]
#[command(author = "JDIFF Contributors")]
struct Cli {
    /// First file to compare
    #[arg(value_name = "FILE1")]
    file1: PathBuf,

    /// Second file to compare
    #[arg(value_name = "FILE2")]
    file2: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "terminal")]
    format: OutputFormatArg,

    /// Path pattern to ignore; repeatable ([*] matches any array index)
    #[arg(short, long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Verbose output (show parsing progress)
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (only show differences, suppress summary)
    #[arg(short, long)]
    quiet: bool,
}

/// Output format argument for clap
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormatArg {
    /// Colored terminal output
    Terminal,
    /// JSON representation
    Json,
    /// Plain text (no colors)
    Plain,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Terminal => OutputFormat::Terminal,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Plain => OutputFormat::Plain,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    if cli.verbose {
        eprintln!("Parsing {}...", cli.file1.display());
    }

    let first = parse_file(&cli.file1)
        .with_context(|| format!("Failed to parse first file: {}", cli.file1.display()))?;

    if cli.verbose {
        eprintln!("Parsing {}...", cli.file2.display());
    }

    let second = parse_file(&cli.file2)
        .with_context(|| format!("Failed to parse second file: {}", cli.file2.display()))?;

    if cli.verbose {
        eprintln!("Computing diff...");
    }

    let result = diff(&first, &second, &cli.ignore);

    let output_format: OutputFormat = cli.format.into();
    let output = format_diff(&result, &output_format).context("Failed to format diff output")?;

    if !cli.quiet {
        println!("{}", output);
    } else {
        for line in output.lines() {
            if !line.starts_with("Summary:") && !line.trim().is_empty() {
                println!("{}", line);
            }
        }
    }

    if result.is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            OutputFormat::from(OutputFormatArg::Terminal),
            OutputFormat::Terminal
        );
        assert_eq!(OutputFormat::from(OutputFormatArg::Json), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from(OutputFormatArg::Plain),
            OutputFormat::Plain
        );
    }
}
