//! # codonscan CLI - Command-Line Gene Scanner
//!
//! A command-line interface for the codonscan start/stop codon scanner.
//!
//! ## Usage
//!
//! ```bash
//! # Scan a raw sequence file, print gene count and gene strings
//! codonscan -i genome.txt
//!
//! # Scan every record of a FASTA file, write GFF
//! codonscan -i contigs.fasta -t fasta -f gff -o genes.gff
//! ```
//!
//! ## Options
//!
//! - `-i, --input <FILE>`: Input file
//! - `-o, --output <FILE>`: Output file (default: stdout)
//! - `-f, --format <FORMAT>`: Output format: plain, fasta, gff, sco (default: plain)
//! - `-t, --input-format <FORMAT>`: Input layout: raw or fasta (default: raw)
//! - `-j, --threads <N>`: Threads used for multi-record FASTA input
//! - `-q, --quiet`: Only log errors
//! - `-v, --verbose`: Log progress information
//!
//! Logging goes to stderr through `env_logger`; `RUST_LOG` overrides the
//! level picked by `--quiet` / `--verbose`.

use clap::{Arg, ArgAction, Command};
use codonscan_core::config::{InputFormat, OutputFormat, ScanConfig};
use codonscan_core::output::write_all_results;
use codonscan_core::*;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};

fn cli() -> Command {
    Command::new("codonscan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Start/stop codon gene scanner")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .required(true)
                .help("Input sequence file"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format: plain, fasta, gff, sco")
                .default_value("plain"),
        )
        .arg(
            Arg::new("input-format")
                .short('t')
                .long("input-format")
                .value_name("FORMAT")
                .help("Input format: raw or fasta")
                .default_value("raw"),
        )
        .arg(
            Arg::new("threads")
                .short('j')
                .long("threads")
                .value_name("N")
                .help("Threads for multi-record input"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Quiet mode"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log progress information"),
        )
}

fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Main entry point for the codonscan CLI application.
///
/// Parses command-line arguments, scans the input and writes results in the
/// requested format. Any read or validation error aborts before output.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();

    let quiet = matches.get_flag("quiet");
    init_logging(quiet, matches.get_flag("verbose"));

    let mut options = ScanConfig {
        quiet,
        ..Default::default()
    };

    if let Some(threads) = matches.get_one::<String>("threads") {
        let threads: usize = threads.parse().map_err(|_| "Invalid thread count")?;
        if threads == 0 {
            return Err("Thread count must be at least 1".into());
        }
        options.num_threads = Some(threads);
    }

    options.output_format = match matches.get_one::<String>("format").map(String::as_str) {
        Some("plain") | None => OutputFormat::Plain,
        Some("fasta" | "fa") => OutputFormat::Fasta,
        Some("gff") => OutputFormat::Gff,
        Some("sco") => OutputFormat::Sco,
        Some(_) => return Err("Invalid output format".into()),
    };

    options.input_format = match matches.get_one::<String>("input-format").map(String::as_str) {
        Some("raw") | None => InputFormat::Raw,
        Some("fasta" | "fa") => InputFormat::Fasta,
        Some(_) => return Err("Invalid input format".into()),
    };

    let analyzer = ScanAnalyzer::new(options);
    let results = match matches.get_one::<String>("input") {
        Some(input_file) => analyzer.analyze_file(input_file)?,
        None => return Err("No input file given".into()),
    };

    let mut writer: Box<dyn Write> = if let Some(output_file) = matches.get_one::<String>("output")
    {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    write_all_results(&mut writer, &results, &analyzer.config)?;
    writer.flush()?;

    info!(
        "Scan complete! Found {} genes in {} sequences.",
        results.iter().map(|r| r.count()).sum::<usize>(),
        results.len()
    );

    Ok(())
}
