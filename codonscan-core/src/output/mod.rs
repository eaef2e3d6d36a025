//! Output formatting for scan results.
//!
//! This module provides writers for converting [`ScanResults`] into text.
//!
//! ## Supported Formats
//!
//! - **Plain**: gene count line followed by one gene string per line,
//!   preceded by a `>header` line when the input holds FASTA records
//! - **FASTA**: one record per gene
//! - **GFF3**: General Feature Format version 3
//! - **SCO**: Simple coordinate output
//!
//! ## Examples
//!
//! ```rust
//! use codonscan_core::{ScanAnalyzer, config::{ScanConfig, OutputFormat}};
//! use codonscan_core::output::write_results;
//!
//! let analyzer = ScanAnalyzer::new(ScanConfig::default());
//! let results = analyzer.analyze_sequence("atgtaaccccatgtag", None)?;
//!
//! let mut buffer = Vec::new();
//! write_results(&mut buffer, &results, OutputFormat::Plain)?;
//! assert_eq!(String::from_utf8(buffer)?, "2 genes found\natgtaa\natgtag\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{
    ScanError,
    config::{InputFormat, OutputFormat, ScanConfig},
    results::ScanResults,
};
use std::io::Write;

mod formats {
    pub mod fasta;
    pub mod gff;
    pub mod plain;
    pub mod sco;
}

use formats::{
    fasta::write_fasta_format,
    gff::write_gff_format,
    plain::{write_plain_format, write_plain_label},
    sco::write_sco_format,
};

/// Writes scan results in the specified format.
///
/// Delegates to the format-specific writer.
///
/// # Errors
///
/// Returns [`ScanError::IoError`] if writing fails.
pub fn write_results<W: Write>(
    writer: &mut W,
    results: &ScanResults,
    format: OutputFormat,
) -> Result<(), ScanError> {
    match format {
        OutputFormat::Plain => write_plain_format(writer, results),
        OutputFormat::Fasta => write_fasta_format(writer, results),
        OutputFormat::Gff => write_gff_format(writer, results),
        OutputFormat::Sco => write_sco_format(writer, results),
    }
}

/// Writes the results of a whole run, one sequence after another.
///
/// Plain blocks of FASTA input are each preceded by a `>header` line so
/// every gene list can be traced back to its record. Raw input has a single
/// unnamed sequence and is written as is.
///
/// # Errors
///
/// Returns [`ScanError::IoError`] if writing fails.
pub fn write_all_results<W: Write>(
    writer: &mut W,
    results: &[ScanResults],
    config: &ScanConfig,
) -> Result<(), ScanError> {
    let label_records = config.output_format == OutputFormat::Plain
        && config.input_format == InputFormat::Fasta;

    for result in results {
        if label_records {
            write_plain_label(writer, result)?;
        }
        write_results(writer, result, config.output_format)?;
    }
    Ok(())
}
