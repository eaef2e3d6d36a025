use std::io::Write;

use crate::{ScanError, results::ScanResults};

/// Write results as a gene count line followed by one gene string per line
pub fn write_plain_format<W: Write>(
    writer: &mut W,
    results: &ScanResults,
) -> Result<(), ScanError> {
    writeln!(writer, "{} genes found", results.count())?;
    for gene in results.iter() {
        writeln!(writer, "{gene}")?;
    }
    Ok(())
}

/// Write a `>header` line naming the record the next plain block belongs to
pub fn write_plain_label<W: Write>(
    writer: &mut W,
    results: &ScanResults,
) -> Result<(), ScanError> {
    writeln!(writer, ">{}", results.sequence_info.header)?;
    Ok(())
}
