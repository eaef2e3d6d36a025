use std::io::Write;

use crate::{ScanError, constants::FASTA_LINE_WIDTH, results::ScanResults};

/// Write each gene as a FASTA record with 1-based coordinates in the description
pub fn write_fasta_format<W: Write>(
    writer: &mut W,
    results: &ScanResults,
) -> Result<(), ScanError> {
    for (i, gene) in results.genes.iter().enumerate() {
        writeln!(
            writer,
            ">{}_{} {}..{} len={}",
            results.sequence_info.header,
            i + 1,
            gene.coordinates.begin + 1,
            gene.coordinates.end + 1,
            gene.len()
        )?;
        for line in gene.sequence.as_bytes().chunks(FASTA_LINE_WIDTH) {
            writer.write_all(line)?;
            writer.write_all(b"\n")?;
        }
    }
    Ok(())
}
