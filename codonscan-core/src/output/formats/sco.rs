use std::io::Write;

use bio::bio_types::strand::Strand;

use crate::{ScanError, results::ScanResults};

/// Write results in SCO format (simple coordinate output)
pub fn write_sco_format<W: Write>(
    writer: &mut W,
    results: &ScanResults,
) -> Result<(), ScanError> {
    for gene in &results.genes {
        let strand_num = match gene.coordinates.strand {
            Strand::Forward => 1,
            _ => 0,
        };

        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            gene.coordinates.begin + 1,
            gene.coordinates.end + 1,
            strand_num,
            gene.len()
        )?;
    }
    Ok(())
}
