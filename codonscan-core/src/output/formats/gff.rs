use std::io::Write;

use bio::bio_types::strand::Strand;

use crate::{
    ScanError,
    constants::{START_CODON, STOP_CODONS, VERSION},
    results::ScanResults,
};

/// Write results in GFF format
pub fn write_gff_format<W: Write>(
    writer: &mut W,
    results: &ScanResults,
) -> Result<(), ScanError> {
    writeln!(writer, "##gff-version 3")?;
    if let Some(desc) = &results.sequence_info.description {
        writeln!(
            writer,
            "# Sequence Data: seqlen={};seqhdr=\"{} {}\"",
            results.sequence_info.length, results.sequence_info.header, desc
        )?;
    } else {
        writeln!(
            writer,
            "# Sequence Data: seqlen={};seqhdr=\"{}\"",
            results.sequence_info.length, results.sequence_info.header
        )?;
    }
    writeln!(
        writer,
        "# Model Data: version=codonscan.v{};start={};stops={};gc_cont={:.2};unterminated={}",
        VERSION,
        String::from_utf8_lossy(START_CODON),
        STOP_CODONS
            .iter()
            .map(|codon| String::from_utf8_lossy(*codon))
            .collect::<Vec<_>>()
            .join(","),
        results.sequence_info.gc_content * 100.0,
        results.sequence_info.unterminated
    )?;

    for (i, gene) in results.genes.iter().enumerate() {
        // Only the forward strand is scanned
        let strand_char = match gene.coordinates.strand {
            Strand::Forward => '+',
            _ => '.',
        };

        writeln!(
            writer,
            "{}\tcodonscan_v{}\tCDS\t{}\t{}\t.\t{}\t0\tID={}_{};len={};",
            results.sequence_info.header,
            VERSION,
            gene.coordinates.begin + 1,
            gene.coordinates.end + 1,
            strand_char,
            results.sequence_info.header,
            i + 1,
            gene.len()
        )?;
    }
    Ok(())
}
