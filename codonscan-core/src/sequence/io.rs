use crate::types::*;
use bio::io::fasta;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Record id, optional description and raw bases of one FASTA entry
pub type FastaRecord = (String, Option<String>, Vec<u8>);

/// Read every record of a FASTA file using rust-bio.
///
/// Bases are returned verbatim; alphabet validation happens later.
///
/// # Errors
///
/// Returns [`ScanError::IoError`] if the file cannot be opened, or
/// [`ScanError::ParseError`] if a record is malformed.
pub fn read_fasta_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>, ScanError> {
    let file = File::open(path)?;
    let reader = fasta::Reader::new(file);
    let mut sequences = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| ScanError::ParseError(e.to_string()))?;
        let id = record.id().to_string();
        let description = record.desc().map(String::from);
        let seq = record.seq().to_vec();
        sequences.push((id, description, seq));
    }

    Ok(sequences)
}

/// Read a raw sequence file whose size is taken from its metadata.
///
/// The whole file is read in one go and must yield exactly as many bytes as
/// the metadata announced.
///
/// # Errors
///
/// Returns [`ScanError::IoError`] if the file cannot be opened, or
/// [`ScanError::ReadError`] on a short read.
pub fn read_raw_sequence<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, ScanError> {
    let file = File::open(path)?;
    let expected = file.metadata()?.len() as usize;
    read_exact_length(file, expected)
}

/// Read `expected` bytes from `reader` as one sequence blob.
///
/// A single trailing line terminator (`\n` or `\r\n`) is dropped after the
/// length check; everything else is kept verbatim for alphabet validation.
///
/// # Errors
///
/// [`ScanError::ReadError`] if the reader runs dry before `expected` bytes.
pub fn read_exact_length<R: Read>(reader: R, expected: usize) -> Result<Vec<u8>, ScanError> {
    let mut buffer = Vec::with_capacity(expected);
    reader.take(expected as u64).read_to_end(&mut buffer)?;

    if buffer.len() != expected {
        return Err(ScanError::ReadError {
            expected,
            actual: buffer.len(),
        });
    }

    if buffer.last() == Some(&b'\n') {
        buffer.pop();
        if buffer.last() == Some(&b'\r') {
            buffer.pop();
        }
    }

    Ok(buffer)
}
