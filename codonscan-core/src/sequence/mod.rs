//! Alphabet validation and codon matching over raw nucleotide bytes.
//!
//! Sequences are plain lowercase ASCII (`a`, `c`, `g`, `t`). Every codon
//! predicate takes the sequence and the offset of the codon's first base;
//! callers must make sure `pos + 2 < sequence.len()`.

pub mod io;

pub use io::{read_fasta_sequences, read_raw_sequence};

use crate::constants::{BASES, START_CODON, STOP_CODONS};
use crate::types::ScanError;

/// Test if a byte is one of the accepted bases
#[inline]
#[must_use]
pub const fn is_base(symbol: u8) -> bool {
    matches!(symbol, b'a' | b'c' | b'g' | b't')
}

/// Returns the offset of the first symbol that is not a base, if any
#[must_use]
pub fn find_invalid_base(sequence: &[u8]) -> Option<usize> {
    sequence.iter().position(|&symbol| !is_base(symbol))
}

/// Check that every symbol of the sequence is a base.
///
/// # Errors
///
/// Returns [`ScanError::InvalidBase`] carrying the first offending offset.
pub fn validate_alphabet(sequence: &[u8]) -> Result<(), ScanError> {
    match find_invalid_base(sequence) {
        Some(offset) => Err(ScanError::InvalidBase {
            offset,
            symbol: char::from(sequence[offset]),
        }),
        None => Ok(()),
    }
}

#[inline]
fn codon_at(sequence: &[u8], pos: usize) -> &[u8] {
    &sequence[pos..pos + 3]
}

/// Test if codon at position is ATG, the only start codon
#[inline]
#[must_use]
pub fn is_start(sequence: &[u8], pos: usize) -> bool {
    codon_at(sequence, pos) == START_CODON
}

/// Test if codon at position is TGA, TAA or TAG
#[inline]
#[must_use]
pub fn is_stop(sequence: &[u8], pos: usize) -> bool {
    is_tga(sequence, pos) || is_taa(sequence, pos) || is_tag(sequence, pos)
}

/// Test if codon at position is TGA (opal)
pub fn is_tga(sequence: &[u8], pos: usize) -> bool {
    codon_at(sequence, pos) == STOP_CODONS[0]
}

/// Test if codon at position is TAA (ochre)
pub fn is_taa(sequence: &[u8], pos: usize) -> bool {
    codon_at(sequence, pos) == STOP_CODONS[1]
}

/// Test if codon at position is TAG (amber)
pub fn is_tag(sequence: &[u8], pos: usize) -> bool {
    codon_at(sequence, pos) == STOP_CODONS[2]
}

/// Fraction of G and C bases in the sequence (0.0 for an empty sequence)
#[must_use]
pub fn gc_content(sequence: &[u8]) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }
    let gc = sequence
        .iter()
        .filter(|&&b| b == BASES[1] || b == BASES[2])
        .count();
    gc as f64 / sequence.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_base() {
        for b in BASES {
            assert!(is_base(b));
        }
        assert!(!is_base(b'A'));
        assert!(!is_base(b'n'));
        assert!(!is_base(b'\n'));
        assert!(!is_base(b'u'));
    }

    #[test]
    fn test_find_invalid_base_all_valid() {
        assert_eq!(find_invalid_base(b"acgtacgt"), None);
        assert_eq!(find_invalid_base(b""), None);
    }

    #[test]
    fn test_find_invalid_base_first_occurrence_wins() {
        assert_eq!(find_invalid_base(b"acgxtnn"), Some(3));
        assert_eq!(find_invalid_base(b"Xacg"), Some(0));
        assert_eq!(find_invalid_base(b"acgT"), Some(3));
    }

    #[test]
    fn test_validate_alphabet_reports_offset_and_symbol() {
        assert!(validate_alphabet(b"atgtaa").is_ok());
        match validate_alphabet(b"atgNtaa") {
            Err(ScanError::InvalidBase { offset, symbol }) => {
                assert_eq!(offset, 3);
                assert_eq!(symbol, 'N');
            }
            other => panic!("Expected InvalidBase, got {other:?}"),
        }
    }

    #[test]
    fn test_is_start() {
        assert!(is_start(b"atg", 0));
        assert!(is_start(b"ccatgc", 2));
        assert!(!is_start(b"gtg", 0));
        assert!(!is_start(b"ttg", 0));
        assert!(!is_start(b"ATG", 0));
    }

    #[test]
    fn test_is_stop() {
        assert!(is_stop(b"tga", 0));
        assert!(is_stop(b"taa", 0));
        assert!(is_stop(b"tag", 0));
        assert!(is_stop(b"cctag", 2));
        assert!(!is_stop(b"tgg", 0));
        assert!(!is_stop(b"atg", 0));
    }

    #[test]
    fn test_individual_stop_codons() {
        let seq = b"tgataatag";
        assert!(is_tga(seq, 0));
        assert!(is_taa(seq, 3));
        assert!(is_tag(seq, 6));
        assert!(!is_tga(seq, 3));
        assert!(!is_taa(seq, 6));
        assert!(!is_tag(seq, 0));
    }

    #[test]
    fn test_gc_content() {
        assert!((gc_content(b"acgt") - 0.5).abs() < f64::EPSILON);
        assert!((gc_content(b"gggg") - 1.0).abs() < f64::EPSILON);
        assert_eq!(gc_content(b""), 0.0);
    }
}
