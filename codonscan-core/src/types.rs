use std::fmt;

use bio::bio_types::strand::Strand;
use thiserror::Error;

use crate::constants::CODON_LENGTH;

/// A start/stop codon pairing recorded by the scanner.
///
/// Both offsets point at the first base of their codon. A record whose stop
/// codon was never found keeps `stop` as `None` and is never turned into a
/// gene string.
///
/// # Examples
///
/// ```rust
/// use codonscan_core::types::GeneRecord;
///
/// let record = GeneRecord::closed(0, 3);
/// assert_eq!(record.span_len(), Some(6));
/// assert!(GeneRecord::open(12).stop.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneRecord {
    /// Offset of the first base of the start codon
    pub start: usize,
    /// Offset of the first base of the paired stop codon
    pub stop: Option<usize>,
}

impl GeneRecord {
    /// Record for a start codon that has not been paired yet
    #[must_use]
    pub const fn open(start: usize) -> Self {
        Self { start, stop: None }
    }

    /// Record for a start codon paired with its stop codon
    #[must_use]
    pub const fn closed(start: usize, stop: usize) -> Self {
        Self {
            start,
            stop: Some(stop),
        }
    }

    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        self.stop.is_some()
    }

    /// Number of bases spanned by the gene, both codons included.
    ///
    /// `None` for unterminated records.
    #[must_use]
    pub const fn span_len(&self) -> Option<usize> {
        match self.stop {
            Some(stop) => Some(stop - self.start + CODON_LENGTH),
            None => None,
        }
    }

    /// Half-open byte range of the gene in the scanned sequence
    #[must_use]
    pub const fn span(&self) -> Option<std::ops::Range<usize>> {
        match self.stop {
            Some(stop) => Some(self.start..stop + CODON_LENGTH),
            None => None,
        }
    }
}

impl fmt::Display for GeneRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stop {
            Some(stop) => write!(f, "({}, {})", self.start, stop),
            None => write!(f, "({}, -)", self.start),
        }
    }
}

/// Physical location of an extracted gene
#[derive(Debug, Clone, PartialEq)]
pub struct GeneCoordinates {
    /// 0-based offset of the first base of the start codon
    pub begin: usize,
    /// 0-based offset of the last base of the stop codon
    pub end: usize,
    /// Always forward; reverse-complement scanning is not performed
    pub strand: Strand,
}

impl Default for GeneCoordinates {
    fn default() -> Self {
        Self {
            begin: 0,
            end: 0,
            strand: Strand::Forward,
        }
    }
}

/// A gene extracted from a scanned sequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gene {
    pub coordinates: GeneCoordinates,
    /// The literal bases from start codon through stop codon
    pub sequence: String,
}

impl Gene {
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Error types that can occur while reading and scanning a sequence
#[derive(Error, Debug)]
pub enum ScanError {
    /// Fewer bytes were read than the input announced
    #[error("Could not read the whole input: expected {expected} bytes, got {actual}")]
    ReadError { expected: usize, actual: usize },
    /// A symbol outside the accepted alphabet
    #[error("Symbol {symbol:?} at position {offset} is not a base")]
    InvalidBase { offset: usize, symbol: char },
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing input data
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
