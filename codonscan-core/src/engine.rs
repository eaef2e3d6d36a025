use std::path::Path;

use log::{info, warn};
use rayon::prelude::*;

use crate::algorithms::{extract_gene_strings, extract_genes, scan_genes};
use crate::config::{InputFormat, ScanConfig};
use crate::constants::DEFAULT_HEADER;
use crate::registry::GeneRegistry;
use crate::results::{ScanResults, SequenceInfo};
use crate::sequence::io::FastaRecord;
use crate::sequence::{gc_content, read_fasta_sequences, read_raw_sequence, validate_alphabet};
use crate::types::{Gene, ScanError};

/// A sequence that has not been checked against the base alphabet yet.
///
/// The only way forward is [`UncheckedSequence::validate`], so scanning can
/// never start on a sequence holding foreign symbols.
///
/// # Examples
///
/// ```rust
/// use codonscan_core::engine::UncheckedSequence;
///
/// let validated = UncheckedSequence::new(b"atgccctga").validate()?;
/// let registry = validated.scan();
/// assert_eq!(validated.extract(&registry)[0].sequence, "atgccctga");
///
/// assert!(UncheckedSequence::new(b"atgNNN").validate().is_err());
/// # Ok::<(), codonscan_core::types::ScanError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UncheckedSequence<'a> {
    bases: &'a [u8],
}

impl<'a> UncheckedSequence<'a> {
    #[must_use]
    pub const fn new(bases: &'a [u8]) -> Self {
        Self { bases }
    }

    /// Checks every symbol against the base alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidBase`] with the first offending offset.
    pub fn validate(self) -> Result<ValidatedSequence<'a>, ScanError> {
        validate_alphabet(self.bases)?;
        let bases =
            std::str::from_utf8(self.bases).map_err(|e| ScanError::ParseError(e.to_string()))?;
        Ok(ValidatedSequence { bases })
    }
}

/// A sequence made only of `a`, `c`, `g` and `t`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedSequence<'a> {
    bases: &'a str,
}

impl<'a> ValidatedSequence<'a> {
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.bases
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.bases.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Runs the start/stop codon scan over the sequence
    #[must_use]
    pub fn scan(&self) -> GeneRegistry {
        scan_genes(self.bases.as_bytes())
    }

    /// Gene strings for the terminated records of `registry`, borrowed from the sequence
    pub fn gene_strings<'r>(self, registry: &'r GeneRegistry) -> impl Iterator<Item = &'r str> + 'r
    where
        'a: 'r,
    {
        extract_gene_strings(self.bases, registry)
    }

    /// Owned genes with coordinates for the terminated records of `registry`
    #[must_use]
    pub fn extract(&self, registry: &GeneRegistry) -> Vec<Gene> {
        extract_genes(self.bases, registry)
    }
}

/// High-level analyzer for scanning sequences.
///
/// Runs the whole pipeline for each sequence: alphabet validation, codon
/// scanning and gene extraction. Any fatal error aborts the run before
/// results are produced.
///
/// # Examples
///
/// ```rust
/// use codonscan_core::{ScanAnalyzer, config::ScanConfig};
///
/// let analyzer = ScanAnalyzer::new(ScanConfig::default());
/// let results = analyzer.analyze_sequence("atgatgtaa", Some("demo".to_string()))?;
///
/// assert_eq!(results.sequence_info.header, "demo");
/// assert_eq!(results.iter().collect::<Vec<_>>(), vec!["atgatgtaa", "atgtaa"]);
/// # Ok::<(), codonscan_core::types::ScanError>(())
/// ```
#[derive(Debug)]
pub struct ScanAnalyzer {
    /// Configuration options for the run
    pub config: ScanConfig,
}

impl ScanAnalyzer {
    pub const fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Analyzes every sequence of an input file.
    ///
    /// Raw input yields exactly one result; FASTA input yields one result per
    /// record, in file order.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if:
    /// - The file cannot be opened or is shorter than its reported size
    /// - The FASTA format is invalid
    /// - Any sequence holds a symbol outside the base alphabet
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<ScanResults>, ScanError> {
        match self.config.input_format {
            InputFormat::Raw => {
                let sequence = read_raw_sequence(path)?;
                let result =
                    self.analyze_sequence_bytes(&sequence, DEFAULT_HEADER.to_string(), None)?;
                Ok(vec![result])
            }
            InputFormat::Fasta => {
                let records = read_fasta_sequences(path)?;
                self.analyze_records(records)
            }
        }
    }

    /// Analyzes FASTA records, in parallel when there is more than one.
    ///
    /// Results keep the order of `records`. Any failing record aborts the
    /// whole batch.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidConfig`] for a zero thread count or a
    /// thread pool that cannot be built, or the error of a failing record.
    pub fn analyze_records(&self, records: Vec<FastaRecord>) -> Result<Vec<ScanResults>, ScanError> {
        let run = || {
            records
                .into_par_iter()
                .map(|(header, description, sequence)| {
                    self.analyze_sequence_bytes(&sequence, header, description)
                })
                .collect::<Result<Vec<_>, _>>()
        };

        match self.config.num_threads {
            Some(0) => Err(ScanError::InvalidConfig(
                "thread count must be at least 1".to_string(),
            )),
            Some(num_threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
                .map_err(|e| {
                    ScanError::InvalidConfig(format!("Failed to configure thread pool: {e}"))
                })?
                .install(run),
            None => run(),
        }
    }

    /// Analyzes a single sequence from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidBase`] if the sequence holds anything
    /// other than lowercase `a`, `c`, `g` or `t`.
    pub fn analyze_sequence(
        &self,
        sequence: &str,
        header: Option<String>,
    ) -> Result<ScanResults, ScanError> {
        let header = header.unwrap_or_else(|| DEFAULT_HEADER.to_string());
        self.analyze_sequence_bytes(sequence.as_bytes(), header, None)
    }

    /// Analyzes a single sequence from raw bytes.
    ///
    /// This is the core method used by the other entry points.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidBase`] if the sequence fails validation.
    pub fn analyze_sequence_bytes(
        &self,
        sequence: &[u8],
        header: String,
        description: Option<String>,
    ) -> Result<ScanResults, ScanError> {
        let validated = UncheckedSequence::new(sequence).validate()?;
        let registry = validated.scan();
        let genes = validated.extract(&registry);
        let unterminated = registry.unterminated_count();

        if unterminated > 0 && !self.config.quiet {
            warn!(
                "{header}: {unterminated} start codon(s) without an in-frame stop codon were left out"
            );
        }
        info!("{header}: {} bp, {} genes", validated.len(), genes.len());

        Ok(ScanResults {
            sequence_info: SequenceInfo {
                length: validated.len(),
                gc_content: gc_content(sequence),
                num_genes: genes.len(),
                unterminated,
                header,
                description,
            },
            genes,
            registry,
        })
    }
}
