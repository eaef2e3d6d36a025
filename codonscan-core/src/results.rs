use crate::registry::GeneRegistry;
use crate::types::{Gene, GeneRecord};

/// Gene scanning results for one sequence.
///
/// # Examples
///
/// ```rust
/// use codonscan_core::{ScanAnalyzer, config::ScanConfig};
///
/// let analyzer = ScanAnalyzer::new(ScanConfig::default());
/// let results = analyzer.analyze_sequence("atgtaaccccatgtag", None)?;
///
/// assert_eq!(results.count(), 2);
/// assert_eq!(results.iter().collect::<Vec<_>>(), vec!["atgtaa", "atgtag"]);
/// # Ok::<(), codonscan_core::types::ScanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ScanResults {
    /// Extracted genes in detection order (ascending start offset).
    ///
    /// Only records paired with a stop codon appear here.
    pub genes: Vec<Gene>,

    /// Every record produced by the scan, unterminated ones included.
    pub registry: GeneRegistry,

    /// Information about the scanned sequence.
    pub sequence_info: SequenceInfo,
}

impl ScanResults {
    /// Number of extracted gene strings
    #[must_use]
    pub fn count(&self) -> usize {
        self.genes.len()
    }

    /// Gene strings in detection order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.genes.iter().map(|gene| gene.sequence.as_str())
    }

    /// Start/stop pairs behind the extracted genes
    pub fn records(&self) -> impl Iterator<Item = &GeneRecord> + '_ {
        self.registry.terminated()
    }
}

/// Information about a scanned sequence.
///
/// # Examples
///
/// ```rust
/// # use codonscan_core::results::SequenceInfo;
/// let info = SequenceInfo {
///     length: 16,
///     gc_content: 0.25,
///     num_genes: 2,
///     unterminated: 0,
///     header: "contig_1".to_string(),
///     description: None,
/// };
///
/// println!("{}: {} bp, {} genes", info.header, info.length, info.num_genes);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceInfo {
    /// Length of the sequence in bases.
    pub length: usize,

    /// GC content as a fraction (0.0 to 1.0).
    pub gc_content: f64,

    /// Number of genes extracted from the sequence.
    pub num_genes: usize,

    /// Number of start codons without an in-frame stop codon.
    ///
    /// These never show up in [`ScanResults::genes`].
    pub unterminated: usize,

    /// Sequence identifier.
    ///
    /// The first word of the FASTA header line, or a default name for raw input.
    pub header: String,

    /// Everything after the first word in the FASTA header line.
    pub description: Option<String>,
}
