/// Output format options for scan results.
///
/// # Formats
///
/// - **Plain**: gene count line followed by one gene string per line
/// - **Fasta**: one FASTA record per gene
/// - **Gff**: General Feature Format version 3
/// - **Sco**: Simple coordinate output
///
/// # Examples
///
/// ```rust
/// use codonscan_core::config::{OutputFormat, ScanConfig};
///
/// let config = ScanConfig {
///     output_format: OutputFormat::Gff,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Gene count followed by each gene string on its own line. FASTA
    /// records each get a leading `>header` line.
    #[default]
    Plain,

    /// FASTA records named `<header>_<n>` with the coordinates in the
    /// description, sequence wrapped at 60 columns.
    Fasta,

    /// General Feature Format version 3, one CDS line per gene.
    Gff,

    /// Tab-delimited 1-based start, end and length per gene.
    Sco,
}

/// How the input file is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// The whole file is a single sequence of bases
    #[default]
    Raw,

    /// One or more FASTA records
    Fasta,
}

/// Configuration settings for a scan run.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use codonscan_core::config::ScanConfig;
///
/// let config = ScanConfig::default();
/// assert!(config.num_threads.is_none());
/// ```
///
/// ## Multi-record FASTA input on four threads
///
/// ```rust
/// use codonscan_core::config::{InputFormat, ScanConfig};
///
/// let config = ScanConfig {
///     input_format: InputFormat::Fasta,
///     num_threads: Some(4),
///     quiet: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Layout of the input file.
    ///
    /// **Default**: [`InputFormat::Raw`]
    pub input_format: InputFormat,

    /// Output format for scan results.
    ///
    /// **Default**: [`OutputFormat::Plain`]
    pub output_format: OutputFormat,

    /// Suppress warnings about unterminated start codons.
    ///
    /// **Default**: `false`
    pub quiet: bool,

    /// Number of threads used when several FASTA records are scanned.
    ///
    /// A single sequence is always scanned on the calling thread.
    ///
    /// **Default**: `None` (rayon's global pool)
    pub num_threads: Option<usize>,
}
