// =============================================================================
// =============================================================================

/// Version string for codonscan
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header used when a sequence is scanned without an identifier
pub const DEFAULT_HEADER: &str = "codonscan_seq_1";

// =============================================================================
// =============================================================================

/// Length of a codon in base pairs
pub const CODON_LENGTH: usize = 3;

/// Accepted base symbols (lowercase only)
pub const BASES: [u8; 4] = [b'a', b'c', b'g', b't'];

/// The codon that opens a gene region
pub const START_CODON: &[u8; 3] = b"atg";

/// Codons that close a gene region
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"tga", b"taa", b"tag"];

/// Shortest possible gene: a start codon immediately followed by a stop codon
pub const MINIMUM_GENE_LENGTH: usize = 2 * CODON_LENGTH;

// =============================================================================
// =============================================================================

/// Initial number of gene records reserved before the registry starts growing
pub const INITIAL_REGISTRY_CAPACITY: usize = 30;

/// Line width used when writing gene sequences in FASTA format
pub const FASTA_LINE_WIDTH: usize = 60;
