//! # codonscan - Start/Stop Codon Gene Scanner
//!
//! Locates candidate gene regions in a nucleotide sequence. A region opens at
//! an `atg` start codon and closes at the nearest in-frame `tga`, `taa` or
//! `tag` stop codon; each region is reported as the literal bases it spans.
//!
//! ## Quick Start
//!
//! ```rust
//! use codonscan_core::{ScanAnalyzer, config::ScanConfig};
//!
//! let analyzer = ScanAnalyzer::new(ScanConfig::default());
//! let results = analyzer.analyze_sequence("atgtaaccccatgtag", None)?;
//!
//! println!("{} genes found", results.count());
//! for gene in results.iter() {
//!     println!("{gene}");
//! }
//! # Ok::<(), codonscan_core::types::ScanError>(())
//! ```
//!
//! ## Pipeline
//!
//! 1. **Alphabet validation**: every symbol must be `a`, `c`, `g` or `t`;
//!    the first offending offset aborts the run
//! 2. **Scanning**: every start codon opens a [`types::GeneRecord`] and is
//!    paired with the nearest in-frame stop codon
//! 3. **Extraction**: each terminated record becomes a gene string
//!
//! Validation is enforced by the types: only an
//! [`engine::ValidatedSequence`] can be scanned.
//!
//! ```rust
//! use codonscan_core::engine::UncheckedSequence;
//!
//! let sequence = UncheckedSequence::new(b"atgatgtaa").validate()?;
//! let registry = sequence.scan();
//! let genes: Vec<&str> = sequence.gene_strings(&registry).collect();
//! assert_eq!(genes, vec!["atgatgtaa", "atgtaa"]);
//! # Ok::<(), codonscan_core::types::ScanError>(())
//! ```
//!
//! Start codons found inside another gene open their own record, so genes
//! may overlap. Start codons without an in-frame stop codon are kept in the
//! [`registry::GeneRegistry`] but never reported as genes.
//!
//! ## Module Organization
//!
//! - [`config`]: Configuration options for a run
//! - [`engine`]: Validation type-state and the [`ScanAnalyzer`]
//! - [`types`]: Gene records, genes and errors
//! - [`registry`]: Append-only record storage
//! - [`results`]: Per-sequence results
//! - [`sequence`]: Alphabet checks, codon predicates and input readers
//! - [`algorithms`]: Scanning and extraction
//! - [`output`]: Output formatting
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, ScanError>`](types::ScanError),
//! distinguishing:
//!
//! - Short reads ([`ScanError::ReadError`])
//! - Symbols outside the alphabet ([`ScanError::InvalidBase`])
//! - I/O and FASTA parse failures
//! - Configuration errors

pub mod algorithms;
pub mod config;
pub mod constants;
pub mod engine;
pub mod output;
pub mod registry;
pub mod results;
pub mod sequence;
pub mod types;

pub use engine::ScanAnalyzer;
pub use types::ScanError;
