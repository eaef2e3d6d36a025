//! Core gene-scanning algorithms.
//!
//! ## Modules
//!
//! - [`scanning`]: Start/stop codon pairing over a validated sequence
//! - [`extraction`]: Turning gene records back into gene strings
//!
//! ## Algorithm Overview
//!
//! Scanning is a single forward pass with a nested in-frame search:
//!
//! ```text
//! for i in 0..len-5:
//!     if codon(i) == ATG:
//!         open record (i, -)
//!         for j in i+3, i+6, ... while j+2 < len:
//!             if codon(j) in {TGA, TAA, TAG}:
//!                 close record (i, j); break
//! ```
//!
//! The outer loop never skips ahead, so a start codon that sits inside an
//! earlier gene opens its own record and the two genes overlap. Records whose
//! inner search runs off the end of the sequence stay unterminated and are
//! left out by the extractor.

pub mod extraction;
pub mod scanning;

pub use extraction::{extract_gene_strings, extract_genes};
pub use scanning::{find_stop, scan_genes};
