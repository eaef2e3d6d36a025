use log::{debug, trace};

use crate::{
    constants::{CODON_LENGTH, MINIMUM_GENE_LENGTH},
    registry::GeneRegistry,
    sequence::{is_start, is_stop},
    types::GeneRecord,
};

/// Find the nearest in-frame stop codon downstream of a start codon.
///
/// The search steps one codon at a time from `start + 3` and stops at the
/// last position where a whole codon still fits.
#[must_use]
pub fn find_stop(sequence: &[u8], start: usize) -> Option<usize> {
    (start + CODON_LENGTH..)
        .step_by(CODON_LENGTH)
        .take_while(|&pos| pos + 2 < sequence.len())
        .find(|&pos| is_stop(sequence, pos))
}

/// Scan a sequence for start/stop codon pairs.
///
/// Every start codon with room for a following stop codon opens one record,
/// in ascending start order. The sequence must already have passed alphabet
/// validation; the scan itself never fails.
///
/// # Examples
///
/// ```rust
/// use codonscan_core::algorithms::scan_genes;
/// use codonscan_core::types::GeneRecord;
///
/// let registry = scan_genes(b"atgatgtaa");
/// let records: Vec<_> = registry.iter().copied().collect();
/// assert_eq!(records, vec![GeneRecord::closed(0, 6), GeneRecord::closed(3, 6)]);
/// ```
pub fn scan_genes(sequence: &[u8]) -> GeneRegistry {
    let mut registry = GeneRegistry::new();
    let last_start = sequence.len().saturating_sub(MINIMUM_GENE_LENGTH - 1);

    for start in 0..last_start {
        if !is_start(sequence, start) {
            continue;
        }
        let record = match find_stop(sequence, start) {
            Some(stop) => {
                trace!("Start codon at {start} paired with stop codon at {stop}");
                GeneRecord::closed(start, stop)
            }
            None => {
                trace!("Start codon at {start} has no in-frame stop codon");
                GeneRecord::open(start)
            }
        };
        registry.push(record);
    }

    debug!(
        "Scanned {} bases: {} start codons, {} unterminated",
        sequence.len(),
        registry.count(),
        registry.unterminated_count()
    );
    registry
}
