use bio::bio_types::strand::Strand;

use crate::{
    registry::GeneRegistry,
    types::{Gene, GeneCoordinates},
};

/// Lazily yield the gene strings of a registry in detection order.
///
/// Each gene string runs from the first base of its start codon through the
/// last base of its stop codon. Unterminated records are skipped.
///
/// # Examples
///
/// ```rust
/// use codonscan_core::algorithms::{extract_gene_strings, scan_genes};
///
/// let sequence = "atgtaaccccatgtag";
/// let registry = scan_genes(sequence.as_bytes());
/// let genes: Vec<&str> = extract_gene_strings(sequence, &registry).collect();
/// assert_eq!(genes, vec!["atgtaa", "atgtag"]);
/// ```
pub fn extract_gene_strings<'a>(
    sequence: &'a str,
    registry: &'a GeneRegistry,
) -> impl Iterator<Item = &'a str> + 'a {
    registry
        .iter()
        .filter_map(move |record| record.span().and_then(|span| sequence.get(span)))
}

/// Materialize every terminated record as a [`Gene`] with coordinates
pub fn extract_genes(sequence: &str, registry: &GeneRegistry) -> Vec<Gene> {
    registry
        .iter()
        .filter_map(|record| {
            let span = record.span()?;
            let bases = sequence.get(span.clone())?;
            Some(Gene {
                coordinates: GeneCoordinates {
                    begin: span.start,
                    end: span.end - 1,
                    strand: Strand::Forward,
                },
                sequence: bases.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GeneRecord;

    fn registry_of(records: &[GeneRecord]) -> GeneRegistry {
        records.iter().copied().collect()
    }

    #[test]
    fn test_extract_single_gene() {
        let registry = registry_of(&[GeneRecord::closed(0, 6)]);
        let genes: Vec<_> = extract_gene_strings("atgccctga", &registry).collect();
        assert_eq!(genes, vec!["atgccctga"]);
    }

    #[test]
    fn test_extract_overlapping_genes() {
        let registry = registry_of(&[GeneRecord::closed(0, 6), GeneRecord::closed(3, 6)]);
        let genes: Vec<_> = extract_gene_strings("atgatgtaa", &registry).collect();
        assert_eq!(genes, vec!["atgatgtaa", "atgtaa"]);
    }

    #[test]
    fn test_unterminated_records_are_excluded() {
        let registry = registry_of(&[
            GeneRecord::open(0),
            GeneRecord::closed(3, 6),
            GeneRecord::open(9),
        ]);
        let sequence = "atgatgtaaatgccc";
        let genes: Vec<_> = extract_gene_strings(sequence, &registry).collect();
        assert_eq!(genes, vec!["atgtaa"]);
        assert_eq!(extract_genes(sequence, &registry).len(), 1);
    }

    #[test]
    fn test_extract_genes_coordinates() {
        let registry = registry_of(&[GeneRecord::closed(0, 3), GeneRecord::closed(10, 13)]);
        let genes = extract_genes("atgtaaccccatgtag", &registry);

        assert_eq!(genes.len(), 2);
        assert_eq!(genes[0].coordinates.begin, 0);
        assert_eq!(genes[0].coordinates.end, 5);
        assert_eq!(genes[0].sequence, "atgtaa");
        assert_eq!(genes[1].coordinates.begin, 10);
        assert_eq!(genes[1].coordinates.end, 15);
        assert_eq!(genes[1].sequence, "atgtag");
        assert!(genes.iter().all(|g| g.coordinates.strand == Strand::Forward));
    }

    #[test]
    fn test_gene_length_matches_record() {
        let record = GeneRecord::closed(2, 11);
        let registry = registry_of(&[record]);
        let genes = extract_genes("ccatgaaaccctaga", &registry);
        assert_eq!(genes[0].len(), record.span_len().unwrap());
        assert_eq!(genes[0].sequence, "atgaaaccctag");
    }

    #[test]
    fn test_empty_registry() {
        let registry = GeneRegistry::new();
        assert_eq!(extract_gene_strings("atgtaa", &registry).count(), 0);
        assert!(extract_genes("atgtaa", &registry).is_empty());
    }
}
