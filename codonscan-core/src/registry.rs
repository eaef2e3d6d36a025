//! Append-only store of gene records in detection order.

use std::slice;

use crate::constants::INITIAL_REGISTRY_CAPACITY;
use crate::types::GeneRecord;

/// Ordered collection of [`GeneRecord`]s filled by the scanner.
///
/// Records are kept in the order they were pushed, which is ascending start
/// offset for a scan. Storage grows geometrically; growth never reorders or
/// drops earlier records. There is no way to remove or edit a record once it
/// has been pushed.
///
/// # Examples
///
/// ```rust
/// use codonscan_core::registry::GeneRegistry;
/// use codonscan_core::types::GeneRecord;
///
/// let mut registry = GeneRegistry::new();
/// registry.push(GeneRecord::closed(0, 3));
/// registry.push(GeneRecord::open(7));
///
/// assert_eq!(registry.count(), 2);
/// assert_eq!(registry.terminated().count(), 1);
/// assert_eq!(registry.unterminated_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneRegistry {
    records: Vec<GeneRecord>,
}

impl Default for GeneRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneRegistry {
    /// Creates an empty registry with room for the default number of records
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_REGISTRY_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Appends a record in amortized constant time
    pub fn push(&mut self, record: GeneRecord) {
        self.records.push(record);
    }

    /// Number of records pushed so far, terminated or not
    #[must_use]
    pub fn count(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GeneRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, GeneRecord> {
        self.records.iter()
    }

    /// Records that were paired with a stop codon
    pub fn terminated(&self) -> impl Iterator<Item = &GeneRecord> + '_ {
        self.records.iter().filter(|record| record.is_terminated())
    }

    /// Number of start codons that never found an in-frame stop codon
    #[must_use]
    pub fn unterminated_count(&self) -> usize {
        self.records.len() - self.terminated().count()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[GeneRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a GeneRegistry {
    type Item = &'a GeneRecord;
    type IntoIter = slice::Iter<'a, GeneRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<GeneRecord> for GeneRegistry {
    fn from_iter<I: IntoIterator<Item = GeneRecord>>(iter: I) -> Self {
        let mut registry = Self::new();
        for record in iter {
            registry.push(record);
        }
        registry
    }
}
