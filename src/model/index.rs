//! Grid position identifier.
//!
//! A `GridIndex` names a slot in the ordered collection: a section plus an
//! item offset within that section. Single-section grids simply use
//! section 0 everywhere.

use std::fmt;

/// Identifier for a position in the ordered collection.
///
/// Comparable and hashable so it can key hash maps and drive the
/// reorder engine's directional scans. Ordering is section-major,
/// then item offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridIndex {
    section: usize,
    item: usize,
}

impl GridIndex {
    /// Create an index from a section and an item offset.
    pub fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }

    /// Create an index in section 0 (single-section lists).
    pub fn item(item: usize) -> Self {
        Self { section: 0, item }
    }

    /// The section this index belongs to.
    pub fn section(&self) -> usize {
        self.section
    }

    /// The item offset within the section.
    pub fn offset(&self) -> usize {
        self.item
    }

    /// The index at `offset` within the same section.
    pub fn with_offset(&self, offset: usize) -> Self {
        Self {
            section: self.section,
            item: offset,
        }
    }
}

impl fmt::Display for GridIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn item_constructor_uses_section_zero() {
        assert_eq!(GridIndex::item(4), GridIndex::new(0, 4));
    }

    #[test]
    fn with_offset_keeps_section() {
        let idx = GridIndex::new(2, 7);
        assert_eq!(idx.with_offset(0), GridIndex::new(2, 0));
    }

    #[test]
    fn ordering_is_section_major() {
        assert!(GridIndex::new(0, 9) < GridIndex::new(1, 0));
        assert!(GridIndex::new(1, 2) < GridIndex::new(1, 3));
    }

    #[test]
    fn hashable_for_set_membership() {
        let mut seen = HashSet::new();
        seen.insert(GridIndex::item(3));
        assert!(seen.contains(&GridIndex::new(0, 3)));
        assert!(!seen.contains(&GridIndex::new(1, 3)));
    }

    #[test]
    fn display_shows_section_and_item() {
        assert_eq!(GridIndex::new(1, 12).to_string(), "[1, 12]");
    }
}
