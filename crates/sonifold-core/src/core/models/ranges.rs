use super::event::StructureType;
use std::collections::HashSet;

/// Residue-sequence positions covered by declared secondary-structure ranges.
///
/// Built once per file from `HELX_P` and sheet-range declarations, immutable
/// afterwards. Membership is keyed on residue sequence number (site number), the
/// space in which the header ranges are declared. Well-formed files keep the two
/// sets disjoint, but this is not enforced: classification checks helix first,
/// then sheet, and anything in neither is a loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuralRangeSet {
    helix: HashSet<i64>,
    sheet: HashSet<i64>,
}

impl StructuralRangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks every site in the inclusive range as helix-covered.
    pub fn add_helix_range(&mut self, first: i64, last: i64) {
        self.helix.extend(first..=last);
    }

    /// Marks every site in the inclusive range as sheet-covered.
    pub fn add_sheet_range(&mut self, first: i64, last: i64) {
        self.sheet.extend(first..=last);
    }

    /// Classifies a residue position. Total: every site maps to exactly one class.
    pub fn classify(&self, site: i64) -> StructureType {
        if self.helix.contains(&site) {
            StructureType::Helix
        } else if self.sheet.contains(&site) {
            StructureType::Sheet
        } else {
            StructureType::Loop
        }
    }

    pub fn helix_len(&self) -> usize {
        self.helix.len()
    }

    pub fn sheet_len(&self) -> usize {
        self.sheet.len()
    }
}
