use crate::core::io::cif::CifFile;
use crate::core::models::event::{ResidueEntry, SonificationEvent};
use crate::core::models::ranges::StructuralRangeSet;
use crate::core::models::record::SideChainRecord;
use crate::engine::error::EngineError;
use crate::engine::generator::EventGenerator;
use std::path::Path;
use tracing::{info, instrument};

/// The loaded, immutable inputs of one sonification pass: the ordered side-chain
/// records and the secondary-structure range sets derived from the same file.
#[derive(Debug, Clone)]
pub struct SonificationRun {
    pub records: Vec<SideChainRecord>,
    pub ranges: StructuralRangeSet,
}

/// Loads a structure file and prepares it for event generation.
///
/// The loader completes fully before any event can be generated; the range sets
/// must be populated before the first membership test runs.
#[instrument(skip_all, name = "sonification_load")]
pub fn load<P: AsRef<Path>>(path: P) -> Result<SonificationRun, EngineError> {
    let (records, ranges) = CifFile::load(path)?;
    info!(
        records = records.len(),
        helix_sites = ranges.helix_len(),
        sheet_sites = ranges.sheet_len(),
        "Structure file loaded."
    );
    Ok(SonificationRun { records, ranges })
}

impl SonificationRun {
    /// Starts a fresh generation pass over the records.
    ///
    /// Each call carries an independent transition state, so repeated passes
    /// over the same run yield identical sequences.
    pub fn events(&self) -> EventGenerator<'_> {
        EventGenerator::new(&self.records, &self.ranges)
    }

    /// Resolves the full event sequence eagerly.
    pub fn collect_events(&self) -> Result<Vec<SonificationEvent>, EngineError> {
        self.events().collect()
    }

    /// Produces the serialization-facing entries, one per record, pairing each
    /// record's identity fields with its resolved classification.
    pub fn residue_entries(&self) -> Result<Vec<ResidueEntry>, EngineError> {
        self.records
            .iter()
            .zip(self.events())
            .map(|(record, event)| {
                let event = event?;
                Ok(ResidueEntry {
                    site: record.site,
                    asym: record.asym,
                    entity: record.entity,
                    structure_type: event.structure_type.code(),
                    category: event.category.code(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::event::StructureType;
    use std::io::Write;

    const STRUCTURE: &str = "\
data_demo
HELX_P 1 SER A 2 10 ? GLY A 12 ?
#
_struct_sheet_range.end_auth_seq_id
A 1 LEU A 20 ? VAL A 24
#
ATOM 11 C CG1 . ILE A 1 3 ? 10.1 21.4 11.0 1.00 25.50 ? 11 ILE A CG1 1
ATOM 12 C CA . ILE A 1 3 ? 11.2 20.3 10.5 1.00 18.20 ? 11 ILE A CA 1
ATOM 22 O OG . SER A 1 3 ? 12.0 22.9 12.3 1.00 30.10 ? 22 SER A OG 1
ATOM 35 N NZ . LYS A 2 4 ? 14.7 25.1 13.8 1.00 41.00 ? 35 LYS A NZ 1
";

    fn write_structure() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(STRUCTURE.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_produces_one_record_per_side_chain_atom() {
        let file = write_structure();
        let run = load(file.path()).unwrap();
        assert_eq!(run.records.len(), 3);
    }

    #[test]
    fn events_classify_against_header_declared_ranges() {
        let file = write_structure();
        let run = load(file.path()).unwrap();
        let events = run.collect_events().unwrap();
        assert_eq!(events.len(), 3);
        // Site 11 falls in the declared helix 10-12, site 22 in sheet 20-24.
        assert_eq!(events[0].structure_type, StructureType::Helix);
        assert_eq!(events[1].structure_type, StructureType::Sheet);
        assert_eq!(events[2].structure_type, StructureType::Loop);
    }

    #[test]
    fn repeated_passes_are_identical() {
        let file = write_structure();
        let run = load(file.path()).unwrap();
        let first = run.collect_events().unwrap();
        let second = run.collect_events().unwrap();
        assert_eq!(first, second);
        assert!(first[0].new_chain && first[0].new_asym && first[0].new_entity);
    }

    #[test]
    fn residue_entries_pair_identity_with_classification() {
        let file = write_structure();
        let run = load(file.path()).unwrap();
        let entries = run.residue_entries().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].site, 11);
        assert_eq!(entries[0].structure_type, 0);
        assert_eq!(entries[0].category, 1);
        assert_eq!(entries[2].site, 35);
        assert_eq!(entries[2].asym, 'A');
        assert_eq!(entries[2].entity, 2);
        assert_eq!(entries[2].structure_type, 2);
        assert_eq!(entries[2].category, 3);
    }

    #[test]
    fn load_surfaces_unreadable_paths() {
        assert!(load("/definitely/not/here.cif").is_err());
    }
}
