use crate::core::models::event::SonificationEvent;
use crate::core::models::ranges::StructuralRangeSet;
use crate::core::models::record::SideChainRecord;
use crate::core::utils::identifiers::{category, hydrophobicity};
use crate::engine::error::EngineError;
use crate::engine::state::TransitionState;

/// Lazily resolves side-chain records into sonification events, one per record,
/// in record order.
///
/// The generator is a pull-based producer: nothing past the requested event is
/// computed, so a slow consumer naturally backpressures the pass and the
/// sequence can be abandoned mid-iteration without side effects. An unknown
/// residue code aborts the remainder of the sequence; after yielding the error
/// the iterator is fused.
pub struct EventGenerator<'a> {
    records: &'a [SideChainRecord],
    ranges: &'a StructuralRangeSet,
    state: TransitionState,
    cursor: usize,
    failed: bool,
}

impl<'a> EventGenerator<'a> {
    pub fn new(records: &'a [SideChainRecord], ranges: &'a StructuralRangeSet) -> Self {
        Self {
            records,
            ranges,
            state: TransitionState::new(),
            cursor: 0,
            failed: false,
        }
    }

    fn resolve(&mut self, record: &SideChainRecord) -> Result<SonificationEvent, EngineError> {
        let unknown = || EngineError::UnknownResidue {
            code: record.amino_acid.clone(),
            site: record.site,
        };
        let hydrophobicity = hydrophobicity(&record.amino_acid).ok_or_else(unknown)?;
        let category = category(&record.amino_acid).ok_or_else(unknown)?;

        Ok(SonificationEvent {
            hydrophobicity,
            category,
            structure_type: self.ranges.classify(record.site),
            b_factor: record.b_factor,
            new_chain: self.state.observe_chain(record.chain),
            new_asym: self.state.observe_asym(record.asym),
            new_entity: self.state.observe_entity(record.entity),
        })
    }
}

impl Iterator for EventGenerator<'_> {
    type Item = Result<SonificationEvent, EngineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let record = self.records.get(self.cursor)?;
        self.cursor += 1;

        let result = self.resolve(record);
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = self.records.len() - self.cursor;
        (0, Some(remaining))
    }
}
