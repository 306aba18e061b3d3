/// Tracks the previously observed chain, asym, and entity values across one
/// generation pass.
///
/// A fresh state holds `None` in every slot, which can never compare equal to a
/// real field value, so the very first record always reports all three segment
/// starts. Each observation updates the slot it was compared against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionState {
    prev_chain: Option<u32>,
    prev_asym: Option<char>,
    prev_entity: Option<u32>,
}

impl TransitionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares against the previous chain, records the new value, and reports
    /// whether a new chain segment starts here.
    pub fn observe_chain(&mut self, chain: u32) -> bool {
        let changed = self.prev_chain != Some(chain);
        self.prev_chain = Some(chain);
        changed
    }

    pub fn observe_asym(&mut self, asym: char) -> bool {
        let changed = self.prev_asym != Some(asym);
        self.prev_asym = Some(asym);
        changed
    }

    pub fn observe_entity(&mut self, entity: u32) -> bool {
        let changed = self.prev_entity != Some(entity);
        self.prev_entity = Some(entity);
        changed
    }
}
