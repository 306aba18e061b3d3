use serde::Serialize;

/// Local secondary-structure class covering a residue position.
///
/// The wire codes (0/1/2) are a fixed contract with the downstream audio and
/// serialization consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureType {
    Helix,
    Sheet,
    Loop,
}

impl StructureType {
    pub fn code(self) -> u8 {
        match self {
            StructureType::Helix => 0,
            StructureType::Sheet => 1,
            StructureType::Loop => 2,
        }
    }
}

/// Chemical class of an amino acid, as used by the sound design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueCategory {
    Aromatic,
    Aliphatic,
    Polar,
    Charged,
    Unique,
}

impl ResidueCategory {
    pub fn code(self) -> u8 {
        match self {
            ResidueCategory::Aromatic => 0,
            ResidueCategory::Aliphatic => 1,
            ResidueCategory::Polar => 2,
            ResidueCategory::Charged => 3,
            ResidueCategory::Unique => 4,
        }
    }
}

/// One fully-resolved sonification event, produced per side-chain record.
///
/// The three `new_*` flags are true only on the event where the corresponding
/// field differs from the immediately preceding event's value; they are always
/// present, never omitted, so the transport can forward them unconditionally.
#[derive(Debug, Clone, PartialEq)]
pub struct SonificationEvent {
    pub hydrophobicity: i32,
    pub category: ResidueCategory,
    pub structure_type: StructureType,
    pub b_factor: f64,
    pub new_chain: bool,
    pub new_asym: bool,
    pub new_entity: bool,
}

/// The interchange record handed to the serialization collaborator, one per
/// processed residue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResidueEntry {
    pub site: i64,
    pub asym: char,
    pub entity: u32,
    #[serde(rename = "structType")]
    pub structure_type: u8,
    pub category: u8,
}
