use thiserror::Error;

use crate::core::io::cif::StructureError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Structure file error: {source}")]
    Structure {
        #[from]
        source: StructureError,
    },

    #[error("Unknown residue code '{code}' at site {site}: not covered by the lookup tables")]
    UnknownResidue { code: String, site: i64 },
}
