//! Provides input functionality for the structure-file format.
//!
//! The loader consumes plain-text crystal-structure records (already stripped of
//! any binary encoding) and reduces them to the two artifacts the engine needs:
//! the ordered side-chain record sequence and the secondary-structure range sets.

pub mod cif;
