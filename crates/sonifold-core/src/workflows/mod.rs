//! High-level, user-facing entry points that tie the loader and the engine
//! together into complete sonification procedures.

pub mod sonify;
