//! Chemical classification utilities used throughout the pipeline.

pub mod identifiers;
