//! Data structures shared across the sonification pipeline.
//!
//! Everything here is immutable once constructed: the loader builds records and
//! range sets, the engine reads them and produces events.

pub mod event;
pub mod ranges;
pub mod record;
