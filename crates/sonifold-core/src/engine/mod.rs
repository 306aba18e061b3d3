//! # Engine Module
//!
//! The stateful layer of the library: a single linear pass over the parsed
//! side-chain records that resolves each one into a sonification event. The only
//! mutable state is the transition tracker, owned exclusively by the generator
//! for the duration of one pass.

pub mod error;
pub mod generator;
pub mod state;
