//! # Sonifold Core Library
//!
//! A library for turning macromolecular structure files into ordered sequences of
//! per-residue sonification events, built for the side-chain ("R group") data of
//! protein crystal structures.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`SideChainRecord`,
//!   `SonificationEvent`), the fixed amino-acid lookup tables, and the structure-file
//!   loader.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer walks the parsed record
//!   sequence and resolves each record into a fully-classified event, tracking
//!   chain/asym/entity transitions across the pass.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It ties the `engine` and `core` together to execute a complete sonification run
//!   from a file path, and provides the serialization-facing residue entries.

pub mod core;
pub mod engine;
pub mod workflows;
