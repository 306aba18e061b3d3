//! # Core Module
//!
//! This module provides the fundamental building blocks for structure sonification,
//! serving as the stateless foundation of the library.
//!
//! ## Overview
//!
//! The core module implements the data structures, lookup tables, and file parsing
//! needed to reduce a crystal-structure record file to the per-residue values that
//! drive sonification: side-chain atom records, secondary-structure range sets, and
//! the fixed amino-acid classification tables.
//!
//! ## Architecture
//!
//! - **Data Representation** ([`models`]) - Records, range sets, and event types
//! - **File I/O** ([`io`]) - The positional structure-file loader
//! - **Chemical Knowledge** ([`utils`]) - Backbone-atom and amino-acid classification

pub mod io;
pub mod models;
pub mod utils;
