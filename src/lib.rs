//! Stowage - home-inventory containment engine
//!
//! This crate re-exports all layers of the Stowage system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: stowage_engine     — Tree assembly, integrity classification
//! Layer 1: stowage_storage    — Records, bulk-read trait, in-memory store
//! Layer 0: stowage_foundation — Typed record ids, error types
//! ```

pub use stowage_engine as engine;
pub use stowage_foundation as foundation;
pub use stowage_storage as storage;
