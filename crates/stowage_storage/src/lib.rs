//! Inventory records, bulk-read store trait, and in-memory store for Stowage.
//!
//! This crate provides:
//! - [`Space`], [`Furniture`], [`Container`], [`Item`] - the four record types
//! - [`InventoryStore`] - the bulk-read seam between storage and the engine
//! - [`Snapshot`] - one point-in-time pull of all four record sets
//! - [`MemoryStore`] - an in-memory store backed by persistent ordered maps

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod memory;
pub mod record;
pub mod snapshot;
pub mod store;

pub use memory::MemoryStore;
pub use record::{Container, Furniture, Item, Space};
pub use snapshot::Snapshot;
pub use store::InventoryStore;
