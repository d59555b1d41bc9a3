//! Containment-tree assembly and referential-integrity classification.
//!
//! This crate provides:
//! - [`tree::assemble`] - nests one snapshot into Space-rooted containment trees
//! - [`integrity::classify`] - three-pass stray classification over the same snapshot
//! - [`InventoryEngine`] - the facade that pulls one snapshot per call
//!
//! Both computations are pure, synchronous, and read-only; dangling parent
//! references are data outcomes, never errors.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod engine;
pub mod integrity;
pub mod tree;

pub use engine::InventoryEngine;
pub use integrity::{
    classify, stray_container_ids, stray_furniture_ids, stray_item_ids, OrphanReport,
};
pub use tree::{assemble, ContainerNode, FurnitureNode, SpaceNode};
