//! The four inventory record types.
//!
//! Records are plain rows as a relational store would hand them back:
//! an id, a name, and nullable parent-reference columns. Nothing here
//! validates that a parent reference resolves - a Furniture may point at a
//! Space that was deleted yesterday. Resolution is the engine's job.

use stowage_foundation::{ContainerId, FurnitureId, ItemId, SpaceId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A Space: the top-level containment root (room or zone).
///
/// Spaces have no parent reference and are always valid roots.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Space {
    /// Record id.
    pub id: SpaceId,
    /// Display name.
    pub name: String,
}

impl Space {
    /// Creates a space record.
    #[must_use]
    pub fn new(id: SpaceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A Furniture: the optional second containment level, anchored to a Space.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Furniture {
    /// Record id.
    pub id: FurnitureId,
    /// Display name.
    pub name: String,
    /// The Space this furniture claims to stand in, if any.
    pub space: Option<SpaceId>,
}

impl Furniture {
    /// Creates an unanchored furniture record.
    #[must_use]
    pub fn new(id: FurnitureId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            space: None,
        }
    }

    /// Anchors the furniture to a Space.
    #[must_use]
    pub fn with_space(mut self, space: SpaceId) -> Self {
        self.space = Some(space);
        self
    }
}

/// A Container: a box or shelf, anchored either directly to a Space or to a
/// Furniture.
///
/// The two anchors are intended to be mutually exclusive, but storage does
/// not enforce that; a row with both set (or both null) is representable and
/// resolved deterministically by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container {
    /// Record id.
    pub id: ContainerId,
    /// Display name.
    pub name: String,
    /// Direct Space anchor, if any.
    pub space: Option<SpaceId>,
    /// Furniture anchor, if any.
    pub furniture: Option<FurnitureId>,
}

impl Container {
    /// Creates an unanchored container record.
    #[must_use]
    pub fn new(id: ContainerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            space: None,
            furniture: None,
        }
    }

    /// Anchors the container directly to a Space.
    #[must_use]
    pub fn with_space(mut self, space: SpaceId) -> Self {
        self.space = Some(space);
        self
    }

    /// Anchors the container to a Furniture.
    #[must_use]
    pub fn with_furniture(mut self, furniture: FurnitureId) -> Self {
        self.furniture = Some(furniture);
        self
    }
}

/// An Item: the leaf entity, anchored to a Container.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Record id.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// How many of this item the container holds.
    pub quantity: u32,
    /// The Container this item claims to sit in, if any.
    pub container: Option<ContainerId>,
}

impl Item {
    /// Creates an unanchored item record with the given quantity.
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            container: None,
        }
    }

    /// Anchors the item to a Container.
    #[must_use]
    pub fn with_container(mut self, container: ContainerId) -> Self {
        self.container = Some(container);
        self
    }
}
