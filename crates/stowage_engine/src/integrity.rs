//! Referential-integrity classification.
//!
//! Classifies every non-Space row of a snapshot as well-rooted or stray.
//! Runs as three ordered passes - Furniture, then Container, then Item -
//! because each rule depends on the previous pass's verdicts: a Container
//! anchored to a stray Furniture is stray, an Item in a stray Container is
//! stray. Each pass hands the next one a set of known-bad ids; there is no
//! recursive walk.
//!
//! Strayness is a data outcome, not an error. The classifier never mutates
//! anything and never fails.

use std::collections::HashSet;

use stowage_foundation::{ContainerId, FurnitureId, ItemId, SpaceId};
use stowage_storage::{Container, Furniture, Item, Snapshot};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The stray rows of one snapshot, one disjoint set per entity kind.
///
/// Spaces never appear: they are always valid roots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrphanReport {
    /// Furniture whose Space reference is null or does not resolve.
    pub furnitures: Vec<Furniture>,
    /// Containers with no resolvable anchor.
    pub containers: Vec<Container>,
    /// Items whose Container reference is null, dangling, or stray.
    pub items: Vec<Item>,
}

impl OrphanReport {
    /// Total number of stray rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.furnitures.len() + self.containers.len() + self.items.len()
    }

    /// Returns true if every row of the snapshot was well-rooted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Pass 1: stray Furniture ids.
///
/// A Furniture is stray iff its `space` is null or names no existing Space.
#[must_use]
pub fn stray_furniture_ids(
    furnitures: &[Furniture],
    space_ids: &HashSet<SpaceId>,
) -> HashSet<FurnitureId> {
    furnitures
        .iter()
        .filter(|furniture| match furniture.space {
            Some(id) => !space_ids.contains(&id),
            None => true,
        })
        .map(|furniture| furniture.id)
        .collect()
}

/// Pass 2: stray Container ids, given pass 1's verdicts.
///
/// Anchors resolve with literal precedence inherited from the original
/// behavior: a `space` that resolves makes the Container well-rooted on its
/// own, even when `furniture` is simultaneously set to a dangling id. A
/// `space` that is set but does not resolve makes it stray outright. Only
/// when `space` is null does the `furniture` anchor get consulted, and then
/// it must name a Furniture that exists and is not itself stray.
#[must_use]
pub fn stray_container_ids(
    containers: &[Container],
    space_ids: &HashSet<SpaceId>,
    furniture_ids: &HashSet<FurnitureId>,
    stray_furnitures: &HashSet<FurnitureId>,
) -> HashSet<ContainerId> {
    containers
        .iter()
        .filter(|container| match (container.space, container.furniture) {
            (Some(space), _) => !space_ids.contains(&space),
            (None, Some(furniture)) => {
                !furniture_ids.contains(&furniture) || stray_furnitures.contains(&furniture)
            }
            (None, None) => true,
        })
        .map(|container| container.id)
        .collect()
}

/// Pass 3: stray Item ids, given pass 2's verdicts.
///
/// An Item is stray iff its `container` is null, names no existing
/// Container, or names one that pass 2 classified stray.
#[must_use]
pub fn stray_item_ids(
    items: &[Item],
    container_ids: &HashSet<ContainerId>,
    stray_containers: &HashSet<ContainerId>,
) -> HashSet<ItemId> {
    items
        .iter()
        .filter(|item| match item.container {
            Some(id) => !container_ids.contains(&id) || stray_containers.contains(&id),
            None => true,
        })
        .map(|item| item.id)
        .collect()
}

/// Classifies one snapshot, returning every stray row.
///
/// Reported rows keep the snapshot's row order. The computation is pure:
/// classifying an unchanged snapshot twice yields identical reports.
#[must_use]
pub fn classify(snapshot: &Snapshot) -> OrphanReport {
    let space_ids: HashSet<SpaceId> = snapshot.spaces.iter().map(|space| space.id).collect();
    let furniture_ids: HashSet<FurnitureId> = snapshot
        .furnitures
        .iter()
        .map(|furniture| furniture.id)
        .collect();
    let container_ids: HashSet<ContainerId> = snapshot
        .containers
        .iter()
        .map(|container| container.id)
        .collect();

    let stray_furnitures = stray_furniture_ids(&snapshot.furnitures, &space_ids);
    let stray_containers = stray_container_ids(
        &snapshot.containers,
        &space_ids,
        &furniture_ids,
        &stray_furnitures,
    );
    let stray_items = stray_item_ids(&snapshot.items, &container_ids, &stray_containers);

    OrphanReport {
        furnitures: snapshot
            .furnitures
            .iter()
            .filter(|furniture| stray_furnitures.contains(&furniture.id))
            .cloned()
            .collect(),
        containers: snapshot
            .containers
            .iter()
            .filter(|container| stray_containers.contains(&container.id))
            .cloned()
            .collect(),
        items: snapshot
            .items
            .iter()
            .filter(|item| stray_items.contains(&item.id))
            .cloned()
            .collect(),
    }
}
