//! Containment-tree assembly.
//!
//! Turns the flat record sets of one [`Snapshot`] into nested Space-rooted
//! trees. A record appears in the output iff its whole parent chain resolves
//! to an existing Space; anything with a broken chain is silently excluded,
//! along with everything anchored beneath it. No partial attachment.
//!
//! Every parent lookup goes through an id-indexed map built once per call,
//! so assembly is O(S + F + C + I) rather than a rescan per row.

use std::collections::HashMap;

use stowage_foundation::{ContainerId, FurnitureId, SpaceId};
use stowage_storage::{Container, Furniture, Item, Snapshot, Space};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A Space with everything well-rooted beneath it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpaceNode {
    /// The Space row.
    pub space: Space,
    /// Furniture attached to this Space, in row order.
    pub furnitures: Vec<FurnitureNode>,
    /// Containers attached directly to this Space (skipping the Furniture
    /// level), in row order.
    pub containers: Vec<ContainerNode>,
}

impl SpaceNode {
    fn new(space: Space) -> Self {
        Self {
            space,
            furnitures: Vec::new(),
            containers: Vec::new(),
        }
    }
}

/// A Furniture with its attached Containers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FurnitureNode {
    /// The Furniture row.
    pub furniture: Furniture,
    /// Containers attached to this Furniture, in row order.
    pub containers: Vec<ContainerNode>,
}

impl FurnitureNode {
    fn new(furniture: Furniture) -> Self {
        Self {
            furniture,
            containers: Vec::new(),
        }
    }
}

/// A Container with its attached Items.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContainerNode {
    /// The Container row.
    pub container: Container,
    /// Items in this Container, in row order.
    pub items: Vec<Item>,
}

impl ContainerNode {
    fn new(container: Container) -> Self {
        Self {
            container,
            items: Vec::new(),
        }
    }
}

/// Where an attached Container landed in the forest under construction.
#[derive(Copy, Clone)]
struct ContainerSlot {
    /// Index of the owning `SpaceNode`.
    space: usize,
    /// Index of the owning `FurnitureNode` within the Space, if the
    /// container attached via its furniture anchor.
    furniture: Option<usize>,
    /// Index of the `ContainerNode` within its parent's container list.
    container: usize,
}

/// Assembles the containment forest for one snapshot.
///
/// Output order follows the snapshot's row order (ascending id) at every
/// level; no other sort is applied.
///
/// Attachment rules, top down:
///
/// - every Space becomes a root;
/// - a Furniture attaches iff its `space` resolves;
/// - a Container attaches under its Furniture iff that Furniture node itself
///   attached; failing that, it attaches directly under its Space iff
///   `space` resolves; otherwise it is excluded;
/// - an Item attaches iff its Container node made it into the forest.
#[must_use]
pub fn assemble(snapshot: &Snapshot) -> Vec<SpaceNode> {
    let mut roots: Vec<SpaceNode> = snapshot
        .spaces
        .iter()
        .cloned()
        .map(SpaceNode::new)
        .collect();

    let space_slots: HashMap<SpaceId, usize> = snapshot
        .spaces
        .iter()
        .enumerate()
        .map(|(slot, space)| (space.id, slot))
        .collect();

    // Furniture pass: attach each row under its Space, remembering where
    // attached furniture landed so containers can resolve it in O(1).
    let mut furniture_slots: HashMap<FurnitureId, (usize, usize)> = HashMap::new();
    for furniture in &snapshot.furnitures {
        let Some(space_slot) = furniture
            .space
            .and_then(|id| space_slots.get(&id).copied())
        else {
            continue;
        };
        let slot = roots[space_slot].furnitures.len();
        roots[space_slot]
            .furnitures
            .push(FurnitureNode::new(furniture.clone()));
        furniture_slots.insert(furniture.id, (space_slot, slot));
    }

    // Container pass: furniture anchor first, falling through to the direct
    // Space anchor when the furniture node never made it into the forest.
    let mut container_slots: HashMap<ContainerId, ContainerSlot> = HashMap::new();
    for container in &snapshot.containers {
        if let Some((space_slot, furniture_slot)) = container
            .furniture
            .and_then(|id| furniture_slots.get(&id).copied())
        {
            let parent = &mut roots[space_slot].furnitures[furniture_slot].containers;
            container_slots.insert(
                container.id,
                ContainerSlot {
                    space: space_slot,
                    furniture: Some(furniture_slot),
                    container: parent.len(),
                },
            );
            parent.push(ContainerNode::new(container.clone()));
        } else if let Some(space_slot) = container
            .space
            .and_then(|id| space_slots.get(&id).copied())
        {
            let parent = &mut roots[space_slot].containers;
            container_slots.insert(
                container.id,
                ContainerSlot {
                    space: space_slot,
                    furniture: None,
                    container: parent.len(),
                },
            );
            parent.push(ContainerNode::new(container.clone()));
        }
    }

    // Item pass.
    for item in &snapshot.items {
        let Some(slot) = item
            .container
            .and_then(|id| container_slots.get(&id).copied())
        else {
            continue;
        };
        let node = match slot.furniture {
            Some(furniture_slot) => {
                &mut roots[slot.space].furnitures[furniture_slot].containers[slot.container]
            }
            None => &mut roots[slot.space].containers[slot.container],
        };
        node.items.push(item.clone());
    }

    roots
}
