//! Property tests tying the tree assembler to the integrity classifier.
//!
//! Snapshots are generated with unique ascending ids per kind and container
//! anchors used as intended (at most one of the two set). References
//! deliberately range past the generated id pools so danglers are common.

use std::collections::HashSet;

use proptest::prelude::*;

use stowage::engine::{assemble, classify, SpaceNode};
use stowage::foundation::{ContainerId, FurnitureId, ItemId, SpaceId};
use stowage::storage::{Container, Furniture, Item, Snapshot, Space};

fn arb_snapshot() -> impl Strategy<Value = Snapshot> {
    let spaces = proptest::collection::btree_set(1u64..8, 0..5);
    let furnitures =
        proptest::collection::btree_map(10u64..18, proptest::option::of(1u64..10), 0..5);
    let containers = proptest::collection::btree_map(
        20u64..32,
        prop_oneof![
            Just((None::<u64>, None::<u64>)),
            (1u64..10).prop_map(|space| (Some(space), None)),
            (10u64..20).prop_map(|furniture| (None, Some(furniture))),
        ],
        0..8,
    );
    let items = proptest::collection::btree_map(
        40u64..60,
        (proptest::option::of(20u64..34), 0u32..5),
        0..10,
    );

    (spaces, furnitures, containers, items).prop_map(
        |(spaces, furnitures, containers, items)| Snapshot {
            spaces: spaces
                .into_iter()
                .map(|id| Space::new(SpaceId::new(id), format!("space-{id}")))
                .collect(),
            furnitures: furnitures
                .into_iter()
                .map(|(id, space)| Furniture {
                    id: FurnitureId::new(id),
                    name: format!("furniture-{id}"),
                    space: space.map(SpaceId::new),
                })
                .collect(),
            containers: containers
                .into_iter()
                .map(|(id, (space, furniture))| Container {
                    id: ContainerId::new(id),
                    name: format!("container-{id}"),
                    space: space.map(SpaceId::new),
                    furniture: furniture.map(FurnitureId::new),
                })
                .collect(),
            items: items
                .into_iter()
                .map(|(id, (container, quantity))| Item {
                    id: ItemId::new(id),
                    name: format!("item-{id}"),
                    quantity,
                    container: container.map(ContainerId::new),
                })
                .collect(),
        },
    )
}

/// Collects the ids of every row that made it into the forest.
fn tree_ids(
    forest: &[SpaceNode],
) -> (
    HashSet<FurnitureId>,
    HashSet<ContainerId>,
    HashSet<ItemId>,
) {
    let mut furnitures = HashSet::new();
    let mut containers = HashSet::new();
    let mut items = HashSet::new();

    for root in forest {
        for furniture in &root.furnitures {
            furnitures.insert(furniture.furniture.id);
            for container in &furniture.containers {
                containers.insert(container.container.id);
                items.extend(container.items.iter().map(|item| item.id));
            }
        }
        for container in &root.containers {
            containers.insert(container.container.id);
            items.extend(container.items.iter().map(|item| item.id));
        }
    }

    (furnitures, containers, items)
}

proptest! {
    /// Tree membership is the complement of stray-set membership, for every
    /// non-Space row.
    #[test]
    fn tree_and_stray_sets_partition_every_snapshot(snapshot in arb_snapshot()) {
        let forest = assemble(&snapshot);
        let report = classify(&snapshot);

        let (in_furnitures, in_containers, in_items) = tree_ids(&forest);
        let stray_furnitures: HashSet<FurnitureId> =
            report.furnitures.iter().map(|row| row.id).collect();
        let stray_containers: HashSet<ContainerId> =
            report.containers.iter().map(|row| row.id).collect();
        let stray_items: HashSet<ItemId> = report.items.iter().map(|row| row.id).collect();

        for furniture in &snapshot.furnitures {
            prop_assert_ne!(
                in_furnitures.contains(&furniture.id),
                stray_furnitures.contains(&furniture.id),
                "furniture {:?} must be in exactly one of tree / stray set",
                furniture.id
            );
        }
        for container in &snapshot.containers {
            prop_assert_ne!(
                in_containers.contains(&container.id),
                stray_containers.contains(&container.id),
                "container {:?} must be in exactly one of tree / stray set",
                container.id
            );
        }
        for item in &snapshot.items {
            prop_assert_ne!(
                in_items.contains(&item.id),
                stray_items.contains(&item.id),
                "item {:?} must be in exactly one of tree / stray set",
                item.id
            );
        }
    }

    /// Every Space is a root, stray or not elsewhere.
    #[test]
    fn every_space_roots_the_forest(snapshot in arb_snapshot()) {
        let forest = assemble(&snapshot);
        prop_assert_eq!(forest.len(), snapshot.spaces.len());
        for (root, space) in forest.iter().zip(&snapshot.spaces) {
            prop_assert_eq!(root.space.id, space.id);
        }
    }

    /// Classifying an unchanged snapshot twice yields identical reports.
    #[test]
    fn classification_is_idempotent(snapshot in arb_snapshot()) {
        prop_assert_eq!(classify(&snapshot), classify(&snapshot));
    }

    /// Assembly is deterministic over an unchanged snapshot.
    #[test]
    fn assembly_is_idempotent(snapshot in arb_snapshot()) {
        prop_assert_eq!(assemble(&snapshot), assemble(&snapshot));
    }
}
