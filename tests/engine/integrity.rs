//! Integration tests for integrity classification.
//!
//! The three passes are also exercised individually; each stage takes the
//! previous stage's bad-id set as a plain argument.

use std::collections::HashSet;

use stowage::engine::{classify, stray_container_ids, stray_furniture_ids, stray_item_ids};
use stowage::foundation::{ContainerId, FurnitureId, ItemId, SpaceId};
use stowage::storage::{Container, Furniture, Item, Snapshot, Space};

// =============================================================================
// Staged Passes
// =============================================================================

#[test]
fn stages_compose_through_bad_id_sets() {
    let spaces: HashSet<SpaceId> = [SpaceId::new(1)].into_iter().collect();
    let furnitures = vec![
        Furniture::new(FurnitureId::new(5), "Rooted").with_space(SpaceId::new(1)),
        Furniture::new(FurnitureId::new(6), "Adrift"),
    ];
    let containers = vec![
        Container::new(ContainerId::new(10), "On rooted").with_furniture(FurnitureId::new(5)),
        Container::new(ContainerId::new(11), "On adrift").with_furniture(FurnitureId::new(6)),
    ];
    let items = vec![
        Item::new(ItemId::new(100), "Kept", 1).with_container(ContainerId::new(10)),
        Item::new(ItemId::new(101), "Stray", 1).with_container(ContainerId::new(11)),
    ];

    let bad_furniture = stray_furniture_ids(&furnitures, &spaces);
    assert_eq!(bad_furniture.len(), 1);

    let furniture_ids = furnitures.iter().map(|f| f.id).collect();
    let bad_containers =
        stray_container_ids(&containers, &spaces, &furniture_ids, &bad_furniture);
    assert!(bad_containers.contains(&ContainerId::new(11)));
    assert!(!bad_containers.contains(&ContainerId::new(10)));

    let container_ids = containers.iter().map(|c| c.id).collect();
    let bad_items = stray_item_ids(&items, &container_ids, &bad_containers);
    assert!(bad_items.contains(&ItemId::new(101)));
    assert!(!bad_items.contains(&ItemId::new(100)));
}

#[test]
fn a_stage_with_no_bad_inputs_reports_only_local_breaks() {
    let items = vec![
        Item::new(ItemId::new(100), "Adrift", 1),
        Item::new(ItemId::new(101), "Dangling", 1).with_container(ContainerId::new(999)),
    ];
    let container_ids: HashSet<ContainerId> = HashSet::new();

    let bad = stray_item_ids(&items, &container_ids, &HashSet::new());
    assert_eq!(bad.len(), 2);
}

// =============================================================================
// Full Classification
// =============================================================================

#[test]
fn spaces_never_classify_as_stray() {
    // Even a store of nothing but spaces reports no orphans.
    let snapshot = Snapshot {
        spaces: vec![
            Space::new(SpaceId::new(1), "Salón"),
            Space::new(SpaceId::new(2), "Garaje"),
        ],
        ..Snapshot::new()
    };

    assert!(classify(&snapshot).is_empty());
}

#[test]
fn stray_sets_are_disjoint_and_complete() {
    let snapshot = Snapshot {
        spaces: vec![Space::new(SpaceId::new(1), "Salón")],
        furnitures: vec![
            Furniture::new(FurnitureId::new(5), "Rooted").with_space(SpaceId::new(1)),
            Furniture::new(FurnitureId::new(6), "Adrift"),
        ],
        containers: vec![
            Container::new(ContainerId::new(10), "Rooted").with_space(SpaceId::new(1)),
            Container::new(ContainerId::new(13), "No anchor"),
        ],
        items: vec![
            Item::new(ItemId::new(100), "Rooted", 1).with_container(ContainerId::new(10)),
            Item::new(ItemId::new(101), "In stray box", 1).with_container(ContainerId::new(13)),
        ],
    };

    let report = classify(&snapshot);
    assert_eq!(report.furnitures.len(), 1);
    assert_eq!(report.furnitures[0].id, FurnitureId::new(6));
    assert_eq!(report.containers.len(), 1);
    assert_eq!(report.containers[0].id, ContainerId::new(13));
    assert_eq!(report.items.len(), 1);
    assert_eq!(report.items[0].id, ItemId::new(101));
}

#[test]
fn conflicting_anchors_resolve_without_error() {
    // Resolving space, dangling furniture: the space anchor wins and the
    // container is well-rooted.
    let snapshot = Snapshot {
        spaces: vec![Space::new(SpaceId::new(1), "Salón")],
        containers: vec![
            Container::new(ContainerId::new(10), "Crate")
                .with_space(SpaceId::new(1))
                .with_furniture(FurnitureId::new(999)),
        ],
        ..Snapshot::new()
    };

    assert!(classify(&snapshot).is_empty());
}

#[test]
fn space_anchor_is_checked_first_when_both_are_set() {
    // A dangling space column marks the container stray even though its
    // furniture column resolves.
    let snapshot = Snapshot {
        spaces: vec![Space::new(SpaceId::new(1), "Salón")],
        furnitures: vec![
            Furniture::new(FurnitureId::new(5), "Bookshelf").with_space(SpaceId::new(1)),
        ],
        containers: vec![
            Container::new(ContainerId::new(10), "Crate")
                .with_space(SpaceId::new(999))
                .with_furniture(FurnitureId::new(5)),
        ],
        ..Snapshot::new()
    };

    let report = classify(&snapshot);
    assert_eq!(report.containers.len(), 1);
}

#[test]
fn classification_is_pure() {
    let snapshot = Snapshot {
        furnitures: vec![Furniture::new(FurnitureId::new(6), "Adrift")],
        items: vec![Item::new(ItemId::new(100), "Adrift", 1)],
        ..Snapshot::new()
    };

    let first = classify(&snapshot);
    let second = classify(&snapshot);
    assert_eq!(first, second);
}
