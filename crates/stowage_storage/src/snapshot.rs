//! Point-in-time snapshot of all four record sets.

use crate::record::{Container, Furniture, Item, Space};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One complete pull of the store: every row of every entity kind, in the
/// store's natural order (ascending id).
///
/// The engine borrows a snapshot per call and holds nothing across calls.
/// A snapshot owns its rows, so it stays coherent even if the store is
/// mutated after the pull - it simply reflects the state visible at read
/// time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    /// All Space rows.
    pub spaces: Vec<Space>,
    /// All Furniture rows.
    pub furnitures: Vec<Furniture>,
    /// All Container rows.
    pub containers: Vec<Container>,
    /// All Item rows.
    pub items: Vec<Item>,
}

impl Snapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of rows across all four record sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len() + self.furnitures.len() + self.containers.len() + self.items.len()
    }

    /// Returns true if the snapshot holds no rows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
