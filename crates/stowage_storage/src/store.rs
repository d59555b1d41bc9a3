//! The bulk-read seam between storage and the engine.

use stowage_foundation::Result;

use crate::record::{Container, Furniture, Item, Space};
use crate::snapshot::Snapshot;

/// Bulk reads over the inventory store.
///
/// Each method returns the complete, unfiltered row set for one entity kind
/// in ascending-id order. Implementations backed by unordered storage must
/// sort before returning; the tree's deterministic ordering depends on it.
///
/// Read failure (store unreachable or corrupt) surfaces as
/// [`ErrorKind::StoreUnavailable`](stowage_foundation::ErrorKind::StoreUnavailable),
/// which callers must keep distinct from a legitimately empty row set.
pub trait InventoryStore {
    /// Reads every Space row.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the read cannot be completed.
    fn spaces(&self) -> Result<Vec<Space>>;

    /// Reads every Furniture row.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the read cannot be completed.
    fn furnitures(&self) -> Result<Vec<Furniture>>;

    /// Reads every Container row.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the read cannot be completed.
    fn containers(&self) -> Result<Vec<Container>>;

    /// Reads every Item row.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the read cannot be completed.
    fn items(&self) -> Result<Vec<Item>>;

    /// Pulls all four record sets once and packages them as a [`Snapshot`].
    ///
    /// No cross-table transactional guarantee is implied; the snapshot is
    /// whatever the four reads observed. Inventory classification is
    /// advisory, so a torn read across tables only shifts which rows report
    /// as stray until the next call.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if any of the four reads fails.
    fn snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            spaces: self.spaces()?,
            furnitures: self.furnitures()?,
            containers: self.containers()?,
            items: self.items()?,
        })
    }
}
