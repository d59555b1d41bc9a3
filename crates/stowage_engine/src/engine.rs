//! The engine facade: one snapshot per call, pure computation after.

use stowage_foundation::Result;
use stowage_storage::{InventoryStore, Snapshot};

use crate::integrity::{classify, OrphanReport};
use crate::tree::{assemble, SpaceNode};

/// Read-only facade over an [`InventoryStore`].
///
/// Each call pulls exactly one fresh [`Snapshot`] and computes from it; no
/// result is cached across calls, so a parent deleted between two calls is
/// reflected by the very next one. The engine holds no mutable state and
/// both entry points take `&self`, so concurrent callers need no
/// coordination.
#[derive(Clone, Debug, Default)]
pub struct InventoryEngine<S> {
    store: S,
}

impl<S: InventoryStore> InventoryEngine<S> {
    /// Wraps a store.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrows the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutably borrows the underlying store.
    ///
    /// The engine itself never mutates; this exists so an owner embedding
    /// the store inside the engine can still apply external lifecycle
    /// changes between calls.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Assembles the containment forest from a fresh snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the bulk read fails.
    pub fn tree(&self) -> Result<Vec<SpaceNode>> {
        let snapshot = self.store.snapshot()?;
        Ok(assemble(&snapshot))
    }

    /// Classifies every row of a fresh snapshot, returning the stray ones.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the bulk read fails.
    pub fn orphans(&self) -> Result<OrphanReport> {
        let snapshot = self.store.snapshot()?;
        Ok(classify(&snapshot))
    }

    /// Pulls one snapshot without computing anything, for callers that want
    /// to run both computations over the exact same state.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the bulk read fails.
    pub fn snapshot(&self) -> Result<Snapshot> {
        self.store.snapshot()
    }
}
