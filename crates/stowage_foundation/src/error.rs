//! Error types for the Stowage system.
//!
//! Uses `thiserror` for ergonomic error definition.
//!
//! Dangling parent references are never errors here: the engine treats them
//! as data outcomes (tree exclusion, stray-set membership). Errors are
//! reserved for the store itself: a failed bulk read, or a mutation
//! addressing a row that does not exist.

use thiserror::Error;

use crate::id::{ContainerId, FurnitureId, ItemId, SpaceId};

/// Result alias used throughout Stowage.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Stowage operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a store-unavailable error.
    ///
    /// This is the only fatal condition the engine knows: the backing store
    /// could not complete a bulk read. It is distinct from an empty result.
    #[must_use]
    pub fn store_unavailable(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::StoreUnavailable(reason.into()))
    }

    /// Creates a space-not-found error.
    #[must_use]
    pub fn space_not_found(id: SpaceId) -> Self {
        Self::new(ErrorKind::SpaceNotFound(id))
    }

    /// Creates a furniture-not-found error.
    #[must_use]
    pub fn furniture_not_found(id: FurnitureId) -> Self {
        Self::new(ErrorKind::FurnitureNotFound(id))
    }

    /// Creates a container-not-found error.
    #[must_use]
    pub fn container_not_found(id: ContainerId) -> Self {
        Self::new(ErrorKind::ContainerNotFound(id))
    }

    /// Creates an item-not-found error.
    #[must_use]
    pub fn item_not_found(id: ItemId) -> Self {
        Self::new(ErrorKind::ItemNotFound(id))
    }

    /// Creates a duplicate-id error.
    #[must_use]
    pub fn duplicate_id(kind: &'static str, raw: u64) -> Self {
        Self::new(ErrorKind::DuplicateId { kind, raw })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The backing store failed a bulk read.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// A mutation addressed a Space that does not exist.
    #[error("no such {0}")]
    SpaceNotFound(SpaceId),

    /// A mutation addressed a Furniture that does not exist.
    #[error("no such {0}")]
    FurnitureNotFound(FurnitureId),

    /// A mutation addressed a Container that does not exist.
    #[error("no such {0}")]
    ContainerNotFound(ContainerId),

    /// A mutation addressed an Item that does not exist.
    #[error("no such {0}")]
    ItemNotFound(ItemId),

    /// An insert reused an id already present in the same table.
    #[error("duplicate {kind} id {raw}")]
    DuplicateId {
        /// Entity kind of the colliding table.
        kind: &'static str,
        /// The raw key that collided.
        raw: u64,
    },
}
