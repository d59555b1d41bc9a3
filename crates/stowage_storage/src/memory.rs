//! In-memory inventory store backed by persistent ordered maps.
//!
//! One `im::OrdMap` per entity kind, keyed by record id. Key order gives the
//! ascending-id bulk reads the [`InventoryStore`] contract asks for, and
//! structural sharing makes cloning a table into a snapshot cheap.
//!
//! Mutations follow the lifecycle the engine is built to cope with: rows are
//! created with an optional parent reference, moved by rewriting that
//! reference, and removed without any cascade. Deleting a Space leaves its
//! Furniture pointing at a key that no longer resolves - that is the whole
//! reason the classification pass exists.

use im::OrdMap;

use stowage_foundation::{ContainerId, Error, FurnitureId, ItemId, Result, SpaceId};

use crate::record::{Container, Furniture, Item, Space};
use crate::store::InventoryStore;

/// In-memory store with one ordered table per entity kind.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    spaces: OrdMap<SpaceId, Space>,
    furnitures: OrdMap<FurnitureId, Furniture>,
    containers: OrdMap<ContainerId, Container>,
    items: OrdMap<ItemId, Item>,
}

impl MemoryStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a Space row.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if the id is already present.
    pub fn add_space(&mut self, space: Space) -> Result<()> {
        if self.spaces.contains_key(&space.id) {
            return Err(Error::duplicate_id("space", space.id.get()));
        }
        self.spaces.insert(space.id, space);
        Ok(())
    }

    /// Inserts a Furniture row. The `space` reference is stored verbatim,
    /// resolving or not.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if the id is already present.
    pub fn add_furniture(&mut self, furniture: Furniture) -> Result<()> {
        if self.furnitures.contains_key(&furniture.id) {
            return Err(Error::duplicate_id("furniture", furniture.id.get()));
        }
        self.furnitures.insert(furniture.id, furniture);
        Ok(())
    }

    /// Inserts a Container row. Anchors are stored verbatim; mutual
    /// exclusion is not enforced.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if the id is already present.
    pub fn add_container(&mut self, container: Container) -> Result<()> {
        if self.containers.contains_key(&container.id) {
            return Err(Error::duplicate_id("container", container.id.get()));
        }
        self.containers.insert(container.id, container);
        Ok(())
    }

    /// Inserts an Item row.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if the id is already present.
    pub fn add_item(&mut self, item: Item) -> Result<()> {
        if self.items.contains_key(&item.id) {
            return Err(Error::duplicate_id("item", item.id.get()));
        }
        self.items.insert(item.id, item);
        Ok(())
    }

    /// Rewrites a Furniture's Space reference. The target is not checked for
    /// existence.
    ///
    /// # Errors
    ///
    /// Returns `FurnitureNotFound` if the furniture row does not exist.
    pub fn move_furniture(&mut self, id: FurnitureId, space: Option<SpaceId>) -> Result<()> {
        match self.furnitures.get_mut(&id) {
            Some(furniture) => {
                furniture.space = space;
                Ok(())
            }
            None => Err(Error::furniture_not_found(id)),
        }
    }

    /// Rewrites a Container's anchors. Both columns are set verbatim;
    /// neither target is checked for existence.
    ///
    /// # Errors
    ///
    /// Returns `ContainerNotFound` if the container row does not exist.
    pub fn move_container(
        &mut self,
        id: ContainerId,
        space: Option<SpaceId>,
        furniture: Option<FurnitureId>,
    ) -> Result<()> {
        match self.containers.get_mut(&id) {
            Some(container) => {
                container.space = space;
                container.furniture = furniture;
                Ok(())
            }
            None => Err(Error::container_not_found(id)),
        }
    }

    /// Rewrites an Item's Container reference. The target is not checked
    /// for existence.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if the item row does not exist.
    pub fn move_item(&mut self, id: ItemId, container: Option<ContainerId>) -> Result<()> {
        match self.items.get_mut(&id) {
            Some(item) => {
                item.container = container;
                Ok(())
            }
            None => Err(Error::item_not_found(id)),
        }
    }

    /// Updates an Item's quantity.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if the item row does not exist.
    pub fn set_quantity(&mut self, id: ItemId, quantity: u32) -> Result<()> {
        match self.items.get_mut(&id) {
            Some(item) => {
                item.quantity = quantity;
                Ok(())
            }
            None => Err(Error::item_not_found(id)),
        }
    }

    /// Removes a Space row. Furniture and Containers referencing it are left
    /// untouched and will classify as stray on the next pass.
    ///
    /// # Errors
    ///
    /// Returns `SpaceNotFound` if the row does not exist.
    pub fn remove_space(&mut self, id: SpaceId) -> Result<()> {
        match self.spaces.remove(&id) {
            Some(_) => Ok(()),
            None => Err(Error::space_not_found(id)),
        }
    }

    /// Removes a Furniture row without touching its Containers.
    ///
    /// # Errors
    ///
    /// Returns `FurnitureNotFound` if the row does not exist.
    pub fn remove_furniture(&mut self, id: FurnitureId) -> Result<()> {
        match self.furnitures.remove(&id) {
            Some(_) => Ok(()),
            None => Err(Error::furniture_not_found(id)),
        }
    }

    /// Removes a Container row without touching its Items.
    ///
    /// # Errors
    ///
    /// Returns `ContainerNotFound` if the row does not exist.
    pub fn remove_container(&mut self, id: ContainerId) -> Result<()> {
        match self.containers.remove(&id) {
            Some(_) => Ok(()),
            None => Err(Error::container_not_found(id)),
        }
    }

    /// Removes an Item row.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if the row does not exist.
    pub fn remove_item(&mut self, id: ItemId) -> Result<()> {
        match self.items.remove(&id) {
            Some(_) => Ok(()),
            None => Err(Error::item_not_found(id)),
        }
    }

    /// Looks up a Space row by id.
    #[must_use]
    pub fn space(&self, id: SpaceId) -> Option<&Space> {
        self.spaces.get(&id)
    }

    /// Looks up a Furniture row by id.
    #[must_use]
    pub fn furniture(&self, id: FurnitureId) -> Option<&Furniture> {
        self.furnitures.get(&id)
    }

    /// Looks up a Container row by id.
    #[must_use]
    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(&id)
    }

    /// Looks up an Item row by id.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Total number of rows across all four tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len() + self.furnitures.len() + self.containers.len() + self.items.len()
    }

    /// Returns true if every table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl InventoryStore for MemoryStore {
    fn spaces(&self) -> Result<Vec<Space>> {
        Ok(self.spaces.values().cloned().collect())
    }

    fn furnitures(&self) -> Result<Vec<Furniture>> {
        Ok(self.furnitures.values().cloned().collect())
    }

    fn containers(&self) -> Result<Vec<Container>> {
        Ok(self.containers.values().cloned().collect())
    }

    fn items(&self) -> Result<Vec<Item>> {
        Ok(self.items.values().cloned().collect())
    }
}
