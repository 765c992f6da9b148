//! The collection of collections.

use crate::collection::{Collection, GameCollection};
use crate::error::ModelError;
use crate::field::{CollectionField, ItemField};
use crate::render;

/// Name of the top-level container; also the document marker on disk.
pub const MANAGER_NAME: &str = "manager";

/// Name of the collection synthesized whenever none exist.
pub const BASE_COLLECTION: &str = "base";

/// Owns every collection and tracks which one is active.
///
/// Two structural invariants are repaired after every mutation, not just
/// at startup: at least one collection always exists (an empty manager
/// grows a `"base"` collection), and the active index always points at
/// one of the collections. Callers can therefore always ask for the
/// active collection.
#[derive(Debug)]
pub struct Manager {
    collections: Collection<GameCollection>,
    active: usize,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    pub fn new() -> Self {
        let mut manager = Self {
            collections: Collection::new(MANAGER_NAME),
            active: 0,
        };
        manager.repair();
        manager
    }

    /// Rebuild a manager from loaded collections.
    ///
    /// Collections with duplicate names are skipped with a warning
    /// rather than failing the whole load.
    pub fn from_collections(collections: Vec<GameCollection>) -> Self {
        let mut manager = Self {
            collections: Collection::new(MANAGER_NAME),
            active: 0,
        };
        for collection in collections {
            if let Err(err) = manager.collections.add(collection) {
                log::warn!("skipping collection while loading: {err}");
            }
        }
        manager.repair();
        manager
    }

    pub fn collections(&self) -> &Collection<GameCollection> {
        &self.collections
    }

    /// Index of the active collection.
    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &GameCollection {
        self.collections
            .item(self.active)
            .expect("active index is repaired after every mutation")
    }

    pub fn active_mut(&mut self) -> &mut GameCollection {
        self.collections
            .item_mut(self.active)
            .expect("active index is repaired after every mutation")
    }

    /// Make the collection `key` resolves to the active one.
    pub fn select_active(&mut self, key: &str) -> Result<(), ModelError> {
        self.active = self.collections.position(key)?;
        Ok(())
    }

    /// Create an empty collection named `name` and add it.
    pub fn add_collection(&mut self, name: &str) -> Result<(), ModelError> {
        if !CollectionField::Name.validates(name) {
            return Err(ModelError::invalid_value(CollectionField::Name.name(), name));
        }
        self.collections.add(GameCollection::new(name))?;
        self.repair();
        Ok(())
    }

    /// Remove and return the collection `key` resolves to.
    ///
    /// Removing the active collection reselects the first remaining one;
    /// removing a collection before it keeps the same collection active.
    pub fn remove_collection(&mut self, key: &str) -> Result<GameCollection, ModelError> {
        let index = self.collections.position(key)?;
        let removed = self.collections.remove(key)?;
        if index < self.active {
            self.active -= 1;
        } else if index == self.active {
            self.active = 0;
        }
        self.repair();
        Ok(removed)
    }

    /// Rename the collection `key` resolves to. Numeric names are
    /// rejected and names stay unique.
    pub fn rename_collection(&mut self, key: &str, name: &str) -> Result<(), ModelError> {
        self.collections
            .edit(key, CollectionField::Name.name(), name)
    }

    /// Render every collection in full: banner plus indexed game table.
    pub fn render_all(&self) -> String {
        self.collections
            .iter()
            .map(|collection| {
                format!(
                    "{}{}",
                    render::banner(&format!("Collection: {}", collection.name())),
                    collection.render(&[]).text
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Restore the structural invariants (see the type docs).
    fn repair(&mut self) {
        if self.collections.is_empty() {
            self.collections
                .add(GameCollection::new(BASE_COLLECTION))
                .expect("an empty collection accepts any item");
        }
        if self.active >= self.collections.len() {
            self.active = 0;
        }
    }
}

#[cfg(test)]
#[path = "tests/manager_tests.rs"]
mod tests;
