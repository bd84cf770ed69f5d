use aniepick_core::{CatalogItem, CatalogItemId, FavoritesSet};
use aniepick_logging::{pick_error, pick_info, pick_warn};

use crate::{KeyValueStore, PersistError};

pub const FAVORITES_KEY: &str = "Aniepick_favorites";

/// Durable toggle-set of catalog items.
///
/// Every mutation builds the next set, writes it to the backing store and
/// then makes it current. A failed write is logged and the in-memory set
/// still moves forward.
pub struct FavoritesStore<S> {
    store: S,
    current: FavoritesSet,
    loaded: bool,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: FavoritesSet::new(),
            loaded: false,
        }
    }

    /// Creates the store and reads the persisted set right away.
    pub fn open(store: S) -> Self {
        let mut favorites = Self::new(store);
        favorites.load();
        favorites
    }

    /// Reads the persisted set. Missing or unreadable data yields an empty set.
    pub fn load(&mut self) -> &FavoritesSet {
        self.current = match self.read() {
            Ok(Some(set)) => {
                pick_info!("Loaded {} favorites", set.len());
                set
            }
            Ok(None) => FavoritesSet::new(),
            Err(err) => {
                pick_warn!("Failed to load favorites: {}", err);
                FavoritesSet::new()
            }
        };
        self.loaded = true;
        &self.current
    }

    fn read(&self) -> Result<Option<FavoritesSet>, PersistError> {
        let Some(text) = self.store.get(FAVORITES_KEY)? else {
            return Ok(None);
        };
        let items: Vec<CatalogItem> = serde_json::from_str(&text)?;
        Ok(Some(FavoritesSet::from_items(items)))
    }

    /// Adds `item` unless its id is already saved. Returns whether it was added.
    pub fn add(&mut self, item: CatalogItem) -> bool {
        match self.current.with_item(item) {
            Some(next) => {
                self.publish(next);
                true
            }
            None => false,
        }
    }

    /// Removes `id` if saved. Returns whether it was removed.
    pub fn remove(&mut self, id: CatalogItemId) -> bool {
        match self.current.without(id) {
            Some(next) => {
                self.publish(next);
                true
            }
            None => false,
        }
    }

    /// Removes the item if saved, adds it otherwise. Returns the new membership.
    pub fn toggle(&mut self, item: CatalogItem) -> bool {
        if self.is_favorite(item.id) {
            self.remove(item.id);
            false
        } else {
            self.add(item);
            true
        }
    }

    pub fn clear(&mut self) {
        self.publish(FavoritesSet::new());
    }

    pub fn is_favorite(&self, id: CatalogItemId) -> bool {
        self.current.contains(id)
    }

    pub fn items(&self) -> &[CatalogItem] {
        self.current.items()
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn publish(&mut self, next: FavoritesSet) {
        if let Err(err) = self.write(&next) {
            pick_error!("Failed to save favorites: {}", err);
        }
        self.current = next;
    }

    fn write(&self, set: &FavoritesSet) -> Result<(), PersistError> {
        let text = serde_json::to_string(set.items())?;
        self.store.set(FAVORITES_KEY, &text)
    }
}
