use crate::{CatalogItem, CatalogItemId};

/// Saved items keyed by id, in the order they were added.
///
/// Mutations return a new set so the caller can persist it before making it
/// current.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesSet {
    items: Vec<CatalogItem>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from stored items. Later duplicates of an id are dropped.
    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        let mut set = Self::new();
        for item in items {
            if !set.contains(item.id) {
                set.items.push(item);
            }
        }
        set
    }

    pub fn contains(&self, id: CatalogItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn get(&self, id: CatalogItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns the set with `item` appended, or `None` when its id is already present.
    pub fn with_item(&self, item: CatalogItem) -> Option<Self> {
        if self.contains(item.id) {
            return None;
        }
        let mut items = self.items.clone();
        items.push(item);
        Some(Self { items })
    }

    /// Returns the set without `id`, or `None` when it was not present.
    pub fn without(&self, id: CatalogItemId) -> Option<Self> {
        if !self.contains(id) {
            return None;
        }
        let items = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        Some(Self { items })
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
