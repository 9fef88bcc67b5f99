//! Creative inventory catalog.

use blockforge_core::RegistryKey;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One entry offered in the creative inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreativeItem {
    /// Item id.
    pub id: RegistryKey,
    /// Damage/variant value.
    pub meta: u16,
    /// Durable items (tools, armor) match regardless of damage.
    pub durable: bool,
}

impl CreativeItem {
    /// Create a catalog entry.
    pub fn new(id: RegistryKey, meta: u16, durable: bool) -> Self {
        Self { id, meta, durable }
    }

    /// Whether `other` refers to the same catalog entry as `self`.
    ///
    /// Damage is ignored when `self` is durable.
    pub fn matches(&self, other: &CreativeItem) -> bool {
        self.id == other.id && (self.durable || self.meta == other.meta)
    }
}

/// Ordered, deduplicated list of creative items.
#[derive(Debug, Clone, Default)]
pub struct CreativeCatalog {
    items: Vec<CreativeItem>,
}

impl CreativeCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// All entries in insertion order.
    pub fn all(&self) -> &[CreativeItem] {
        &self.items
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<&CreativeItem> {
        self.items.get(index)
    }

    /// Position of the first entry matching `item`.
    pub fn index_of(&self, item: &CreativeItem) -> Option<usize> {
        self.items.iter().position(|existing| item.matches(existing))
    }

    /// Append `item` unless an equivalent entry is already present.
    ///
    /// Returns true if the item was added.
    pub fn add(&mut self, item: CreativeItem) -> bool {
        if self.contains(&item) {
            debug!(id = %item.id, meta = item.meta, "skipping duplicate creative item");
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove the first entry matching `item`. Returns true if one was removed.
    pub fn remove(&mut self, item: &CreativeItem) -> bool {
        match self.index_of(item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether an entry matching `item` exists.
    pub fn contains(&self, item: &CreativeItem) -> bool {
        self.index_of(item).is_some()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
