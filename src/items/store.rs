use tokio::sync::RwLock;
use tracing::debug;

use crate::sinks::SinkRef;

/// An item with a numeric id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Lookup key; not required to be unique.
    pub id: u64,
    /// Display name.
    pub name: String,
}

impl Item {
    /// Creates an item.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Append-only item list. Ids are not required to be unique; lookups return the first match.
pub struct ItemStore {
    items: RwLock<Vec<Item>>,
    sink: SinkRef,
}

impl ItemStore {
    /// Creates an empty store writing notices to `sink`.
    pub fn new(sink: SinkRef) -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            sink,
        }
    }

    /// Appends `item` and writes `Item Added...` to the sink.
    pub async fn add(&self, item: Item) {
        let id = item.id;
        self.items.write().await.push(item);
        self.sink.write_line("Item Added...");
        debug!(id, "item added");
    }

    /// First item with `id`.
    pub async fn get(&self, id: u64) -> Option<Item> {
        self.items.read().await.iter().find(|i| i.id == id).cloned()
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// True if nothing has been added.
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_add_then_get() {
        let sink = Arc::new(MemorySink::new());
        let store = ItemStore::new(sink.clone());

        store.add(Item::new(1, "John")).await;
        assert_eq!(store.get(1).await, Some(Item::new(1, "John")));
        assert_eq!(store.get(2).await, None);
        assert_eq!(sink.lines(), vec!["Item Added..."]);
    }

    #[tokio::test]
    async fn test_duplicate_id_returns_first() {
        let sink = Arc::new(MemorySink::new());
        let store = ItemStore::new(sink);

        store.add(Item::new(7, "first")).await;
        store.add(Item::new(7, "second")).await;
        assert_eq!(store.get(7).await.map(|i| i.name), Some("first".to_string()));
        assert_eq!(store.len().await, 2);
    }
}
