use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::models::{Item, ItemFields, NewItem};

/// Repository trait for Item storage
///
/// Absence is reported as `None`/`false`, never as an error; deciding what a
/// missing item means is the service's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Assign the next id and store the item
    async fn save(&self, item: NewItem) -> Item;

    /// Get an item by ID
    async fn find_by_id(&self, id: i64) -> Option<Item>;

    /// All items in insertion order
    async fn find_all(&self) -> Vec<Item>;

    /// Remove an item; `true` if something was removed
    async fn delete_by_id(&self, id: i64) -> bool;

    /// Overwrite name, description and price of an existing item
    async fn update_by_id(&self, id: i64, fields: ItemFields) -> Option<Item>;
}

#[derive(Debug)]
struct StoreState {
    items: Vec<Item>,
    next_id: i64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

/// Process-local ItemRepository. Contents are lost on restart.
///
/// The collection and the id counter sit behind one lock, so ids stay unique
/// and strictly increasing under concurrent writers. Ids are never reused.
/// Clones share the same storage.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    #[instrument(skip(self, item), fields(item_name = %item.fields.name))]
    async fn save(&self, item: NewItem) -> Item {
        let mut state = self.state.write().await;

        let id = state.next_id;
        state.next_id += 1;

        let item = item.into_item(id);
        state.items.push(item.clone());

        tracing::info!(item_id = id, "Stored item");
        item
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Option<Item> {
        let state = self.state.read().await;
        state.items.iter().find(|item| item.id == id).cloned()
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Vec<Item> {
        self.state.read().await.items.clone()
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i64) -> bool {
        let mut state = self.state.write().await;

        match state.items.iter().position(|item| item.id == id) {
            Some(index) => {
                state.items.remove(index);
                tracing::info!(item_id = id, "Deleted item");
                true
            }
            None => false,
        }
    }

    #[instrument(skip(self, fields))]
    async fn update_by_id(&self, id: i64, fields: ItemFields) -> Option<Item> {
        let mut state = self.state.write().await;

        let item = state.items.iter_mut().find(|item| item.id == id)?;
        item.apply_fields(fields);

        tracing::info!(item_id = id, "Updated item");
        Some(item.clone())
    }
}
