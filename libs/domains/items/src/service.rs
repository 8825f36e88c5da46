//! Item Service - Business logic layer

use chrono::Utc;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemPayload, NewItem};
use crate::repository::ItemRepository;
use crate::validation::validate_item;

/// Item service providing business logic operations
///
/// The only layer that turns "absent" and "invalid" into [`ItemError`]s.
/// The repository below it never fails; the handlers above it only map errors
/// to responses.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate, timestamp and store a new item
    #[instrument(skip(self, payload), fields(item_name = ?payload.name))]
    pub async fn add_item(&self, payload: ItemPayload) -> ItemResult<Item> {
        let fields = validate_item(payload).map_err(ItemError::Validation)?;

        let item = NewItem::new(fields, Utc::now());
        Ok(self.repository.save(item).await)
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i64) -> ItemResult<Item> {
        self.repository
            .find_by_id(id)
            .await
            .ok_or(ItemError::NotFound(id))
    }

    /// All items in insertion order
    #[instrument(skip(self))]
    pub async fn get_all_items(&self) -> Vec<Item> {
        self.repository.find_all().await
    }

    /// Delete an item
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i64) -> ItemResult<()> {
        if self.repository.delete_by_id(id).await {
            Ok(())
        } else {
            Err(ItemError::NotFound(id))
        }
    }

    /// Replace name, description and price of an existing item.
    ///
    /// The payload goes through the same rules as [`Self::add_item`];
    /// validation failures are reported before the existence check.
    #[instrument(skip(self, payload))]
    pub async fn update_item(&self, id: i64, payload: ItemPayload) -> ItemResult<Item> {
        let fields = validate_item(payload).map_err(ItemError::Validation)?;

        self.repository
            .update_by_id(id, fields)
            .await
            .ok_or(ItemError::NotFound(id))
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
