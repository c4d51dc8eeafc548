use std::sync::Arc;

use crate::error::ItemResult;
use crate::models::Item;
use crate::repository::ItemRepository;

/// Service layer for items
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn save(&self, item: Item) -> ItemResult<Item> {
        tracing::debug!("Request to save Item: {:?}", item);
        self.repository.save(item).await
    }

    pub async fn find_all(&self) -> ItemResult<Vec<Item>> {
        tracing::debug!("Request to get all Items");
        self.repository.find_all().await
    }

    pub async fn find_one(&self, id: i64) -> ItemResult<Option<Item>> {
        tracing::debug!("Request to get Item: {}", id);
        self.repository.find_by_id(id).await
    }

    pub async fn delete(&self, id: i64) -> ItemResult<()> {
        tracing::debug!("Request to delete Item: {}", id);
        self.repository.delete_by_id(id).await
    }
}
