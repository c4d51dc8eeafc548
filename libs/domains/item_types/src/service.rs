use std::sync::Arc;

use crate::error::ItemTypeResult;
use crate::models::ItemType;
use crate::repository::ItemTypeRepository;

/// Service layer for item types
pub struct ItemTypeService<R: ItemTypeRepository> {
    repository: Arc<R>,
}

impl<R: ItemTypeRepository> Clone for ItemTypeService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ItemTypeRepository> ItemTypeService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn save(&self, item_type: ItemType) -> ItemTypeResult<ItemType> {
        tracing::debug!("Request to save ItemType: {:?}", item_type);
        self.repository.save(item_type).await
    }

    pub async fn find_all(&self) -> ItemTypeResult<Vec<ItemType>> {
        tracing::debug!("Request to get all ItemTypes");
        self.repository.find_all().await
    }

    pub async fn find_one(&self, id: i64) -> ItemTypeResult<Option<ItemType>> {
        tracing::debug!("Request to get ItemType: {}", id);
        self.repository.find_by_id(id).await
    }

    pub async fn delete(&self, id: i64) -> ItemTypeResult<()> {
        tracing::debug!("Request to delete ItemType: {}", id);
        self.repository.delete_by_id(id).await
    }
}
