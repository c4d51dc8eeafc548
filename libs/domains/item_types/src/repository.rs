use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ItemTypeResult;
use crate::models::ItemType;

/// Data access for item types
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemTypeRepository: Send + Sync {
    /// Replace the record with the same id. When `id` is `None` or matches no
    /// record, insert it under a newly assigned id.
    async fn save(&self, item_type: ItemType) -> ItemTypeResult<ItemType>;

    /// All item types ordered by id
    async fn find_all(&self) -> ItemTypeResult<Vec<ItemType>>;

    async fn find_by_id(&self, id: i64) -> ItemTypeResult<Option<ItemType>>;

    /// Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: i64) -> ItemTypeResult<()>;
}

#[derive(Default)]
struct Store {
    rows: HashMap<i64, ItemType>,
    last_id: i64,
}

/// In-memory implementation for development and tests
#[derive(Clone, Default)]
pub struct InMemoryItemTypeRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryItemTypeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemTypeRepository for InMemoryItemTypeRepository {
    async fn save(&self, mut item_type: ItemType) -> ItemTypeResult<ItemType> {
        let mut store = self.store.write().await;

        let id = match item_type.id {
            Some(id) if store.rows.contains_key(&id) => id,
            _ => {
                store.last_id += 1;
                store.last_id
            }
        };

        item_type.id = Some(id);
        store.rows.insert(id, item_type.clone());
        Ok(item_type)
    }

    async fn find_all(&self) -> ItemTypeResult<Vec<ItemType>> {
        let store = self.store.read().await;
        let mut item_types: Vec<ItemType> = store.rows.values().cloned().collect();
        item_types.sort_by_key(|item_type| item_type.id);
        Ok(item_types)
    }

    async fn find_by_id(&self, id: i64) -> ItemTypeResult<Option<ItemType>> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> ItemTypeResult<()> {
        let mut store = self.store.write().await;
        store.rows.remove(&id);
        Ok(())
    }
}
