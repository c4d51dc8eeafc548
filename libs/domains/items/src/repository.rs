use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ItemResult;
use crate::models::Item;

/// Repository trait for Item persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Replace the record with the same id. When `id` is `None` or matches no
    /// record, insert it under a newly assigned id.
    async fn save(&self, item: Item) -> ItemResult<Item>;

    async fn find_all(&self) -> ItemResult<Vec<Item>>;

    async fn find_by_id(&self, id: i64) -> ItemResult<Option<Item>>;

    /// No-op for unknown ids
    async fn delete_by_id(&self, id: i64) -> ItemResult<()>;
}

#[derive(Default)]
struct Store {
    rows: HashMap<i64, Item>,
    last_id: i64,
}

/// In-memory implementation for development and tests.
///
/// `item_type_id` is stored as given; nothing checks that the type exists.
#[derive(Clone, Default)]
pub struct InMemoryItemRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn save(&self, mut item: Item) -> ItemResult<Item> {
        let mut store = self.store.write().await;

        let id = match item.id {
            Some(id) if store.rows.contains_key(&id) => id,
            _ => {
                store.last_id += 1;
                store.last_id
            }
        };

        item.id = Some(id);
        store.rows.insert(id, item.clone());
        Ok(item)
    }

    async fn find_all(&self) -> ItemResult<Vec<Item>> {
        let store = self.store.read().await;
        let mut items: Vec<Item> = store.rows.values().cloned().collect();
        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    async fn find_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        Ok(self.store.read().await.rows.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> ItemResult<()> {
        self.store.write().await.rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_then_find() {
        let repo = InMemoryItemRepository::new();

        let saved = repo
            .save(Item::new("Drill").with_price(49.0).with_item_type(2))
            .await
            .unwrap();

        assert_eq!(saved.id, Some(1));
        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn test_update_clears_omitted_fields() {
        let repo = InMemoryItemRepository::new();
        repo.save(Item::new("Drill").with_price(49.0)).await.unwrap();

        let updated = repo.save(Item::new("Drill").with_id(1)).await.unwrap();

        assert_eq!(updated.price, None);
        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_unknown_id_inserts_with_new_id() {
        let repo = InMemoryItemRepository::new();

        let saved = repo.save(Item::new("Drill").with_id(3)).await.unwrap();

        assert_eq!(saved.id, Some(1));
        assert_eq!(repo.find_by_id(3).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_dangling_item_type_is_stored_as_given() {
        let repo = InMemoryItemRepository::new();

        let saved = repo
            .save(Item::new("Drill").with_item_type(404))
            .await
            .unwrap();

        assert_eq!(saved.item_type_id, Some(404));
        assert_eq!(
            repo.find_by_id(1).await.unwrap().and_then(|item| item.item_type_id),
            Some(404)
        );
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryItemRepository::new();
        repo.save(Item::new("Drill")).await.unwrap();

        repo.delete_by_id(1).await.unwrap();
        repo.delete_by_id(1).await.unwrap();

        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
