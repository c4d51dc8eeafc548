use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::entity;
use crate::error::{ItemError, ItemResult};
use crate::models::Item;
use crate::repository::ItemRepository;

/// PostgreSQL implementation of ItemRepository
#[derive(Clone)]
pub struct PgItemRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

/// A dangling `item_type_id` is the caller's mistake, not a storage failure.
fn save_error(e: DbErr, item_type_id: Option<i64>) -> ItemError {
    foreign_key_error(e.sql_err(), item_type_id).unwrap_or(ItemError::Database(e))
}

fn foreign_key_error(sql_err: Option<SqlErr>, item_type_id: Option<i64>) -> Option<ItemError> {
    match (sql_err, item_type_id) {
        (Some(SqlErr::ForeignKeyConstraintViolation(_)), Some(item_type_id)) => Some(
            ItemError::Validation(format!("Unknown item type: {}", item_type_id)),
        ),
        _ => None,
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn save(&self, item: Item) -> ItemResult<Item> {
        let item_type_id = item.item_type_id;

        let model = match item.id {
            None => self
                .base
                .insert(entity::ActiveModel::from(item))
                .await
                .map_err(|e| save_error(e, item_type_id))?,
            Some(id) => match self.base.update(entity::ActiveModel::from(item.clone())).await {
                Err(DbErr::RecordNotUpdated) => {
                    tracing::debug!(item_id = id, "No item to update, inserting");
                    self.base
                        .insert(entity::ActiveModel::from(Item { id: None, ..item }))
                        .await
                        .map_err(|e| save_error(e, item_type_id))?
                }
                result => result.map_err(|e| save_error(e, item_type_id))?,
            },
        };

        tracing::info!(item_id = model.id, item_type_id = ?model.item_type_id, "Saved item");
        Ok(model.into())
    }

    async fn find_all(&self) -> ItemResult<Vec<Item>> {
        let models = self.base.find_all().await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn delete_by_id(&self, id: i64) -> ItemResult<()> {
        let rows = self.base.delete_by_id(id).await?;

        if rows > 0 {
            tracing::info!(item_id = id, "Deleted item");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn model(id: i64) -> entity::Model {
        entity::Model {
            id,
            name: "Drill".into(),
            description: Some("18V".into()),
            price: Some(99.5),
            item_type_id: Some(1),
        }
    }

    #[tokio::test]
    async fn test_find_all_maps_models() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1), model(2)]])
            .into_connection();
        let repo = PgItemRepository::new(db);

        let items = repo.find_all().await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, Some(2));
        assert_eq!(items[1].price, Some(99.5));
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(7)]])
            .into_connection();
        let repo = PgItemRepository::new(db);

        let item = repo.find_by_id(7).await.unwrap();

        assert_eq!(item.and_then(|item| item.item_type_id), Some(1));
    }

    #[tokio::test]
    async fn test_update_of_missing_row_inserts_with_new_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::new(), vec![model(6)]])
            .into_connection();
        let repo = PgItemRepository::new(db);

        let saved = repo
            .save(Item::new("Drill").with_id(5).with_item_type(1))
            .await
            .unwrap();

        assert_eq!(saved.id, Some(6));
        assert_eq!(saved.item_type_id, Some(1));
    }

    #[test]
    fn test_foreign_key_violation_is_validation() {
        let violation = SqlErr::ForeignKeyConstraintViolation(
            "insert or update on table \"items\" violates foreign key constraint \"fk_items_item_type_id\"".into(),
        );

        let err = foreign_key_error(Some(violation), Some(42));

        assert!(matches!(err, Some(ItemError::Validation(msg)) if msg == "Unknown item type: 42"));
    }

    #[test]
    fn test_foreign_key_violation_without_item_type_is_not_classified() {
        let violation = SqlErr::ForeignKeyConstraintViolation("fk_items_item_type_id".into());
        assert!(foreign_key_error(Some(violation), None).is_none());
    }

    #[test]
    fn test_other_errors_keep_db_error() {
        let err = save_error(DbErr::Custom("boom".into()), Some(3));
        assert!(matches!(err, ItemError::Database(DbErr::Custom(msg)) if msg == "boom"));
    }

    #[tokio::test]
    async fn test_find_failure_keeps_db_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".into())])
            .into_connection();
        let repo = PgItemRepository::new(db);

        assert!(matches!(repo.find_by_id(1).await, Err(ItemError::Database(_))));
    }
}
