use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{DatabaseConnection, DbErr};

use crate::entity;
use crate::error::ItemTypeResult;
use crate::models::ItemType;
use crate::repository::ItemTypeRepository;

/// PostgreSQL implementation of ItemTypeRepository
#[derive(Clone)]
pub struct PgItemTypeRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgItemTypeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ItemTypeRepository for PgItemTypeRepository {
    async fn save(&self, item_type: ItemType) -> ItemTypeResult<ItemType> {
        let model = match item_type.id {
            None => self.base.insert(entity::ActiveModel::from(item_type)).await?,
            Some(id) => match self.base.update(entity::ActiveModel::from(item_type.clone())).await {
                Err(DbErr::RecordNotUpdated) => {
                    tracing::debug!(item_type_id = id, "No item type to update, inserting");
                    let item_type = ItemType { id: None, ..item_type };
                    self.base.insert(entity::ActiveModel::from(item_type)).await?
                }
                result => result?,
            },
        };

        tracing::info!(item_type_id = model.id, "Saved item type");
        Ok(model.into())
    }

    async fn find_all(&self) -> ItemTypeResult<Vec<ItemType>> {
        let models = self.base.find_all().await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> ItemTypeResult<Option<ItemType>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn delete_by_id(&self, id: i64) -> ItemTypeResult<()> {
        let rows = self.base.delete_by_id(id).await?;

        if rows == 0 {
            tracing::debug!(item_type_id = id, "Delete matched no item type");
        } else {
            tracing::info!(item_type_id = id, "Deleted item type");
        }
        Ok(())
    }
}
