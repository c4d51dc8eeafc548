use core_proc_macros::SeaOrmResource;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::ItemType;

/// Sea-ORM Entity for the item_types table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, SeaOrmResource)]
#[sea_orm(table_name = "item_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ItemType {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            description: model.description,
        }
    }
}

/// Without an id the store assigns one on insert.
impl From<ItemType> for ActiveModel {
    fn from(item_type: ItemType) -> Self {
        ActiveModel {
            id: item_type.id.map(Set).unwrap_or(NotSet),
            name: Set(item_type.name),
            description: Set(item_type.description),
        }
    }
}
