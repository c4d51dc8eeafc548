use core_proc_macros::SeaOrmResource;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::Item;

/// Sea-ORM Entity for the items table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, SeaOrmResource)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub price: Option<f64>,
    pub item_type_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "domain_item_types::entity::Entity",
        from = "Column::ItemTypeId",
        to = "domain_item_types::entity::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    ItemType,
}

impl Related<domain_item_types::entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Item {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            description: model.description,
            price: model.price,
            item_type_id: model.item_type_id,
        }
    }
}

impl From<Item> for ActiveModel {
    fn from(item: Item) -> Self {
        ActiveModel {
            id: item.id.map(Set).unwrap_or(NotSet),
            name: Set(item.name),
            description: Set(item.description),
            price: Set(item.price),
            item_type_id: Set(item.item_type_id),
        }
    }
}
