use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261016_000001_create_item_types::ItemTypes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Items::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Items::Name, 255))
                    .col(string_len_null(Items::Description, 1024))
                    .col(double_null(Items::Price))
                    .col(big_integer_null(Items::ItemTypeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_items_item_type_id")
                            .from(Items::Table, Items::ItemTypeId)
                            .to(ItemTypes::Table, ItemTypes::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_items_item_type_id")
                    .table(Items::Table)
                    .col(Items::ItemTypeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
    Name,
    Description,
    Price,
    ItemTypeId,
}
