use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ItemTypes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(ItemTypes::Name, 255))
                    .col(string_len_null(ItemTypes::Description, 1024))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItemTypes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum ItemTypes {
    Table,
    Id,
    Name,
    Description,
}
