use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Power::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Power::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Power::Name).string().not_null())
                    .col(ColumnDef::new(Power::Description).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Power::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Power {
    #[sea_orm(iden = "powers")]
    Table,
    Id,
    Name,
    Description,
}
