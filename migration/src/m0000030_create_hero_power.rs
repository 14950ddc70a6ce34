use crate::m0000010_create_hero::Hero;
use crate::m0000020_create_power::Power;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeroPower::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HeroPower::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HeroPower::Strength).text().not_null())
                    .col(ColumnDef::new(HeroPower::HeroId).integer().not_null())
                    .col(ColumnDef::new(HeroPower::PowerId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(HeroPower::Table, HeroPower::HeroId)
                            .to(Hero::Table, Hero::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(HeroPower::Table, HeroPower::PowerId)
                            .to(Power::Table, Power::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // the hero detail view loads links by hero
        manager
            .create_index(
                Index::create()
                    .table(HeroPower::Table)
                    .name("hero_powers_hero_id_idx")
                    .col(HeroPower::HeroId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(HeroPower::Table)
                    .name("hero_powers_power_id_idx")
                    .col(HeroPower::PowerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HeroPower::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HeroPower {
    #[sea_orm(iden = "hero_powers")]
    Table,
    Id,
    Strength,
    HeroId,
    PowerId,
}
