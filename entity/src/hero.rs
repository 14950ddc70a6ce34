use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "heroes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub super_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hero_power::Entity")]
    HeroPower,
}

impl Related<super::hero_power::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeroPower.def()
    }
}

impl Related<super::power::Entity> for Entity {
    fn to() -> RelationDef {
        super::hero_power::Relation::Power.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::hero_power::Relation::Hero.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
