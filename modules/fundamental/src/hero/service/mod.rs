use crate::hero::model::{HeroDetails, HeroSummary, NewHero};
use crate::hero_power::model::HeroPowerSummary;
use crate::Error;
use heroes_common::db::Database;
use heroes_entity::{hero, hero_power, power};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    EntityTrait, ModelTrait, QueryOrder,
};

pub struct HeroService {
    db: Database,
}

impl HeroService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn fetch_heroes(&self) -> Result<Vec<HeroSummary>, Error> {
        let heroes = hero::Entity::find()
            .order_by_asc(hero::Column::Id)
            .all(&self.db)
            .await?;

        Ok(heroes.iter().map(HeroSummary::from_entity).collect())
    }

    /// Fetch a hero, with its powers expanded.
    pub async fn fetch_hero(&self, id: i32) -> Result<Option<HeroDetails>, Error> {
        let Some(hero) = hero::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let hero_powers = hero
            .find_related(hero_power::Entity)
            .find_also_related(power::Entity)
            .order_by_asc(hero_power::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .filter_map(|(link, power)| {
                power.map(|power| HeroPowerSummary::from_entity(&link, &power))
            })
            .collect();

        Ok(Some(HeroDetails {
            head: HeroSummary::from_entity(&hero),
            hero_powers,
        }))
    }

    pub async fn create_hero(&self, hero: NewHero) -> Result<HeroSummary, Error> {
        let NewHero { name, super_name } = hero;
        let hero = hero::ActiveModel {
            id: NotSet,
            name: Set(name),
            super_name: Set(super_name),
        }
        .insert(&self.db)
        .await?;

        log::info!("created hero {} ({})", hero.id, hero.super_name);

        Ok(HeroSummary::from_entity(&hero))
    }

    /// Delete a hero, and with it all of its powers.
    ///
    /// Returns the number of deleted heroes, zero if it didn't exist.
    pub async fn delete_hero(&self, id: i32) -> Result<u64, Error> {
        let result = hero::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            log::info!("deleted hero {id}");
        }

        Ok(result.rows_affected)
    }
}
