use crate::hero_power::model::{HeroPowerDetails, NewHeroPower};
use crate::Error;
use heroes_common::db::Database;
use heroes_entity::{hero, hero_power, power};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ConnectionTrait, EntityTrait, ModelTrait, TransactionTrait,
};

pub struct HeroPowerService {
    db: Database,
}

impl HeroPowerService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Give an existing hero an existing power.
    ///
    /// Referencing a hero or power which doesn't exist is a validation error.
    pub async fn create_hero_power(&self, new: NewHeroPower) -> Result<HeroPowerDetails, Error> {
        let (strength, hero_id, power_id) = new.validate()?;

        let tx = self.db.begin().await?;

        let (hero, power) = lookup(&tx, hero_id, power_id).await?;

        let link = hero_power::ActiveModel {
            id: NotSet,
            strength: Set(strength),
            hero_id: Set(hero.id),
            power_id: Set(power.id),
        }
        .insert(&tx)
        .await?;

        tx.commit().await?;

        log::info!(
            "gave hero {} power {} ({strength})",
            link.hero_id,
            link.power_id
        );

        Ok(HeroPowerDetails::from_entity(&link, &hero, &power))
    }

    pub async fn fetch_hero_power(&self, id: i32) -> Result<Option<HeroPowerDetails>, Error> {
        let Some((link, Some(hero))) = hero_power::Entity::find_by_id(id)
            .find_also_related(hero::Entity)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let Some(power) = link.find_related(power::Entity).one(&self.db).await? else {
            return Ok(None);
        };

        Ok(Some(HeroPowerDetails::from_entity(&link, &hero, &power)))
    }
}

/// Look up both sides of a new link, failing validation for every one missing.
async fn lookup<C: ConnectionTrait>(
    db: &C,
    hero_id: i32,
    power_id: i32,
) -> Result<(hero::Model, power::Model), Error> {
    let hero = hero::Entity::find_by_id(hero_id).one(db).await?;
    let power = power::Entity::find_by_id(power_id).one(db).await?;

    match (hero, power) {
        (Some(hero), Some(power)) => Ok((hero, power)),
        (hero, power) => {
            let mut errors = vec![];
            if hero.is_none() {
                errors.push(format!("hero {hero_id} does not exist"));
            }
            if power.is_none() {
                errors.push(format!("power {power_id} does not exist"));
            }
            Err(Error::Validation(errors))
        }
    }
}

#[cfg(test)]
mod test;
