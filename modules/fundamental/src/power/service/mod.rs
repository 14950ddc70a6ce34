use crate::power::model::{NewPower, PowerSummary, PowerUpdate};
use crate::Error;
use heroes_common::db::Database;
use heroes_entity::power;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    DbErr, EntityTrait, QueryOrder,
};

pub struct PowerService {
    db: Database,
}

impl PowerService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn fetch_powers(&self) -> Result<Vec<PowerSummary>, Error> {
        let powers = power::Entity::find()
            .order_by_asc(power::Column::Id)
            .all(&self.db)
            .await?;

        Ok(powers.iter().map(PowerSummary::from_entity).collect())
    }

    pub async fn fetch_power(&self, id: i32) -> Result<Option<PowerSummary>, Error> {
        Ok(power::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .as_ref()
            .map(PowerSummary::from_entity))
    }

    pub async fn create_power(&self, power: NewPower) -> Result<PowerSummary, Error> {
        power.validate()?;

        let NewPower { name, description } = power;
        let power = power::ActiveModel {
            id: NotSet,
            name: Set(name),
            description: Set(description),
        }
        .insert(&self.db)
        .await?;

        log::info!("created power {} ({})", power.id, power.name);

        Ok(PowerSummary::from_entity(&power))
    }

    /// Replace the description of a power.
    ///
    /// Returns `None` if the power doesn't exist. A missing power takes precedence over an
    /// invalid description.
    pub async fn update_description(
        &self,
        id: i32,
        update: PowerUpdate,
    ) -> Result<Option<PowerSummary>, Error> {
        let Some(power) = power::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        update.validate()?;

        let mut power: power::ActiveModel = power.into();
        power.description = Set(update.description);

        match power.update(&self.db).await {
            Ok(power) => Ok(Some(PowerSummary::from_entity(&power))),
            // deleted in the meantime
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Delete a power, and with it all links to heroes.
    ///
    /// Returns the number of deleted powers, zero if it didn't exist.
    pub async fn delete_power(&self, id: i32) -> Result<u64, Error> {
        let result = power::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            log::info!("deleted power {id}");
        }

        Ok(result.rows_affected)
    }
}
