use crate::hero::model::HeroSummary;
use crate::power::model::PowerSummary;
use crate::validation::{parse_strength, Violations};
use crate::Error;
use heroes_entity::{hero, hero_power, power, strength::Strength};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A power of a hero, as embedded in the hero's details.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct HeroPowerSummary {
    pub id: i32,
    pub hero_id: i32,
    pub power_id: i32,
    pub strength: Strength,
    pub power: PowerSummary,
}

impl HeroPowerSummary {
    pub fn from_entity(link: &hero_power::Model, power: &power::Model) -> Self {
        Self {
            id: link.id,
            hero_id: link.hero_id,
            power_id: link.power_id,
            strength: link.strength,
            power: PowerSummary::from_entity(power),
        }
    }
}

/// A link between a hero and a power, with both sides expanded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct HeroPowerDetails {
    pub id: i32,
    pub hero_id: i32,
    pub power_id: i32,
    pub strength: Strength,
    pub hero: HeroSummary,
    pub power: PowerSummary,
}

impl HeroPowerDetails {
    pub fn from_entity(link: &hero_power::Model, hero: &hero::Model, power: &power::Model) -> Self {
        Self {
            id: link.id,
            hero_id: link.hero_id,
            power_id: link.power_id,
            strength: link.strength,
            hero: HeroSummary::from_entity(hero),
            power: PowerSummary::from_entity(power),
        }
    }
}

/// Request to give a hero a power.
///
/// All fields are optional on the wire, so that a missing field is reported as a validation
/// error together with all other problems of the request.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct NewHeroPower {
    /// One of `Strong`, `Weak`, `Average`
    #[serde(default)]
    pub strength: Option<String>,
    #[serde(default)]
    pub hero_id: Option<i32>,
    #[serde(default)]
    pub power_id: Option<i32>,
}

impl NewHeroPower {
    /// Check the shape of the request, returning the strength, hero id and power id.
    ///
    /// This doesn't check if the referenced hero and power exist.
    pub fn validate(&self) -> Result<(Strength, i32, i32), Error> {
        let mut violations = Violations::new();

        let strength = match violations.require("strength", self.strength.as_deref()) {
            Some(strength) => violations.check(parse_strength(strength))?,
            None => None,
        };
        let hero_id = violations.require("hero_id", self.hero_id);
        let power_id = violations.require("power_id", self.power_id);

        violations.finish()?;

        match (strength, hero_id, power_id) {
            (Some(strength), Some(hero_id), Some(power_id)) => Ok((strength, hero_id, power_id)),
            _ => Err(Error::validation("incomplete hero power")),
        }
    }
}
