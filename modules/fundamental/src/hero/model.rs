use crate::hero_power::model::HeroPowerSummary;
use heroes_entity::hero;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct HeroSummary {
    pub id: i32,
    pub name: String,
    pub super_name: String,
}

impl HeroSummary {
    pub fn from_entity(hero: &hero::Model) -> Self {
        Self {
            id: hero.id,
            name: hero.name.clone(),
            super_name: hero.super_name.clone(),
        }
    }
}

/// A hero together with the powers it has.
///
/// The embedded powers don't refer back to their heroes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct HeroDetails {
    #[serde(flatten)]
    pub head: HeroSummary,
    pub hero_powers: Vec<HeroPowerSummary>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct NewHero {
    pub name: String,
    pub super_name: String,
}
