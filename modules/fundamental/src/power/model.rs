use crate::validation::validate_description;
use crate::Error;
use heroes_entity::power;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A power, as returned by the list and detail endpoints.
///
/// This never embeds the heroes owning the power.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct PowerSummary {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl PowerSummary {
    pub fn from_entity(power: &power::Model) -> Self {
        Self {
            id: power.id,
            name: power.name.clone(),
            description: power.description.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct NewPower {
    pub name: String,
    /// At least 20 characters
    pub description: String,
}

impl NewPower {
    pub fn validate(&self) -> Result<(), Error> {
        validate_description(&self.description)
    }
}

/// The patchable part of a power.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct PowerUpdate {
    /// At least 20 characters
    pub description: String,
}

impl PowerUpdate {
    pub fn validate(&self) -> Result<(), Error> {
        validate_description(&self.description)
    }
}
