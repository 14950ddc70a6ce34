//! Field constraints, checked at the write boundary before anything is persisted.

use crate::Error;
use heroes_entity::strength::Strength;
use std::str::FromStr;

/// Minimum length of a power's description, in characters.
pub const MIN_DESCRIPTION_LENGTH: usize = 20;

/// Collects violations of a single payload, so that all of them get reported at once.
#[derive(Debug, Default)]
pub struct Violations(Vec<String>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, msg: impl Into<String>) {
        self.0.push(msg.into());
    }

    /// Record the violations of a check, returning its value if it passed.
    ///
    /// Any error other than a validation error is passed on as is.
    pub fn check<T>(&mut self, result: Result<T, Error>) -> Result<Option<T>, Error> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(Error::Validation(errors)) => {
                self.0.extend(errors);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Require a field to be present.
    pub fn require<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.add(format!("{field} is required"));
        }
        value
    }

    pub fn finish(self) -> Result<(), Error> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(self.0))
        }
    }
}

pub fn validate_description(description: &str) -> Result<(), Error> {
    let len = description.chars().count();
    if len < MIN_DESCRIPTION_LENGTH {
        return Err(Error::validation(format!(
            "description must be at least {MIN_DESCRIPTION_LENGTH} characters long, was {len}"
        )));
    }
    Ok(())
}

pub fn parse_strength(strength: &str) -> Result<Strength, Error> {
    Strength::from_str(strength).map_err(|_| {
        Error::validation(format!(
            "strength must be one of Strong, Weak, Average, was '{strength}'"
        ))
    })
}
