use sea_orm::{DeriveActiveEnum, EnumIter};
use std::fmt;

/// How strongly a hero masters a power.
///
/// Stored and serialized using the variant name, the parser is case-sensitive.
#[derive(
    Debug,
    Copy,
    Clone,
    Hash,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    strum::VariantArray,
    strum::EnumString,
    serde::Serialize,
    serde::Deserialize,
    utoipa::ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Strength {
    #[sea_orm(string_value = "Strong")]
    Strong,
    #[sea_orm(string_value = "Weak")]
    Weak,
    #[sea_orm(string_value = "Average")]
    Average,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
