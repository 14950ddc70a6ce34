use crate::Error;
use actix_web::{error::JsonPayloadError, web};
use heroes_common::db::Database;

/// Default limit for JSON request bodies.
pub const DEFAULT_JSON_LIMIT: usize = 2 * 1024 * 1024;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub json_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            json_limit: DEFAULT_JSON_LIMIT,
        }
    }
}

pub fn configure(
    svc: &mut utoipa_actix_web::service_config::ServiceConfig,
    config: Config,
    db: Database,
) {
    svc.app_data(json_config(config.json_limit));

    crate::hero::endpoints::configure(svc, db.clone());
    crate::power::endpoints::configure(svc, db.clone());
    crate::hero_power::endpoints::configure(svc, db);
}

/// Narrow an id taken from the path to the key type of the entities.
///
/// Ids outside of that range can't exist, so they are reported as not found.
pub(crate) fn entity_id(id: i64, entity: &'static str) -> Result<i32, Error> {
    i32::try_from(id).map_err(|_| Error::NotFound(entity))
}

/// Map failures extracting a JSON body onto our own error responses.
fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| match err {
            JsonPayloadError::ContentType => Error::ContentType.into(),
            JsonPayloadError::Deserialize(err) => Error::validation(err.to_string()).into(),
            err => err.into(),
        })
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, Some(1))]
    #[case(-1, Some(-1))]
    #[case(i32::MAX as i64, Some(i32::MAX))]
    #[case(i32::MAX as i64 + 1, None)]
    #[case(99999999999, None)]
    #[case(i64::MIN, None)]
    fn narrow_id(#[case] id: i64, #[case] expected: Option<i32>) {
        match (entity_id(id, "Hero"), expected) {
            (Ok(id), Some(expected)) => assert_eq!(id, expected),
            (Err(Error::NotFound("Hero")), None) => {}
            (other, _) => panic!("unexpected result: {other:?}"),
        }
    }
}
