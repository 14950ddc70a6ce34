use crate::configure;
use actix_web::App;
use heroes_common::{config, db::Database};
use heroes_module_fundamental::Config;
use utoipa::openapi::{Info, License};
use utoipa_actix_web::AppExt;

pub fn default_openapi_info() -> Info {
    let mut info = Info::new("Heroes", env!("CARGO_PKG_VERSION"));
    info.description = Some("Heroes, their powers, and how strong they are at them".into());
    info.license = {
        let mut license = License::new("Apache License, Version 2.0");
        license.identifier = Some("Apache-2.0".into());
        Some(license)
    };
    info
}

/// Create the OpenAPI document of the whole server.
///
/// The endpoints get registered against a throw-away in-memory database.
pub async fn create_openapi() -> anyhow::Result<utoipa::openapi::OpenApi> {
    let db = Database::new(&config::Database::in_memory()).await?;

    let (_, mut openapi) = App::new()
        .into_utoipa_app()
        .configure(|svc| configure(svc, Config::default(), db.clone()))
        .split_for_parts();
    openapi.info = default_openapi_info();

    db.close().await?;

    Ok(openapi)
}
