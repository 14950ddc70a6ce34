pub mod endpoints;
pub mod openapi;
pub mod sample_data;

use anyhow::Context;
use heroes_common::{
    config::{CreationMode, Database},
    db,
};
use heroes_infrastructure::app::http::{HttpServerBuilder, HttpServerConfig};
use heroes_module_fundamental::Config;
use std::process::ExitCode;
use utoipa_actix_web::service_config::ServiceConfig;

/// Run the API server
#[derive(clap::Args, Debug)]
pub struct Run {
    /// The database creation mode
    #[arg(long, env = "DB_CREATION", value_enum, default_value_t = CreationMode::Default)]
    pub creation: CreationMode,

    /// Seed heroes and powers into an empty database
    #[arg(long, env = "SAMPLE_DATA")]
    pub sample_data: bool,

    // flattened commands must go last
    //
    /// Database configuration
    #[command(flatten)]
    pub database: Database,

    #[command(flatten)]
    pub http: HttpServerConfig,
}

impl Run {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let db = db::Database::with_creation(&self.database, self.creation)
            .await
            .context("preparing the database")?;

        if self.sample_data {
            sample_data::sample_data(db.clone())
                .await
                .context("loading sample data")?;
        }

        let config = Config {
            json_limit: self.http.json_limit.as_u64() as _,
        };

        HttpServerBuilder::try_from(self.http)?
            .openapi_info(openapi::default_openapi_info())
            .configure(move |svc| configure(svc, config.clone(), db.clone()))
            .run()
            .await?;

        Ok(ExitCode::SUCCESS)
    }
}

/// Register all endpoints of the server.
pub fn configure(svc: &mut ServiceConfig, config: Config, db: db::Database) {
    endpoints::configure(svc);
    heroes_module_fundamental::configure(svc, config, db);
}
