#![allow(clippy::expect_used)]

pub mod call;

use heroes_common as common;
use std::env;
use test_context::AsyncTestContext;
use tracing::instrument;

/// A freshly migrated database for a single test.
///
/// By default this is a private in-memory SQLite database. Setting `EXTERNAL_TEST_DB` switches
/// to the database configured through the `DB_*` environment variables instead.
pub struct HeroesContext {
    pub db: common::db::Database,
}

impl HeroesContext {
    async fn new(config: common::config::Database) -> Result<Self, anyhow::Error> {
        let db = common::db::Database::with_creation(
            &config,
            common::config::CreationMode::RefreshMigrations,
        )
        .await?;

        Ok(Self { db })
    }
}

impl AsyncTestContext for HeroesContext {
    #[instrument]
    async fn setup() -> HeroesContext {
        if env::var("EXTERNAL_TEST_DB").is_ok() {
            log::warn!("Using external database from 'DB_*' env vars");
            let config = common::config::Database::from_env().expect("DB config from env");

            return HeroesContext::new(config)
                .await
                .expect("Configuring the external database");
        }

        HeroesContext::new(common::config::Database::in_memory())
            .await
            .expect("Create an in-memory database")
    }

    async fn teardown(self) {
        if let Err(err) = self.db.close().await {
            log::warn!("Failed to close test database: {err}");
        }
    }
}
