use crate::config::CreationMode;
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    prelude::async_trait, ConnectOptions, ConnectionTrait, DatabaseConnection, DbBackend, DbErr,
    ExecResult, QueryResult, Statement,
};
use std::{
    ops::{Deref, DerefMut},
    time::Duration,
};
use tracing::instrument;
use url::Url;

#[derive(Clone, Debug)]
pub struct Database {
    /// the database connection
    db: DatabaseConnection,
}

impl Database {
    #[instrument(skip(database), err)]
    pub async fn new(database: &crate::config::Database) -> Result<Self, anyhow::Error> {
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("connect to {}", strip_password(&database.url));
        }

        let mut opt = ConnectOptions::new(database.url.clone());
        if database.is_in_memory() {
            // every connection of the pool would see its own, empty database
            opt.max_connections(1);
            opt.min_connections(1);
        } else {
            opt.max_connections(database.max_conn);
            opt.min_connections(database.min_conn);
        }
        opt.sqlx_logging_level(log::LevelFilter::Trace);

        opt.connect_timeout(Duration::from_secs(database.connect_timeout));
        opt.acquire_timeout(Duration::from_secs(database.acquire_timeout));

        let db = sea_orm::Database::connect(opt).await?;

        Ok(Self { db })
    }

    /// Connect and prepare the schema according to the creation mode.
    #[instrument(skip(database), err)]
    pub async fn with_creation(
        database: &crate::config::Database,
        mode: CreationMode,
    ) -> Result<Self, anyhow::Error> {
        let db = Self::new(database).await?;

        match mode {
            CreationMode::Default => db.migrate().await?,
            CreationMode::SkipMigrations => log::info!("skipping migrations"),
            CreationMode::RefreshMigrations => db.refresh().await?,
        }

        Ok(db)
    }

    #[instrument(skip(self), err)]
    pub async fn migrate(&self) -> Result<(), anyhow::Error> {
        log::debug!("applying migrations");
        Migrator::up(&self.db, None).await?;
        log::debug!("applied migrations");

        Ok(())
    }

    #[instrument(skip(self), err)]
    pub async fn refresh(&self) -> Result<(), anyhow::Error> {
        log::warn!("refreshing database schema...");
        Migrator::refresh(&self.db).await?;
        log::warn!("refreshing database schema... done!");

        Ok(())
    }

    #[instrument(skip(self), err)]
    pub async fn close(self) -> anyhow::Result<()> {
        Ok(self.db.close().await?)
    }

    /// Ping the database.
    ///
    /// Intended to be used for health checks.
    #[instrument(skip(self), err)]
    pub async fn ping(&self) -> anyhow::Result<()> {
        self.db
            .ping()
            .await
            .context("failed to ping the database")?;
        Ok(())
    }
}

impl Deref for Database {
    type Target = DatabaseConnection;

    fn deref(&self) -> &Self::Target {
        &self.db
    }
}

impl DerefMut for Database {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.db
    }
}

/// Implementation of the connection trait for our database struct.
///
/// This allows passing a `&Database` wherever sea-orm expects a connection.
#[async_trait::async_trait]
impl ConnectionTrait for Database {
    fn get_database_backend(&self) -> DbBackend {
        self.db.get_database_backend()
    }

    async fn execute(&self, stmt: Statement) -> Result<ExecResult, DbErr> {
        self.db.execute(stmt).await
    }

    async fn execute_unprepared(&self, sql: &str) -> Result<ExecResult, DbErr> {
        self.db.execute_unprepared(sql).await
    }

    async fn query_one(&self, stmt: Statement) -> Result<Option<QueryResult>, DbErr> {
        self.db.query_one(stmt).await
    }

    async fn query_all(&self, stmt: Statement) -> Result<Vec<QueryResult>, DbErr> {
        self.db.query_all(stmt).await
    }

    fn support_returning(&self) -> bool {
        self.db.support_returning()
    }
}

/// Remove the password from a connection URL, for logging it.
fn strip_password(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut url) if url.password().is_some() => {
            // only fails for URLs which can't carry credentials anyway
            let _ = url.set_password(Some("***"));
            url.to_string()
        }
        _ => url.to_string(),
    }
}
