use std::fmt::{Display, Formatter};

const DEFAULT_URL: &str = "sqlite://heroes.db?mode=rwc";
const IN_MEMORY_URL: &str = "sqlite::memory:";

#[derive(clap::Args, Debug, Clone)]
#[command(next_help_heading = "Database")]
#[group(id = "database")]
pub struct Database {
    /// The database connection URL, either `sqlite://` or `postgres://`
    #[arg(id = "db-url", long, env = "DB_URL", default_value = DEFAULT_URL)]
    pub url: String,
    #[arg(id = "db-max-conn", long, env = "DB_MAX_CONN", default_value_t = 75)]
    pub max_conn: u32,
    #[arg(id = "db-min-conn", long, env = "DB_MIN_CONN", default_value_t = 1)]
    pub min_conn: u32,
    /// Seconds to wait for a new connection
    #[arg(
        id = "db-connect-timeout",
        long,
        env = "DB_CONNECT_TIMEOUT",
        default_value_t = 8
    )]
    pub connect_timeout: u64,
    /// Seconds to wait for a connection from the pool
    #[arg(
        id = "db-acquire-timeout",
        long,
        env = "DB_ACQUIRE_TIMEOUT",
        default_value_t = 30
    )]
    pub acquire_timeout: u64,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.into(),
            max_conn: 75,
            min_conn: 1,
            connect_timeout: 8,
            acquire_timeout: 30,
        }
    }
}

impl Database {
    /// Collect the database configuration from the `DB_*` environment variables.
    pub fn from_env() -> Result<Database, anyhow::Error> {
        #[derive(clap::Parser)]
        struct Config {
            #[command(flatten)]
            database: Database,
        }

        Ok(<Config as clap::Parser>::try_parse_from(["heroes"])?.database)
    }

    /// A private, in-memory SQLite database. Gone once the pool closes.
    pub fn in_memory() -> Self {
        Self {
            url: IN_MEMORY_URL.into(),
            ..Default::default()
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

/// How to treat the schema when connecting.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CreationMode {
    /// Apply pending migrations
    #[default]
    Default,
    /// Use the schema as it is
    SkipMigrations,
    /// Drop everything and re-apply all migrations
    RefreshMigrations,
}

impl Display for CreationMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::SkipMigrations => write!(f, "skip-migrations"),
            Self::RefreshMigrations => write!(f, "refresh-migrations"),
        }
    }
}
