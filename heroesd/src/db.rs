use heroes_common::config::{CreationMode, Database};
use heroes_common::db;
use std::process::ExitCode;

#[derive(clap::Args, Debug)]
pub struct Run {
    #[command(subcommand)]
    pub(crate) command: Command,
    #[command(flatten)]
    pub(crate) database: Database,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Apply all pending migrations
    Migrate,
    /// Drop the schema and re-apply all migrations
    Refresh,
}

impl Run {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        use Command::*;
        match self.command {
            Migrate => self.config(CreationMode::Default).await,
            Refresh => self.config(CreationMode::RefreshMigrations).await,
        }
    }

    async fn config(self, mode: CreationMode) -> anyhow::Result<ExitCode> {
        let db = db::Database::with_creation(&self.database, mode).await?;
        db.close().await?;
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[actix_web::test]
    async fn migrate_in_memory() -> anyhow::Result<()> {
        for command in [Command::Migrate, Command::Refresh] {
            let run = Run {
                command,
                database: Database::in_memory(),
            };
            assert_eq!(run.run().await?, ExitCode::SUCCESS);
        }
        Ok(())
    }
}
