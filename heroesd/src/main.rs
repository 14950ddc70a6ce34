mod db;
mod openapi;

use clap::Parser;
use heroes_infrastructure::tracing::init_tracing;
use std::process::{ExitCode, Termination};

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Manage the database
    Db(db::Run),
    /// Work with the OpenAPI document
    Openapi(openapi::Run),
}

#[derive(clap::Parser, Debug)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "heroesd",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Heroesd {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,

    #[command(flatten)]
    pub(crate) run: heroes_server::Run,
}

impl Heroesd {
    async fn run(self) -> ExitCode {
        match self.run_command().await {
            Ok(code) => code,
            Err(err) => {
                log::error!("Error: {err}");
                for (n, err) in err.chain().skip(1).enumerate() {
                    if n == 0 {
                        log::error!("Caused by:");
                    }
                    log::error!("\t{err}");
                }

                ExitCode::FAILURE
            }
        }
    }

    async fn run_command(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Some(Command::Db(db)) => db.run().await,
            Some(Command::Openapi(openapi)) => openapi.run().await,
            None => self.run.run().await,
        }
    }
}

#[actix_web::main]
async fn main() -> impl Termination {
    init_tracing();
    Heroesd::parse().run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Heroesd::command().debug_assert();
    }

    #[test]
    fn parse_server_args() {
        let cli = Heroesd::try_parse_from([
            "heroesd",
            "--sample-data",
            "--db-url",
            "sqlite::memory:",
            "--http-server-bind-port",
            "8080",
        ])
        .unwrap();

        assert!(cli.command.is_none());
        assert!(cli.run.sample_data);
        assert_eq!(cli.run.database.url, "sqlite::memory:");
        assert_eq!(cli.run.http.bind_port, 8080);
    }

    #[test]
    fn parse_subcommand() {
        let cli = Heroesd::try_parse_from(["heroesd", "db", "migrate"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Db(_))));
    }
}
