use anyhow::{anyhow, Error, Result};
use heroes_server::openapi::create_openapi;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(clap::Args, Debug)]
pub struct Run {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Write the OpenAPI document to a file
    Export(Export),
}

impl Run {
    pub async fn run(self) -> Result<ExitCode> {
        use Command::*;
        match self.command {
            Export(export) => export.run().await,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct Export {
    /// The file the OpenAPI document should be exported to, YAML if it ends with `.yaml` or `.yml`
    #[arg(long, env = "OPENAPI_FILE")]
    pub file: PathBuf,
}

impl Export {
    pub async fn run(self) -> Result<ExitCode> {
        let name = self
            .file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| anyhow!("Invalid file name"))?;

        let api = create_openapi().await?;
        let doc = if name.ends_with(".yml") || name.ends_with(".yaml") {
            api.to_yaml().map_err(Error::new)?
        } else {
            api.to_pretty_json().map_err(Error::new)?
        };

        fs::write(&self.file, doc)?;
        log::info!("Exported OpenAPI document to {}", self.file.display());

        Ok(ExitCode::SUCCESS)
    }
}
