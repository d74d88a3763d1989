pub mod config;
pub mod llmhelp;
pub mod record;
pub mod zone;

use anyhow::{bail, Result};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::api::HetznerClient;
use crate::cli::{Cli, Commands};
use crate::config::ConfigStore;

pub const TOKEN_MISSING: &str =
    "API token not set. Please run 'hetznerdns config set' to configure your API token.";

pub async fn execute(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Config(cmd) => {
            let store = open_store(cli.config)?;
            config::execute(&store, cmd, &mut io::stdin().lock(), &mut out)
        }
        Commands::Zone(cmd) => {
            let client = connect(&open_store(cli.config)?, cli.api_url.as_deref())?;
            zone::execute(&client, cmd, &mut out).await
        }
        Commands::Record(cmd) => {
            let client = connect(&open_store(cli.config)?, cli.api_url.as_deref())?;
            record::execute(&client, cmd, &mut out).await
        }
        Commands::Version => {
            writeln!(out, "Hetzner DNS CLI v{}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
        Commands::Llmhelp => llmhelp::execute(&mut out),
    }
}

fn open_store(path: Option<PathBuf>) -> Result<ConfigStore> {
    let path = match path {
        Some(path) => path,
        None => ConfigStore::default_path()?,
    };
    Ok(ConfigStore::new(path))
}

/// Builds an API client from the stored token.
pub fn connect(store: &ConfigStore, api_url: Option<&str>) -> Result<HetznerClient> {
    let config = store.load()?;
    if config.api_token.is_empty() {
        bail!(TOKEN_MISSING);
    }
    let client = match api_url {
        Some(url) => HetznerClient::with_base_url(config.api_token, url)?,
        None => HetznerClient::new(config.api_token)?,
    };
    Ok(client)
}
