use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

use crate::cli::{ConfigCommand, ConfigSetArgs};
use crate::config::ConfigStore;
use crate::output::mask_token;

const TOKEN_KEY: &str = "api-token";

pub fn execute(
    store: &ConfigStore,
    cmd: ConfigCommand,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    match cmd {
        ConfigCommand::Set(args) => set(store, args, input, out),
        ConfigCommand::Show => show(store, out),
    }
}

fn set(
    store: &ConfigStore,
    args: ConfigSetArgs,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    let token = match (args.api_token, args.pair.as_slice()) {
        (Some(token), _) => token,
        (None, [key, value]) if key == TOKEN_KEY => value.clone(),
        (None, []) => prompt_token(input, out)?,
        (None, [key]) if key == TOKEN_KEY => prompt_token(input, out)?,
        (None, [key, ..]) => bail!(
            "Unknown configuration key '{}'. Usage: hetznerdns config set {} VALUE",
            key,
            TOKEN_KEY
        ),
    };

    let token = token.trim().to_string();
    if token.is_empty() {
        bail!("API token cannot be empty");
    }

    // The environment override is not persisted.
    let mut config = store.load_file()?;
    config.api_token = token;
    store.save(&config)?;

    writeln!(out, "Configuration saved successfully.")?;
    Ok(())
}

fn prompt_token(input: &mut dyn BufRead, out: &mut dyn Write) -> Result<String> {
    write!(out, "Enter your Hetzner DNS API token: ")?;
    out.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read API token")?;
    Ok(line)
}

fn show(store: &ConfigStore, out: &mut dyn Write) -> Result<()> {
    let config = store.load()?;

    if config.api_token.is_empty() {
        writeln!(out, "API token: Not set")?;
    } else {
        writeln!(out, "API token: {}", mask_token(&config.api_token))?;
    }
    writeln!(out, "Config file: {}", store.path().display())?;
    Ok(())
}
