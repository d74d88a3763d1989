mod api;
mod cli;
mod commands;
mod config;
mod output;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::LevelFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_module(module_path!(), LevelFilter::Debug);
    }
    logger.init();

    commands::execute(cli).await
}
