use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// hetznerdns is a command line tool to create, read, update, and delete DNS
/// records on the Hetzner DNS service.
#[derive(Parser, Debug)]
#[command(name = "hetznerdns", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file (default: ~/.config/hetznerdns/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the DNS API (default: https://dns.hetzner.com/api/v1)
    #[arg(long, global = true, env = "HETZNER_DNS_API_URL", hide = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Manage DNS zones
    #[command(subcommand)]
    Zone(ZoneCommand),

    /// Manage DNS records
    #[command(subcommand)]
    Record(RecordCommand),

    /// Print the version number
    Version,

    /// Print all commands and options in a machine-readable format for language models
    Llmhelp,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set configuration values like the API token
    Set(ConfigSetArgs),

    /// Show current configuration
    Show,
}

#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// API token for Hetzner DNS
    #[arg(short = 't', long)]
    pub api_token: Option<String>,

    /// Key and value, e.g. `api-token YOUR_API_TOKEN`
    #[arg(value_name = "KEY_VALUE")]
    pub pair: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum ZoneCommand {
    /// List all DNS zones in your Hetzner account
    List,
}

#[derive(Subcommand, Debug)]
pub enum RecordCommand {
    /// List all DNS records for a zone
    List(RecordListArgs),

    /// Create a new DNS record in a zone
    Create(RecordCreateArgs),

    /// Update an existing DNS record
    Update(RecordUpdateArgs),

    /// Delete an existing DNS record
    Delete(RecordDeleteArgs),
}

#[derive(Args, Debug)]
pub struct RecordListArgs {
    /// Zone ID or name
    #[arg(short, long)]
    pub zone: String,
}

#[derive(Args, Debug)]
pub struct RecordCreateArgs {
    /// Zone ID or name
    #[arg(short, long)]
    pub zone: String,

    /// Record name
    #[arg(short, long)]
    pub name: String,

    /// Record type (A, AAAA, CNAME, MX, TXT, etc.)
    #[arg(short = 't', long = "type")]
    pub record_type: String,

    /// Record value
    #[arg(short, long)]
    pub value: String,

    /// Time to live in seconds
    #[arg(long)]
    pub ttl: Option<u32>,
}

#[derive(Args, Debug)]
pub struct RecordUpdateArgs {
    /// Record ID
    #[arg(short, long)]
    pub id: String,

    /// Zone ID or name
    #[arg(short, long)]
    pub zone: String,

    /// Record name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Record type (A, AAAA, CNAME, MX, TXT, etc.)
    #[arg(short = 't', long = "type")]
    pub record_type: Option<String>,

    /// Record value
    #[arg(short, long)]
    pub value: Option<String>,

    /// Time to live in seconds
    #[arg(long)]
    pub ttl: Option<u32>,
}

#[derive(Args, Debug)]
pub struct RecordDeleteArgs {
    /// Record ID
    #[arg(short, long)]
    pub id: String,
}
