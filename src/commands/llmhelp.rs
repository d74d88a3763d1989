use anyhow::Result;
use clap::{ArgAction, Command, CommandFactory};
use serde::Serialize;
use std::io::Write;

use crate::cli::Cli;

#[derive(Debug, Serialize)]
pub struct CommandOption {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subcommands: Vec<CommandOption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<FlagOption>,
}

#[derive(Debug, Serialize)]
pub struct Example {
    pub description: &'static str,
    pub command: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FlagOption {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shorthand: Option<char>,
    pub description: String,
    #[serde(rename = "type")]
    pub value_type: String,
    pub required: bool,
}

pub fn execute(out: &mut dyn Write) -> Result<()> {
    let options = describe(&Cli::command());
    writeln!(out, "{}", serde_json::to_string_pretty(&options)?)?;
    Ok(())
}

pub fn describe(cmd: &Command) -> CommandOption {
    let description = cmd
        .get_long_about()
        .or_else(|| cmd.get_about())
        .map(ToString::to_string)
        .unwrap_or_default();

    let flags = cmd
        .get_arguments()
        .filter(|arg| !arg.is_hide_set())
        .filter(|arg| !matches!(arg.get_action(), ArgAction::Help | ArgAction::Version))
        .map(|arg| FlagOption {
            name: arg
                .get_long()
                .map(ToString::to_string)
                .unwrap_or_else(|| arg.get_id().as_str().to_string()),
            shorthand: arg.get_short(),
            description: arg.get_help().map(ToString::to_string).unwrap_or_default(),
            value_type: match arg.get_action() {
                ArgAction::SetTrue | ArgAction::SetFalse => "bool".to_string(),
                ArgAction::Append => "list".to_string(),
                _ => "string".to_string(),
            },
            required: arg.is_required_set(),
        })
        .collect();

    let subcommands = cmd
        .get_subcommands()
        .filter(|sub| !sub.is_hide_set() && sub.get_name() != "help")
        .map(describe)
        .collect();

    CommandOption {
        name: cmd.get_name().to_string(),
        description,
        examples: examples(cmd.get_name()),
        subcommands,
        flags,
    }
}

fn examples(name: &str) -> Vec<Example> {
    let examples: &[(&str, &str)] = match name {
        "config" => &[
            ("Set API token interactively", "hetznerdns config set"),
            (
                "Set API token directly",
                "hetznerdns config set api-token YOUR_API_TOKEN",
            ),
            ("Show current configuration", "hetznerdns config show"),
        ],
        "zone" => &[("List all DNS zones", "hetznerdns zone list")],
        "record" => &[
            (
                "List records for a zone",
                "hetznerdns record list --zone example.com",
            ),
            (
                "Create an A record",
                "hetznerdns record create --zone example.com --name www --type A --value 192.168.1.1 --ttl 3600",
            ),
            (
                "Create a CNAME record",
                "hetznerdns record create --zone example.com --name blog --type CNAME --value example.com",
            ),
            (
                "Create an MX record",
                "hetznerdns record create --zone example.com --name @ --type MX --value \"10 mail.example.com\"",
            ),
            (
                "Update a record",
                "hetznerdns record update --id RECORD_ID --zone example.com --value 192.168.1.2",
            ),
            ("Delete a record", "hetznerdns record delete --id RECORD_ID"),
        ],
        "version" => &[("Show version information", "hetznerdns version")],
        "llmhelp" => &[("Get machine-readable help information", "hetznerdns llmhelp")],
        _ => &[],
    };

    examples
        .iter()
        .map(|&(description, command)| Example {
            description,
            command,
        })
        .collect()
}
