use std::io::Cursor;

use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client_for;
use crate::cli::{
    ConfigCommand, ConfigSetArgs, RecordCommand, RecordCreateArgs, RecordDeleteArgs,
    RecordListArgs, RecordUpdateArgs, ZoneCommand,
};
use crate::commands::{self, llmhelp, record, zone};
use crate::config::{Config, ConfigStore};
use crate::output::{format_ttl, mask_token, Table};

async fn mount_zones(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "zones": [{"id": "zone1", "name": "example.com", "ttl": 86400, "records_count": 2}]
        })))
        .mount(server)
        .await;
}

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_ttl_zero_renders_as_default() {
    assert_eq!(format_ttl(0), "default");
    assert_eq!(format_ttl(300), "300");
}

#[test]
fn test_mask_token() {
    assert_eq!(mask_token("abcdefghijkl"), "abcd...ijkl");
    assert_eq!(mask_token("short"), "********");
    assert_eq!(mask_token("12345678"), "********");
}

#[test]
fn test_table_alignment() {
    let mut table = Table::new(["ID", "NAME"]);
    table.add_row(["zone-long-id", "example.com"]);

    let mut buf: Vec<u8> = Vec::new();
    table.render(&mut buf).unwrap();
    assert_eq!(
        output(buf),
        "ID             NAME\nzone-long-id   example.com\n"
    );
}

#[tokio::test]
async fn test_zone_list_renders_table() {
    let server = MockServer::start().await;
    mount_zones(&server).await;

    let mut buf: Vec<u8> = Vec::new();
    zone::execute(&client_for(&server), ZoneCommand::List, &mut buf)
        .await
        .unwrap();

    let out = output(buf);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "ID      NAME          TTL     RECORDS");
    assert_eq!(lines[1], "zone1   example.com   86400   2");
}

#[tokio::test]
async fn test_zone_list_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"zones": []})))
        .mount(&server)
        .await;

    let mut buf: Vec<u8> = Vec::new();
    zone::execute(&client_for(&server), ZoneCommand::List, &mut buf)
        .await
        .unwrap();
    assert_eq!(output(buf), "No zones found.\n");
}

#[tokio::test]
async fn test_record_list_resolves_zone_by_name() {
    let server = MockServer::start().await;
    mount_zones(&server).await;
    Mock::given(method("GET"))
        .and(path("/records"))
        .and(query_param("zone_id", "zone1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "records": [
                {
                    "id": "r1", "type": "A", "name": "www", "value": "192.168.1.1",
                    "zone_id": "zone1"
                },
                {
                    "id": "r2", "type": "MX", "name": "@", "value": "10 mail.example.com",
                    "ttl": 3600, "zone_id": "zone1"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let args = RecordListArgs {
        zone: "Example.com.".into(),
    };
    let mut buf: Vec<u8> = Vec::new();
    record::execute(&client_for(&server), RecordCommand::List(args), &mut buf)
        .await
        .unwrap();

    let out = output(buf);
    assert!(out.starts_with("ID"));
    let www = out.lines().find(|l| l.starts_with("r1")).unwrap();
    assert!(www.ends_with("default"));
    let mx = out.lines().find(|l| l.starts_with("r2")).unwrap();
    assert!(mx.contains("10 mail.example.com"));
    assert!(mx.ends_with("3600"));
}

#[tokio::test]
async fn test_record_list_unknown_zone_fails_before_listing() {
    let server = MockServer::start().await;
    mount_zones(&server).await;
    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"records": []})))
        .expect(0)
        .mount(&server)
        .await;

    let args = RecordListArgs {
        zone: "example.org".into(),
    };
    let mut buf: Vec<u8> = Vec::new();
    let err = record::execute(&client_for(&server), RecordCommand::List(args), &mut buf)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("example.org"));
    assert!(format!("{err:#}").contains("- example.com (ID: zone1)"));
}

#[tokio::test]
async fn test_record_create_prints_new_id() {
    let server = MockServer::start().await;
    mount_zones(&server).await;
    Mock::given(method("POST"))
        .and(path("/records"))
        .and(body_json(json!({
            "type": "A",
            "name": "www",
            "value": "192.168.1.1",
            "ttl": 3600,
            "zone_id": "zone1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "record": {"id": "r9", "type": "A", "name": "www", "value": "192.168.1.1",
                       "ttl": 3600, "zone_id": "zone1"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let args = RecordCreateArgs {
        zone: "example.com".into(),
        name: "www".into(),
        record_type: "A".into(),
        value: "192.168.1.1".into(),
        ttl: Some(3600),
    };
    let mut buf: Vec<u8> = Vec::new();
    record::execute(&client_for(&server), RecordCommand::Create(args), &mut buf)
        .await
        .unwrap();
    assert_eq!(output(buf), "Record created successfully with ID: r9\n");
}

#[tokio::test]
async fn test_record_update_sends_only_given_fields() {
    let server = MockServer::start().await;
    mount_zones(&server).await;
    Mock::given(method("PUT"))
        .and(path("/records/r1"))
        .and(body_json(json!({
            "id": "r1",
            "type": "",
            "name": "",
            "value": "192.168.1.2",
            "zone_id": "zone1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "record": {"id": "r1", "type": "A", "name": "www", "value": "192.168.1.2",
                       "zone_id": "zone1"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let args = RecordUpdateArgs {
        id: "r1".into(),
        zone: "zone1".into(),
        name: None,
        record_type: None,
        value: Some("192.168.1.2".into()),
        ttl: None,
    };
    let mut buf: Vec<u8> = Vec::new();
    record::execute(&client_for(&server), RecordCommand::Update(args), &mut buf)
        .await
        .unwrap();
    assert_eq!(output(buf), "Record updated successfully: r1\n");
}

#[tokio::test]
async fn test_record_delete_failure_carries_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/records/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string("record not found"))
        .mount(&server)
        .await;

    let args = RecordDeleteArgs { id: "gone".into() };
    let mut buf: Vec<u8> = Vec::new();
    let err = record::execute(&client_for(&server), RecordCommand::Delete(args), &mut buf)
        .await
        .unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("Error deleting record"));
    assert!(message.contains("record not found"));
    assert!(message.contains("404"));
    assert!(buf.is_empty());
}

#[test]
fn test_connect_requires_token() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.yaml"));

    match commands::connect(&store, None) {
        Ok(_) if std::env::var(crate::config::store::ENV_API_TOKEN).is_ok() => {}
        Ok(_) => panic!("expected missing token error"),
        Err(err) => assert_eq!(err.to_string(), commands::TOKEN_MISSING),
    }
}

#[test]
fn test_config_set_from_flag_and_show() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.yaml"));

    let args = ConfigSetArgs {
        api_token: Some("abcdefghijklmnop".into()),
        pair: vec![],
    };
    let mut buf: Vec<u8> = Vec::new();
    commands::config::execute(&store, ConfigCommand::Set(args), &mut Cursor::new(""), &mut buf)
        .unwrap();
    assert_eq!(output(buf), "Configuration saved successfully.\n");
    assert_eq!(store.load_file().unwrap().api_token, "abcdefghijklmnop");
}

#[test]
fn test_config_set_from_key_value_pair() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.yaml"));

    let args = ConfigSetArgs {
        api_token: None,
        pair: vec!["api-token".into(), "pair-token".into()],
    };
    commands::config::execute(
        &store,
        ConfigCommand::Set(args),
        &mut Cursor::new(""),
        &mut Vec::<u8>::new(),
    )
    .unwrap();
    assert_eq!(store.load_file().unwrap().api_token, "pair-token");
}

#[test]
fn test_config_set_prompts_when_no_token_given() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.yaml"));

    let args = ConfigSetArgs {
        api_token: None,
        pair: vec![],
    };
    let mut buf: Vec<u8> = Vec::new();
    commands::config::execute(
        &store,
        ConfigCommand::Set(args),
        &mut Cursor::new("typed-token\n"),
        &mut buf,
    )
    .unwrap();

    assert!(output(buf).starts_with("Enter your Hetzner DNS API token: "));
    assert_eq!(store.load_file().unwrap().api_token, "typed-token");
}

#[test]
fn test_config_set_prompts_for_bare_token_key() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.yaml"));

    let args = ConfigSetArgs {
        api_token: None,
        pair: vec!["api-token".into()],
    };
    let mut buf: Vec<u8> = Vec::new();
    commands::config::execute(
        &store,
        ConfigCommand::Set(args),
        &mut Cursor::new("typed-token\n"),
        &mut buf,
    )
    .unwrap();

    assert!(output(buf).starts_with("Enter your Hetzner DNS API token: "));
    assert_eq!(store.load_file().unwrap().api_token, "typed-token");
}

#[test]
fn test_config_set_rejects_empty_token() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.yaml"));

    let args = ConfigSetArgs {
        api_token: None,
        pair: vec![],
    };
    let err = commands::config::execute(
        &store,
        ConfigCommand::Set(args),
        &mut Cursor::new("\n"),
        &mut Vec::<u8>::new(),
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "API token cannot be empty");
    assert!(!store.path().exists());
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.yaml"));

    let args = ConfigSetArgs {
        api_token: None,
        pair: vec!["zone".into(), "example.com".into()],
    };
    let err = commands::config::execute(
        &store,
        ConfigCommand::Set(args),
        &mut Cursor::new(""),
        &mut Vec::<u8>::new(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("Unknown configuration key 'zone'"));
}

#[test]
fn test_config_show_masks_saved_token() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.yaml"));
    store
        .save(&Config {
            api_token: "abcdefghijklmnop".into(),
        })
        .unwrap();

    let mut buf: Vec<u8> = Vec::new();
    commands::config::execute(&store, ConfigCommand::Show, &mut Cursor::new(""), &mut buf)
        .unwrap();

    let out = output(buf);
    assert!(out.starts_with("API token: "));
    assert!(!out.contains("abcdefghijklmnop"));
    assert!(!out.contains("Not set"));
}

#[test]
fn test_llmhelp_describes_record_commands() {
    use clap::CommandFactory;

    let options = llmhelp::describe(&crate::cli::Cli::command());
    assert_eq!(options.name, "hetznerdns");

    let record = options
        .subcommands
        .iter()
        .find(|c| c.name == "record")
        .unwrap();
    assert!(!record.examples.is_empty());

    let create = record
        .subcommands
        .iter()
        .find(|c| c.name == "create")
        .unwrap();
    let zone_flag = create.flags.iter().find(|f| f.name == "zone").unwrap();
    assert_eq!(zone_flag.shorthand, Some('z'));
    assert!(zone_flag.required);
    let ttl_flag = create.flags.iter().find(|f| f.name == "ttl").unwrap();
    assert!(!ttl_flag.required);

    assert!(options.flags.iter().all(|f| f.name != "api-url"));
}

#[test]
fn test_cli_parses_record_create() {
    use clap::Parser;

    let cli = crate::cli::Cli::try_parse_from([
        "hetznerdns", "record", "create", "-z", "example.com", "-n", "www", "-t", "A", "-v",
        "192.168.1.1", "--ttl", "3600",
    ])
    .unwrap();

    match cli.command {
        crate::cli::Commands::Record(RecordCommand::Create(args)) => {
            assert_eq!(args.zone, "example.com");
            assert_eq!(args.record_type, "A");
            assert_eq!(args.ttl, Some(3600));
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_cli_verbose_is_long_only() {
    use clap::Parser;

    let cli =
        crate::cli::Cli::try_parse_from(["hetznerdns", "--verbose", "zone", "list"]).unwrap();
    assert!(cli.verbose);

    let cli = crate::cli::Cli::try_parse_from([
        "hetznerdns", "record", "create", "-z", "example.com", "-n", "www", "-t", "A", "-v",
        "10.0.0.1",
    ])
    .unwrap();
    assert!(!cli.verbose);
    match cli.command {
        crate::cli::Commands::Record(RecordCommand::Create(args)) => {
            assert_eq!(args.value, "10.0.0.1");
        }
        other => panic!("unexpected command {other:?}"),
    }
}
