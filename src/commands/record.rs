use anyhow::{Context, Result};
use std::io::Write;

use crate::api::{DnsApi, Record};
use crate::cli::{
    RecordCommand, RecordCreateArgs, RecordDeleteArgs, RecordListArgs, RecordUpdateArgs,
};
use crate::output::{format_ttl, Table};

pub async fn execute(api: &dyn DnsApi, cmd: RecordCommand, out: &mut dyn Write) -> Result<()> {
    match cmd {
        RecordCommand::List(args) => list(api, args, out).await,
        RecordCommand::Create(args) => create(api, args, out).await,
        RecordCommand::Update(args) => update(api, args, out).await,
        RecordCommand::Delete(args) => delete(api, args, out).await,
    }
}

async fn list(api: &dyn DnsApi, args: RecordListArgs, out: &mut dyn Write) -> Result<()> {
    let zone_id = api.resolve_zone_id(&args.zone).await?;
    let records = api
        .list_records(&zone_id)
        .await
        .context("Error fetching records")?;

    if records.is_empty() {
        writeln!(out, "No records found for this zone.")?;
        return Ok(());
    }

    let mut table = Table::new(["ID", "NAME", "TYPE", "VALUE", "TTL"]);
    for record in records {
        let ttl = format_ttl(record.ttl);
        table.add_row([record.id, record.name, record.record_type, record.value, ttl]);
    }
    table.render(out)?;
    Ok(())
}

async fn create(api: &dyn DnsApi, args: RecordCreateArgs, out: &mut dyn Write) -> Result<()> {
    let zone_id = api.resolve_zone_id(&args.zone).await?;

    let record = Record {
        zone_id,
        name: args.name,
        record_type: args.record_type,
        value: args.value,
        ttl: args.ttl.unwrap_or_default(),
        ..Default::default()
    };

    let created = api
        .create_record(&record)
        .await
        .context("Error creating record")?;

    writeln!(out, "Record created successfully with ID: {}", created.id)?;
    Ok(())
}

/// Sends only the fields given on the command line; the rest go out empty
/// and the provider decides what an empty field means.
async fn update(api: &dyn DnsApi, args: RecordUpdateArgs, out: &mut dyn Write) -> Result<()> {
    let zone_id = api.resolve_zone_id(&args.zone).await?;

    let record = Record {
        id: args.id,
        zone_id,
        name: args.name.unwrap_or_default(),
        record_type: args.record_type.unwrap_or_default(),
        value: args.value.unwrap_or_default(),
        ttl: args.ttl.unwrap_or_default(),
        ..Default::default()
    };

    let updated = api
        .update_record(&record)
        .await
        .context("Error updating record")?;

    writeln!(out, "Record updated successfully: {}", updated.id)?;
    Ok(())
}

async fn delete(api: &dyn DnsApi, args: RecordDeleteArgs, out: &mut dyn Write) -> Result<()> {
    api.delete_record(&args.id)
        .await
        .context("Error deleting record")?;

    writeln!(out, "Record deleted successfully.")?;
    Ok(())
}
