use anyhow::{Context, Result};
use std::io::Write;

use crate::api::DnsApi;
use crate::cli::ZoneCommand;
use crate::output::Table;

pub async fn execute(api: &dyn DnsApi, cmd: ZoneCommand, out: &mut dyn Write) -> Result<()> {
    match cmd {
        ZoneCommand::List => list(api, out).await,
    }
}

async fn list(api: &dyn DnsApi, out: &mut dyn Write) -> Result<()> {
    let zones = api.list_zones().await.context("Error fetching zones")?;

    if zones.is_empty() {
        writeln!(out, "No zones found.")?;
        return Ok(());
    }

    let mut table = Table::new(["ID", "NAME", "TTL", "RECORDS"]);
    for zone in zones {
        table.add_row([
            zone.id,
            zone.name,
            zone.ttl.to_string(),
            zone.records_count.to_string(),
        ]);
    }
    table.render(out)?;
    Ok(())
}
