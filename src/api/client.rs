use super::error::ApiError;
use super::models::*;
use super::resolve::find_zone;
use async_trait::async_trait;
use log::info;

#[async_trait]
pub trait DnsApi: Send + Sync {
    async fn list_zones(&self) -> Result<Vec<Zone>, ApiError>;
    async fn list_records(&self, zone_id: &str) -> Result<Vec<Record>, ApiError>;
    async fn create_record(&self, record: &Record) -> Result<Record, ApiError>;
    async fn update_record(&self, record: &Record) -> Result<Record, ApiError>;
    async fn delete_record(&self, record_id: &str) -> Result<(), ApiError>;

    /// Turns a zone ID or zone name into the zone ID.
    ///
    /// Fetches the zone list fresh on every call.
    async fn resolve_zone_id(&self, name_or_id: &str) -> Result<String, ApiError> {
        let zones = self.list_zones().await?;

        match find_zone(&zones, name_or_id) {
            Some(zone) => {
                info!("Resolved zone '{}' to {} ({})", name_or_id, zone.id, zone.name);
                Ok(zone.id.clone())
            }
            None => Err(ApiError::ZoneNotFound {
                query: name_or_id.to_string(),
                available: zones,
            }),
        }
    }
}
