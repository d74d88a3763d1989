use thiserror::Error;

use super::models::Zone;

/// Errors returned by [`DnsApi`](super::DnsApi) operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout,
    /// local name resolution failure) or could not be built.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a status outside the operation's success set.
    #[error("API error: {body}, status code: {status}")]
    Api { status: u16, body: String },

    /// The status was a success but the body did not have the expected envelope.
    #[error("unexpected response format: {0}")]
    Decode(String),

    /// The record ID cannot name a single record.
    #[error("invalid record ID '{0}'")]
    InvalidRecordId(String),

    /// No zone matched the reference by ID or by name.
    #[error(
        "could not find zone with ID or name '{query}'{}",
        available_zones(.available)
    )]
    ZoneNotFound { query: String, available: Vec<Zone> },
}

fn available_zones(zones: &[Zone]) -> String {
    if zones.is_empty() {
        return "\n\nNo zones available.".to_string();
    }
    let mut out = String::from("\n\nAvailable zones:");
    for zone in zones {
        out.push_str(&format!("\n- {} (ID: {})", zone.name, zone.id));
    }
    out
}
