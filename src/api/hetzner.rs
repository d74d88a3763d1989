use std::time::Duration;

use super::{client::DnsApi, error::ApiError, models::*};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const API_BASE_URL: &str = "https://dns.hetzner.com/api/v1";
const AUTH_HEADER: &str = "Auth-API-Token";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HetznerClient {
    client: reqwest::Client,
    api_token: String,
    base_url: String,
}

#[async_trait]
impl DnsApi for HetznerClient {
    async fn list_zones(&self) -> Result<Vec<Zone>, ApiError> {
        let (status, body) = self.send(self.request(Method::GET, "/zones")).await?;
        expect_status(status, body.as_str(), &[200])?;

        let envelope: ZonesEnvelope = parse_envelope(&body)?;
        let zones = envelope.zones.ok_or_else(|| {
            ApiError::Decode("zones field not found or not an array".to_string())
        })?;

        Ok(decode_items(zones, "zone"))
    }

    async fn list_records(&self, zone_id: &str) -> Result<Vec<Record>, ApiError> {
        let request = self
            .request(Method::GET, "/records")
            .query(&[("zone_id", zone_id)]);
        let (status, body) = self.send(request).await?;
        expect_status(status, body.as_str(), &[200])?;

        let envelope: RecordsEnvelope = parse_envelope(&body)?;
        let records = envelope.records.ok_or_else(|| {
            ApiError::Decode("records field not found or not an array".to_string())
        })?;

        Ok(decode_items(records, "record"))
    }

    async fn create_record(&self, record: &Record) -> Result<Record, ApiError> {
        // A record being created has no identity yet.
        let record = Record {
            id: String::new(),
            ..record.clone()
        };
        let request = self.request(Method::POST, "/records").json(&record);
        let (status, body) = self.send(request).await?;
        expect_status(status, body.as_str(), &[200, 201])?;

        decode_record(&body)
    }

    async fn update_record(&self, record: &Record) -> Result<Record, ApiError> {
        let request = self
            .request(Method::PUT, &record_path(&record.id)?)
            .json(record);
        let (status, body) = self.send(request).await?;
        expect_status(status, body.as_str(), &[200])?;

        decode_record(&body)
    }

    async fn delete_record(&self, record_id: &str) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, &record_path(record_id)?);
        let (status, body) = self.send(request).await?;
        expect_status(status, body.as_str(), &[200, 204])
    }
}

impl HetznerClient {
    pub fn new(api_token: String) -> Result<Self, ApiError> {
        Self::with_base_url(api_token, API_BASE_URL)
    }

    pub fn with_base_url(api_token: String, base_url: &str) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_token,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .header(AUTH_HEADER, &self.api_token)
    }

    async fn send(&self, request: RequestBuilder) -> Result<(u16, String), ApiError> {
        let request = request.build()?;
        debug!("{} {}", request.method(), request.url());

        let response = self.client.execute(request).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("Response {}: {}", status, body);

        Ok((status, body))
    }
}

/// `/records/{id}` with the ID kept as a single path segment.
fn record_path(record_id: &str) -> Result<String, ApiError> {
    if matches!(record_id, "" | "." | "..") {
        return Err(ApiError::InvalidRecordId(record_id.to_string()));
    }
    Ok(format!("/records/{}", urlencoding::encode(record_id)))
}

fn expect_status(status: u16, body: &str, accepted: &[u16]) -> Result<(), ApiError> {
    if accepted.contains(&status) {
        return Ok(());
    }
    Err(ApiError::Api {
        status,
        body: body.to_string(),
    })
}

fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decodes each element on its own. Elements that are not JSON objects are
/// skipped; the rest always decode because every field is lenient.
fn decode_items<T: DeserializeOwned>(items: Vec<Value>, kind: &str) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(_) => match serde_json::from_value(item) {
                Ok(decoded) => Some(decoded),
                Err(e) => {
                    warn!("Skipping malformed {}: {}", kind, e);
                    None
                }
            },
            other => {
                warn!("Skipping {} that is not an object: {}", kind, other);
                None
            }
        })
        .collect()
}

fn decode_record(body: &str) -> Result<Record, ApiError> {
    let envelope: RecordEnvelope = parse_envelope(body)?;
    match envelope.record {
        Some(record @ Value::Object(_)) => {
            serde_json::from_value(record).map_err(|e| ApiError::Decode(e.to_string()))
        }
        _ => Err(ApiError::Decode(
            "record field not found or not an object".to_string(),
        )),
    }
}
