use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A DNS zone as reported by the provider.
///
/// Every field is extracted on its own: a missing or wrongly typed field
/// leaves its zero value instead of failing the whole zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Zone {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub ttl: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub records_count: u32,
}

/// A single DNS resource record.
///
/// Serialized as the request body for create and update. `id` is left out
/// while empty, `ttl` while zero (zone default), timestamps while empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub record_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: String,
    #[serde(
        default,
        deserialize_with = "lenient_u32",
        skip_serializing_if = "is_zero"
    )]
    pub ttl: u32,
    #[serde(default, deserialize_with = "lenient_string")]
    pub zone_id: String,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub created: String,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub modified: String,
}

/// `{"zones": [...]}`
#[derive(Debug, Deserialize)]
pub(crate) struct ZonesEnvelope {
    pub zones: Option<Vec<Value>>,
}

/// `{"records": [...]}`
#[derive(Debug, Deserialize)]
pub(crate) struct RecordsEnvelope {
    pub records: Option<Vec<Value>>,
}

/// `{"record": {...}}`
#[derive(Debug, Deserialize)]
pub(crate) struct RecordEnvelope {
    pub record: Option<Value>,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

// JSON numbers arrive as floats from some endpoints; truncate like an integer cast.
fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
            .or_else(|| n.as_f64().map(|f| f as u32))
            .unwrap_or_default(),
        _ => 0,
    })
}
