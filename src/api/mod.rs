pub mod client;
pub mod error;
pub mod hetzner;
pub mod models;
pub mod resolve;

pub use client::DnsApi;
pub use error::ApiError;
pub use hetzner::HetznerClient;
pub use models::{Record, Zone};
