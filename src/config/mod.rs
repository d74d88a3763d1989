pub mod models;
pub mod store;

pub use models::Config;
pub use store::ConfigStore;
