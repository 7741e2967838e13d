pub mod rest;
pub mod types;

pub use rest::ApiKeys;
pub use types::{ApiKey, CreateApiKeyInput, CreateApiKeyResponse};
