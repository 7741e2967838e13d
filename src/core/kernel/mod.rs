//! Transport layer shared by every resource client.
//!
//! - `Transport`: the narrow request capability resource clients depend on
//! - `HttpTransport`: reqwest-backed implementation carrying credentials and fixed headers
//! - `signer`: webhook signature computation and verification
//!
//! Resource clients never see the API key. They only receive a `Transport`
//! handle, so tests can swap in a recording double.
pub mod rest;
pub mod signer;

pub use rest::{
    HttpTransport, HttpTransportBuilder, HttpTransportConfig, Transport, DEFAULT_BASE_URL,
    SDK_VERSION,
};
pub use signer::{sign_webhook, verify_webhook, WebhookHeaders};
