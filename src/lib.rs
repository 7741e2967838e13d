#![recursion_limit = "256"]
pub mod client;
pub mod core;
pub mod resources;

pub use client::{BlindPay, InstancesNamespace, PayinsNamespace, ReceiversNamespace, WalletsNamespace};
pub use crate::core::config::{BlindPayConfig, ConfigError};
pub use crate::core::enums::*;
pub use crate::core::errors::{BlindPayError, ErrorCode};
pub use crate::core::kernel::{
    sign_webhook, verify_webhook, HttpTransport, HttpTransportBuilder, HttpTransportConfig, Transport,
    WebhookHeaders,
};
pub use crate::core::tracking::*;
pub use crate::core::types::*;
