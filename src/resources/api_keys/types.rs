use crate::core::enums::Permission;
use crate::core::errors::BlindPayError;
use crate::core::wire;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    pub id: String,
    pub name: String,
    pub permission: Permission,
    pub token: String,
    #[serde(default)]
    pub ip_whitelist: Vec<String>,
    pub unkey_id: String,
    #[serde(default, with = "wire::option_timestamp")]
    pub last_used_at: Option<DateTime<Utc>>,
    pub instance_id: String,
    #[serde(with = "wire::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "wire::timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Validated request body for a new API key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateApiKeyInput {
    name: String,
    permission: Permission,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    ip_whitelist: Vec<String>,
}

impl CreateApiKeyInput {
    pub fn new(
        name: impl Into<String>,
        permission: Permission,
        ip_whitelist: Vec<String>,
    ) -> Result<Self, BlindPayError> {
        let name = name.into();
        if name.is_empty() {
            return Err(BlindPayError::validation("API key name cannot be empty"));
        }

        if let Some(bad) = ip_whitelist.iter().find(|ip| ip.parse::<IpAddr>().is_err()) {
            return Err(BlindPayError::validation_with(
                format!("Invalid IP address: {}", bad),
                "ip",
                bad.clone(),
            ));
        }

        Ok(Self {
            name,
            permission,
            ip_whitelist,
        })
    }

    /// Full-access key with no IP restriction
    pub fn full_access(name: impl Into<String>) -> Result<Self, BlindPayError> {
        Self::new(name, Permission::FullAccess, Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateApiKeyResponse {
    pub id: String,
    pub token: String,
}
