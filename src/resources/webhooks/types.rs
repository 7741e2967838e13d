use crate::core::wire;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event names a webhook endpoint can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WebhookEvent {
    #[serde(rename = "receiver.new")]
    ReceiverNew,
    #[serde(rename = "receiver.update")]
    ReceiverUpdate,
    #[serde(rename = "bankAccount.new")]
    BankAccountNew,
    #[serde(rename = "payout.new")]
    PayoutNew,
    #[serde(rename = "payout.update")]
    PayoutUpdate,
    #[serde(rename = "payout.complete")]
    PayoutComplete,
    #[serde(rename = "payout.partnerFee")]
    PayoutPartnerFee,
    #[serde(rename = "blockchainWallet.new")]
    BlockchainWalletNew,
    #[serde(rename = "payin.new")]
    PayinNew,
    #[serde(rename = "payin.update")]
    PayinUpdate,
    #[serde(rename = "payin.complete")]
    PayinComplete,
    #[serde(rename = "payin.partnerFee")]
    PayinPartnerFee,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEndpoint {
    pub id: String,
    pub url: String,
    pub events: Vec<WebhookEvent>,
    #[serde(default, with = "wire::option_timestamp")]
    pub last_event_at: Option<DateTime<Utc>>,
    pub instance_id: String,
    #[serde(with = "wire::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "wire::timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWebhookEndpointInput {
    pub url: String,
    pub events: Vec<WebhookEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWebhookEndpointResponse {
    pub id: String,
}

/// Signing secret of an endpoint, in `whsec_...` form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookSecret {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalAccessUrl {
    pub url: String,
}
