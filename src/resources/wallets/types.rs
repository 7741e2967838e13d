use crate::core::enums::Network;
use crate::core::wire;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockchainWallet {
    pub id: String,
    pub name: String,
    pub network: Network,
    pub is_account_abstraction: bool,
    pub receiver_id: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub signature_tx_hash: Option<String>,
}

/// Message the receiver signs to prove wallet ownership
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletMessage {
    pub message: String,
}

/// Account-abstraction wallet registered by address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBlockchainWalletWithAddressInput {
    #[serde(skip)]
    pub receiver_id: String,
    pub name: String,
    pub network: Network,
    pub address: String,
}

/// Externally owned wallet proven by a signed message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBlockchainWalletWithHashInput {
    #[serde(skip)]
    pub receiver_id: String,
    pub name: String,
    pub network: Network,
    pub signature_tx_hash: String,
}

/// Adds `is_account_abstraction` to a wallet creation body
#[derive(Serialize)]
pub(crate) struct WalletBody<'a, T> {
    #[serde(flatten)]
    record: &'a T,
    is_account_abstraction: bool,
}

impl<'a, T> WalletBody<'a, T> {
    pub(crate) const fn new(record: &'a T, is_account_abstraction: bool) -> Self {
        Self {
            record,
            is_account_abstraction,
        }
    }
}

/// Unsigned Stellar transaction envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetTrustline {
    pub xdr: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintUsdbStellarInput {
    pub address: String,
    pub amount: String,
    #[serde(rename = "signedXdr")]
    pub signed_xdr: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfframpWallet {
    pub id: String,
    pub external_id: String,
    pub instance_id: String,
    pub receiver_id: String,
    pub bank_account_id: String,
    pub network: String,
    pub address: String,
    #[serde(with = "wire::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "wire::timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOfframpWalletInput {
    #[serde(skip)]
    pub receiver_id: String,
    #[serde(skip)]
    pub bank_account_id: String,
    pub external_id: String,
    pub network: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOfframpWalletResponse {
    pub id: String,
    pub external_id: String,
    pub network: String,
    pub address: String,
}
