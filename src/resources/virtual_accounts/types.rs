use crate::core::enums::StablecoinToken;
use serde::{Deserialize, Serialize};

/// Routing and account number pair for one US rail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRouting {
    pub routing_number: String,
    pub account_number: String,
}

/// Named party with a postal address, used for both beneficiary and receiving bank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualAccountParty {
    pub name: String,
    pub address_line_1: String,
    #[serde(default)]
    pub address_line_2: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualAccountUsDetails {
    pub ach: AccountRouting,
    pub wire: AccountRouting,
    pub rtp: AccountRouting,
    pub swift_bic_code: String,
    /// Free-form label such as `Business checking`
    pub account_type: String,
    pub beneficiary: VirtualAccountParty,
    pub receiving_bank: VirtualAccountParty,
}

/// US deposit account that converts incoming fiat into a stablecoin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualAccount {
    pub id: String,
    pub us: VirtualAccountUsDetails,
    pub token: StablecoinToken,
    pub blockchain_wallet_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVirtualAccountInput {
    #[serde(skip)]
    pub receiver_id: String,
    pub blockchain_wallet_id: String,
    pub token: StablecoinToken,
}

/// Same body as creation; the account is addressed by its receiver
pub type UpdateVirtualAccountInput = CreateVirtualAccountInput;
