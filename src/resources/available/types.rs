use serde::{Deserialize, Serialize};

/// One selectable option of a bank-detail field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetailItem {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// A field a rail requires when registering a bank account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetail {
    pub label: String,
    pub regex: String,
    pub key: String,
    #[serde(default)]
    pub items: Vec<BankDetailItem>,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RailInfo {
    pub label: String,
    pub value: String,
    pub country: String,
}
