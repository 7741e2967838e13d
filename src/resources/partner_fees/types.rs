use crate::core::wire;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerFee {
    pub id: String,
    pub instance_id: String,
    pub name: String,
    #[serde(with = "wire::amount")]
    pub payout_percentage_fee: f64,
    #[serde(with = "wire::amount")]
    pub payout_flat_fee: f64,
    #[serde(with = "wire::amount")]
    pub payin_percentage_fee: f64,
    #[serde(with = "wire::amount")]
    pub payin_flat_fee: f64,
    #[serde(default)]
    pub evm_wallet_address: Option<String>,
    #[serde(default)]
    pub stellar_wallet_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePartnerFeeInput {
    pub evm_wallet_address: String,
    pub name: String,
    pub payin_flat_fee: f64,
    pub payin_percentage_fee: f64,
    pub payout_flat_fee: f64,
    pub payout_percentage_fee: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_account_set: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stellar_wallet_address: Option<String>,
}

/// Created fee record, returned with its EVM payout address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePartnerFeeResponse {
    pub id: String,
    pub instance_id: String,
    pub name: String,
    #[serde(with = "wire::amount")]
    pub payout_percentage_fee: f64,
    #[serde(with = "wire::amount")]
    pub payout_flat_fee: f64,
    #[serde(with = "wire::amount")]
    pub payin_percentage_fee: f64,
    #[serde(with = "wire::amount")]
    pub payin_flat_fee: f64,
    pub evm_wallet_address: String,
    #[serde(default)]
    pub stellar_wallet_address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_fee_with_string_amounts() {
        let fee: PartnerFee = serde_json::from_value(json!({
            "id": "fe_000000000000",
            "instance_id": "in_000000000000",
            "name": "Display Name",
            "payout_percentage_fee": "0",
            "payout_flat_fee": 0,
            "payin_percentage_fee": 0,
            "payin_flat_fee": "1.5",
            "evm_wallet_address": "0x1234567890123456789012345678901234567890"
        }))
        .unwrap();
        assert!((fee.payin_flat_fee - 1.5).abs() < f64::EPSILON);
        assert!(fee.stellar_wallet_address.is_none());
    }

    #[test]
    fn test_create_input_omits_unset_optionals() {
        let input = CreatePartnerFeeInput {
            evm_wallet_address: "0x1234567890123456789012345678901234567890".to_string(),
            name: "Display Name".to_string(),
            payin_flat_fee: 0.0,
            payin_percentage_fee: 0.0,
            payout_flat_fee: 0.0,
            payout_percentage_fee: 0.0,
            virtual_account_set: None,
            stellar_wallet_address: None,
        };
        let body = serde_json::to_value(&input).unwrap();
        assert!(body.get("virtual_account_set").is_none());
        assert!(body.get("stellar_wallet_address").is_none());

        let back: CreatePartnerFeeInput = serde_json::from_value(body).unwrap();
        assert_eq!(back, input);
    }
}
