use crate::core::enums::{Currency, CurrencyType, Network, StablecoinToken, TransactionDocumentType};
use crate::core::wire;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payout quote request.
///
/// Unset optionals go over the wire as explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateQuoteInput {
    pub bank_account_id: String,
    pub currency_type: CurrencyType,
    pub request_amount: f64,
    #[serde(default)]
    pub cover_fees: Option<bool>,
    #[serde(default)]
    pub partner_fee_id: Option<String>,
    #[serde(default)]
    pub transaction_document_file: Option<String>,
    #[serde(default)]
    pub transaction_document_id: Option<String>,
    #[serde(default)]
    pub transaction_document_type: Option<TransactionDocumentType>,
    #[serde(default)]
    pub network: Option<Network>,
    #[serde(default)]
    pub token: Option<StablecoinToken>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateQuoteInput {
    pub fn new(bank_account_id: impl Into<String>, currency_type: CurrencyType, request_amount: f64) -> Self {
        Self {
            bank_account_id: bank_account_id.into(),
            currency_type,
            request_amount,
            cover_fees: None,
            partner_fee_id: None,
            transaction_document_file: None,
            transaction_document_id: None,
            transaction_document_type: None,
            network: None,
            token: None,
            description: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteContractNetwork {
    pub name: String,
    #[serde(rename = "chainId")]
    pub chain_id: i64,
}

/// On-chain approval the sender must sign before the payout executes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteContract {
    pub abi: Vec<Value>,
    pub address: String,
    #[serde(rename = "functionName")]
    pub function_name: String,
    #[serde(rename = "blindpayContractAddress")]
    pub blindpay_contract_address: String,
    pub amount: String,
    pub network: QuoteContractNetwork,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateQuoteResponse {
    pub id: String,
    pub expires_at: i64,
    #[serde(with = "wire::amount")]
    pub commercial_quotation: f64,
    #[serde(with = "wire::amount")]
    pub blindpay_quotation: f64,
    #[serde(with = "wire::amount")]
    pub receiver_amount: f64,
    #[serde(with = "wire::amount")]
    pub sender_amount: f64,
    #[serde(with = "wire::amount")]
    pub partner_fee_amount: f64,
    #[serde(with = "wire::amount")]
    pub flat_fee: f64,
    pub contract: QuoteContract,
    #[serde(with = "wire::amount")]
    pub receiver_local_amount: f64,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetFxRateInput {
    pub currency_type: CurrencyType,
    pub from: Currency,
    pub to: Currency,
    pub request_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FxRate {
    #[serde(with = "wire::amount")]
    pub commercial_quotation: f64,
    #[serde(with = "wire::amount")]
    pub blindpay_quotation: f64,
    #[serde(with = "wire::amount")]
    pub result_amount: f64,
    #[serde(with = "wire::amount")]
    pub instance_flat_fee: f64,
    #[serde(with = "wire::amount")]
    pub instance_percentage_fee: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_optionals_are_explicit_nulls() {
        let input = CreateQuoteInput::new("ba_000000000000", CurrencyType::Sender, 1000.0);
        let body = serde_json::to_value(&input).unwrap();
        for key in [
            "cover_fees",
            "partner_fee_id",
            "transaction_document_file",
            "transaction_document_id",
            "transaction_document_type",
            "network",
            "token",
            "description",
        ] {
            assert_eq!(body.get(key), Some(&Value::Null), "{} should be null", key);
        }
        assert_eq!(body["currency_type"], "sender");
    }

    #[test]
    fn test_quote_input_round_trip_keeps_set_and_null_fields() {
        let input = CreateQuoteInput {
            cover_fees: Some(true),
            network: Some(Network::Base),
            token: Some(StablecoinToken::Usdc),
            ..CreateQuoteInput::new("ba_000000000000", CurrencyType::Receiver, 5240.5)
        };
        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(body["network"], "base");
        assert_eq!(body["partner_fee_id"], Value::Null);

        let decoded: CreateQuoteInput = serde_json::from_value(body).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn test_decode_quote_with_contract() {
        let quote: CreateQuoteResponse = serde_json::from_value(json!({
            "id": "qu_000000000000",
            "expires_at": 1712958191,
            "commercial_quotation": 495,
            "blindpay_quotation": "505",
            "receiver_amount": 5240,
            "sender_amount": 1010,
            "partner_fee_amount": 150,
            "flat_fee": 50,
            "contract": {
                "abi": [{}],
                "address": "0x0000000000000000000000000000000000000000",
                "functionName": "approve",
                "blindpayContractAddress": "0x0000000000000000000000000000000000000000",
                "amount": "1000000000000000000",
                "network": {"name": "Ethereum", "chainId": 1}
            },
            "receiver_local_amount": 1000,
            "description": "Memo code or description, only works with USD and BRL"
        }))
        .unwrap();
        assert_eq!(quote.contract.function_name, "approve");
        assert_eq!(quote.contract.network.chain_id, 1);
        assert!((quote.blindpay_quotation - 505.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fx_rate_requires_every_field() {
        let partial = json!({"commercial_quotation": 1, "blindpay_quotation": 1});
        assert!(serde_json::from_value::<FxRate>(partial).is_err());
    }
}
