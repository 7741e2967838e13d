use crate::core::enums::{
    AccountClass, ArgentinaTransfers, BankAccountType, Country, Currency, Network, Rail, SpeiProtocol,
    StablecoinToken, TransactionDocumentType, TransactionStatus,
};
use crate::core::errors::BlindPayError;
use crate::core::tracking::{
    TrackingComplete, TrackingLiquidity, TrackingPartnerFee, TrackingPayment, TrackingTransaction,
};
use crate::core::types::{build_query_string, PaginationParams};
use crate::core::wire;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A payout with the destination account details flattened in.
///
/// Which of the rail-specific fields are populated depends on `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub receiver_id: String,
    pub id: String,
    pub status: TransactionStatus,
    pub sender_wallet_address: String,
    #[serde(default)]
    pub signed_transaction: Option<String>,
    pub quote_id: String,
    pub instance_id: String,
    pub tracking_transaction: TrackingTransaction,
    pub tracking_payment: TrackingPayment,
    pub tracking_liquidity: TrackingLiquidity,
    pub tracking_complete: TrackingComplete,
    pub tracking_partner_fee: TrackingPartnerFee,
    #[serde(with = "wire::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "wire::timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub legal_name: Option<String>,
    pub network: Network,
    pub token: StablecoinToken,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "wire::amount")]
    pub sender_amount: f64,
    #[serde(with = "wire::amount")]
    pub receiver_amount: f64,
    #[serde(with = "wire::amount")]
    pub partner_fee_amount: f64,
    #[serde(with = "wire::amount")]
    pub commercial_quotation: f64,
    #[serde(with = "wire::amount")]
    pub blindpay_quotation: f64,
    #[serde(with = "wire::amount")]
    pub total_fee_amount: f64,
    #[serde(with = "wire::amount")]
    pub receiver_local_amount: f64,
    pub currency: Currency,
    #[serde(default)]
    pub transaction_document_file: Option<String>,
    #[serde(default)]
    pub transaction_document_type: Option<TransactionDocumentType>,
    #[serde(default)]
    pub transaction_document_id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Rail,
    #[serde(default)]
    pub pix_key: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub routing_number: Option<String>,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    pub account_class: Option<AccountClass>,
    #[serde(default)]
    pub address_line_1: Option<String>,
    #[serde(default)]
    pub address_line_2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state_province_region: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub account_type: Option<BankAccountType>,
    #[serde(default)]
    pub ach_cop_beneficiary_first_name: Option<String>,
    #[serde(default)]
    pub ach_cop_bank_account: Option<String>,
    #[serde(default)]
    pub ach_cop_bank_code: Option<String>,
    #[serde(default)]
    pub ach_cop_beneficiary_last_name: Option<String>,
    #[serde(default)]
    pub ach_cop_document_id: Option<String>,
    #[serde(default)]
    pub ach_cop_document_type: Option<String>,
    #[serde(default)]
    pub ach_cop_email: Option<String>,
    #[serde(default)]
    pub beneficiary_name: Option<String>,
    #[serde(default)]
    pub spei_clabe: Option<String>,
    #[serde(default)]
    pub spei_protocol: Option<SpeiProtocol>,
    #[serde(default)]
    pub spei_institution_code: Option<String>,
    #[serde(default)]
    pub swift_beneficiary_country: Option<Country>,
    #[serde(default)]
    pub swift_code_bic: Option<String>,
    #[serde(default)]
    pub swift_account_holder_name: Option<String>,
    #[serde(default)]
    pub swift_account_number_iban: Option<String>,
    #[serde(default)]
    pub transfers_account: Option<String>,
    #[serde(default)]
    pub transfers_type: Option<ArgentinaTransfers>,
    pub has_virtual_account: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPayoutsInput {
    pub receiver_id: Option<String>,
    pub pagination: PaginationParams,
}

impl ListPayoutsInput {
    pub fn to_query_string(&self) -> String {
        let mut pairs = self.pagination.to_query_pairs();
        if let Some(ref receiver_id) = self.receiver_id {
            pairs.push(("receiver_id", receiver_id.clone()));
        }
        build_query_string(&pairs)
    }
}

/// Page window for exports; cursors are not accepted here
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportPayoutsInput {
    window: PaginationParams,
}

impl ExportPayoutsInput {
    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Result<Self, BlindPayError> {
        Ok(Self {
            window: PaginationParams::new(limit, offset, None, None)?,
        })
    }

    pub fn to_query_string(&self) -> String {
        self.window.to_query_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizeStellarTokenInput {
    pub quote_id: String,
    pub sender_wallet_address: String,
}

/// Transaction the sender signs to authorize the Stellar asset transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizeStellarTokenResponse {
    pub transaction_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateStellarPayoutInput {
    pub quote_id: String,
    pub sender_wallet_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_transaction: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEvmPayoutInput {
    pub quote_id: String,
    pub sender_wallet_address: String,
}

/// Payout as returned right after creation, on either chain family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePayoutResponse {
    pub id: String,
    pub status: TransactionStatus,
    pub sender_wallet_address: String,
    pub receiver_id: String,
    #[serde(default)]
    pub tracking_complete: Option<TrackingComplete>,
    #[serde(default)]
    pub tracking_payment: Option<TrackingPayment>,
    #[serde(default)]
    pub tracking_transaction: Option<TrackingTransaction>,
    #[serde(default)]
    pub tracking_partner_fee: Option<TrackingPartnerFee>,
    #[serde(default)]
    pub tracking_liquidity: Option<TrackingLiquidity>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stellar_input_omits_unsigned_transaction() {
        let input = CreateStellarPayoutInput {
            quote_id: "qu_000000000000".to_string(),
            sender_wallet_address: "GAB22222222222222222222222222222222222222222222222222222222222".to_string(),
            signed_transaction: None,
        };
        let body = serde_json::to_value(&input).unwrap();
        assert!(body.get("signed_transaction").is_none());
    }

    #[test]
    fn test_list_query_with_receiver_filter() {
        let input = ListPayoutsInput {
            receiver_id: Some("re_000000000000".to_string()),
            pagination: PaginationParams::default().starting_after("pa_1"),
        };
        assert_eq!(input.to_query_string(), "?starting_after=pa_1&receiver_id=re_000000000000");
    }

    #[test]
    fn test_export_without_window_has_no_query() {
        assert_eq!(ExportPayoutsInput::default().to_query_string(), "");
        assert_eq!(
            ExportPayoutsInput::new(Some(50), Some(0)).unwrap().to_query_string(),
            "?limit=50&offset=0"
        );
    }

    #[test]
    fn test_create_response_tolerates_missing_stages() {
        let created: CreatePayoutResponse = serde_json::from_value(json!({
            "id": "pa_000000000000",
            "status": "processing",
            "sender_wallet_address": "0x123...890",
            "receiver_id": "re_000000000000",
            "tracking_transaction": {"step": "processing", "transaction_hash": "0x123...890"}
        }))
        .unwrap();
        assert_eq!(created.status, TransactionStatus::Processing);
        assert!(created.tracking_liquidity.is_none());
        assert_eq!(
            created.tracking_transaction.unwrap().transaction_hash.as_deref(),
            Some("0x123...890")
        );
    }
}
