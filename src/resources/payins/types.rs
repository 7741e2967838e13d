use crate::core::enums::{CurrencyType, Network, StablecoinToken, TransactionStatus};
use crate::core::errors::BlindPayError;
use crate::core::tracking::{TrackingComplete, TrackingPartnerFee, TrackingPayment, TrackingTransaction};
use crate::core::types::{build_query_string, PaginationParams};
use crate::core::wire;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::resources::quotes::GetFxRateInput as GetPayinFxRateInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Ach,
    Wire,
    Pix,
    Spei,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlindpayBankAccount {
    pub routing_number: String,
    pub account_number: String,
}

/// Name and address of a party on BlindPay's receiving account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlindpayBankParty {
    pub name: String,
    pub address_line_1: String,
    pub address_line_2: String,
}

/// Account the sender pays into to fund a payin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlindpayBankDetails {
    pub routing_number: String,
    pub account_number: String,
    pub account_type: String,
    pub swift_bic_code: String,
    pub ach: BlindpayBankAccount,
    pub wire: BlindpayBankAccount,
    pub rtp: BlindpayBankAccount,
    pub beneficiary: BlindpayBankParty,
    pub receiving_bank: BlindpayBankParty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payin {
    pub receiver_id: String,
    pub id: String,
    pub status: TransactionStatus,
    pub payin_quote_id: String,
    pub instance_id: String,
    #[serde(with = "wire::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "wire::timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: String,
    pub payment_method: String,
    #[serde(with = "wire::amount")]
    pub sender_amount: f64,
    #[serde(with = "wire::amount")]
    pub receiver_amount: f64,
    pub token: StablecoinToken,
    #[serde(with = "wire::amount")]
    pub partner_fee_amount: f64,
    #[serde(with = "wire::amount")]
    pub total_fee_amount: f64,
    #[serde(with = "wire::amount")]
    pub commercial_quotation: f64,
    #[serde(with = "wire::amount")]
    pub blindpay_quotation: f64,
    pub currency: String,
    #[serde(with = "wire::amount")]
    pub billing_fee: f64,
    pub name: String,
    pub address: String,
    pub network: Network,
    pub blindpay_bank_details: BlindpayBankDetails,
    #[serde(default)]
    pub pix_code: Option<String>,
    #[serde(default)]
    pub memo_code: Option<String>,
    #[serde(default)]
    pub clabe: Option<String>,
    #[serde(default)]
    pub tracking_transaction: Option<TrackingTransaction>,
    #[serde(default)]
    pub tracking_payment: Option<TrackingPayment>,
    #[serde(default)]
    pub tracking_complete: Option<TrackingComplete>,
    #[serde(default)]
    pub tracking_partner_fee: Option<TrackingPartnerFee>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub legal_name: Option<String>,
}

/// Filters for listing payins, on top of the usual page window
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPayinsInput {
    pub status: Option<TransactionStatus>,
    pub receiver_id: Option<String>,
    pub pagination: PaginationParams,
}

impl ListPayinsInput {
    pub fn to_query_string(&self) -> String {
        let mut pairs = self.pagination.to_query_pairs();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(ref receiver_id) = self.receiver_id {
            pairs.push(("receiver_id", receiver_id.clone()));
        }
        build_query_string(&pairs)
    }
}

/// Export filter; the status is mandatory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayinsInput {
    pub status: TransactionStatus,
    window: PaginationParams,
}

impl ExportPayinsInput {
    pub fn new(status: TransactionStatus, limit: Option<u32>, offset: Option<u32>) -> Result<Self, BlindPayError> {
        Ok(Self {
            status,
            window: PaginationParams::new(limit, offset, None, None)?,
        })
    }

    pub fn to_query_string(&self) -> String {
        let mut pairs = vec![("status", self.status.as_str().to_string())];
        pairs.extend(self.window.to_query_pairs());
        build_query_string(&pairs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEvmPayinResponse {
    pub id: String,
    pub status: TransactionStatus,
    pub receiver_id: String,
    #[serde(with = "wire::amount")]
    pub receiver_amount: f64,
    pub blindpay_bank_details: BlindpayBankDetails,
    #[serde(default)]
    pub pix_code: Option<String>,
    #[serde(default)]
    pub memo_code: Option<String>,
    #[serde(default)]
    pub clabe: Option<String>,
    #[serde(default)]
    pub tracking_complete: Option<TrackingComplete>,
    #[serde(default)]
    pub tracking_payment: Option<TrackingPayment>,
    #[serde(default)]
    pub tracking_transaction: Option<TrackingTransaction>,
    #[serde(default)]
    pub tracking_partner_fee: Option<TrackingPartnerFee>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayerRules {
    #[serde(default)]
    pub pix_allowed_tax_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePayinQuoteInput {
    pub blockchain_wallet_id: String,
    pub currency_type: CurrencyType,
    pub payment_method: PaymentMethod,
    pub request_amount: f64,
    pub token: StablecoinToken,
    pub cover_fees: bool,
    pub payer_rules: PayerRules,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_fee_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePayinQuoteResponse {
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
    #[serde(default, with = "wire::option_amount")]
    pub partner_fee_amount: Option<f64>,
    #[serde(default, with = "wire::option_amount")]
    pub flat_fee: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_appends_filters_after_window() {
        let input = ListPayinsInput {
            status: Some(TransactionStatus::OnHold),
            receiver_id: Some("re_1".to_string()),
            pagination: PaginationParams::default().with_limit(10).unwrap(),
        };
        assert_eq!(input.to_query_string(), "?limit=10&status=on_hold&receiver_id=re_1");
        assert_eq!(ListPayinsInput::default().to_query_string(), "");
    }

    #[test]
    fn test_export_query_leads_with_status() {
        let input = ExportPayinsInput::new(TransactionStatus::Completed, Some(100), None).unwrap();
        assert_eq!(input.to_query_string(), "?status=completed&limit=100");
    }

    #[test]
    fn test_export_rejects_odd_limit() {
        let err = ExportPayinsInput::new(TransactionStatus::Completed, Some(7), None).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_payin_quote_input_omits_partner_fee() {
        let input = CreatePayinQuoteInput {
            blockchain_wallet_id: "bw_000000000000".to_string(),
            currency_type: CurrencyType::Sender,
            payment_method: PaymentMethod::Pix,
            request_amount: 1000.0,
            token: StablecoinToken::Usdc,
            cover_fees: true,
            payer_rules: PayerRules {
                pix_allowed_tax_ids: vec!["149.476.037-68".to_string()],
            },
            partner_fee_id: None,
        };
        let body = serde_json::to_value(&input).unwrap();
        assert!(body.get("partner_fee_id").is_none());
        assert_eq!(body["payment_method"], "pix");
        assert_eq!(body["token"], "USDC");
        assert_eq!(body["payer_rules"]["pix_allowed_tax_ids"][0], "149.476.037-68");
    }
}
