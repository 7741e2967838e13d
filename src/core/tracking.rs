use crate::core::wire;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Stage details stay null until the stage is reached, so everything but
// `step` is optional.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingTransaction {
    pub step: String,
    pub status: Option<String>,
    pub transaction_hash: Option<String>,
    #[serde(default, with = "wire::option_timestamp")]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingPayment {
    pub step: String,
    pub provider_name: Option<String>,
    pub provider_transaction_id: Option<String>,
    pub provider_status: Option<String>,
    pub estimated_time_of_arrival: Option<String>,
    #[serde(default, with = "wire::option_timestamp")]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingLiquidity {
    pub step: String,
    pub provider_transaction_id: Option<String>,
    pub provider_status: Option<String>,
    pub estimated_time_of_arrival: Option<String>,
    #[serde(default, with = "wire::option_timestamp")]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingComplete {
    pub step: String,
    pub status: Option<String>,
    pub transaction_hash: Option<String>,
    #[serde(default, with = "wire::option_timestamp")]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingPartnerFee {
    pub step: String,
    pub transaction_hash: Option<String>,
    #[serde(default, with = "wire::option_timestamp")]
    pub completed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payment_stage_decodes_full_record() {
        let stage: TrackingPayment = serde_json::from_value(json!({
            "step": "on_hold",
            "provider_name": "blockchain",
            "provider_transaction_id": "tx_123456789",
            "provider_status": "confirmed",
            "estimated_time_of_arrival": "2011-10-05T15:00:00.000Z",
            "completed_at": "2011-10-05T14:48:00.000Z"
        }))
        .unwrap();
        assert_eq!(stage.provider_name.as_deref(), Some("blockchain"));
        assert!(stage.completed_at.is_some());
    }

    #[test]
    fn test_pending_stage_has_only_step() {
        let stage: TrackingTransaction =
            serde_json::from_value(json!({"step": "processing", "transaction_hash": null})).unwrap();
        assert_eq!(stage.step, "processing");
        assert!(stage.transaction_hash.is_none());
        assert!(stage.completed_at.is_none());
    }

    #[test]
    fn test_missing_step_is_a_decode_failure() {
        assert!(serde_json::from_value::<TrackingPartnerFee>(json!({"transaction_hash": "0x1"})).is_err());
    }
}
