use base64::engine::general_purpose;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Length of a base64-encoded SHA-256 digest
const SIGNATURE_LEN: usize = 44;

pub const HEADER_ID: &str = "svix-id";
pub const HEADER_TIMESTAMP: &str = "svix-timestamp";
pub const HEADER_SIGNATURE: &str = "svix-signature";

/// Build the keyed MAC for a webhook delivery.
///
/// `secret` has the form `prefix_base64key`. Returns `None` when the secret has
/// no `_` separator or the key part is not valid base64.
fn webhook_mac(secret: &str, id: &str, timestamp: &str, payload: &str) -> Option<HmacSha256> {
    let (_, encoded_key) = secret.split_once('_')?;
    let key = general_purpose::STANDARD.decode(encoded_key).ok()?;
    let mut mac = HmacSha256::new_from_slice(&key).ok()?;
    mac.update(format!("{}.{}.{}", id, timestamp, payload).as_bytes());
    Some(mac)
}

/// Compute the base64 signature BlindPay attaches to a webhook delivery
pub fn sign_webhook(secret: &str, id: &str, timestamp: &str, payload: &str) -> Option<String> {
    webhook_mac(secret, id, timestamp, payload)
        .map(|mac| general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
}

/// Check a webhook signature against the raw request body.
///
/// # Arguments
/// * `secret` - Webhook secret from the BlindPay dashboard (`whsec_...`)
/// * `id` - Value of the `svix-id` header
/// * `timestamp` - Value of the `svix-timestamp` header
/// * `payload` - Raw request body, exactly as received
/// * `signature` - Value of the `svix-signature` header
pub fn verify_webhook(
    secret: &str,
    id: &str,
    timestamp: &str,
    payload: &str,
    signature: &str,
) -> bool {
    let Some(mac) = webhook_mac(secret, id, timestamp, payload) else {
        return false;
    };

    if signature.len() != SIGNATURE_LEN {
        return false;
    }

    let Ok(provided) = general_purpose::STANDARD.decode(signature) else {
        return false;
    };

    // constant-time comparison
    mac.verify_slice(&provided).is_ok()
}

/// The three delivery headers needed to verify a webhook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookHeaders {
    pub id: String,
    pub timestamp: String,
    pub signature: String,
}

impl WebhookHeaders {
    /// Collect the delivery headers from any header lookup, failing when one is missing
    pub fn from_lookup<'a>(mut lookup: impl FnMut(&str) -> Option<&'a str>) -> Option<Self> {
        Some(Self {
            id: lookup(HEADER_ID)?.to_string(),
            timestamp: lookup(HEADER_TIMESTAMP)?.to_string(),
            signature: lookup(HEADER_SIGNATURE)?.to_string(),
        })
    }

    pub fn verify(&self, secret: &str, payload: &str) -> bool {
        verify_webhook(secret, &self.id, &self.timestamp, payload, &self.signature)
    }
}
