#![allow(dead_code)]

use async_trait::async_trait;
use blindpay::{ApiResponse, BlindPay, Transport};
use reqwest::Method;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const INSTANCE_ID: &str = "in_000000000000";

/// One request seen by the recording transport
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct SpyState {
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<VecDeque<ApiResponse<Value>>>,
}

/// Transport double that records every call and replays queued envelopes.
///
/// With nothing queued it answers `Success(null)`.
#[derive(Clone, Default)]
pub struct SpyTransport {
    state: Arc<SpyState>,
}

impl SpyTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, response: ApiResponse<Value>) -> &Self {
        self.state.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn respond_with(&self, data: Value) -> &Self {
        self.respond(ApiResponse::success(data))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls().pop().expect("no call recorded")
    }
}

#[async_trait]
impl Transport for SpyTransport {
    async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> ApiResponse<Value> {
        self.state.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });
        self.state
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| ApiResponse::success(Value::Null))
    }
}

pub fn client_with_spy() -> (BlindPay<SpyTransport>, SpyTransport) {
    let spy = SpyTransport::new();
    let client = BlindPay::with_transport(spy.clone(), INSTANCE_ID).unwrap();
    (client, spy)
}

pub fn individual_standard_receiver(id: &str) -> Value {
    json!({
        "id": id,
        "type": "individual",
        "kyc_type": "standard",
        "kyc_status": "verifying",
        "kyc_warnings": [],
        "email": "bernardo@gmail.com",
        "tax_id": "12345678900",
        "address_line_1": "Av. Paulista, 1000",
        "address_line_2": null,
        "city": "São Paulo",
        "state_province_region": "SP",
        "country": "BR",
        "postal_code": "01310-100",
        "ip_address": "127.0.0.1",
        "image_url": null,
        "phone_number": "+5511987654321",
        "proof_of_address_doc_type": "UTILITY_BILL",
        "proof_of_address_doc_file": "https://example.com/image.png",
        "first_name": "Bernardo",
        "last_name": "Simonassi",
        "date_of_birth": "1998-02-02T00:00:00.000Z",
        "id_doc_country": "BR",
        "id_doc_type": "PASSPORT",
        "id_doc_front_file": "https://example.com/image.png",
        "id_doc_back_file": null,
        "aiprise_validation_key": "",
        "instance_id": INSTANCE_ID,
        "tos_id": "to_3ZZhllJkvo5Z",
        "created_at": "2021-01-01T00:00:00.000Z",
        "updated_at": "2021-01-01T00:00:00.000Z",
        "limit": {"per_transaction": 100000, "daily": 200000, "monthly": 1000000}
    })
}
