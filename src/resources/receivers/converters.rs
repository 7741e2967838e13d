use crate::core::converters::decode;
use crate::core::errors::BlindPayError;
use crate::core::types::ApiResponse;
use crate::resources::receivers::types::Receiver;
use serde_json::Value;
use tracing::debug;

fn tag(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Decode one receiver record by its `(type, kyc_type)` pair
pub fn decode_receiver(value: Value) -> Result<Receiver, BlindPayError> {
    let receiver_type = tag(&value, "type");
    let kyc_type = tag(&value, "kyc_type");

    match (receiver_type.as_deref(), kyc_type.as_deref()) {
        (Some("individual"), Some("standard")) => decode(value).map(Receiver::IndividualStandard),
        (Some("individual"), Some("enhanced")) => decode(value).map(Receiver::IndividualEnhanced),
        (Some("business"), Some("standard")) => decode(value).map(Receiver::BusinessStandard),
        _ => {
            debug!(?receiver_type, ?kyc_type, "unrecognized receiver discriminants");
            Err(BlindPayError::UnknownVariant {
                receiver_type,
                kyc_type,
            })
        }
    }
}

/// Decode a bare array of receivers. The first bad element fails the whole list.
pub fn decode_receivers(value: Value) -> Result<Vec<Receiver>, BlindPayError> {
    let items: Vec<Value> = decode(value)?;
    items.into_iter().map(decode_receiver).collect()
}

pub fn convert_receiver(response: ApiResponse<Value>) -> Result<ApiResponse<Receiver>, BlindPayError> {
    response.try_map(decode_receiver)
}

pub fn convert_receivers(
    response: ApiResponse<Value>,
) -> Result<ApiResponse<Vec<Receiver>>, BlindPayError> {
    response.try_map(decode_receivers)
}
