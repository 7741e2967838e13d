use crate::core::errors::BlindPayError;
use crate::core::types::ApiResponse;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Decode a wire record into a typed value
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, BlindPayError> {
    serde_json::from_value(value).map_err(BlindPayError::Decode)
}

/// Encode a typed input into a wire record
pub fn encode<T: Serialize>(input: &T) -> Result<Value, BlindPayError> {
    serde_json::to_value(input).map_err(|e| BlindPayError::Serialization(e.to_string()))
}

/// Decode the payload of a successful envelope, passing error envelopes through
pub fn convert_response<T: DeserializeOwned>(
    response: ApiResponse<Value>,
) -> Result<ApiResponse<T>, BlindPayError> {
    response.try_map(decode)
}

/// Success with no meaningful payload, used for deletes and plain updates
pub fn convert_empty(response: ApiResponse<Value>) -> ApiResponse<()> {
    response.map(|_| ())
}
