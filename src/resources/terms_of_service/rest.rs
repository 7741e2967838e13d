use crate::core::converters::{convert_response, encode};
use crate::core::errors::{require_non_empty, BlindPayError};
use crate::core::kernel::Transport;
use crate::core::types::ApiResponse;
use crate::resources::terms_of_service::types::{InitiateTermsInput, InitiateTermsResponse};

pub struct TermsOfService<T: Transport> {
    transport: T,
    instance_id: String,
}

impl<T: Transport + Clone> TermsOfService<T> {
    pub fn new(transport: &T, instance_id: &str) -> Self {
        Self {
            transport: transport.clone(),
            instance_id: instance_id.to_string(),
        }
    }

    pub async fn initiate(
        &self,
        input: &InitiateTermsInput,
    ) -> Result<ApiResponse<InitiateTermsResponse>, BlindPayError> {
        require_non_empty(&input.idempotency_key, "Idempotency key")?;
        let body = encode(input)?;
        let path = format!("/e/instances/{}/tos", self.instance_id);
        convert_response(self.transport.post(&path, &body).await)
    }
}
