use crate::core::converters::{convert_response, encode};
use crate::core::errors::BlindPayError;
use crate::core::kernel::Transport;
use crate::core::types::ApiResponse;
use crate::resources::quotes::types::{CreateQuoteInput, CreateQuoteResponse, FxRate, GetFxRateInput};

/// Payout quotes
pub struct Quotes<T: Transport> {
    transport: T,
    instance_id: String,
}

impl<T: Transport + Clone> Quotes<T> {
    pub fn new(transport: &T, instance_id: &str) -> Self {
        Self {
            transport: transport.clone(),
            instance_id: instance_id.to_string(),
        }
    }

    pub async fn create(
        &self,
        input: &CreateQuoteInput,
    ) -> Result<ApiResponse<CreateQuoteResponse>, BlindPayError> {
        let body = encode(input)?;
        let path = format!("/instances/{}/quotes", self.instance_id);
        convert_response(self.transport.post(&path, &body).await)
    }

    pub async fn get_fx_rate(&self, input: &GetFxRateInput) -> Result<ApiResponse<FxRate>, BlindPayError> {
        let body = encode(input)?;
        let path = format!("/instances/{}/quotes/fx", self.instance_id);
        convert_response(self.transport.post(&path, &body).await)
    }
}
