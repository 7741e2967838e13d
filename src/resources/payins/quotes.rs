use crate::core::converters::{convert_response, encode};
use crate::core::errors::BlindPayError;
use crate::core::kernel::Transport;
use crate::core::types::ApiResponse;
use crate::resources::payins::types::{CreatePayinQuoteInput, CreatePayinQuoteResponse, GetPayinFxRateInput};
use crate::resources::quotes::FxRate;

/// Quotes for funding a payin
pub struct PayinQuotes<T: Transport> {
    transport: T,
    instance_id: String,
}

impl<T: Transport + Clone> PayinQuotes<T> {
    pub fn new(transport: &T, instance_id: &str) -> Self {
        Self {
            transport: transport.clone(),
            instance_id: instance_id.to_string(),
        }
    }

    pub async fn create(
        &self,
        input: &CreatePayinQuoteInput,
    ) -> Result<ApiResponse<CreatePayinQuoteResponse>, BlindPayError> {
        let body = encode(input)?;
        let path = format!("/instances/{}/payin-quotes", self.instance_id);
        convert_response(self.transport.post(&path, &body).await)
    }

    pub async fn get_fx_rate(&self, input: &GetPayinFxRateInput) -> Result<ApiResponse<FxRate>, BlindPayError> {
        let body = encode(input)?;
        let path = format!("/instances/{}/payin-quotes/fx", self.instance_id);
        convert_response(self.transport.post(&path, &body).await)
    }
}
