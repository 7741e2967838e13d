use crate::core::converters::convert_response;
use crate::core::errors::{require_non_empty, BlindPayError};
use crate::core::kernel::Transport;
use crate::core::types::{ApiResponse, Paginated};
use crate::resources::payins::types::{CreateEvmPayinResponse, ExportPayinsInput, ListPayinsInput, Payin};
use serde_json::json;

pub struct Payins<T: Transport> {
    transport: T,
    instance_id: String,
}

impl<T: Transport + Clone> Payins<T> {
    pub fn new(transport: &T, instance_id: &str) -> Self {
        Self {
            transport: transport.clone(),
            instance_id: instance_id.to_string(),
        }
    }

    /// One page of payins with its pagination metadata
    pub async fn list(
        &self,
        params: Option<&ListPayinsInput>,
    ) -> Result<ApiResponse<Paginated<Payin>>, BlindPayError> {
        let query = params.map(ListPayinsInput::to_query_string).unwrap_or_default();
        let path = format!("/instances/{}/payins{}", self.instance_id, query);
        convert_response(self.transport.get(&path).await)
    }

    pub async fn get(&self, payin_id: &str) -> Result<ApiResponse<Payin>, BlindPayError> {
        require_non_empty(payin_id, "Payin ID")?;
        let path = format!("/instances/{}/payins/{}", self.instance_id, payin_id);
        convert_response(self.transport.get(&path).await)
    }

    /// Public tracking view of a payin, not scoped to the instance
    pub async fn get_track(&self, payin_id: &str) -> Result<ApiResponse<Payin>, BlindPayError> {
        require_non_empty(payin_id, "Payin ID")?;
        let path = format!("/e/payins/{}", payin_id);
        convert_response(self.transport.get(&path).await)
    }

    pub async fn export(&self, params: &ExportPayinsInput) -> Result<ApiResponse<Vec<Payin>>, BlindPayError> {
        let path = format!("/instances/{}/export/payins{}", self.instance_id, params.to_query_string());
        convert_response(self.transport.get(&path).await)
    }

    pub async fn create_evm(
        &self,
        payin_quote_id: &str,
    ) -> Result<ApiResponse<CreateEvmPayinResponse>, BlindPayError> {
        require_non_empty(payin_quote_id, "Payin quote ID")?;
        let path = format!("/instances/{}/payins/evm", self.instance_id);
        let body = json!({ "payin_quote_id": payin_quote_id });
        convert_response(self.transport.post(&path, &body).await)
    }
}
