use crate::core::converters::{convert_response, encode};
use crate::core::errors::{require_non_empty, BlindPayError};
use crate::core::kernel::Transport;
use crate::core::types::{ApiResponse, Paginated};
use crate::resources::payouts::types::{
    AuthorizeStellarTokenInput, AuthorizeStellarTokenResponse, CreateEvmPayoutInput, CreatePayoutResponse,
    CreateStellarPayoutInput, ExportPayoutsInput, ListPayoutsInput, Payout,
};

pub struct Payouts<T: Transport> {
    transport: T,
    instance_id: String,
}

impl<T: Transport + Clone> Payouts<T> {
    pub fn new(transport: &T, instance_id: &str) -> Self {
        Self {
            transport: transport.clone(),
            instance_id: instance_id.to_string(),
        }
    }

    pub async fn list(
        &self,
        params: Option<&ListPayoutsInput>,
    ) -> Result<ApiResponse<Paginated<Payout>>, BlindPayError> {
        let query = params.map(ListPayoutsInput::to_query_string).unwrap_or_default();
        let path = format!("/instances/{}/payouts{}", self.instance_id, query);
        convert_response(self.transport.get(&path).await)
    }

    pub async fn export(
        &self,
        params: Option<&ExportPayoutsInput>,
    ) -> Result<ApiResponse<Vec<Payout>>, BlindPayError> {
        let query = params.map(ExportPayoutsInput::to_query_string).unwrap_or_default();
        let path = format!("/instances/{}/export/payouts{}", self.instance_id, query);
        convert_response(self.transport.get(&path).await)
    }

    pub async fn get(&self, payout_id: &str) -> Result<ApiResponse<Payout>, BlindPayError> {
        require_non_empty(payout_id, "Payout ID")?;
        let path = format!("/instances/{}/payouts/{}", self.instance_id, payout_id);
        convert_response(self.transport.get(&path).await)
    }

    pub async fn get_track(&self, payout_id: &str) -> Result<ApiResponse<Payout>, BlindPayError> {
        require_non_empty(payout_id, "Payout ID")?;
        let path = format!("/e/payouts/{}", payout_id);
        convert_response(self.transport.get(&path).await)
    }

    pub async fn authorize_stellar_token(
        &self,
        input: &AuthorizeStellarTokenInput,
    ) -> Result<ApiResponse<AuthorizeStellarTokenResponse>, BlindPayError> {
        let body = encode(input)?;
        let path = format!("/instances/{}/payouts/stellar/authorize", self.instance_id);
        convert_response(self.transport.post(&path, &body).await)
    }

    pub async fn create_stellar(
        &self,
        input: &CreateStellarPayoutInput,
    ) -> Result<ApiResponse<CreatePayoutResponse>, BlindPayError> {
        let body = encode(input)?;
        let path = format!("/instances/{}/payouts/stellar", self.instance_id);
        convert_response(self.transport.post(&path, &body).await)
    }

    pub async fn create_evm(
        &self,
        input: &CreateEvmPayoutInput,
    ) -> Result<ApiResponse<CreatePayoutResponse>, BlindPayError> {
        let body = encode(input)?;
        let path = format!("/instances/{}/payouts/evm", self.instance_id);
        convert_response(self.transport.post(&path, &body).await)
    }
}
