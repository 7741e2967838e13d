use crate::core::converters::{convert_empty, convert_response, encode};
use crate::core::errors::{require_non_empty, BlindPayError};
use crate::core::kernel::Transport;
use crate::core::types::ApiResponse;
use crate::resources::webhooks::types::{
    CreateWebhookEndpointInput, CreateWebhookEndpointResponse, PortalAccessUrl, WebhookEndpoint,
    WebhookSecret,
};

pub struct WebhookEndpoints<T: Transport> {
    transport: T,
    instance_id: String,
}

impl<T: Transport + Clone> WebhookEndpoints<T> {
    pub fn new(transport: &T, instance_id: &str) -> Self {
        Self {
            transport: transport.clone(),
            instance_id: instance_id.to_string(),
        }
    }

    fn base_path(&self) -> String {
        format!("/instances/{}/webhook-endpoints", self.instance_id)
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<WebhookEndpoint>>, BlindPayError> {
        convert_response(self.transport.get(&self.base_path()).await)
    }

    pub async fn create(
        &self,
        input: &CreateWebhookEndpointInput,
    ) -> Result<ApiResponse<CreateWebhookEndpointResponse>, BlindPayError> {
        let body = encode(input)?;
        convert_response(self.transport.post(&self.base_path(), &body).await)
    }

    pub async fn delete(&self, id: &str) -> Result<ApiResponse<()>, BlindPayError> {
        require_non_empty(id, "ID")?;
        let path = format!("{}/{}", self.base_path(), id);
        Ok(convert_empty(self.transport.delete(&path).await))
    }

    /// Signing secret used to verify deliveries to this endpoint
    pub async fn get_secret(&self, id: &str) -> Result<ApiResponse<WebhookSecret>, BlindPayError> {
        require_non_empty(id, "ID")?;
        let path = format!("{}/{}/secret", self.base_path(), id);
        convert_response(self.transport.get(&path).await)
    }

    pub async fn get_portal_access_url(
        &self,
    ) -> Result<ApiResponse<PortalAccessUrl>, BlindPayError> {
        let path = format!("{}/portal-access", self.base_path());
        convert_response(self.transport.get(&path).await)
    }
}
