use crate::core::converters::{convert_empty, convert_response, encode};
use crate::core::errors::{require_non_empty, BlindPayError};
use crate::core::kernel::Transport;
use crate::core::types::ApiResponse;
use crate::resources::virtual_accounts::types::{
    CreateVirtualAccountInput, UpdateVirtualAccountInput, VirtualAccount,
};

pub struct VirtualAccounts<T: Transport> {
    transport: T,
    instance_id: String,
}

impl<T: Transport + Clone> VirtualAccounts<T> {
    pub fn new(transport: &T, instance_id: &str) -> Self {
        Self {
            transport: transport.clone(),
            instance_id: instance_id.to_string(),
        }
    }

    fn path(&self, receiver_id: &str) -> String {
        format!("/instances/{}/receivers/{}/virtual-accounts", self.instance_id, receiver_id)
    }

    pub async fn create(
        &self,
        input: &CreateVirtualAccountInput,
    ) -> Result<ApiResponse<VirtualAccount>, BlindPayError> {
        require_non_empty(&input.receiver_id, "Receiver ID")?;
        let body = encode(input)?;
        convert_response(self.transport.post(&self.path(&input.receiver_id), &body).await)
    }

    pub async fn update(&self, input: &UpdateVirtualAccountInput) -> Result<ApiResponse<()>, BlindPayError> {
        require_non_empty(&input.receiver_id, "Receiver ID")?;
        let body = encode(input)?;
        Ok(convert_empty(self.transport.put(&self.path(&input.receiver_id), &body).await))
    }

    pub async fn get(&self, receiver_id: &str) -> Result<ApiResponse<VirtualAccount>, BlindPayError> {
        require_non_empty(receiver_id, "Receiver ID")?;
        convert_response(self.transport.get(&self.path(receiver_id)).await)
    }
}
