use crate::core::converters::{convert_empty, convert_response, encode};
use crate::core::errors::{require_non_empty, BlindPayError};
use crate::core::kernel::Transport;
use crate::core::types::ApiResponse;
use crate::resources::instances::types::{
    InstanceMember, UpdateInstanceInput, UpdateInstanceMemberRoleInput,
};
use serde_json::json;

pub struct Instances<T: Transport> {
    transport: T,
    instance_id: String,
}

impl<T: Transport + Clone> Instances<T> {
    pub fn new(transport: &T, instance_id: &str) -> Self {
        Self {
            transport: transport.clone(),
            instance_id: instance_id.to_string(),
        }
    }

    pub async fn get_members(&self) -> Result<ApiResponse<Vec<InstanceMember>>, BlindPayError> {
        let path = format!("/instances/{}/members", self.instance_id);
        convert_response(self.transport.get(&path).await)
    }

    pub async fn update(
        &self,
        input: &UpdateInstanceInput,
    ) -> Result<ApiResponse<()>, BlindPayError> {
        let body = encode(input)?;
        let path = format!("/instances/{}", self.instance_id);
        Ok(convert_empty(self.transport.put(&path, &body).await))
    }

    pub async fn delete(&self) -> Result<ApiResponse<()>, BlindPayError> {
        let path = format!("/instances/{}", self.instance_id);
        Ok(convert_empty(self.transport.delete(&path).await))
    }

    pub async fn delete_member(&self, member_id: &str) -> Result<ApiResponse<()>, BlindPayError> {
        require_non_empty(member_id, "Member ID")?;
        let path = format!("/instances/{}/members/{}", self.instance_id, member_id);
        Ok(convert_empty(self.transport.delete(&path).await))
    }

    pub async fn update_member_role(
        &self,
        input: &UpdateInstanceMemberRoleInput,
    ) -> Result<ApiResponse<()>, BlindPayError> {
        require_non_empty(&input.member_id, "Member ID")?;
        let path = format!("/instances/{}/members/{}", self.instance_id, input.member_id);
        let body = json!({ "role": input.role });
        Ok(convert_empty(self.transport.put(&path, &body).await))
    }
}
