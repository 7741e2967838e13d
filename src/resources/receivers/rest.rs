use crate::core::converters::{convert_empty, convert_response, encode};
use crate::core::enums::AccountClass;
use crate::core::errors::{require_non_empty, BlindPayError};
use crate::core::kernel::Transport;
use crate::core::types::ApiResponse;
use crate::resources::receivers::converters::{convert_receiver, convert_receivers};
use crate::resources::receivers::types::{
    CreateBusinessWithStandardKybInput, CreateIndividualWithEnhancedKycInput,
    CreateIndividualWithStandardKycInput, CreateReceiverResponse, KycType, LimitIncreaseRequest, Receiver,
    ReceiverLimits, RequestLimitIncreaseInput, RequestLimitIncreaseResponse, Tagged, UpdateReceiverInput,
};
use serde::Serialize;

pub struct Receivers<T: Transport> {
    transport: T,
    instance_id: String,
}

impl<T: Transport + Clone> Receivers<T> {
    pub fn new(transport: &T, instance_id: &str) -> Self {
        Self {
            transport: transport.clone(),
            instance_id: instance_id.to_string(),
        }
    }

    fn base_path(&self) -> String {
        format!("/instances/{}/receivers", self.instance_id)
    }

    /// Every receiver of the instance, decoded by shape
    pub async fn list(&self) -> Result<ApiResponse<Vec<Receiver>>, BlindPayError> {
        convert_receivers(self.transport.get(&self.base_path()).await)
    }

    async fn create<I: Serialize + Sync>(
        &self,
        kind: AccountClass,
        kyc_type: KycType,
        input: &I,
    ) -> Result<ApiResponse<CreateReceiverResponse>, BlindPayError> {
        let body = encode(&Tagged::new(kind, kyc_type, input))?;
        convert_response(self.transport.post(&self.base_path(), &body).await)
    }

    pub async fn create_individual_with_standard_kyc(
        &self,
        input: &CreateIndividualWithStandardKycInput,
    ) -> Result<ApiResponse<CreateReceiverResponse>, BlindPayError> {
        self.create(AccountClass::Individual, KycType::Standard, input).await
    }

    pub async fn create_individual_with_enhanced_kyc(
        &self,
        input: &CreateIndividualWithEnhancedKycInput,
    ) -> Result<ApiResponse<CreateReceiverResponse>, BlindPayError> {
        self.create(AccountClass::Individual, KycType::Enhanced, input).await
    }

    pub async fn create_business_with_standard_kyb(
        &self,
        input: &CreateBusinessWithStandardKybInput,
    ) -> Result<ApiResponse<CreateReceiverResponse>, BlindPayError> {
        self.create(AccountClass::Business, KycType::Standard, input).await
    }

    pub async fn get(&self, receiver_id: &str) -> Result<ApiResponse<Receiver>, BlindPayError> {
        require_non_empty(receiver_id, "Receiver ID")?;
        let path = format!("{}/{}", self.base_path(), receiver_id);
        convert_receiver(self.transport.get(&path).await)
    }

    pub async fn update(&self, input: &UpdateReceiverInput) -> Result<ApiResponse<()>, BlindPayError> {
        require_non_empty(&input.receiver_id, "Receiver ID")?;
        let body = encode(input)?;
        let path = format!("{}/{}", self.base_path(), input.receiver_id);
        Ok(convert_empty(self.transport.patch(&path, &body).await))
    }

    pub async fn delete(&self, receiver_id: &str) -> Result<ApiResponse<()>, BlindPayError> {
        require_non_empty(receiver_id, "Receiver ID")?;
        let path = format!("{}/{}", self.base_path(), receiver_id);
        Ok(convert_empty(self.transport.delete(&path).await))
    }

    pub async fn get_limits(&self, receiver_id: &str) -> Result<ApiResponse<ReceiverLimits>, BlindPayError> {
        require_non_empty(receiver_id, "Receiver ID")?;
        let path = format!("/instances/{}/limits/receivers/{}", self.instance_id, receiver_id);
        convert_response(self.transport.get(&path).await)
    }

    pub async fn get_limit_increase_requests(
        &self,
        receiver_id: &str,
    ) -> Result<ApiResponse<Vec<LimitIncreaseRequest>>, BlindPayError> {
        require_non_empty(receiver_id, "Receiver ID")?;
        let path = format!("{}/{}/limit-increase", self.base_path(), receiver_id);
        convert_response(self.transport.get(&path).await)
    }

    pub async fn request_limit_increase(
        &self,
        input: &RequestLimitIncreaseInput,
    ) -> Result<ApiResponse<RequestLimitIncreaseResponse>, BlindPayError> {
        require_non_empty(&input.receiver_id, "Receiver ID")?;
        let body = encode(input)?;
        let path = format!("{}/{}/limit-increase", self.base_path(), input.receiver_id);
        convert_response(self.transport.post(&path, &body).await)
    }
}
