use crate::core::converters::convert_response;
use crate::core::enums::Rail;
use crate::core::errors::BlindPayError;
use crate::core::kernel::Transport;
use crate::core::types::ApiResponse;
use crate::resources::available::types::{BankDetail, RailInfo};

/// Catalog endpoints that do not depend on the instance
pub struct Available<T: Transport> {
    transport: T,
}

impl<T: Transport + Clone> Available<T> {
    pub fn new(transport: &T) -> Self {
        Self {
            transport: transport.clone(),
        }
    }

    /// Fields required to register a bank account on `rail`
    pub async fn get_bank_details(
        &self,
        rail: Rail,
    ) -> Result<ApiResponse<Vec<BankDetail>>, BlindPayError> {
        let response = self
            .transport
            .get(&format!("/available/bank-details?rail={}", rail))
            .await;
        convert_response(response)
    }

    pub async fn get_rails(&self) -> Result<ApiResponse<Vec<RailInfo>>, BlindPayError> {
        convert_response(self.transport.get("/available/rails").await)
    }
}
