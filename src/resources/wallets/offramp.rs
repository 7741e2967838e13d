use crate::core::converters::{convert_response, encode};
use crate::core::errors::{require_non_empty, BlindPayError};
use crate::core::kernel::Transport;
use crate::core::types::ApiResponse;
use crate::resources::wallets::types::{CreateOfframpWalletInput, CreateOfframpWalletResponse, OfframpWallet};

pub struct OfframpWallets<T: Transport> {
    transport: T,
    instance_id: String,
}

impl<T: Transport + Clone> OfframpWallets<T> {
    pub fn new(transport: &T, instance_id: &str) -> Self {
        Self {
            transport: transport.clone(),
            instance_id: instance_id.to_string(),
        }
    }

    fn base_path(&self, receiver_id: &str, bank_account_id: &str) -> Result<String, BlindPayError> {
        require_non_empty(receiver_id, "Receiver ID")?;
        require_non_empty(bank_account_id, "Bank account ID")?;
        Ok(format!(
            "/instances/{}/receivers/{}/bank-accounts/{}/offramp-wallets",
            self.instance_id, receiver_id, bank_account_id
        ))
    }

    pub async fn list(
        &self,
        receiver_id: &str,
        bank_account_id: &str,
    ) -> Result<ApiResponse<Vec<OfframpWallet>>, BlindPayError> {
        let path = self.base_path(receiver_id, bank_account_id)?;
        convert_response(self.transport.get(&path).await)
    }

    pub async fn create(
        &self,
        input: &CreateOfframpWalletInput,
    ) -> Result<ApiResponse<CreateOfframpWalletResponse>, BlindPayError> {
        let path = self.base_path(&input.receiver_id, &input.bank_account_id)?;
        let body = encode(input)?;
        convert_response(self.transport.post(&path, &body).await)
    }

    pub async fn get(
        &self,
        receiver_id: &str,
        bank_account_id: &str,
        id: &str,
    ) -> Result<ApiResponse<OfframpWallet>, BlindPayError> {
        require_non_empty(id, "Offramp wallet ID")?;
        let path = format!("{}/{}", self.base_path(receiver_id, bank_account_id)?, id);
        convert_response(self.transport.get(&path).await)
    }
}
