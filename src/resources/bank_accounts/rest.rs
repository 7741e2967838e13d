use crate::core::converters::{convert_empty, convert_response, encode};
use crate::core::enums::Rail;
use crate::core::errors::{require_non_empty, BlindPayError};
use crate::core::kernel::Transport;
use crate::core::types::ApiResponse;
use crate::resources::bank_accounts::types::{
    BankAccount, CreateAchInput, CreateAchResponse, CreateArgentinaTransfersInput,
    CreateArgentinaTransfersResponse, CreateColombiaAchInput, CreateColombiaAchResponse,
    CreateInternationalSwiftInput, CreateInternationalSwiftResponse, CreatePixInput, CreatePixResponse,
    CreateRtpInput, CreateRtpResponse, CreateSpeiInput, CreateSpeiResponse, CreateWireInput,
    CreateWireResponse, ListBankAccountsResponse, RailTagged,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub struct BankAccounts<T: Transport> {
    transport: T,
    instance_id: String,
}

impl<T: Transport + Clone> BankAccounts<T> {
    pub fn new(transport: &T, instance_id: &str) -> Self {
        Self {
            transport: transport.clone(),
            instance_id: instance_id.to_string(),
        }
    }

    fn base_path(&self, receiver_id: &str) -> String {
        format!("/instances/{}/receivers/{}/bank-accounts", self.instance_id, receiver_id)
    }

    async fn create<I, R>(&self, rail: Rail, receiver_id: &str, input: &I) -> Result<ApiResponse<R>, BlindPayError>
    where
        I: Serialize + Sync,
        R: DeserializeOwned,
    {
        require_non_empty(receiver_id, "Receiver ID")?;
        let body = encode(&RailTagged::new(rail, input))?;
        convert_response(self.transport.post(&self.base_path(receiver_id), &body).await)
    }

    pub async fn list(&self, receiver_id: &str) -> Result<ApiResponse<ListBankAccountsResponse>, BlindPayError> {
        require_non_empty(receiver_id, "Receiver ID")?;
        convert_response(self.transport.get(&self.base_path(receiver_id)).await)
    }

    pub async fn get(&self, receiver_id: &str, id: &str) -> Result<ApiResponse<BankAccount>, BlindPayError> {
        require_non_empty(receiver_id, "Receiver ID")?;
        require_non_empty(id, "ID")?;
        let path = format!("{}/{}", self.base_path(receiver_id), id);
        convert_response(self.transport.get(&path).await)
    }

    pub async fn delete(&self, receiver_id: &str, id: &str) -> Result<ApiResponse<()>, BlindPayError> {
        require_non_empty(receiver_id, "Receiver ID")?;
        require_non_empty(id, "ID")?;
        let path = format!("{}/{}", self.base_path(receiver_id), id);
        Ok(convert_empty(self.transport.delete(&path).await))
    }

    pub async fn create_pix(&self, input: &CreatePixInput) -> Result<ApiResponse<CreatePixResponse>, BlindPayError> {
        self.create(Rail::Pix, &input.receiver_id, input).await
    }

    pub async fn create_argentina_transfers(
        &self,
        input: &CreateArgentinaTransfersInput,
    ) -> Result<ApiResponse<CreateArgentinaTransfersResponse>, BlindPayError> {
        self.create(Rail::TransfersBitso, &input.receiver_id, input).await
    }

    pub async fn create_spei(&self, input: &CreateSpeiInput) -> Result<ApiResponse<CreateSpeiResponse>, BlindPayError> {
        self.create(Rail::SpeiBitso, &input.receiver_id, input).await
    }

    pub async fn create_colombia_ach(
        &self,
        input: &CreateColombiaAchInput,
    ) -> Result<ApiResponse<CreateColombiaAchResponse>, BlindPayError> {
        self.create(Rail::AchCopBitso, &input.receiver_id, input).await
    }

    pub async fn create_ach(&self, input: &CreateAchInput) -> Result<ApiResponse<CreateAchResponse>, BlindPayError> {
        self.create(Rail::Ach, &input.receiver_id, input).await
    }

    pub async fn create_wire(&self, input: &CreateWireInput) -> Result<ApiResponse<CreateWireResponse>, BlindPayError> {
        self.create(Rail::Wire, &input.receiver_id, input).await
    }

    pub async fn create_international_swift(
        &self,
        input: &CreateInternationalSwiftInput,
    ) -> Result<ApiResponse<CreateInternationalSwiftResponse>, BlindPayError> {
        self.create(Rail::InternationalSwift, &input.receiver_id, input).await
    }

    pub async fn create_rtp(&self, input: &CreateRtpInput) -> Result<ApiResponse<CreateRtpResponse>, BlindPayError> {
        self.create(Rail::Rtp, &input.receiver_id, input).await
    }
}
