use crate::core::converters::{convert_empty, convert_response, encode};
use crate::core::errors::{require_non_empty, BlindPayError};
use crate::core::kernel::Transport;
use crate::core::types::ApiResponse;
use crate::resources::wallets::types::{
    AssetTrustline, BlockchainWallet, CreateBlockchainWalletWithAddressInput,
    CreateBlockchainWalletWithHashInput, MintUsdbStellarInput, WalletBody, WalletMessage,
};
use serde_json::json;

pub struct BlockchainWallets<T: Transport> {
    transport: T,
    instance_id: String,
}

impl<T: Transport + Clone> BlockchainWallets<T> {
    pub fn new(transport: &T, instance_id: &str) -> Self {
        Self {
            transport: transport.clone(),
            instance_id: instance_id.to_string(),
        }
    }

    fn base_path(&self, receiver_id: &str) -> String {
        format!("/instances/{}/receivers/{}/blockchain-wallets", self.instance_id, receiver_id)
    }

    pub async fn list(&self, receiver_id: &str) -> Result<ApiResponse<Vec<BlockchainWallet>>, BlindPayError> {
        require_non_empty(receiver_id, "Receiver ID")?;
        convert_response(self.transport.get(&self.base_path(receiver_id)).await)
    }

    pub async fn create_with_address(
        &self,
        input: &CreateBlockchainWalletWithAddressInput,
    ) -> Result<ApiResponse<BlockchainWallet>, BlindPayError> {
        require_non_empty(&input.receiver_id, "Receiver ID")?;
        let body = encode(&WalletBody::new(input, true))?;
        convert_response(self.transport.post(&self.base_path(&input.receiver_id), &body).await)
    }

    pub async fn create_with_hash(
        &self,
        input: &CreateBlockchainWalletWithHashInput,
    ) -> Result<ApiResponse<BlockchainWallet>, BlindPayError> {
        require_non_empty(&input.receiver_id, "Receiver ID")?;
        let body = encode(&WalletBody::new(input, false))?;
        convert_response(self.transport.post(&self.base_path(&input.receiver_id), &body).await)
    }

    pub async fn get_wallet_message(&self, receiver_id: &str) -> Result<ApiResponse<WalletMessage>, BlindPayError> {
        require_non_empty(receiver_id, "Receiver ID")?;
        let path = format!("{}/sign-message", self.base_path(receiver_id));
        convert_response(self.transport.get(&path).await)
    }

    pub async fn get(&self, receiver_id: &str, id: &str) -> Result<ApiResponse<BlockchainWallet>, BlindPayError> {
        require_non_empty(receiver_id, "Receiver ID")?;
        require_non_empty(id, "Blockchain wallet ID")?;
        let path = format!("{}/{}", self.base_path(receiver_id), id);
        convert_response(self.transport.get(&path).await)
    }

    pub async fn delete(&self, receiver_id: &str, id: &str) -> Result<ApiResponse<()>, BlindPayError> {
        require_non_empty(receiver_id, "Receiver ID")?;
        require_non_empty(id, "Blockchain wallet ID")?;
        let path = format!("{}/{}", self.base_path(receiver_id), id);
        Ok(convert_empty(self.transport.delete(&path).await))
    }

    /// Build the Stellar trustline transaction a wallet needs before holding USDB
    pub async fn create_asset_trustline(&self, address: &str) -> Result<ApiResponse<AssetTrustline>, BlindPayError> {
        require_non_empty(address, "Address")?;
        let path = format!("/instances/{}/create-asset-trustline", self.instance_id);
        convert_response(self.transport.post(&path, &json!({ "address": address })).await)
    }

    /// Testnet only
    pub async fn mint_usdb_stellar(&self, input: &MintUsdbStellarInput) -> Result<ApiResponse<()>, BlindPayError> {
        let body = encode(input)?;
        let path = format!("/instances/{}/mint-usdb-stellar", self.instance_id);
        Ok(convert_empty(self.transport.post(&path, &body).await))
    }
}
