//! Receiver wallets: on-chain destinations for payins and the per-bank-account
//! deposit addresses used for offramping.
pub mod blockchain;
pub mod offramp;
pub mod types;

pub use blockchain::BlockchainWallets;
pub use offramp::OfframpWallets;
pub use types::{
    AssetTrustline, BlockchainWallet, CreateBlockchainWalletWithAddressInput,
    CreateBlockchainWalletWithHashInput, CreateOfframpWalletInput, CreateOfframpWalletResponse,
    MintUsdbStellarInput, OfframpWallet, WalletMessage,
};
