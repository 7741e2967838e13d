pub mod rest;
pub mod types;

pub use rest::Payouts;
pub use types::{
    AuthorizeStellarTokenInput, AuthorizeStellarTokenResponse, CreateEvmPayoutInput,
    CreatePayoutResponse, CreateStellarPayoutInput, ExportPayoutsInput, ListPayoutsInput, Payout,
};
