pub mod rest;
pub mod types;

pub use rest::VirtualAccounts;
pub use types::{
    AccountRouting, CreateVirtualAccountInput, UpdateVirtualAccountInput, VirtualAccount,
    VirtualAccountParty, VirtualAccountUsDetails,
};
