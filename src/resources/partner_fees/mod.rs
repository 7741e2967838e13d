pub mod rest;
pub mod types;

pub use rest::PartnerFees;
pub use types::{CreatePartnerFeeInput, CreatePartnerFeeResponse, PartnerFee};
