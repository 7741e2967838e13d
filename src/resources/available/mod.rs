pub mod rest;
pub mod types;

pub use rest::Available;
pub use types::{BankDetail, BankDetailItem, RailInfo};
