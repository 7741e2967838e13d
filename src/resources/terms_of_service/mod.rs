pub mod rest;
pub mod types;

pub use rest::TermsOfService;
pub use types::{InitiateTermsInput, InitiateTermsResponse};
