pub mod rest;
pub mod types;

pub use rest::Quotes;
pub use types::{
    CreateQuoteInput, CreateQuoteResponse, FxRate, GetFxRateInput, QuoteContract,
    QuoteContractNetwork,
};
