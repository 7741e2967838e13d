pub mod quotes;
pub mod rest;
pub mod types;

pub use quotes::PayinQuotes;
pub use rest::Payins;
pub use types::{
    BlindpayBankAccount, BlindpayBankDetails, BlindpayBankParty, CreateEvmPayinResponse,
    CreatePayinQuoteInput, CreatePayinQuoteResponse, ExportPayinsInput, GetPayinFxRateInput,
    ListPayinsInput, PayerRules, Payin, PaymentMethod,
};
