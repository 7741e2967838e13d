pub mod rest;
pub mod types;

pub use rest::BankAccounts;
pub use types::{
    BankAccount, BankAccountListItem, CreateAchInput, CreateAchResponse, CreateArgentinaTransfersInput,
    CreateArgentinaTransfersResponse, CreateColombiaAchInput, CreateColombiaAchResponse,
    CreateInternationalSwiftInput, CreateInternationalSwiftResponse, CreatePixInput, CreatePixResponse,
    CreateRtpInput, CreateRtpResponse, CreateSpeiInput, CreateSpeiResponse, CreateWireInput,
    CreateWireResponse, ListBankAccountsResponse, OfframpWalletSummary, SpeiTransferProtocol,
};
