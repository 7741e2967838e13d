pub mod converters;
pub mod rest;
pub mod types;

pub use converters::{convert_receiver, convert_receivers};
pub use rest::Receivers;
pub use types::{
    BusinessStandard, CreateBusinessWithStandardKybInput, CreateIndividualWithEnhancedKycInput,
    CreateIndividualWithStandardKycInput, CreateReceiverResponse, IdentificationDocument,
    IndividualEnhanced, IndividualStandard, KycType, KycWarning, Limit, LimitIncreaseRequest,
    LimitIncreaseRequestStatus, LimitIncreaseSupportingDocumentType, LimitWindow, Owner, OwnerRole,
    ProofOfAddressDocType, PurposeOfTransactions, Receiver, ReceiverBase, ReceiverLimits,
    RequestLimitIncreaseInput, RequestLimitIncreaseResponse, SourceOfFundsDocType, UpdateReceiverInput,
};
