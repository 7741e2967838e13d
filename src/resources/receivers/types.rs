use crate::core::enums::{AccountClass, Country};
use crate::core::types::Patch;
use crate::core::wire;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProofOfAddressDocType {
    UtilityBill,
    BankStatement,
    RentalAgreement,
    TaxDocument,
    GovernmentCorrespondence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurposeOfTransactions {
    BusinessTransactions,
    CharitableDonations,
    InvestmentPurposes,
    PaymentsToFriendsOrFamilyAbroad,
    PersonalOrLivingExpenses,
    ProtectWealth,
    PurchaseGoodAndServices,
    ReceivePaymentForFreelancing,
    ReceiveSalary,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceOfFundsDocType {
    BusinessIncome,
    GamblingProceeds,
    Gifts,
    GovernmentBenefits,
    Inheritance,
    InvestmentLoans,
    PensionRetirement,
    Salary,
    SaleOfAssetsRealEstate,
    Savings,
    Esops,
    InvestmentProceeds,
    SomeoneElseFunds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentificationDocument {
    Passport,
    IdCard,
    Drivers,
}

/// Verification tier; only standard and enhanced map to a receiver shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycType {
    Light,
    Standard,
    Enhanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerRole {
    BeneficialControlling,
    BeneficialOwner,
    ControllingPerson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitIncreaseRequestStatus {
    InReview,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitIncreaseSupportingDocumentType {
    IndividualBankStatement,
    IndividualTaxReturn,
    IndividualProofOfIncome,
    BusinessBankStatement,
    BusinessFinancialStatements,
    BusinessTaxReturn,
}

/// Beneficial owner or controlling person of a business receiver.
///
/// The parent ids are server-assigned. Leave them unset when building a
/// create body so they stay off the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_id: Option<String>,
    pub role: OwnerRole,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub tax_id: String,
    pub address_line_1: String,
    #[serde(default)]
    pub address_line_2: Option<String>,
    pub city: String,
    pub state_province_region: String,
    pub country: Country,
    pub postal_code: String,
    pub id_doc_country: Country,
    pub id_doc_type: IdentificationDocument,
    pub id_doc_front_file: String,
    #[serde(default)]
    pub id_doc_back_file: Option<String>,
    pub proof_of_address_doc_type: ProofOfAddressDocType,
    pub proof_of_address_doc_file: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycWarning {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub resolution_status: Option<String>,
    #[serde(default)]
    pub warning_id: Option<String>,
}

/// Transfer ceilings applied to a receiver, in USD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    #[serde(with = "wire::amount")]
    pub per_transaction: f64,
    #[serde(with = "wire::amount")]
    pub daily: f64,
    #[serde(with = "wire::amount")]
    pub monthly: f64,
}

/// Fields every receiver carries regardless of type and KYC tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiverBase {
    pub id: String,
    pub kyc_status: String,
    #[serde(default)]
    pub kyc_warnings: Option<Vec<KycWarning>>,
    pub email: String,
    pub tax_id: String,
    pub address_line_1: String,
    #[serde(default)]
    pub address_line_2: Option<String>,
    pub city: String,
    pub state_province_region: String,
    pub country: Country,
    pub postal_code: String,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub proof_of_address_doc_type: ProofOfAddressDocType,
    pub proof_of_address_doc_file: String,
    pub instance_id: String,
    #[serde(default)]
    pub tos_id: Option<String>,
    #[serde(with = "wire::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "wire::timestamp")]
    pub updated_at: DateTime<Utc>,
    pub limit: Limit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualStandard {
    #[serde(flatten)]
    pub base: ReceiverBase,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub id_doc_country: Country,
    pub id_doc_type: IdentificationDocument,
    pub id_doc_front_file: String,
    #[serde(default)]
    pub id_doc_back_file: Option<String>,
    pub aiprise_validation_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualEnhanced {
    #[serde(flatten)]
    pub base: ReceiverBase,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub id_doc_country: Country,
    pub id_doc_type: IdentificationDocument,
    pub id_doc_front_file: String,
    #[serde(default)]
    pub id_doc_back_file: Option<String>,
    pub aiprise_validation_key: String,
    pub source_of_funds_doc_type: SourceOfFundsDocType,
    pub source_of_funds_doc_file: String,
    pub individual_holding_doc_front_file: String,
    pub purpose_of_transactions: PurposeOfTransactions,
    #[serde(default)]
    pub purpose_of_transactions_explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessStandard {
    #[serde(flatten)]
    pub base: ReceiverBase,
    pub legal_name: String,
    #[serde(default)]
    pub alternate_name: Option<String>,
    pub formation_date: String,
    #[serde(default)]
    pub website: Option<String>,
    pub owners: Vec<Owner>,
    pub incorporation_doc_file: String,
    pub proof_of_ownership_doc_file: String,
    #[serde(default)]
    pub external_id: Option<String>,
    pub aiprise_validation_key: String,
}

/// A receiver record, shaped by its `(type, kyc_type)` pair.
///
/// Decode with [`crate::resources::receivers::convert_receiver`]; the derive
/// alone cannot see both tags. Serializing writes the tags back.
#[derive(Debug, Clone, PartialEq)]
pub enum Receiver {
    IndividualStandard(IndividualStandard),
    IndividualEnhanced(IndividualEnhanced),
    BusinessStandard(BusinessStandard),
}

impl Receiver {
    pub const fn base(&self) -> &ReceiverBase {
        match self {
            Self::IndividualStandard(r) => &r.base,
            Self::IndividualEnhanced(r) => &r.base,
            Self::BusinessStandard(r) => &r.base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub const fn account_class(&self) -> AccountClass {
        match self {
            Self::IndividualStandard(_) | Self::IndividualEnhanced(_) => AccountClass::Individual,
            Self::BusinessStandard(_) => AccountClass::Business,
        }
    }

    pub const fn kyc_type(&self) -> KycType {
        match self {
            Self::IndividualStandard(_) | Self::BusinessStandard(_) => KycType::Standard,
            Self::IndividualEnhanced(_) => KycType::Enhanced,
        }
    }
}

impl Serialize for Receiver {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let (class, kyc) = (self.account_class(), self.kyc_type());
        match self {
            Self::IndividualStandard(r) => Tagged::new(class, kyc, r).serialize(serializer),
            Self::IndividualEnhanced(r) => Tagged::new(class, kyc, r).serialize(serializer),
            Self::BusinessStandard(r) => Tagged::new(class, kyc, r).serialize(serializer),
        }
    }
}

/// Adds the `type` and `kyc_type` tags to a flat record
#[derive(Serialize)]
pub(crate) struct Tagged<'a, T> {
    #[serde(rename = "type")]
    kind: AccountClass,
    kyc_type: KycType,
    #[serde(flatten)]
    record: &'a T,
}

impl<'a, T> Tagged<'a, T> {
    pub(crate) const fn new(kind: AccountClass, kyc_type: KycType, record: &'a T) -> Self {
        Self { kind, kyc_type, record }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateIndividualWithStandardKycInput {
    pub address_line_1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    pub city: String,
    pub country: Country,
    pub date_of_birth: String,
    pub email: String,
    pub first_name: String,
    pub phone_number: Option<String>,
    pub id_doc_country: Country,
    pub id_doc_front_file: String,
    pub id_doc_type: IdentificationDocument,
    pub id_doc_back_file: Option<String>,
    pub last_name: String,
    pub postal_code: String,
    pub proof_of_address_doc_file: String,
    pub proof_of_address_doc_type: ProofOfAddressDocType,
    pub state_province_region: String,
    pub tax_id: String,
    pub tos_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateIndividualWithEnhancedKycInput {
    pub address_line_1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    pub city: String,
    pub country: Country,
    pub date_of_birth: String,
    pub email: String,
    pub first_name: String,
    pub id_doc_country: Country,
    pub id_doc_front_file: String,
    pub id_doc_type: IdentificationDocument,
    pub id_doc_back_file: Option<String>,
    pub individual_holding_doc_front_file: String,
    pub last_name: String,
    pub postal_code: String,
    pub phone_number: Option<String>,
    pub proof_of_address_doc_file: String,
    pub proof_of_address_doc_type: ProofOfAddressDocType,
    pub purpose_of_transactions: PurposeOfTransactions,
    pub source_of_funds_doc_file: String,
    pub source_of_funds_doc_type: SourceOfFundsDocType,
    pub purpose_of_transactions_explanation: Option<String>,
    pub state_province_region: String,
    pub tax_id: String,
    pub tos_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBusinessWithStandardKybInput {
    pub address_line_1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,
    pub city: String,
    pub country: Country,
    pub email: String,
    pub formation_date: String,
    pub incorporation_doc_file: String,
    pub legal_name: String,
    pub owners: Vec<Owner>,
    pub postal_code: String,
    pub proof_of_address_doc_file: String,
    pub proof_of_address_doc_type: ProofOfAddressDocType,
    pub proof_of_ownership_doc_file: String,
    pub state_province_region: String,
    pub tax_id: String,
    pub tos_id: String,
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReceiverResponse {
    pub id: String,
}

/// Sparse receiver update. Only fields not left at [`Patch::Omit`] are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateReceiverInput {
    #[serde(skip)]
    pub receiver_id: String,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub email: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub tax_id: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub address_line_1: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub address_line_2: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub city: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub state_province_region: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub country: Patch<Country>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub postal_code: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub ip_address: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub image_url: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub phone_number: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub proof_of_address_doc_type: Patch<ProofOfAddressDocType>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub proof_of_address_doc_file: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub first_name: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub last_name: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub date_of_birth: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub id_doc_country: Patch<Country>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub id_doc_type: Patch<IdentificationDocument>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub id_doc_front_file: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub id_doc_back_file: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub legal_name: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub alternate_name: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub formation_date: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub website: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub owners: Patch<Vec<Owner>>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub incorporation_doc_file: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub proof_of_ownership_doc_file: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub source_of_funds_doc_type: Patch<SourceOfFundsDocType>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub source_of_funds_doc_file: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub individual_holding_doc_front_file: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub purpose_of_transactions: Patch<PurposeOfTransactions>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub purpose_of_transactions_explanation: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub external_id: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_omit")]
    pub tos_id: Patch<String>,
}

impl UpdateReceiverInput {
    pub fn new(receiver_id: impl Into<String>) -> Self {
        Self {
            receiver_id: receiver_id.into(),
            ..Self::default()
        }
    }
}

/// Daily and monthly ceilings for one direction of flow
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimitWindow {
    #[serde(default, with = "wire::option_amount", skip_serializing_if = "Option::is_none")]
    pub per_transaction: Option<f64>,
    #[serde(with = "wire::amount")]
    pub daily: f64,
    #[serde(with = "wire::amount")]
    pub monthly: f64,
}

/// Current limits keyed by flow (`payin`, `payout`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiverLimits {
    pub limits: BTreeMap<String, LimitWindow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitIncreaseRequest {
    pub id: String,
    pub receiver_id: String,
    pub status: LimitIncreaseRequestStatus,
    #[serde(with = "wire::amount")]
    pub daily: f64,
    #[serde(with = "wire::amount")]
    pub monthly: f64,
    #[serde(with = "wire::amount")]
    pub per_transaction: f64,
    pub supporting_document_file: String,
    pub supporting_document_type: LimitIncreaseSupportingDocumentType,
    #[serde(with = "wire::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "wire::timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestLimitIncreaseInput {
    #[serde(skip)]
    pub receiver_id: String,
    pub daily: f64,
    pub monthly: f64,
    pub per_transaction: f64,
    pub supporting_document_file: String,
    pub supporting_document_type: LimitIncreaseSupportingDocumentType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestLimitIncreaseResponse {
    pub id: String,
}
