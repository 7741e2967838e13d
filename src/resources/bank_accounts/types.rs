use crate::core::enums::{AccountClass, AchCopDocument, ArgentinaTransfers, BankAccountType, Country, Rail};
use crate::core::wire;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Clearing system for a SPEI account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SpeiTransferProtocol {
    Spei,
    Stp,
}

/// Adds the rail `type` tag to a create body
#[derive(Serialize)]
pub(crate) struct RailTagged<'a, T> {
    #[serde(rename = "type")]
    rail: Rail,
    #[serde(flatten)]
    record: &'a T,
}

impl<'a, T> RailTagged<'a, T> {
    pub(crate) const fn new(rail: Rail, record: &'a T) -> Self {
        Self { rail, record }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfframpWalletSummary {
    pub id: String,
    pub address: String,
    pub network: String,
    #[serde(default)]
    pub external_id: Option<String>,
}

/// Bank account as listed under a receiver.
///
/// Only the fields of the account's own rail are populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccountListItem {
    pub id: String,
    #[serde(rename = "type")]
    pub rail: Rail,
    pub name: String,
    #[serde(default)]
    pub pix_key: Option<String>,
    #[serde(default)]
    pub beneficiary_name: Option<String>,
    #[serde(default)]
    pub routing_number: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub account_type: Option<BankAccountType>,
    #[serde(default)]
    pub account_class: Option<AccountClass>,
    #[serde(default)]
    pub address_line_1: Option<String>,
    #[serde(default)]
    pub address_line_2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state_province_region: Option<String>,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub spei_protocol: Option<String>,
    #[serde(default)]
    pub spei_institution_code: Option<String>,
    #[serde(default)]
    pub spei_clabe: Option<String>,
    #[serde(default)]
    pub transfers_type: Option<ArgentinaTransfers>,
    #[serde(default)]
    pub transfers_account: Option<String>,
    #[serde(default)]
    pub ach_cop_beneficiary_first_name: Option<String>,
    #[serde(default)]
    pub ach_cop_beneficiary_last_name: Option<String>,
    #[serde(default)]
    pub ach_cop_document_id: Option<String>,
    #[serde(default)]
    pub ach_cop_document_type: Option<AchCopDocument>,
    #[serde(default)]
    pub ach_cop_email: Option<String>,
    #[serde(default)]
    pub ach_cop_bank_code: Option<String>,
    #[serde(default)]
    pub ach_cop_bank_account: Option<String>,
    #[serde(default)]
    pub swift_code_bic: Option<String>,
    #[serde(default)]
    pub swift_account_holder_name: Option<String>,
    #[serde(default)]
    pub swift_account_number_iban: Option<String>,
    #[serde(default)]
    pub swift_beneficiary_address_line_1: Option<String>,
    #[serde(default)]
    pub swift_beneficiary_address_line_2: Option<String>,
    #[serde(default)]
    pub swift_beneficiary_country: Option<Country>,
    #[serde(default)]
    pub swift_beneficiary_city: Option<String>,
    #[serde(default)]
    pub swift_beneficiary_state_province_region: Option<String>,
    #[serde(default)]
    pub swift_beneficiary_postal_code: Option<String>,
    #[serde(default)]
    pub swift_bank_name: Option<String>,
    #[serde(default)]
    pub swift_bank_address_line_1: Option<String>,
    #[serde(default)]
    pub swift_bank_address_line_2: Option<String>,
    #[serde(default)]
    pub swift_bank_country: Option<Country>,
    #[serde(default)]
    pub swift_bank_city: Option<String>,
    #[serde(default)]
    pub swift_bank_state_province_region: Option<String>,
    #[serde(default)]
    pub swift_bank_postal_code: Option<String>,
    #[serde(default)]
    pub swift_intermediary_bank_swift_code_bic: Option<String>,
    #[serde(default)]
    pub swift_intermediary_bank_account_number_iban: Option<String>,
    #[serde(default)]
    pub swift_intermediary_bank_name: Option<String>,
    #[serde(default)]
    pub swift_intermediary_bank_country: Option<Country>,
    #[serde(default)]
    pub tron_wallet_hash: Option<String>,
    #[serde(default)]
    pub offramp_wallets: Option<Vec<OfframpWalletSummary>>,
    #[serde(with = "wire::timestamp")]
    pub created_at: DateTime<Utc>,
}

/// List payload shaped as `{data}` with no pagination block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBankAccountsResponse {
    pub data: Vec<BankAccountListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: String,
    pub receiver_id: String,
    pub account_holder_name: String,
    pub account_number: String,
    pub routing_number: String,
    pub account_type: BankAccountType,
    pub bank_name: String,
    #[serde(default)]
    pub swift_code: Option<String>,
    #[serde(default)]
    pub iban: Option<String>,
    pub is_primary: bool,
    #[serde(with = "wire::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "wire::timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePixInput {
    #[serde(skip)]
    pub receiver_id: String,
    pub name: String,
    pub pix_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePixResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub rail: Rail,
    pub name: String,
    pub pix_key: String,
    #[serde(with = "wire::timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateArgentinaTransfersInput {
    #[serde(skip)]
    pub receiver_id: String,
    pub name: String,
    pub beneficiary_name: String,
    pub transfers_account: String,
    pub transfers_type: ArgentinaTransfers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateArgentinaTransfersResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub rail: Rail,
    pub name: String,
    pub beneficiary_name: String,
    pub transfers_type: ArgentinaTransfers,
    pub transfers_account: String,
    #[serde(with = "wire::timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSpeiInput {
    #[serde(skip)]
    pub receiver_id: String,
    pub beneficiary_name: String,
    pub name: String,
    pub spei_clabe: String,
    pub spei_institution_code: String,
    pub spei_protocol: SpeiTransferProtocol,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSpeiResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub rail: Rail,
    pub name: String,
    pub beneficiary_name: String,
    pub spei_protocol: SpeiTransferProtocol,
    pub spei_institution_code: String,
    pub spei_clabe: String,
    #[serde(with = "wire::timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateColombiaAchInput {
    #[serde(skip)]
    pub receiver_id: String,
    pub name: String,
    pub account_type: BankAccountType,
    pub ach_cop_beneficiary_first_name: String,
    pub ach_cop_beneficiary_last_name: String,
    pub ach_cop_document_id: String,
    pub ach_cop_document_type: AchCopDocument,
    pub ach_cop_email: String,
    pub ach_cop_bank_code: String,
    pub ach_cop_bank_account: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateColombiaAchResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub rail: Rail,
    pub name: String,
    pub account_type: BankAccountType,
    pub ach_cop_beneficiary_first_name: String,
    pub ach_cop_beneficiary_last_name: String,
    pub ach_cop_document_id: String,
    pub ach_cop_document_type: AchCopDocument,
    pub ach_cop_email: String,
    pub ach_cop_bank_code: String,
    pub ach_cop_bank_account: String,
    #[serde(with = "wire::timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAchInput {
    #[serde(skip)]
    pub receiver_id: String,
    pub name: String,
    pub account_class: AccountClass,
    pub account_number: String,
    pub account_type: BankAccountType,
    pub beneficiary_name: String,
    pub routing_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAchResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub rail: Rail,
    pub name: String,
    pub beneficiary_name: String,
    pub routing_number: String,
    pub account_number: String,
    pub account_type: BankAccountType,
    pub account_class: AccountClass,
    #[serde(default)]
    pub address_line_1: Option<String>,
    #[serde(default)]
    pub address_line_2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state_province_region: Option<String>,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub ach_cop_beneficiary_first_name: Option<String>,
    #[serde(default)]
    pub ach_cop_beneficiary_last_name: Option<String>,
    #[serde(default)]
    pub ach_cop_document_id: Option<String>,
    #[serde(default)]
    pub ach_cop_document_type: Option<AchCopDocument>,
    #[serde(default)]
    pub ach_cop_email: Option<String>,
    #[serde(default)]
    pub ach_cop_bank_code: Option<String>,
    #[serde(default)]
    pub ach_cop_bank_account: Option<String>,
    #[serde(with = "wire::timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Domestic US account reached by wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWireInput {
    #[serde(skip)]
    pub receiver_id: String,
    pub name: String,
    pub account_number: String,
    pub beneficiary_name: String,
    pub routing_number: String,
    pub address_line_1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    pub city: String,
    pub state_province_region: String,
    pub country: Country,
    pub postal_code: String,
}

/// Wire and RTP accounts come back in the same shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWireResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub rail: Rail,
    pub name: String,
    pub beneficiary_name: String,
    pub routing_number: String,
    pub account_number: String,
    pub address_line_1: String,
    #[serde(default)]
    pub address_line_2: Option<String>,
    pub city: String,
    pub state_province_region: String,
    pub country: Country,
    pub postal_code: String,
    #[serde(with = "wire::timestamp")]
    pub created_at: DateTime<Utc>,
}

pub type CreateRtpInput = CreateWireInput;
pub type CreateRtpResponse = CreateWireResponse;

/// International SWIFT account. Unset intermediary bank fields are sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInternationalSwiftInput {
    #[serde(skip)]
    pub receiver_id: String,
    pub name: String,
    pub swift_account_holder_name: String,
    pub swift_account_number_iban: String,
    pub swift_bank_address_line_1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_bank_address_line_2: Option<String>,
    pub swift_bank_city: String,
    pub swift_bank_country: Country,
    pub swift_bank_name: String,
    pub swift_bank_postal_code: String,
    pub swift_bank_state_province_region: String,
    pub swift_beneficiary_address_line_1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_beneficiary_address_line_2: Option<String>,
    pub swift_beneficiary_city: String,
    pub swift_beneficiary_country: Country,
    pub swift_beneficiary_postal_code: String,
    pub swift_beneficiary_state_province_region: String,
    pub swift_code_bic: String,
    #[serde(default)]
    pub swift_intermediary_bank_account_number_iban: Option<String>,
    #[serde(default)]
    pub swift_intermediary_bank_country: Option<Country>,
    #[serde(default)]
    pub swift_intermediary_bank_name: Option<String>,
    #[serde(default)]
    pub swift_intermediary_bank_swift_code_bic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInternationalSwiftResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub rail: Rail,
    pub name: String,
    #[serde(default)]
    pub beneficiary_name: Option<String>,
    #[serde(default)]
    pub address_line_1: Option<String>,
    #[serde(default)]
    pub address_line_2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state_province_region: Option<String>,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    pub postal_code: Option<String>,
    pub swift_code_bic: String,
    pub swift_account_holder_name: String,
    pub swift_account_number_iban: String,
    pub swift_beneficiary_address_line_1: String,
    #[serde(default)]
    pub swift_beneficiary_address_line_2: Option<String>,
    pub swift_beneficiary_country: Country,
    pub swift_beneficiary_city: String,
    pub swift_beneficiary_state_province_region: String,
    pub swift_beneficiary_postal_code: String,
    pub swift_bank_name: String,
    pub swift_bank_address_line_1: String,
    #[serde(default)]
    pub swift_bank_address_line_2: Option<String>,
    pub swift_bank_country: Country,
    pub swift_bank_city: String,
    pub swift_bank_state_province_region: String,
    pub swift_bank_postal_code: String,
    #[serde(default)]
    pub swift_intermediary_bank_swift_code_bic: Option<String>,
    #[serde(default)]
    pub swift_intermediary_bank_account_number_iban: Option<String>,
    #[serde(default)]
    pub swift_intermediary_bank_name: Option<String>,
    #[serde(default)]
    pub swift_intermediary_bank_country: Option<Country>,
    #[serde(with = "wire::timestamp")]
    pub created_at: DateTime<Utc>,
}
