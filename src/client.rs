use crate::core::config::BlindPayConfig;
use crate::core::errors::BlindPayError;
use crate::core::kernel::{signer, HttpTransport, HttpTransportBuilder, HttpTransportConfig, Transport, DEFAULT_BASE_URL};
use crate::resources::api_keys::ApiKeys;
use crate::resources::available::Available;
use crate::resources::bank_accounts::BankAccounts;
use crate::resources::instances::Instances;
use crate::resources::partner_fees::PartnerFees;
use crate::resources::payins::{PayinQuotes, Payins};
use crate::resources::payouts::Payouts;
use crate::resources::quotes::Quotes;
use crate::resources::receivers::Receivers;
use crate::resources::terms_of_service::TermsOfService;
use crate::resources::virtual_accounts::VirtualAccounts;
use crate::resources::wallets::{BlockchainWallets, OfframpWallets};
use crate::resources::webhooks::WebhookEndpoints;
use secrecy::ExposeSecret;
use std::ops::Deref;
use tracing::debug;

const MISSING_API_KEY: &str = "API key not provided, get your API key on BlindPay dashboard";
const MISSING_INSTANCE_ID: &str = "Instance ID not provided, get your instance ID on BlindPay dashboard";

/// Instance management plus the API key and webhook endpoint sub-resources
pub struct InstancesNamespace<T: Transport> {
    instances: Instances<T>,
    api_keys: ApiKeys<T>,
    webhook_endpoints: WebhookEndpoints<T>,
}

impl<T: Transport> InstancesNamespace<T> {
    pub const fn api_keys(&self) -> &ApiKeys<T> {
        &self.api_keys
    }

    pub const fn webhook_endpoints(&self) -> &WebhookEndpoints<T> {
        &self.webhook_endpoints
    }
}

impl<T: Transport> Deref for InstancesNamespace<T> {
    type Target = Instances<T>;

    fn deref(&self) -> &Self::Target {
        &self.instances
    }
}

/// Payins plus payin quotes
pub struct PayinsNamespace<T: Transport> {
    payins: Payins<T>,
    quotes: PayinQuotes<T>,
}

impl<T: Transport> PayinsNamespace<T> {
    pub const fn quotes(&self) -> &PayinQuotes<T> {
        &self.quotes
    }
}

impl<T: Transport> Deref for PayinsNamespace<T> {
    type Target = Payins<T>;

    fn deref(&self) -> &Self::Target {
        &self.payins
    }
}

/// Receivers plus their bank accounts
pub struct ReceiversNamespace<T: Transport> {
    receivers: Receivers<T>,
    bank_accounts: BankAccounts<T>,
}

impl<T: Transport> ReceiversNamespace<T> {
    pub const fn bank_accounts(&self) -> &BankAccounts<T> {
        &self.bank_accounts
    }
}

impl<T: Transport> Deref for ReceiversNamespace<T> {
    type Target = Receivers<T>;

    fn deref(&self) -> &Self::Target {
        &self.receivers
    }
}

/// Blockchain wallets plus offramp wallets
pub struct WalletsNamespace<T: Transport> {
    blockchain: BlockchainWallets<T>,
    offramp: OfframpWallets<T>,
}

impl<T: Transport> WalletsNamespace<T> {
    pub const fn blockchain(&self) -> &BlockchainWallets<T> {
        &self.blockchain
    }

    pub const fn offramp(&self) -> &OfframpWallets<T> {
        &self.offramp
    }
}

/// Entry point to the BlindPay API.
///
/// Every resource client shares one transport, built once here. The client is
/// `Send + Sync` and can be shared across tasks behind an `Arc`.
///
/// ```no_run
/// # async fn run() -> Result<(), blindpay::BlindPayError> {
/// let client = blindpay::BlindPay::new("your-api-key", "in_000000000000")?;
/// if let Some(rails) = client.available().get_rails().await?.into_data() {
///     println!("{} rails", rails.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct BlindPay<T: Transport + Clone = HttpTransport> {
    instance_id: String,
    available: Available<T>,
    instances: InstancesNamespace<T>,
    partner_fees: PartnerFees<T>,
    payins: PayinsNamespace<T>,
    quotes: Quotes<T>,
    payouts: Payouts<T>,
    receivers: ReceiversNamespace<T>,
    virtual_accounts: VirtualAccounts<T>,
    wallets: WalletsNamespace<T>,
    terms_of_service: TermsOfService<T>,
}

impl BlindPay<HttpTransport> {
    /// Create a client against the production API
    pub fn new(api_key: impl Into<String>, instance_id: impl Into<String>) -> Result<Self, BlindPayError> {
        Self::from_config(BlindPayConfig::new(api_key.into(), instance_id.into()))
    }

    /// Create a client from a loaded configuration, honoring its base URL and timeout
    pub fn from_config(config: BlindPayConfig) -> Result<Self, BlindPayError> {
        if config.api_key.expose_secret().is_empty() {
            return Err(BlindPayError::configuration(MISSING_API_KEY));
        }
        if config.instance_id.is_empty() {
            return Err(BlindPayError::configuration(MISSING_INSTANCE_ID));
        }

        let mut transport_config =
            HttpTransportConfig::new(config.base_url.clone().unwrap_or_else(|| DEFAULT_BASE_URL.to_string()));
        if let Some(timeout_seconds) = config.timeout_seconds {
            transport_config = transport_config.with_timeout(timeout_seconds);
        }

        let transport = HttpTransportBuilder::new(transport_config)
            .with_api_key(config.api_key)
            .build()?;

        debug!(
            instance_id = %config.instance_id,
            base_url = %transport.config().base_url,
            "blindpay client initialized"
        );

        Self::with_transport(transport, config.instance_id)
    }
}

impl<T: Transport + Clone> BlindPay<T> {
    /// Compose every resource client over the given transport
    pub fn with_transport(transport: T, instance_id: impl Into<String>) -> Result<Self, BlindPayError> {
        let instance_id = instance_id.into();
        if instance_id.is_empty() {
            return Err(BlindPayError::configuration(MISSING_INSTANCE_ID));
        }
        let id = instance_id.as_str();

        Ok(Self {
            available: Available::new(&transport),
            instances: InstancesNamespace {
                instances: Instances::new(&transport, id),
                api_keys: ApiKeys::new(&transport, id),
                webhook_endpoints: WebhookEndpoints::new(&transport, id),
            },
            partner_fees: PartnerFees::new(&transport, id),
            payins: PayinsNamespace {
                payins: Payins::new(&transport, id),
                quotes: PayinQuotes::new(&transport, id),
            },
            quotes: Quotes::new(&transport, id),
            payouts: Payouts::new(&transport, id),
            receivers: ReceiversNamespace {
                receivers: Receivers::new(&transport, id),
                bank_accounts: BankAccounts::new(&transport, id),
            },
            virtual_accounts: VirtualAccounts::new(&transport, id),
            wallets: WalletsNamespace {
                blockchain: BlockchainWallets::new(&transport, id),
                offramp: OfframpWallets::new(&transport, id),
            },
            terms_of_service: TermsOfService::new(&transport, id),
            instance_id,
        })
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    pub const fn available(&self) -> &Available<T> {
        &self.available
    }

    pub const fn instances(&self) -> &InstancesNamespace<T> {
        &self.instances
    }

    pub const fn partner_fees(&self) -> &PartnerFees<T> {
        &self.partner_fees
    }

    pub const fn payins(&self) -> &PayinsNamespace<T> {
        &self.payins
    }

    pub const fn quotes(&self) -> &Quotes<T> {
        &self.quotes
    }

    pub const fn payouts(&self) -> &Payouts<T> {
        &self.payouts
    }

    pub const fn receivers(&self) -> &ReceiversNamespace<T> {
        &self.receivers
    }

    pub const fn virtual_accounts(&self) -> &VirtualAccounts<T> {
        &self.virtual_accounts
    }

    pub const fn wallets(&self) -> &WalletsNamespace<T> {
        &self.wallets
    }

    pub const fn terms_of_service(&self) -> &TermsOfService<T> {
        &self.terms_of_service
    }

    /// Check the `svix-signature` of an incoming webhook against its raw body
    pub fn verify_webhook_signature(
        &self,
        secret: &str,
        id: &str,
        timestamp: &str,
        payload: &str,
        signature: &str,
    ) -> bool {
        signer::verify_webhook(secret, id, timestamp, payload, signature)
    }
}
