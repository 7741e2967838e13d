use anyhow::Context;
use blindpay::{BlindPay, BlindPayConfig, ConfigError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config().context("loading BlindPay credentials")?;
    let client = BlindPay::from_config(config)?;

    println!("Fetching available rails...");
    match client.available().get_rails().await?.into_result() {
        Ok(rails) => {
            println!("Found {} rails", rails.len());
            for rail in &rails {
                println!("Rail: {} ({}, {})", rail.label, rail.value, rail.country);
            }
        }
        Err(e) => {
            println!("Error fetching rails: {}", e);
        }
    }

    let receivers = client.receivers().list().await?;
    if let Some(receivers) = receivers.data() {
        println!("Instance {} has {} receivers", client.instance_id(), receivers.len());
        for receiver in receivers.iter().take(5) {
            println!("Receiver: {} ({:?}/{:?})", receiver.id(), receiver.account_class(), receiver.kyc_type());
        }
    }

    Ok(())
}

// Reads BLINDPAY_API_KEY and BLINDPAY_INSTANCE_ID, from .env when present
#[cfg(feature = "env-file")]
fn load_config() -> Result<BlindPayConfig, ConfigError> {
    BlindPayConfig::from_env_file("BLINDPAY")
}

#[cfg(not(feature = "env-file"))]
fn load_config() -> Result<BlindPayConfig, ConfigError> {
    BlindPayConfig::from_env("BLINDPAY")
}
