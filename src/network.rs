//!

use std::time::Duration;

use ethers::{prelude::*, types::transaction::eip2718::TypedTransaction};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::errors::DeployConfigError;
use crate::provider::ProviderSpec;
use crate::signer::SignerKey;
use crate::types::EthRpcClient;

/// Connection and gas parameters for reaching one blockchain network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    /// How to build the signing provider
    provider: ProviderSpec,
    /// Chain identifier, string encoded integer e.g. "1001"
    network_id: String,
    /// Gas limit, string encoded integer e.g. "250000000"
    gas: String,
    /// Gas price, `None` lets the provider decide
    #[serde(rename = "gasPrice", default, skip_serializing_if = "Option::is_none")]
    gas_price: Option<String>,
    /// Milliseconds to wait for the network check
    #[serde(rename = "networkCheckTimeout")]
    network_check_timeout: u64,
    /// Blocks to wait for a transaction to be confirmed
    #[serde(rename = "timeoutBlocks")]
    timeout_blocks: u64,
}

impl NetworkProfile {
    pub fn new(
        provider: ProviderSpec,
        network_id: impl Into<String>,
        gas: impl Into<String>,
        gas_price: Option<String>,
        network_check_timeout: u64,
        timeout_blocks: u64,
    ) -> Self {
        Self {
            provider,
            network_id: network_id.into(),
            gas: gas.into(),
            gas_price,
            network_check_timeout,
            timeout_blocks,
        }
    }

    pub fn provider_spec(&self) -> &ProviderSpec {
        &self.provider
    }

    pub fn network_id(&self) -> &str {
        &self.network_id
    }

    pub fn gas(&self) -> &str {
        &self.gas
    }

    pub fn gas_price(&self) -> Option<&str> {
        self.gas_price.as_deref()
    }

    pub fn network_check_timeout_ms(&self) -> u64 {
        self.network_check_timeout
    }

    pub fn timeout_blocks(&self) -> u64 {
        self.timeout_blocks
    }

    pub fn network_check_timeout(&self) -> Duration {
        Duration::from_millis(self.network_check_timeout)
    }

    /// Chain id parsed from `network_id`.
    pub fn chain_id(&self) -> Result<u64, DeployConfigError> {
        self.network_id
            .trim()
            .parse::<u64>()
            .map_err(|e| invalid_value("network_id", e.to_string()))
    }

    /// Gas limit parsed from `gas`.
    pub fn gas_limit(&self) -> Result<U256, DeployConfigError> {
        let gas = parse_decimal(&self.gas).map_err(|reason| invalid_value("gas", reason))?;
        if gas.is_zero() {
            return Err(invalid_value("gas", "must be greater than zero".to_string()));
        }
        Ok(gas)
    }

    /// Gas price parsed from `gasPrice`, if one is pinned.
    pub fn gas_price_value(&self) -> Result<Option<U256>, DeployConfigError> {
        self.gas_price
            .as_deref()
            .map(|price| parse_decimal(price).map_err(|reason| invalid_value("gasPrice", reason)))
            .transpose()
    }

    /// Resolve the signer key and return its address.
    pub fn signer_address(&self) -> Result<Address, DeployConfigError> {
        Ok(self.provider.signer_key()?.address())
    }

    /// Local wallet bound to this network's chain id.
    pub fn wallet(&self) -> Result<LocalWallet, DeployConfigError> {
        let key: SignerKey = self.provider.signer_key()?;
        key.wallet(self.chain_id()?)
    }

    /// Instantiate the provider handle: HTTP client with signer middleware.
    ///
    /// Performs no network I/O, the chain id comes from `network_id`.
    pub fn provider(&self) -> Result<EthRpcClient, DeployConfigError> {
        let provider = Provider::<Http>::try_from(self.provider.url())
            .map_err(|e| DeployConfigError::FailedToCreateRpcClient(e.to_string()))?;
        let wallet = self.wallet()?;
        debug!(
            "provider for chain {} at {} signing as {:?}",
            wallet.chain_id(),
            self.provider.url(),
            wallet.address()
        );
        Ok(SignerMiddleware::new(provider, wallet))
    }

    /// Stamp gas limit, gas price (when pinned) and chain id onto a transaction.
    pub fn apply_gas(&self, tx: &mut TypedTransaction) -> Result<(), DeployConfigError> {
        tx.set_gas(self.gas_limit()?);
        if let Some(price) = self.gas_price_value()? {
            tx.set_gas_price(price);
        }
        tx.set_chain_id(self.chain_id()?);
        Ok(())
    }

    /// Ask the endpoint for its chain id and compare it with `network_id`.
    pub async fn check_network(&self) -> Result<u64, DeployConfigError> {
        let expected = self.chain_id()?;
        let provider = Provider::<Http>::try_from(self.provider.url())
            .map_err(|e| DeployConfigError::FailedToCreateRpcClient(e.to_string()))?;

        let reported = tokio::time::timeout(self.network_check_timeout(), provider.get_chainid())
            .await
            .map_err(|_| DeployConfigError::NetworkCheckTimeout(self.network_check_timeout))?
            .map_err(|e| DeployConfigError::NetworkCheck(e.to_string()))?;
        if reported.bits() > 64 {
            return Err(DeployConfigError::NetworkCheck(format!(
                "chain id {reported} out of range"
            )));
        }
        let actual = reported.low_u64();

        if actual != expected {
            return Err(DeployConfigError::ChainIdMismatch { expected, actual });
        }
        info!("network check passed for chain {} at {}", actual, self.provider.url());
        Ok(actual)
    }

    /// Check every field parses; `name` is used for error reporting.
    pub(crate) fn validate(&self, name: &str) -> Result<(), DeployConfigError> {
        self.provider.validate(name)?;
        self.chain_id().map_err(|e| rename(e, name))?;
        self.gas_limit().map_err(|e| rename(e, name))?;
        self.gas_price_value().map_err(|e| rename(e, name))?;
        if self.network_check_timeout == 0 {
            return Err(invalid_field(name, "networkCheckTimeout", "must be greater than zero"));
        }
        if self.timeout_blocks == 0 {
            return Err(invalid_field(name, "timeoutBlocks", "must be greater than zero"));
        }
        Ok(())
    }
}

/// Parse a non-empty decimal integer string.
fn parse_decimal(value: &str) -> Result<U256, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("empty value".to_string());
    }
    U256::from_dec_str(value).map_err(|e| format!("{:?}", e))
}

fn invalid_value(field: &'static str, reason: String) -> DeployConfigError {
    DeployConfigError::InvalidField { field, reason }
}

fn invalid_field(network: &str, field: &'static str, reason: &str) -> DeployConfigError {
    DeployConfigError::InvalidNetworkField {
        network: network.to_string(),
        field,
        reason: reason.to_string(),
    }
}

// field accessors don't know the profile's map key, fill it in here
fn rename(err: DeployConfigError, network: &str) -> DeployConfigError {
    match err {
        DeployConfigError::InvalidField { field, reason } => {
            DeployConfigError::InvalidNetworkField {
                network: network.to_string(),
                field,
                reason,
            }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::types::TransactionRequest;

    const KEY: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

    fn profile(gas: &str, gas_price: Option<&str>) -> NetworkProfile {
        NetworkProfile::new(
            ProviderSpec::from_inline_key("http://127.0.0.1:8551", KEY),
            "1001",
            gas,
            gas_price.map(str::to_string),
            1_000,
            200,
        )
    }

    #[test]
    fn typed_views() {
        let p = profile("250000000", Some("25000000000"));
        assert_eq!(p.chain_id().unwrap(), 1001);
        assert_eq!(p.gas_limit().unwrap(), U256::from(250_000_000u64));
        assert_eq!(p.gas_price_value().unwrap(), Some(U256::from(25_000_000_000u64)));
        assert_eq!(p.network_check_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn apply_gas_leaves_price_to_provider() {
        let p = profile("250000000", None);
        let mut tx = TypedTransaction::Legacy(TransactionRequest::new());
        p.apply_gas(&mut tx).unwrap();
        assert_eq!(tx.gas(), Some(&U256::from(250_000_000u64)));
        assert_eq!(tx.gas_price(), None);
        assert_eq!(tx.chain_id(), Some(U64::from(1001)));
    }

    #[test]
    fn apply_gas_pins_price() {
        let p = profile("21000", Some("750000000000"));
        let mut tx = TypedTransaction::Legacy(TransactionRequest::new());
        p.apply_gas(&mut tx).unwrap();
        assert_eq!(tx.gas_price(), Some(U256::from(750_000_000_000u64)));
    }

    #[test]
    fn validate_names_network_and_field() {
        let p = profile("lots", None);
        match p.validate("testnet").unwrap_err() {
            DeployConfigError::InvalidNetworkField { network, field, .. } => {
                assert_eq!(network, "testnet");
                assert_eq!(field, "gas");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_gas_is_rejected() {
        assert!(profile("0", None).gas_limit().is_err());
    }

    #[test]
    fn accessor_errors_name_only_the_field() {
        let err = profile("lots", None).gas_limit().unwrap_err();
        assert!(matches!(err, DeployConfigError::InvalidField { field: "gas", .. }));
        assert!(err.to_string().starts_with("invalid gas:"));

        let err = profile("21000", Some("cheap")).gas_price_value().unwrap_err();
        assert!(matches!(err, DeployConfigError::InvalidField { field: "gasPrice", .. }));
    }

    #[test]
    fn provider_signs_for_configured_chain() {
        let p = profile("250000000", None);
        let client = p.provider().unwrap();
        assert_eq!(client.signer().chain_id(), 1001);
        assert_eq!(client.address(), p.signer_address().unwrap());
    }
}
