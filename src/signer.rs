//!

use std::fmt;

use ethers::prelude::*;

use crate::errors::DeployConfigError;

/// Private key used to sign deployment transactions.
///
/// Holds the resolved hex secret; `Debug` never prints it.
#[derive(Clone)]
pub struct SignerKey {
    /// Hex encoded secret, with or without `0x` prefix
    secret: String,
    /// Address derived from the secret
    address: Address,
}

impl SignerKey {
    /// Parse a hex encoded secp256k1 private key.
    pub fn from_hex(secret: &str) -> Result<Self, DeployConfigError> {
        let secret = secret.trim();
        let wallet = secret
            .parse::<LocalWallet>()
            .map_err(|e| DeployConfigError::InvalidKey(e.to_string()))?;
        Ok(Self {
            secret: secret.to_string(),
            address: wallet.address(),
        })
    }

    /// Read the key from an environment variable.
    pub fn from_env(var: &str) -> Result<Self, DeployConfigError> {
        let secret = std::env::var(var)
            .map_err(|_| DeployConfigError::MissingKeyEnvVar(var.to_string()))?;
        Self::from_hex(&secret)
    }

    /// Get address of the signer.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Build a local wallet bound to `chain_id`.
    pub fn wallet(&self, chain_id: u64) -> Result<LocalWallet, DeployConfigError> {
        let wallet = self
            .secret
            .parse::<LocalWallet>()
            .map_err(|e| DeployConfigError::InvalidKey(e.to_string()))?;
        Ok(wallet.with_chain_id(chain_id))
    }
}

impl fmt::Debug for SignerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignerKey")
            .field("address", &self.address)
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

    #[test]
    fn parses_with_and_without_prefix() {
        let prefixed = SignerKey::from_hex(KEY).unwrap();
        let bare = SignerKey::from_hex(KEY.trim_start_matches("0x")).unwrap();
        assert_eq!(prefixed.address(), bare.address());
    }

    #[test]
    fn rejects_garbage() {
        let err = SignerKey::from_hex("0xnot-a-key").unwrap_err();
        assert!(matches!(err, DeployConfigError::InvalidKey(_)));
    }

    #[test]
    fn debug_redacts_secret() {
        let key = SignerKey::from_hex(KEY).unwrap();
        let printed = format!("{:?}", key);
        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains(&KEY[2..]));
    }

    #[test]
    fn wallet_carries_chain_id() {
        let key = SignerKey::from_hex(KEY).unwrap();
        let wallet = key.wallet(1001).unwrap();
        assert_eq!(wallet.chain_id(), 1001);
        assert_eq!(wallet.address(), key.address());
    }

    #[test]
    fn missing_env_var() {
        let err = SignerKey::from_env("DEPLOY_CONFIG_SIGNER_TEST_UNSET").unwrap_err();
        assert!(matches!(err, DeployConfigError::MissingKeyEnvVar(_)));
    }
}
