//! Provider recipe of a network profile: endpoint plus signer key source.

use log::warn;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::DeployConfigError;
use crate::signer::SignerKey;

/// Recipe for the provider handle the deploy tool signs and submits with.
///
/// The key is referenced by environment variable name; an inline `private_key`
/// is accepted for throwaway dev chains only.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSpec {
    /// RPC endpoint URL e.g. "https://public-node-api.klaytnapi.com/v1/baobab"
    url: String,
    /// Environment variable holding the hex signer key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    private_key_env: Option<String>,
    /// Inline hex signer key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    private_key: Option<String>,
}

impl ProviderSpec {
    /// Provider signing with the key found in environment variable `var`.
    pub fn from_env_key(url: impl Into<String>, var: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            private_key_env: Some(var.into()),
            private_key: None,
        }
    }

    /// Provider signing with an inline key.
    pub fn from_inline_key(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            private_key_env: None,
            private_key: Some(key.into()),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn private_key_env(&self) -> Option<&str> {
        self.private_key_env.as_deref()
    }

    pub fn has_inline_key(&self) -> bool {
        self.private_key.is_some()
    }

    /// Parsed endpoint URL, restricted to http(s) and ws(s) schemes.
    pub fn endpoint(&self) -> Result<Url, String> {
        let url = Url::parse(&self.url).map_err(|e| e.to_string())?;
        match url.scheme() {
            "http" | "https" | "ws" | "wss" => Ok(url),
            other => Err(format!("unsupported scheme {other}")),
        }
    }

    /// Resolve the signer key from its configured source.
    pub fn signer_key(&self) -> Result<SignerKey, DeployConfigError> {
        match (&self.private_key_env, &self.private_key) {
            (Some(var), None) => SignerKey::from_env(var),
            (None, Some(key)) => {
                warn!("signer key is embedded in the config, prefer private_key_env");
                SignerKey::from_hex(key)
            }
            _ => Err(DeployConfigError::AmbiguousKeySource),
        }
    }

    /// Structural checks only; the key itself is resolved lazily.
    pub(crate) fn validate(&self, network: &str) -> Result<(), DeployConfigError> {
        self.endpoint()
            .map_err(|reason| DeployConfigError::InvalidNetworkField {
                network: network.to_string(),
                field: "provider.url",
                reason,
            })?;
        match (&self.private_key_env, &self.private_key) {
            (Some(var), None) if var.trim().is_empty() => {
                Err(DeployConfigError::InvalidNetworkField {
                    network: network.to_string(),
                    field: "provider.private_key_env",
                    reason: "empty variable name".to_string(),
                })
            }
            (None, Some(key)) if key.trim().is_empty() => {
                Err(DeployConfigError::InvalidNetworkField {
                    network: network.to_string(),
                    field: "provider.private_key",
                    reason: "empty key".to_string(),
                })
            }
            (Some(_), None) | (None, Some(_)) => Ok(()),
            _ => Err(DeployConfigError::AmbiguousKeySource),
        }
    }
}

impl std::fmt::Debug for ProviderSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSpec")
            .field("url", &self.url)
            .field("private_key_env", &self.private_key_env)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
