//! Deployment configuration for smart-contract build tooling.
//!
//! A [`DeployConfig`] names the networks contracts can be deployed to and pins the
//! compiler they are built with. It is constructed once, from a file or from the
//! built-in Klaytn Baobab default, and then only read.

use std::collections::BTreeMap;
use std::env::VarError;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

pub mod compiler;
pub mod constants;
pub mod errors;
pub mod network;
pub mod provider;
pub mod signer;
pub mod types;
pub mod utils;

pub use crate::compiler::CompilerProfile;
pub use crate::errors::DeployConfigError;
pub use crate::network::NetworkProfile;
pub use crate::provider::ProviderSpec;
pub use crate::signer::SignerKey;
pub use crate::types::EthRpcClient;

use crate::utils::ConfigFormat;

/// Configuration record read by the deploy tool at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Network profiles by name e.g. "testnet"
    networks: BTreeMap<String, NetworkProfile>,
    /// Compiler profiles by name e.g. "solc"
    compilers: BTreeMap<String, CompilerProfile>,
}

impl DeployConfig {
    /// Build and validate a config from its parts.
    pub fn new(
        networks: BTreeMap<String, NetworkProfile>,
        compilers: BTreeMap<String, CompilerProfile>,
    ) -> Result<Self, DeployConfigError> {
        let config = Self {
            networks,
            compilers,
        };
        config.validate()?;
        Ok(config)
    }

    /// Klaytn Baobab testnet profile with solc 0.8.0.
    ///
    /// The signer key is read from `BAOBAB_PRIVATE_KEY` when the provider is built.
    pub fn baobab() -> Self {
        let testnet = NetworkProfile::new(
            ProviderSpec::from_env_key(
                constants::DEFAULT_RPC_URL,
                constants::DEFAULT_PRIVATE_KEY_ENV_VAR,
            ),
            constants::DEFAULT_NETWORK_ID,
            constants::DEFAULT_GAS_LIMIT,
            None,
            constants::DEFAULT_NETWORK_CHECK_TIMEOUT_MS,
            constants::DEFAULT_TIMEOUT_BLOCKS,
        );
        Self {
            networks: BTreeMap::from([(constants::DEFAULT_NETWORK_NAME.to_string(), testnet)]),
            compilers: BTreeMap::from([(
                constants::SOLC_COMPILER_NAME.to_string(),
                CompilerProfile::new(constants::DEFAULT_SOLC_VERSION),
            )]),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, DeployConfigError> {
        Self::parse(contents, ConfigFormat::Toml)
    }

    /// Parse the JSON rendering of the config, where `"gasPrice": null` means unset.
    pub fn from_json_str(contents: &str) -> Result<Self, DeployConfigError> {
        Self::parse(contents, ConfigFormat::Json)
    }

    /// Load a `.toml` or `.json` config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DeployConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let config = Self::parse(&utils::read_file(path)?, format)?;
        info!("Loaded deploy config from: {:?}", path);
        utils::pprint_config(&config);
        Ok(config)
    }

    /// Load the file named by `DEPLOY_CONFIG_PATH` (`.env` honoured), else the Baobab default.
    pub fn load_from_env() -> Result<Self, DeployConfigError> {
        dotenv::dotenv().ok();

        match std::env::var(constants::CONFIG_PATH_ENV_VAR) {
            Ok(path) => Self::load(path),
            Err(VarError::NotUnicode(_)) => Err(DeployConfigError::InvalidEnvVar(
                constants::CONFIG_PATH_ENV_VAR.to_string(),
            )),
            Err(VarError::NotPresent) => {
                warn!(
                    "{} not set, using built-in Baobab config",
                    constants::CONFIG_PATH_ENV_VAR
                );
                Ok(Self::baobab())
            }
        }
    }

    /// Render the config as TOML.
    pub fn to_toml(&self) -> Result<String, DeployConfigError> {
        utils::to_toml(self)
    }

    pub fn networks(&self) -> &BTreeMap<String, NetworkProfile> {
        &self.networks
    }

    /// Get a network profile by name.
    pub fn network(&self, name: &str) -> Result<&NetworkProfile, DeployConfigError> {
        self.networks
            .get(name)
            .ok_or_else(|| DeployConfigError::UnknownNetwork(name.to_string()))
    }

    pub fn compilers(&self) -> &BTreeMap<String, CompilerProfile> {
        &self.compilers
    }

    /// Get a compiler profile by name.
    pub fn compiler(&self, name: &str) -> Result<&CompilerProfile, DeployConfigError> {
        self.compilers
            .get(name)
            .ok_or_else(|| DeployConfigError::UnknownCompiler(name.to_string()))
    }

    /// Solidity compiler pin.
    pub fn solc(&self) -> Result<&CompilerProfile, DeployConfigError> {
        self.compiler(constants::SOLC_COMPILER_NAME)
    }

    /// Check every profile, plus that a network and a solc pin are declared.
    pub fn validate(&self) -> Result<(), DeployConfigError> {
        if self.networks.is_empty() {
            return Err(DeployConfigError::NoNetworks);
        }
        for (name, network) in &self.networks {
            network.validate(name)?;
        }
        for (name, compiler) in &self.compilers {
            compiler.validate(name)?;
        }
        self.solc()?;
        Ok(())
    }

    fn parse(contents: &str, format: ConfigFormat) -> Result<Self, DeployConfigError> {
        let config: Self = utils::parse(contents, format)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self::baobab()
    }
}
