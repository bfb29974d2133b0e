//!

/// Name of the built-in Klaytn Baobab network profile.
pub const DEFAULT_NETWORK_NAME: &'static str = "testnet";
/// Name of the Solidity compiler profile.
pub const SOLC_COMPILER_NAME: &'static str = "solc";
/// Public Baobab RPC endpoint.
pub const DEFAULT_RPC_URL: &'static str = "https://public-node-api.klaytnapi.com/v1/baobab";
/// Baobab chain identifier.
pub const DEFAULT_NETWORK_ID: &'static str = "1001";
/// Gas limit used for deployments.
pub const DEFAULT_GAS_LIMIT: &'static str = "250000000";
/// Milliseconds to wait for the endpoint to answer the network check.
pub const DEFAULT_NETWORK_CHECK_TIMEOUT_MS: u64 = 1_000_000;
/// Blocks to wait for a deployment to be confirmed.
pub const DEFAULT_TIMEOUT_BLOCKS: u64 = 200;
/// Pinned Solidity compiler version.
pub const DEFAULT_SOLC_VERSION: &'static str = "0.8.0";
/// Environment variable holding the Baobab signer key.
pub const DEFAULT_PRIVATE_KEY_ENV_VAR: &'static str = "BAOBAB_PRIVATE_KEY";
/// Environment variable pointing at a config file to load instead of the default.
pub const CONFIG_PATH_ENV_VAR: &'static str = "DEPLOY_CONFIG_PATH";
