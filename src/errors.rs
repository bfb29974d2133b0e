//! Error types for the deployment configuration

#[derive(thiserror::Error, Debug)]
pub enum DeployConfigError {
    #[error("failed to read config file {path}: {reason}")]
    ReadFile { path: String, reason: String },
    #[error("unsupported config file extension: {0}, expected .toml or .json")]
    UnsupportedFormat(String),
    #[error("failed to parse config: {0}")]
    Parse(String),
    #[error("failed to render config: {0}")]
    Render(String),
    #[error("no network profiles declared")]
    NoNetworks,
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
    #[error("unknown compiler: {0}")]
    UnknownCompiler(String),
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("network {network}: invalid {field}: {reason}")]
    InvalidNetworkField {
        network: String,
        field: &'static str,
        reason: String,
    },
    #[error("compiler {compiler}: invalid version {version:?}")]
    InvalidCompilerVersion { compiler: String, version: String },
    #[error("provider needs exactly one of private_key or private_key_env")]
    AmbiguousKeySource,
    #[error("environment variable {0} is not valid unicode")]
    InvalidEnvVar(String),
    #[error("environment variable {0} holding the signer key is not set")]
    MissingKeyEnvVar(String),
    #[error("invalid signer key: {0}")]
    InvalidKey(String),
    #[error("failed to instantiate RPC client: {0}")]
    FailedToCreateRpcClient(String),
    #[error("network check failed: {0}")]
    NetworkCheck(String),
    #[error("network check timed out after {0} ms")]
    NetworkCheckTimeout(u64),
    #[error("endpoint reports chain id {actual}, expected {expected}")]
    ChainIdMismatch { expected: u64, actual: u64 },
}
