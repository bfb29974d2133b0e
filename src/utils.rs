//! General utility functions for reading and rendering configs.

use std::fs;
use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::DeployConfigError;
use crate::DeployConfig;

/// On-disk encodings of a config, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self, DeployConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("json") => Ok(ConfigFormat::Json),
            other => Err(DeployConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

pub(crate) fn read_file(path: &Path) -> Result<String, DeployConfigError> {
    fs::read_to_string(path).map_err(|e| DeployConfigError::ReadFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

pub(crate) fn parse<T: DeserializeOwned>(
    contents: &str,
    format: ConfigFormat,
) -> Result<T, DeployConfigError> {
    match format {
        ConfigFormat::Toml => {
            toml::from_str(contents).map_err(|e| DeployConfigError::Parse(e.to_string()))
        }
        ConfigFormat::Json => {
            serde_json::from_str(contents).map_err(|e| DeployConfigError::Parse(e.to_string()))
        }
    }
}

pub(crate) fn to_toml<T: Serialize>(c: &T) -> Result<String, DeployConfigError> {
    // go through toml::Value so plain values are emitted before tables
    let value =
        toml::Value::try_from(c).map_err(|e| DeployConfigError::Render(e.to_string()))?;
    toml::to_string(&value).map_err(|e| DeployConfigError::Render(e.to_string()))
}

/// Log a summary of the config, never including key material.
pub fn pprint_config(config: &DeployConfig) {
    info!("Declared networks: ");
    config.networks().iter().for_each(|(name, n)| {
        info!(
            "+ {} (id {}) @ {}, gas {}, gasPrice {}",
            name,
            n.network_id(),
            n.provider_spec().url(),
            n.gas(),
            n.gas_price().unwrap_or("auto")
        );
    });
    info!("Declared compilers: ");
    config.compilers().iter().for_each(|(name, c)| {
        info!("+ {}@{}", name, c.version());
    });
}
