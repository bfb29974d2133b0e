//! Compiler version pins.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::DeployConfigError;

/// Version pin for a contract-language compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerProfile {
    /// Release version e.g. "0.8.0", optionally with a "+commit.<hash>" build suffix
    version: String,
}

impl CompilerProfile {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Split the release part of the version into `(major, minor, patch)`.
    pub fn release(&self) -> Option<(u64, u64, u64)> {
        let caps = version_re().captures(&self.version)?;
        let part = |i| caps.get(i)?.as_str().parse::<u64>().ok();
        Some((part(1)?, part(2)?, part(3)?))
    }

    pub(crate) fn validate(&self, name: &str) -> Result<(), DeployConfigError> {
        if self.release().is_none() {
            return Err(DeployConfigError::InvalidCompilerVersion {
                compiler: name.to_string(),
                version: self.version.clone(),
            });
        }
        Ok(())
    }
}

fn version_re() -> Regex {
    Regex::new(r"^(\d+)\.(\d+)\.(\d+)(\+commit\.[0-9a-f]{8})?$").unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_release_and_nightly_pins() {
        assert_eq!(CompilerProfile::new("0.8.0").release(), Some((0, 8, 0)));
        assert_eq!(
            CompilerProfile::new("0.8.19+commit.7dd6d404").release(),
            Some((0, 8, 19))
        );
    }

    #[test]
    fn rejects_ranges_and_garbage() {
        for bad in ["^0.8.0", "0.8", "latest", "", "0.8.0+commit.XYZ"] {
            let err = CompilerProfile::new(bad).validate("solc").unwrap_err();
            assert!(matches!(err, DeployConfigError::InvalidCompilerVersion { .. }), "{bad}");
        }
    }
}
