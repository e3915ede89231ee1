//! Contract Build Artifacts
//!
//! Loads compiled contract artifacts (Hardhat-style JSON carrying the
//! creation bytecode) from a local directory. The deployer appends
//! ABI-encoded constructor arguments to the creation code and ships the
//! result as a deployment transaction.
//!
//! Author: AI-Generated
//! Created: 2026-07-31

use alloy::primitives::Bytes;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The subset of a build artifact the deployer needs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub contract_name: String,
    /// Creation bytecode as a 0x-prefixed hex string
    pub bytecode: String,
}

impl ContractArtifact {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse contract artifact")
    }

    /// Creation bytecode as raw bytes.
    pub fn creation_code(&self) -> Result<Bytes> {
        self.bytecode.parse::<Bytes>().with_context(|| {
            format!("Artifact {} carries malformed bytecode", self.contract_name)
        })
    }
}

/// Directory-backed artifact lookup (<dir>/<ContractName>.json).
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, name: &str) -> Result<ContractArtifact> {
        let path = self.dir.join(format!("{}.json", name));
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read artifact: {}", path.display()))?;
        ContractArtifact::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_artifact() {
        let json = r#"{
            "contractName": "OptimizerStrategy",
            "abi": [],
            "bytecode": "0x6080604052",
            "deployedBytecode": "0x6080"
        }"#;
        let artifact = ContractArtifact::from_json(json).unwrap();
        assert_eq!(artifact.contract_name, "OptimizerStrategy");

        let code = artifact.creation_code().unwrap();
        assert_eq!(code.len(), 5);
        assert_eq!(code[0], 0x60);
    }

    #[test]
    fn test_malformed_bytecode() {
        let json = r#"{"contractName": "Broken", "bytecode": "0xzz"}"#;
        let artifact = ContractArtifact::from_json(json).unwrap();
        assert!(artifact.creation_code().is_err());
    }

    #[test]
    fn test_missing_file() {
        let store = ArtifactStore::new("does/not/exist");
        assert!(store.load("Nope").is_err());
    }
}
