//! Discovery and loading of forge build artifacts

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// A contract artifact from forge build output.
///
/// Only the `abi` field is consumed; its entries are copied verbatim into
/// generated modules and never interpreted.
#[derive(Debug, Deserialize)]
pub struct ContractArtifact {
    #[serde(default)]
    pub abi: serde_json::Value,
}

impl ContractArtifact {
    /// Read and parse an artifact file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let artifact: ContractArtifact = serde_json::from_str(&content)?;
        Ok(artifact)
    }

    /// The ABI entries, if the artifact has a usable ABI.
    ///
    /// Returns `None` for a missing, non-array, or empty `abi` field, which
    /// covers interfaces and abstract contracts with no callable surface.
    pub fn abi_entries(&self) -> Option<&Vec<serde_json::Value>> {
        match self.abi.as_array() {
            Some(entries) if !entries.is_empty() => Some(entries),
            _ => None,
        }
    }
}

/// Check whether a file name qualifies as an artifact: a plain `.json`
/// file that is not a compiler metadata sidecar.
pub fn is_artifact_file(file_name: &str) -> bool {
    file_name.ends_with(".json") && !file_name.ends_with(".metadata.json")
}

/// Derive the contract name from an artifact path (`out/Vault.sol/Vault.json`
/// -> `Vault`).
pub fn contract_name(path: &Path) -> Option<String> {
    path.file_stem().and_then(|n| n.to_str()).map(str::to_string)
}

/// Recursively collect all artifact files under `root`.
///
/// A missing or unlistable root is fatal; the caller has nothing to generate
/// from. Ordering of the returned paths is not specified.
pub fn discover_artifacts(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::ArtifactDirNotFound(root.display().to_string()));
    }

    let mut files = Vec::new();
    collect_artifacts(root, &mut files)?;
    Ok(files)
}

fn collect_artifacts(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            collect_artifacts(&path, files)?;
            continue;
        }

        let file_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };

        if is_artifact_file(file_name) {
            files.push(path);
        }
    }

    Ok(())
}
