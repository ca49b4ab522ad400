//! Deployed-address resolution

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

/// Resolved contract name -> address mapping.
///
/// Built by layering command-line overrides on top of an optional JSON config
/// file. Iteration order is sorted by contract name so that downstream output
/// never depends on discovery order.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    entries: BTreeMap<String, String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the base mapping from a JSON config file
    /// (`{ "ContractName": "0x..." }`).
    ///
    /// An absent file yields an empty book. An unreadable or unparseable file
    /// is reported through `Err` so the caller can warn and continue with
    /// overrides only; it never aborts a run.
    pub fn from_config_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path)?;
        let entries: BTreeMap<String, String> = serde_json::from_str(&content)?;
        Ok(Self { entries })
    }

    /// Apply a single `--Name=0xValue` override on top of the current book.
    ///
    /// Malformed overrides (missing `--`, missing `=`, value without the `0x`
    /// prefix) are ignored without error. Later overrides for the same name
    /// win.
    pub fn apply_override(&mut self, arg: &str) {
        if let Some((name, address)) = parse_override(arg) {
            self.entries.insert(name.to_string(), address.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in contract-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn parse_override(arg: &str) -> Option<(&str, &str)> {
    let body = arg.strip_prefix("--")?;
    let (name, address) = body.split_once('=')?;
    if name.is_empty() || !address.starts_with("0x") {
        return None;
    }
    Some((name, address))
}
