//! List discovered artifacts

use std::path::{Path, PathBuf};

use clap::Args;
use color_eyre::eyre::Result;
use console::style;
use forgebind_core::{artifact, ContractArtifact};

use crate::config::ForgebindConfig;

/// List discovered artifacts and what generate would do with them
#[derive(Args)]
pub struct ListCommand {
    /// Directory of forge build artifacts (defaults to forgebind.toml)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Restrict the listing to the given contract names (repeatable)
    #[arg(long = "only")]
    pub only: Vec<String>,
}

impl ListCommand {
    pub fn run(self) -> Result<()> {
        let config = ForgebindConfig::load()?;
        let out_dir = self.out_dir.unwrap_or_else(|| config.out_dir());
        let allow_list = if self.only.is_empty() {
            config.contracts.clone()
        } else {
            self.only
        };

        let files = artifact::discover_artifacts(&out_dir)?;

        if files.is_empty() {
            println!("No artifacts found in {}", out_dir.display());
            return Ok(());
        }

        let mut rows: Vec<(String, String, String)> = Vec::new();
        for path in &files {
            let name = match artifact::contract_name(path) {
                Some(name) => name,
                None => continue,
            };

            let status = artifact_status(path, &name, &allow_list);
            rows.push((name, path.display().to_string(), status));
        }

        rows.sort_by(|a, b| a.0.cmp(&b.0));

        // Print table header
        println!("{:<24} {:<50} {:<20}", "Contract", "Path", "Status");
        println!("{}", "-".repeat(96));

        for (name, path, status) in &rows {
            println!("{:<24} {:<50} {:<20}", name, path, status);
        }

        println!();
        println!(
            "Total: {} artifact(s) in {}",
            rows.len(),
            style(out_dir.display()).cyan()
        );

        Ok(())
    }
}

/// What generate would do with this artifact, as a table cell.
fn artifact_status(path: &Path, name: &str, allow_list: &[String]) -> String {
    if !allow_list.is_empty() && !allow_list.iter().any(|n| n == name) {
        return "filtered out".to_string();
    }

    match ContractArtifact::load(path) {
        Ok(parsed) => match parsed.abi_entries() {
            Some(entries) => format!("{} ABI entries", entries.len()),
            None => "no ABI (skipped)".to_string(),
        },
        Err(_) => "invalid JSON (skipped)".to_string(),
    }
}
