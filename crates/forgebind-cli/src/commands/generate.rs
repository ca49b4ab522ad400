//! Generate binding modules from forge build output

use std::path::PathBuf;

use clap::Args;
use color_eyre::eyre::Result;
use console::style;
use forgebind_core::{
    artifact, codegen, AddressBook, ContractArtifact, ProcessedContract,
};

use crate::config::ForgebindConfig;

/// Generate binding modules, the aggregate module, and env addresses
#[derive(Args)]
pub struct GenerateCommand {
    /// Directory of forge build artifacts (defaults to forgebind.toml)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Directory generated modules are written to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Env file receiving VITE_*_ADDRESS lines
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// JSON file mapping contract names to deployed addresses
    #[arg(long)]
    pub addresses_file: Option<PathBuf>,

    /// Restrict generation to the given contract names (repeatable)
    #[arg(long = "only")]
    pub only: Vec<String>,

    /// Address overrides of the form --Name=0xValue
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub overrides: Vec<String>,
}

impl GenerateCommand {
    pub fn run(self) -> Result<()> {
        let config = ForgebindConfig::load()?;

        let params = GenerateParams {
            out_dir: self.out_dir.unwrap_or_else(|| config.out_dir()),
            output_dir: self.output_dir.unwrap_or_else(|| config.output_dir()),
            env_file: self.env_file.unwrap_or_else(|| config.env_file()),
            addresses_file: self.addresses_file.unwrap_or_else(|| config.addresses_file()),
            allow_list: if self.only.is_empty() {
                config.contracts.clone()
            } else {
                self.only
            },
            overrides: self.overrides,
        };

        execute(&params)?;
        Ok(())
    }
}

/// Explicit inputs for one generation run.
///
/// All paths are parameters rather than embedded constants so the pipeline
/// can be exercised against fixture directories.
pub struct GenerateParams {
    pub out_dir: PathBuf,
    pub output_dir: PathBuf,
    pub env_file: PathBuf,
    pub addresses_file: PathBuf,
    /// Empty means process every discovered artifact
    pub allow_list: Vec<String>,
    pub overrides: Vec<String>,
}

/// What a run produced.
pub struct GenerateOutcome {
    /// Names of contracts that got a binding module, sorted
    pub processed: Vec<String>,
    pub env_updated: bool,
}

/// Run the full pipeline: discover artifacts, resolve addresses, generate
/// binding modules and the aggregate module, update the env file.
///
/// Only a missing artifact directory aborts the run. Everything else (bad
/// artifact JSON, bad addresses config, unresolved addresses, zero matches)
/// is absorbed with a warning so a partial run still produces output.
pub fn execute(params: &GenerateParams) -> Result<GenerateOutcome> {
    println!(
        "{} Scanning {} for artifacts...",
        style("->").blue(),
        style(params.out_dir.display()).cyan()
    );
    let files = artifact::discover_artifacts(&params.out_dir)?;
    println!("   Found {} artifact file(s)", style(files.len()).cyan());

    let addresses = resolve_addresses(params);

    // Parse, filter, and collect contracts with a usable ABI
    let mut processed: Vec<ProcessedContract> = Vec::new();
    for path in &files {
        let name = match artifact::contract_name(path) {
            Some(name) => name,
            None => continue,
        };

        if !params.allow_list.is_empty() && !params.allow_list.contains(&name) {
            continue;
        }

        let parsed = match ContractArtifact::load(path) {
            Ok(parsed) => parsed,
            Err(e) => {
                println!(
                    "   {} Failed to parse {}: {}",
                    style("!").yellow(),
                    path.display(),
                    e
                );
                continue;
            }
        };

        let abi = match parsed.abi_entries() {
            Some(entries) => serde_json::Value::Array(entries.clone()),
            None => {
                println!(
                    "   {} {} has no ABI, skipping",
                    style("-").dim(),
                    style(&name).dim()
                );
                continue;
            }
        };

        println!("   {} {}", style("+").green(), style(&name).cyan());
        processed.push(ProcessedContract { name, abi });
    }

    if processed.is_empty() {
        println!(
            "{} No contracts to generate bindings for",
            style("!").yellow()
        );
        return Ok(GenerateOutcome {
            processed: Vec::new(),
            env_updated: false,
        });
    }

    // Discovery order is filesystem-dependent; sort so output is stable
    processed.sort_by(|a, b| a.name.cmp(&b.name));

    std::fs::create_dir_all(&params.output_dir)?;

    for contract in &processed {
        let rendered = codegen::render_binding_module(contract)?;
        let file_name = codegen::binding_file_name(&contract.name);
        std::fs::write(params.output_dir.join(&file_name), rendered)?;
        println!(
            "{} {} -> {}",
            style("✓").green(),
            contract.name,
            style(&file_name).cyan()
        );
    }

    for contract in &processed {
        if addresses.get(&contract.name).is_none() {
            println!(
                "   {} No address resolved for {}",
                style("!").yellow(),
                contract.name
            );
        }
    }

    let aggregate = codegen::render_aggregate_module(
        &processed,
        &addresses,
        &codegen::generation_timestamp(),
    );
    std::fs::write(
        params.output_dir.join(codegen::AGGREGATE_FILE_NAME),
        aggregate,
    )?;
    println!(
        "{} Aggregate -> {}",
        style("✓").green(),
        style(codegen::AGGREGATE_FILE_NAME).cyan()
    );

    let env_updated = !addresses.is_empty();
    if env_updated {
        forgebind_core::sync_env_file(&params.env_file, &addresses)?;
        println!(
            "{} Updated {} with {} address(es)",
            style("✓").green(),
            style(params.env_file.display()).cyan(),
            addresses.len()
        );
    }

    println!();
    println!(
        "{} Generated bindings for {} contract(s)",
        style("*").green().bold(),
        processed.len()
    );

    Ok(GenerateOutcome {
        processed: processed.into_iter().map(|c| c.name).collect(),
        env_updated,
    })
}

/// Base addresses from the config file, overlaid with CLI overrides.
/// A broken config file downgrades to overrides-only with a warning.
fn resolve_addresses(params: &GenerateParams) -> AddressBook {
    let mut addresses = match AddressBook::from_config_file(&params.addresses_file) {
        Ok(book) => book,
        Err(e) => {
            println!(
                "   {} Could not read {}: {} (continuing with overrides only)",
                style("!").yellow(),
                params.addresses_file.display(),
                e
            );
            AddressBook::new()
        }
    };

    for arg in &params.overrides {
        addresses.apply_override(arg);
    }

    addresses
}
