use std::path::{Path, PathBuf};

use color_eyre::eyre::{eyre, Result};
use serde::Deserialize;

pub const CONFIG_FILE: &str = "forgebind.toml";

const DEFAULT_OUT_DIR: &str = "contracts/out";
const DEFAULT_OUTPUT_DIR: &str = "src/libs";
const DEFAULT_ENV_FILE: &str = ".env";
const DEFAULT_ADDRESSES_FILE: &str = "deployments.json";

/// Project configuration (forgebind.toml)
///
/// Every field is optional; the tool stays usable with no config file at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForgebindConfig {
    /// Directory of forge build artifacts
    pub out_dir: Option<PathBuf>,
    /// Directory generated modules are written to
    pub output_dir: Option<PathBuf>,
    /// Env file receiving VITE_*_ADDRESS lines
    pub env_file: Option<PathBuf>,
    /// JSON file mapping contract names to deployed addresses
    pub addresses_file: Option<PathBuf>,
    /// Allow-list of contract names; empty means process everything
    #[serde(default)]
    pub contracts: Vec<String>,
}

impl ForgebindConfig {
    /// Load configuration from forgebind.toml in the current directory.
    ///
    /// An absent file yields defaults; a file that exists but is not valid
    /// TOML is a hard error since it is user-authored.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: ForgebindConfig =
            toml::from_str(&content).map_err(|e| eyre!("Invalid {}: {}", path.display(), e))?;
        Ok(config)
    }

    pub fn out_dir(&self) -> PathBuf {
        self.out_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    pub fn env_file(&self) -> PathBuf {
        self.env_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE))
    }

    pub fn addresses_file(&self) -> PathBuf {
        self.addresses_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ADDRESSES_FILE))
    }
}

/// Default forgebind.toml written by `forgebind init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# forgebind configuration

# Directory of forge build artifacts
out_dir = "contracts/out"

# Directory generated modules are written to
output_dir = "src/libs"

# Env file receiving VITE_*_ADDRESS lines
env_file = ".env"

# JSON file mapping contract names to deployed addresses
addresses_file = "deployments.json"

# Contracts to generate bindings for; leave empty to process everything
contracts = []
"#;
