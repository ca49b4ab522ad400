//! Initialize forgebind in a project

use std::path::Path;

use clap::Args;
use color_eyre::eyre::{eyre, Result};
use console::style;

use crate::config::{CONFIG_FILE, DEFAULT_CONFIG_TEMPLATE};

/// Write a default forgebind.toml into the current directory
#[derive(Args)]
pub struct InitCommand;

impl InitCommand {
    pub fn run(self) -> Result<()> {
        write_default_config(Path::new("."))?;
        println!("{} Created {}", style("✓").green(), CONFIG_FILE);

        println!();
        println!("Next steps:");
        println!(
            "  1. Point {} at your forge build output",
            style("out_dir").cyan()
        );
        println!(
            "  2. Run {} to generate bindings",
            style("forgebind generate").cyan()
        );

        Ok(())
    }
}

/// Create `forgebind.toml` under `dir`, refusing to overwrite one that
/// already exists.
fn write_default_config(dir: &Path) -> Result<()> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        return Err(eyre!(
            "forgebind is already configured in this project ({} exists)",
            CONFIG_FILE
        ));
    }

    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_default_config() {
        let dir = tempfile::tempdir().unwrap();
        write_default_config(dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert!(content.contains("out_dir = \"contracts/out\""));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "contracts = [\"Mine\"]").unwrap();

        assert!(write_default_config(dir.path()).is_err());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "contracts = [\"Mine\"]"
        );
    }
}
