//! CLI commands for forgebind

use clap::Subcommand;
use color_eyre::eyre::Result;

pub mod generate;
pub mod init;
pub mod list;

/// All available CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Write a default forgebind.toml into the current directory
    Init(init::InitCommand),

    /// List discovered artifacts and what generate would do with them
    List(list::ListCommand),

    /// Generate binding modules, the aggregate module, and env addresses
    Generate(generate::GenerateCommand),
}

impl Command {
    /// Execute the command
    pub fn run(self) -> Result<()> {
        match self {
            Command::Init(cmd) => cmd.run(),
            Command::List(cmd) => cmd.run(),
            Command::Generate(cmd) => cmd.run(),
        }
    }
}
