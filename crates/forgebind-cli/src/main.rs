mod commands;
mod config;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Command;

#[derive(Parser)]
#[command(name = "forgebind")]
#[command(about = "Generate typed frontend bindings from forge build output")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    cli.command.run()
}
