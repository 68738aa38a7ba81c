//! neokey - inspect NEO account keys from the command line.
//!
//! Give it any key form and it prints every representation it can reach.

mod commands;
mod logging;

use clap::Parser;
use commands::{Cli, Commands};
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    logging::init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let params = cli.network.params();
    debug!(?params, "resolved network parameters");
    match cli.command {
        Commands::Inspect(cmd) => cmd.execute(params)?,
        Commands::Classify(cmd) => cmd.execute(params),
        Commands::Random(cmd) => cmd.execute(params),
    }
    Ok(())
}
