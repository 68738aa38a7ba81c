//! CLI command definitions and handlers.

mod classify;
mod inspect;
mod random;

pub use classify::ClassifyCommand;
pub use inspect::InspectCommand;
pub use random::RandomCommand;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use neokey::{Account, Params};

/// neokey - derive every form of a NEO account key.
#[derive(Parser)]
#[command(name = "neokey")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub network: NetworkArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Version bytes, overridable for private chains.
#[derive(Args, Debug, Clone, Copy)]
pub struct NetworkArgs {
    /// Address version byte.
    #[arg(long, global = true, env = "NEOKEY_ADDRESS_VERSION", default_value_t = Params::NEO_ADDRESS_VERSION)]
    pub address_version: u8,

    /// WIF version byte.
    #[arg(long, global = true, env = "NEOKEY_WIF_VERSION", default_value_t = Params::NEO_WIF_VERSION)]
    pub wif_version: u8,
}

impl NetworkArgs {
    /// Protocol parameters for this invocation.
    pub const fn params(self) -> Params {
        Params::new(self.address_version, self.wif_version)
    }
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print every representation reachable from a key, WIF or address.
    #[command(alias = "show")]
    Inspect(InspectCommand),

    /// Print which format an input is.
    Classify(ClassifyCommand),

    /// Generate a random account.
    #[command(alias = "new")]
    Random(RandomCommand),
}

/// Print every slot of `account`, or why it cannot be reached.
fn print_account(title: &str, account: &Account, show_secrets: bool) {
    println!();
    println!("{}", "━".repeat(70).dimmed());
    println!("{}", format!(" {title} ").bold().on_blue());
    println!("{}", "━".repeat(70).dimmed());
    println!();

    print_field("Address", account.address().map(|a| a.green().to_string()));
    print_field(
        "Script Hash",
        account.script_hash().map(|h| h.to_string().cyan().to_string()),
    );
    print_field("Public Key", account.public_key_hex(true));
    print_field("Public Key (unencoded)", account.public_key_hex(false).map(|k| k.dimmed().to_string()));

    if show_secrets {
        print_field(
            "Private Key",
            account.private_key().map(|k| hex::encode(*k).red().to_string()),
        );
        print_field(
            "WIF",
            account.wallet_import_format().map(|w| w.as_str().red().to_string()),
        );
    } else if account.has_private_key() {
        println!("{}", "Private Key:".bold());
        println!("  {}", "(hidden, pass --show-secrets)".dimmed());
        println!();
    }

    println!("{}", "━".repeat(70).dimmed());
    if show_secrets && account.has_private_key() {
        println!("{}", "⚠ Never share your private key or WIF!".yellow().bold());
        println!("{}", "━".repeat(70).dimmed());
    }
    println!();
}

fn print_field(label: &str, value: neokey::Result<String>) {
    println!("{}", format!("{label}:").bold());
    match value {
        Ok(v) => println!("  {v}"),
        Err(e) => println!("  {}", format!("unavailable: {e}").dimmed()),
    }
    println!();
}
