//! `neokey inspect`

use clap::Args;
use neokey::{Account, Params};

use super::print_account;

/// Print every representation reachable from the input.
#[derive(Args)]
pub struct InspectCommand {
    /// Hex private key, WIF, hex public key (encoded or unencoded), or address.
    input: String,

    /// Also print the private key and WIF.
    #[arg(short, long)]
    show_secrets: bool,
}

impl InspectCommand {
    /// Execute the inspect command.
    pub fn execute(self, params: Params) -> Result<(), neokey::Error> {
        let account = Account::with_params(self.input.trim(), params)?;
        print_account("NEO Account", &account, self.show_secrets);
        Ok(())
    }
}
