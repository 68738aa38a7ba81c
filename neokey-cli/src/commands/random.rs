//! `neokey random`

use clap::Args;
use neokey::{Account, Params};

use super::print_account;

/// Generate a random account.
#[derive(Args)]
pub struct RandomCommand {}

impl RandomCommand {
    /// Execute the random command.
    pub fn execute(self, params: Params) {
        let account = Account::generate(params);
        print_account("NEO Random Account", &account, true);
    }
}
