//! `neokey classify`

use clap::Args;
use colored::Colorize;
use neokey::{classify_with, Params, Variant};

/// Print which format the input is.
#[derive(Args)]
pub struct ClassifyCommand {
    /// Any string.
    input: String,
}

impl ClassifyCommand {
    /// Execute the classify command.
    pub fn execute(self, params: Params) {
        let variant = classify_with(self.input.trim(), params);
        let name = match variant {
            Variant::Invalid => variant.name().red(),
            Variant::EncryptedKey => variant.name().yellow(),
            _ => variant.name().green(),
        };
        println!("{name}");
    }
}
