//! # neokey - NEO account key representations
//!
//! One key pair, many textual forms. An [`Account`] is built from whichever
//! form you have (hex private key, WIF, encoded or unencoded public key,
//! address) and derives the others lazily, caching each one the first time it
//! is read.
//!
//! ```text
//! NEP-2 (rejected)   WIF <=> private key => public key => script hash <=> address
//! ```
//!
//! Derivation only follows the arrows. Asking for a private key when the
//! account was built from an address fails with
//! [`Error::MissingPrecursor`] instead of guessing.
//!
//! ## Example
//!
//! ```
//! use neokey::Account;
//!
//! let account = Account::new("L1QqQJnpBwbsPGAuutuzPTac8piqvbR1HRjrY5qHup48TBCBFe4g")?;
//! assert_eq!(account.address()?, "ALq7AWrhAueN6mJNqk6FHJjnsEoPRytLdW");
//! assert_eq!(
//!     account.script_hash()?.to_string(),
//!     "cef0c0fdcfe7838eff6ff104f9cdec2922297537"
//! );
//!
//! let watch_only = Account::new("ALq7AWrhAueN6mJNqk6FHJjnsEoPRytLdW")?;
//! assert!(watch_only.private_key().unwrap_err().is_missing_precursor());
//! # Ok::<(), neokey::Error>(())
//! ```

#![warn(
    missing_docs,
    rust_2018_idioms,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::missing_fields_in_debug
)]
#![forbid(unsafe_code)]

pub mod account;
pub mod classify;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod keys;
pub mod params;

pub use account::Account;
pub use classify::{classify, classify_with, Variant};
pub use crypto::{KeyCrypto, NeoCrypto};
pub use error::{CryptoError, Error, Precursor, Representation, Result};
pub use keys::{PrivateKey, PublicKey, ScriptHash};
pub use params::Params;

// Re-export rand_core so callers seed `PrivateKey::random` with matching trait versions
pub use p256::elliptic_curve::rand_core;
