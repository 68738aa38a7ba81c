//! Error types for account construction and key derivation.

use core::fmt;

use thiserror::Error;

/// Convenient alias for results returned by this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// A readable representation of an account's key pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Wallet import format string.
    WalletImportFormat,
    /// Raw 32-byte private key.
    PrivateKey,
    /// Public key, encoded or unencoded.
    PublicKey,
    /// 20-byte verification script hash.
    ScriptHash,
    /// Base58check address.
    Address,
}

impl Representation {
    /// Human readable name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WalletImportFormat => "WIF",
            Self::PrivateKey => "private key",
            Self::PublicKey => "public key",
            Self::ScriptHash => "script hash",
            Self::Address => "address",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What an account would need to hold before a representation becomes reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precursor {
    /// A private key (or its WIF encoding).
    PrivateKey,
    /// Either an address or something that yields a public key.
    AddressOrPublicKey,
}

impl fmt::Display for Precursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrivateKey => f.write_str("private key"),
            Self::AddressOrPublicKey => f.write_str("address or public key"),
        }
    }
}

/// Failures surfaced by the low-level key functions.
///
/// Classified input never triggers these; they only appear when a
/// [`KeyCrypto`](crate::KeyCrypto) function is handed malformed data directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CryptoError {
    /// Input is not valid hexadecimal.
    #[error("invalid hex encoding")]
    InvalidHex,
    /// Input is not valid base58.
    #[error("invalid base58 encoding")]
    InvalidBase58,
    /// Base58check checksum mismatch.
    #[error("checksum mismatch")]
    InvalidChecksum,
    /// Decoded data has the wrong length.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        actual: usize,
    },
    /// Leading version byte does not match the configured one.
    #[error("unexpected version byte {actual:#04x}, expected {expected:#04x}")]
    InvalidVersion {
        /// Configured version byte.
        expected: u8,
        /// Version byte found in the data.
        actual: u8,
    },
    /// Bytes are not a valid P-256 scalar.
    #[error("invalid private key")]
    InvalidPrivateKey,
    /// Bytes are not a valid P-256 point.
    #[error("invalid public key")]
    InvalidPublicKey,
}

impl From<hex::FromHexError> for CryptoError {
    fn from(_: hex::FromHexError) -> Self {
        Self::InvalidHex
    }
}

impl From<bs58::decode::Error> for CryptoError {
    fn from(_: bs58::decode::Error) -> Self {
        Self::InvalidBase58
    }
}

/// Errors returned by [`Account`](crate::Account).
#[derive(Debug, Error)]
pub enum Error {
    /// Construction input matched no recognized format.
    #[error("invalid input: {input}")]
    InvalidInput {
        /// The rejected input.
        input: String,
    },
    /// Construction input is a recognized format this crate does not accept (NEP-2).
    #[error("unsupported input, decrypt the NEP-2 key first: {input}")]
    UnsupportedInput {
        /// The rejected input.
        input: String,
    },
    /// No derivation path leads from the populated slots to the requested one.
    #[error("cannot derive {requested}: no {missing} to derive it from")]
    MissingPrecursor {
        /// Representation the caller asked for.
        requested: Representation,
        /// What the account would have needed.
        missing: Precursor,
    },
    /// A key function rejected its input.
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),
}

impl Error {
    pub(crate) const fn missing(requested: Representation, missing: Precursor) -> Self {
        Self::MissingPrecursor { requested, missing }
    }

    /// True for [`Error::MissingPrecursor`].
    pub const fn is_missing_precursor(&self) -> bool {
        matches!(self, Self::MissingPrecursor { .. })
    }

    /// True when construction rejected the input (invalid or unsupported).
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::UnsupportedInput { .. })
    }
}
