//! Recognize which textual key format a string is.

use core::fmt;

use crate::encoding::base58check_decode_raw;
use crate::keys::{
    PrivateKey, PublicKey, ENCODED_PUBLIC_KEY_LEN, PRIVATE_KEY_LEN, SCRIPT_HASH_LEN,
    UNENCODED_PUBLIC_KEY_LEN,
};
use crate::params::Params;

/// Character length of an address.
pub const ADDRESS_LEN: usize = 34;
/// Character length of a WIF string.
pub const WIF_LEN: usize = 52;
/// Character length of a NEP-2 encrypted key.
pub const NEP2_LEN: usize = 58;

/// NEP-2 payload: `0x01 0x42 0xe0`, 4-byte address hash, 32 encrypted bytes.
const NEP2_PREFIX: [u8; 3] = [0x01, 0x42, 0xe0];
const NEP2_PAYLOAD_LEN: usize = NEP2_PREFIX.len() + 4 + 32;

/// The format of a construction input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// 64 hex characters encoding a valid scalar.
    PrivateKey,
    /// 66 hex characters, prefix `02` or `03`.
    PublicKeyEncoded,
    /// 130 hex characters, prefix `04`.
    PublicKeyUnencoded,
    /// 34-character base58check address.
    Address,
    /// 52-character wallet import format.
    WalletImportFormat,
    /// 58-character NEP-2 encrypted key.
    EncryptedKey,
    /// None of the above.
    Invalid,
}

impl Variant {
    /// Human readable name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PrivateKey => "private key",
            Self::PublicKeyEncoded => "public key (encoded)",
            Self::PublicKeyUnencoded => "public key (unencoded)",
            Self::Address => "address",
            Self::WalletImportFormat => "WIF",
            Self::EncryptedKey => "NEP-2 encrypted key",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify `text` with the default NEO parameters.
pub fn classify(text: &str) -> Variant {
    classify_with(text, Params::default())
}

/// Classify `text`, checking version bytes against `params`.
///
/// Anything reported as a key variant is guaranteed to decode: scalars are in
/// range, points are on the curve and checksums match.
pub fn classify_with(text: &str, params: Params) -> Variant {
    if is_private_key(text) {
        Variant::PrivateKey
    } else if is_public_key(text, false) {
        Variant::PublicKeyUnencoded
    } else if is_public_key(text, true) {
        Variant::PublicKeyEncoded
    } else if is_address(text, params) {
        Variant::Address
    } else if is_wif(text, params) {
        Variant::WalletImportFormat
    } else if is_nep2(text) {
        Variant::EncryptedKey
    } else {
        Variant::Invalid
    }
}

fn is_hex_of_len(text: &str, bytes: usize) -> bool {
    text.len() == bytes * 2 && text.bytes().all(|b| b.is_ascii_hexdigit())
}

fn is_private_key(text: &str) -> bool {
    is_hex_of_len(text, PRIVATE_KEY_LEN) && PrivateKey::from_hex(text).is_ok()
}

fn is_public_key(text: &str, encoded: bool) -> bool {
    let prefix_ok = if encoded {
        is_hex_of_len(text, ENCODED_PUBLIC_KEY_LEN)
            && (text.starts_with("02") || text.starts_with("03"))
    } else {
        is_hex_of_len(text, UNENCODED_PUBLIC_KEY_LEN) && text.starts_with("04")
    };
    prefix_ok && PublicKey::from_hex(text).is_ok()
}

fn is_address(text: &str, params: Params) -> bool {
    text.len() == ADDRESS_LEN
        && base58check_decode_raw(text).is_ok_and(|data| {
            data.len() == 1 + SCRIPT_HASH_LEN && data[0] == params.address_version()
        })
}

fn is_wif(text: &str, params: Params) -> bool {
    text.len() == WIF_LEN && PrivateKey::from_wif(text, params).is_ok()
}

fn is_nep2(text: &str) -> bool {
    text.len() == NEP2_LEN
        && base58check_decode_raw(text)
            .is_ok_and(|data| data.len() == NEP2_PAYLOAD_LEN && data.starts_with(&NEP2_PREFIX))
}
