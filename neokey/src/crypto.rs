//! Edge functions of the derivation graph.
//!
//! [`KeyCrypto`] is the seam between [`Account`](crate::Account) and the
//! curve, hash and base58 code. Each method is one edge; none of them caches.

use zeroize::Zeroizing;

use crate::error::CryptoError;
use crate::keys::{PrivateKey, PublicKey, ScriptHash, PRIVATE_KEY_LEN};
use crate::params::Params;

/// Pure functions that convert one key representation into a neighbouring one.
///
/// Every method is deterministic. Given input that the classifier accepted, or
/// that another method produced, none of them fails.
pub trait KeyCrypto {
    /// Version bytes used for classification and encoding.
    fn params(&self) -> Params;

    /// WIF to raw private key.
    fn wif_to_private_key(&self, wif: &str) -> Result<Zeroizing<[u8; PRIVATE_KEY_LEN]>, CryptoError>;

    /// Raw private key to WIF.
    fn private_key_to_wif(&self, key: &[u8; PRIVATE_KEY_LEN]) -> Result<Zeroizing<String>, CryptoError>;

    /// Raw private key to encoded public key.
    fn private_key_to_public_key(&self, key: &[u8; PRIVATE_KEY_LEN]) -> Result<Vec<u8>, CryptoError>;

    /// Re-serialize a public key as encoded (`true`) or unencoded (`false`).
    fn reencode_public_key(&self, public_key: &[u8], to_encoded: bool) -> Result<Vec<u8>, CryptoError>;

    /// Public key (either form) to script hash.
    fn public_key_to_script_hash(&self, public_key: &[u8]) -> Result<ScriptHash, CryptoError>;

    /// Script hash to address.
    fn script_hash_to_address(&self, script_hash: &ScriptHash) -> Result<String, CryptoError>;

    /// Address to script hash.
    fn address_to_script_hash(&self, address: &str) -> Result<ScriptHash, CryptoError>;
}

/// Production [`KeyCrypto`] over P-256, SHA-256, RIPEMD-160 and base58check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeoCrypto {
    params: Params,
}

impl NeoCrypto {
    /// Create with custom version bytes.
    #[inline]
    pub const fn new(params: Params) -> Self {
        Self { params }
    }
}

impl KeyCrypto for NeoCrypto {
    fn params(&self) -> Params {
        self.params
    }

    fn wif_to_private_key(&self, wif: &str) -> Result<Zeroizing<[u8; PRIVATE_KEY_LEN]>, CryptoError> {
        Ok(PrivateKey::from_wif(wif, self.params)?.to_bytes())
    }

    fn private_key_to_wif(&self, key: &[u8; PRIVATE_KEY_LEN]) -> Result<Zeroizing<String>, CryptoError> {
        Ok(PrivateKey::from_bytes(key)?.to_wif(self.params))
    }

    fn private_key_to_public_key(&self, key: &[u8; PRIVATE_KEY_LEN]) -> Result<Vec<u8>, CryptoError> {
        let public_key = PrivateKey::from_bytes(key)?.public_key();
        Ok(public_key.to_encoded_bytes().to_vec())
    }

    fn reencode_public_key(&self, public_key: &[u8], to_encoded: bool) -> Result<Vec<u8>, CryptoError> {
        let public_key = PublicKey::from_sec1_bytes(public_key)?;
        Ok(if to_encoded {
            public_key.to_encoded_bytes().to_vec()
        } else {
            public_key.to_unencoded_bytes().to_vec()
        })
    }

    fn public_key_to_script_hash(&self, public_key: &[u8]) -> Result<ScriptHash, CryptoError> {
        Ok(PublicKey::from_sec1_bytes(public_key)?.script_hash())
    }

    fn script_hash_to_address(&self, script_hash: &ScriptHash) -> Result<String, CryptoError> {
        Ok(script_hash.to_address(self.params))
    }

    fn address_to_script_hash(&self, address: &str) -> Result<ScriptHash, CryptoError> {
        ScriptHash::from_address(address, self.params)
    }
}
