//! NEO key material on the P-256 curve.
//!
//! [`PrivateKey`] and [`PublicKey`] wrap the `p256` types; [`ScriptHash`] is the
//! 20-byte hash of the single-signature verification script that an address
//! encodes.

use core::fmt;
use core::str::FromStr;

use p256::elliptic_curve::rand_core::{CryptoRng, RngCore};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use zeroize::Zeroizing;

use crate::encoding::{base58check_decode, base58check_decode_raw, base58check_encode};
use crate::error::CryptoError;
use crate::hash::hash160;
use crate::params::Params;

/// Private key length in bytes.
pub const PRIVATE_KEY_LEN: usize = 32;
/// Encoded (compressed) public key length in bytes.
pub const ENCODED_PUBLIC_KEY_LEN: usize = 33;
/// Unencoded (uncompressed) public key length in bytes.
pub const UNENCODED_PUBLIC_KEY_LEN: usize = 65;
/// Script hash length in bytes.
pub const SCRIPT_HASH_LEN: usize = 20;

/// WIF payload: version, key, compression flag.
const WIF_PAYLOAD_LEN: usize = 1 + PRIVATE_KEY_LEN + 1;
const WIF_COMPRESSED_FLAG: u8 = 0x01;

/// `PUSHBYTES33`
const OP_PUSHBYTES_33: u8 = 0x21;
/// `CHECKSIG`
const OP_CHECKSIG: u8 = 0xac;

/// A P-256 private key.
///
/// The inner scalar zeroizes on drop.
#[derive(Clone)]
pub struct PrivateKey {
    inner: p256::SecretKey,
}

impl PrivateKey {
    /// Generate a new random private key.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self {
            inner: p256::SecretKey::random(rng),
        }
    }

    /// Create from a raw 32-byte scalar.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != PRIVATE_KEY_LEN {
            return Err(CryptoError::InvalidLength {
                expected: PRIVATE_KEY_LEN,
                actual: bytes.len(),
            });
        }
        let inner = p256::SecretKey::from_slice(bytes).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { inner })
    }

    /// Create from 64 hex characters.
    pub fn from_hex(hex_str: &str) -> Result<Self, CryptoError> {
        let bytes = Zeroizing::new(hex::decode(hex_str)?);
        Self::from_bytes(&bytes)
    }

    /// Serialize to the raw 32-byte scalar.
    pub fn to_bytes(&self) -> Zeroizing<[u8; PRIVATE_KEY_LEN]> {
        Zeroizing::new(self.inner.to_bytes().into())
    }

    /// Get the corresponding public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            inner: self.inner.public_key(),
        }
    }

    /// Import from WIF.
    pub fn from_wif(wif: &str, params: Params) -> Result<Self, CryptoError> {
        let data = Zeroizing::new(base58check_decode_raw(wif)?);

        if data.len() != WIF_PAYLOAD_LEN {
            return Err(CryptoError::InvalidLength {
                expected: WIF_PAYLOAD_LEN,
                actual: data.len(),
            });
        }
        if data[0] != params.wif_version() {
            return Err(CryptoError::InvalidVersion {
                expected: params.wif_version(),
                actual: data[0],
            });
        }
        // NEO only issues compressed-key WIFs
        if data[WIF_PAYLOAD_LEN - 1] != WIF_COMPRESSED_FLAG {
            return Err(CryptoError::InvalidPrivateKey);
        }

        Self::from_bytes(&data[1..=PRIVATE_KEY_LEN])
    }

    /// Export as WIF.
    pub fn to_wif(&self, params: Params) -> Zeroizing<String> {
        let mut payload = Zeroizing::new([0u8; PRIVATE_KEY_LEN + 1]);
        payload[..PRIVATE_KEY_LEN].copy_from_slice(&*self.to_bytes());
        payload[PRIVATE_KEY_LEN] = WIF_COMPRESSED_FLAG;
        Zeroizing::new(base58check_encode(params.wif_version(), &payload[..]))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

impl FromStr for PrivateKey {
    type Err = CryptoError;

    /// Parse from hex, or from WIF with the default parameters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == PRIVATE_KEY_LEN * 2 {
            return Self::from_hex(s);
        }
        Self::from_wif(s, Params::default())
    }
}

/// A P-256 public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    inner: p256::PublicKey,
}

impl PublicKey {
    /// Parse an encoded (`02`/`03`, 33 bytes) or unencoded (`04`, 65 bytes)
    /// SEC1 point. Other tags, including SEC1 compact points, are rejected.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let expected = match bytes.first() {
            Some(0x02 | 0x03) => ENCODED_PUBLIC_KEY_LEN,
            Some(0x04) => UNENCODED_PUBLIC_KEY_LEN,
            _ => return Err(CryptoError::InvalidPublicKey),
        };
        if bytes.len() != expected {
            return Err(CryptoError::InvalidLength {
                expected,
                actual: bytes.len(),
            });
        }
        let inner = p256::PublicKey::from_sec1_bytes(bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self { inner })
    }

    /// Parse a hex-encoded SEC1 point in either form.
    pub fn from_hex(hex_str: &str) -> Result<Self, CryptoError> {
        Self::from_sec1_bytes(&hex::decode(hex_str)?)
    }

    /// Serialize to the encoded form (prefix `02`/`03` plus X).
    pub fn to_encoded_bytes(&self) -> [u8; ENCODED_PUBLIC_KEY_LEN] {
        let point = self.inner.to_encoded_point(true);
        let mut result = [0u8; ENCODED_PUBLIC_KEY_LEN];
        result.copy_from_slice(point.as_bytes());
        result
    }

    /// Serialize to the unencoded form (prefix `04` plus X and Y).
    pub fn to_unencoded_bytes(&self) -> [u8; UNENCODED_PUBLIC_KEY_LEN] {
        let point = self.inner.to_encoded_point(false);
        let mut result = [0u8; UNENCODED_PUBLIC_KEY_LEN];
        result.copy_from_slice(point.as_bytes());
        result
    }

    /// Single-signature verification script: `PUSHBYTES33 <key> CHECKSIG`.
    pub fn verification_script(&self) -> [u8; ENCODED_PUBLIC_KEY_LEN + 2] {
        let mut script = [0u8; ENCODED_PUBLIC_KEY_LEN + 2];
        script[0] = OP_PUSHBYTES_33;
        script[1..=ENCODED_PUBLIC_KEY_LEN].copy_from_slice(&self.to_encoded_bytes());
        script[ENCODED_PUBLIC_KEY_LEN + 1] = OP_CHECKSIG;
        script
    }

    /// Hash of the verification script.
    pub fn script_hash(&self) -> ScriptHash {
        ScriptHash(hash160(&self.verification_script()))
    }
}

/// Hash160 of a verification script.
///
/// Bytes are kept in hash output order. `Display` prints them reversed, the
/// way NEO shows a `UInt160`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScriptHash([u8; SCRIPT_HASH_LEN]);

impl ScriptHash {
    /// Wrap raw hash bytes.
    #[inline]
    pub const fn new(bytes: [u8; SCRIPT_HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw hash bytes, in hash output order.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; SCRIPT_HASH_LEN] {
        &self.0
    }

    /// Encode as a base58check address.
    pub fn to_address(&self, params: Params) -> String {
        base58check_encode(params.address_version(), &self.0)
    }

    /// Decode a base58check address.
    pub fn from_address(address: &str, params: Params) -> Result<Self, CryptoError> {
        let (version, payload) = base58check_decode(address)?;
        if version != params.address_version() {
            return Err(CryptoError::InvalidVersion {
                expected: params.address_version(),
                actual: version,
            });
        }
        let bytes = <[u8; SCRIPT_HASH_LEN]>::try_from(payload.as_slice()).map_err(|_| {
            CryptoError::InvalidLength {
                expected: SCRIPT_HASH_LEN,
                actual: payload.len(),
            }
        })?;
        Ok(Self(bytes))
    }

    /// Big-endian hex, as displayed.
    pub fn to_hex(&self) -> String {
        let mut reversed = self.0;
        reversed.reverse();
        hex::encode(reversed)
    }
}

impl FromStr for ScriptHash {
    type Err = CryptoError;

    /// Parse big-endian hex, with or without a `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = [0u8; SCRIPT_HASH_LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        bytes.reverse();
        Ok(Self(bytes))
    }
}

impl fmt::Display for ScriptHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ScriptHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScriptHash({self})")
    }
}

impl AsRef<[u8]> for ScriptHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; SCRIPT_HASH_LEN]> for ScriptHash {
    fn from(bytes: [u8; SCRIPT_HASH_LEN]) -> Self {
        Self(bytes)
    }
}
