//! Base58check encoding for addresses, WIF and NEP-2 strings.

use crate::error::CryptoError;
use crate::hash::double_sha256;

/// Length of the base58check checksum suffix.
pub const CHECKSUM_LEN: usize = 4;

/// Encode `version || payload` with a 4-byte double SHA-256 checksum.
pub fn base58check_encode(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
    data.push(version);
    data.extend_from_slice(payload);

    let checksum = double_sha256(&data);
    data.extend_from_slice(&checksum[..CHECKSUM_LEN]);

    bs58::encode(data).into_string()
}

/// Decode a base58check string and verify its checksum.
///
/// Returns the whole checked payload, version byte included.
pub fn base58check_decode_raw(encoded: &str) -> Result<Vec<u8>, CryptoError> {
    let mut data = bs58::decode(encoded).into_vec()?;

    if data.len() <= CHECKSUM_LEN {
        return Err(CryptoError::InvalidLength {
            expected: CHECKSUM_LEN + 1,
            actual: data.len(),
        });
    }

    let payload_len = data.len() - CHECKSUM_LEN;
    let computed = double_sha256(&data[..payload_len]);
    if data[payload_len..] != computed[..CHECKSUM_LEN] {
        return Err(CryptoError::InvalidChecksum);
    }

    data.truncate(payload_len);
    Ok(data)
}

/// Decode a base58check string into its version byte and payload.
pub fn base58check_decode(encoded: &str) -> Result<(u8, Vec<u8>), CryptoError> {
    let mut data = base58check_decode_raw(encoded)?;
    let version = data.remove(0);
    Ok((version, data))
}
