//! A single NEO account and its lazily derived representations.
//!
//! ```text
//! WIF <=> private key => public key => script hash <=> address
//! ```
//!
//! Construction fills the slot matching the input (plus the private key for
//! WIF input). Every getter walks the graph from whatever is filled, caches
//! what it computes, and never overwrites a filled slot.

use core::fmt;
use core::str::FromStr;

use parking_lot::Mutex;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::classify::{classify_with, Variant};
use crate::crypto::{KeyCrypto, NeoCrypto};
use crate::error::{CryptoError, Error, Precursor, Representation, Result};
use crate::keys::{PrivateKey, ScriptHash, PRIVATE_KEY_LEN};
use crate::params::Params;

#[derive(Default)]
struct Slots {
    wif: Option<Zeroizing<String>>,
    private_key: Option<Zeroizing<[u8; PRIVATE_KEY_LEN]>>,
    /// Always the encoded form.
    public_key: Option<Vec<u8>>,
    script_hash: Option<ScriptHash>,
    address: Option<String>,
}

impl Slots {
    fn cached(&self) -> Vec<Representation> {
        [
            (self.wif.is_some(), Representation::WalletImportFormat),
            (self.private_key.is_some(), Representation::PrivateKey),
            (self.public_key.is_some(), Representation::PublicKey),
            (self.script_hash.is_some(), Representation::ScriptHash),
            (self.address.is_some(), Representation::Address),
        ]
        .into_iter()
        .filter_map(|(set, repr)| set.then_some(repr))
        .collect()
    }
}

/// One key pair, seen through whichever representations are reachable.
///
/// All getters take `&self`. The slots sit behind a single lock held for the
/// whole derive-and-store walk, so concurrent readers never derive the same
/// slot twice.
pub struct Account<C = NeoCrypto> {
    crypto: C,
    slots: Mutex<Slots>,
}

impl Account<NeoCrypto> {
    /// Build an account from any supported textual form.
    ///
    /// Accepts a hex private key, a WIF string, an encoded or unencoded hex
    /// public key, or an address. NEP-2 input fails with
    /// [`Error::UnsupportedInput`]; anything else with [`Error::InvalidInput`].
    pub fn new(input: &str) -> Result<Self> {
        Self::with_crypto(input, NeoCrypto::default())
    }

    /// Build an account using custom version bytes.
    pub fn with_params(input: &str, params: Params) -> Result<Self> {
        Self::with_crypto(input, NeoCrypto::new(params))
    }

    /// Build an account holding `key`.
    pub fn from_private_key(key: &PrivateKey, params: Params) -> Self {
        let slots = Slots {
            private_key: Some(key.to_bytes()),
            ..Slots::default()
        };
        Self {
            crypto: NeoCrypto::new(params),
            slots: Mutex::new(slots),
        }
    }

    /// Generate an account from a fresh random private key.
    pub fn generate(params: Params) -> Self {
        let account = Self::from_private_key(&PrivateKey::random(&mut rand_core::OsRng), params);
        debug!("generated random account");
        account
    }
}

impl<C: KeyCrypto> Account<C> {
    /// Build an account, routing every derivation through `crypto`.
    pub fn with_crypto(input: &str, crypto: C) -> Result<Self> {
        let variant = classify_with(input, crypto.params());
        debug!(%variant, "classified account input");

        let mut slots = Slots::default();
        match variant {
            Variant::PrivateKey => {
                let mut key = Zeroizing::new([0u8; PRIVATE_KEY_LEN]);
                hex::decode_to_slice(input, &mut *key).map_err(CryptoError::from)?;
                slots.private_key = Some(key);
            }
            Variant::PublicKeyEncoded => {
                slots.public_key = Some(hex::decode(input).map_err(CryptoError::from)?);
            }
            Variant::PublicKeyUnencoded => {
                let unencoded = hex::decode(input).map_err(CryptoError::from)?;
                slots.public_key = Some(crypto.reencode_public_key(&unencoded, true)?);
            }
            Variant::Address => {
                slots.address = Some(input.to_owned());
            }
            Variant::WalletImportFormat => {
                slots.private_key = Some(crypto.wif_to_private_key(input)?);
                slots.wif = Some(Zeroizing::new(input.to_owned()));
            }
            Variant::EncryptedKey => {
                return Err(Error::UnsupportedInput {
                    input: input.to_owned(),
                });
            }
            Variant::Invalid => {
                return Err(Error::InvalidInput {
                    input: input.to_owned(),
                });
            }
        }

        Ok(Self {
            crypto,
            slots: Mutex::new(slots),
        })
    }

    /// The WIF string, derived from the private key if needed.
    pub fn wallet_import_format(&self) -> Result<Zeroizing<String>> {
        let mut slots = self.slots.lock();
        self.wif_slot(&mut slots)
    }

    /// The raw private key. Never derivable from any other slot.
    pub fn private_key(&self) -> Result<Zeroizing<[u8; PRIVATE_KEY_LEN]>> {
        self.slots
            .lock()
            .private_key
            .clone()
            .ok_or(Error::missing(Representation::PrivateKey, Precursor::PrivateKey))
    }

    /// The public key, encoded (33 bytes) or unencoded (65 bytes).
    ///
    /// Only the encoded form is cached; the unencoded view is recomputed on
    /// every call.
    pub fn public_key(&self, encoded: bool) -> Result<Vec<u8>> {
        let public_key = {
            let mut slots = self.slots.lock();
            self.public_key_slot(&mut slots)?
        };
        if encoded {
            Ok(public_key)
        } else {
            Ok(self.crypto.reencode_public_key(&public_key, false)?)
        }
    }

    /// [`Account::public_key`] as lowercase hex.
    pub fn public_key_hex(&self, encoded: bool) -> Result<String> {
        self.public_key(encoded).map(hex::encode)
    }

    /// The script hash, decoded from the address when one is held, otherwise
    /// hashed from the public key.
    pub fn script_hash(&self) -> Result<ScriptHash> {
        let mut slots = self.slots.lock();
        self.script_hash_slot(&mut slots)
    }

    /// The address, encoded from the script hash if needed.
    pub fn address(&self) -> Result<String> {
        let mut slots = self.slots.lock();
        self.address_slot(&mut slots)
    }

    /// Representations currently held, in graph order.
    pub fn cached(&self) -> Vec<Representation> {
        self.slots.lock().cached()
    }

    /// Whether a private key is held (directly or via WIF).
    pub fn has_private_key(&self) -> bool {
        self.slots.lock().private_key.is_some()
    }

    fn wif_slot(&self, slots: &mut Slots) -> Result<Zeroizing<String>> {
        if let Some(wif) = &slots.wif {
            return Ok(wif.clone());
        }
        let key = slots.private_key.as_ref().ok_or(Error::missing(
            Representation::WalletImportFormat,
            Precursor::PrivateKey,
        ))?;
        let wif = self.crypto.private_key_to_wif(key)?;
        trace!(slot = %Representation::WalletImportFormat, "derived and cached");
        Ok(slots.wif.insert(wif).clone())
    }

    fn public_key_slot(&self, slots: &mut Slots) -> Result<Vec<u8>> {
        if let Some(public_key) = &slots.public_key {
            return Ok(public_key.clone());
        }
        let key = slots
            .private_key
            .as_ref()
            .ok_or(Error::missing(Representation::PublicKey, Precursor::PrivateKey))?;
        let public_key = self.crypto.private_key_to_public_key(key)?;
        trace!(slot = %Representation::PublicKey, "derived and cached");
        Ok(slots.public_key.insert(public_key).clone())
    }

    fn script_hash_slot(&self, slots: &mut Slots) -> Result<ScriptHash> {
        if let Some(script_hash) = slots.script_hash {
            return Ok(script_hash);
        }
        // address first: a base58 decode is cheaper than a curve operation
        let script_hash = if let Some(address) = &slots.address {
            self.crypto.address_to_script_hash(address)?
        } else if slots.public_key.is_some() || slots.private_key.is_some() {
            let public_key = self.public_key_slot(slots)?;
            self.crypto.public_key_to_script_hash(&public_key)?
        } else {
            return Err(Error::missing(
                Representation::ScriptHash,
                Precursor::AddressOrPublicKey,
            ));
        };
        trace!(slot = %Representation::ScriptHash, "derived and cached");
        Ok(*slots.script_hash.insert(script_hash))
    }

    fn address_slot(&self, slots: &mut Slots) -> Result<String> {
        if let Some(address) = &slots.address {
            return Ok(address.clone());
        }
        let script_hash = self.script_hash_slot(slots)?;
        let address = self.crypto.script_hash_to_address(&script_hash)?;
        trace!(slot = %Representation::Address, "derived and cached");
        Ok(slots.address.insert(address).clone())
    }
}

impl FromStr for Account<NeoCrypto> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl<C> fmt::Debug for Account<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self.slots.lock();
        f.debug_struct("Account")
            .field("private_key", &slots.private_key.as_ref().map(|_| "[REDACTED]"))
            .field("public_key", &slots.public_key.as_ref().map(hex::encode))
            .field("script_hash", &slots.script_hash)
            .field("address", &slots.address)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    const PRIVATE_KEY: &str = "7d128a6d096f0c14c3a25a2b0c41cf79661bfcb4a8cc95aaaea28bde4d732344";
    const WIF: &str = "L1QqQJnpBwbsPGAuutuzPTac8piqvbR1HRjrY5qHup48TBCBFe4g";
    const ENCODED: &str = "02028a99826edc0c97d18e22b6932373d908d323aa7f92656a77ec26e8861699ef";
    const UNENCODED: &str = "04028a99826edc0c97d18e22b6932373d908d323aa7f92656a77ec26e8861699ef\
                             35787439bef71cafeebeb4dfd8954d13470d3c383d59f491d98b079c5edbcc2e";
    const SCRIPT_HASH: &str = "cef0c0fdcfe7838eff6ff104f9cdec2922297537";
    const ADDRESS: &str = "ALq7AWrhAueN6mJNqk6FHJjnsEoPRytLdW";
    const NEP2: &str = "6PYLmjBYJ4wQTCEfqvnznGJwZeW9pfUcV5m5oreHxqryUgqKpTRAFt9L8Y";

    #[derive(Default)]
    struct Calls {
        wif_to_private_key: AtomicUsize,
        private_key_to_wif: AtomicUsize,
        private_key_to_public_key: AtomicUsize,
        reencode_public_key: AtomicUsize,
        public_key_to_script_hash: AtomicUsize,
        script_hash_to_address: AtomicUsize,
        address_to_script_hash: AtomicUsize,
    }

    impl Calls {
        fn get(counter: &AtomicUsize) -> usize {
            counter.load(Ordering::SeqCst)
        }

        fn total(&self) -> usize {
            [
                &self.wif_to_private_key,
                &self.private_key_to_wif,
                &self.private_key_to_public_key,
                &self.reencode_public_key,
                &self.public_key_to_script_hash,
                &self.script_hash_to_address,
                &self.address_to_script_hash,
            ]
            .into_iter()
            .map(Self::get)
            .sum()
        }
    }

    /// Counts every edge traversal, then delegates to [`NeoCrypto`].
    #[derive(Default)]
    struct CountingCrypto {
        inner: NeoCrypto,
        calls: Arc<Calls>,
    }

    fn bump(counter: &AtomicUsize) {
        counter.fetch_add(1, Ordering::SeqCst);
    }

    impl KeyCrypto for CountingCrypto {
        fn params(&self) -> Params {
            self.inner.params()
        }

        fn wif_to_private_key(
            &self,
            wif: &str,
        ) -> core::result::Result<Zeroizing<[u8; 32]>, CryptoError> {
            bump(&self.calls.wif_to_private_key);
            self.inner.wif_to_private_key(wif)
        }

        fn private_key_to_wif(
            &self,
            key: &[u8; 32],
        ) -> core::result::Result<Zeroizing<String>, CryptoError> {
            bump(&self.calls.private_key_to_wif);
            self.inner.private_key_to_wif(key)
        }

        fn private_key_to_public_key(
            &self,
            key: &[u8; 32],
        ) -> core::result::Result<Vec<u8>, CryptoError> {
            bump(&self.calls.private_key_to_public_key);
            self.inner.private_key_to_public_key(key)
        }

        fn reencode_public_key(
            &self,
            public_key: &[u8],
            to_encoded: bool,
        ) -> core::result::Result<Vec<u8>, CryptoError> {
            bump(&self.calls.reencode_public_key);
            self.inner.reencode_public_key(public_key, to_encoded)
        }

        fn public_key_to_script_hash(
            &self,
            public_key: &[u8],
        ) -> core::result::Result<ScriptHash, CryptoError> {
            bump(&self.calls.public_key_to_script_hash);
            self.inner.public_key_to_script_hash(public_key)
        }

        fn script_hash_to_address(
            &self,
            script_hash: &ScriptHash,
        ) -> core::result::Result<String, CryptoError> {
            bump(&self.calls.script_hash_to_address);
            self.inner.script_hash_to_address(script_hash)
        }

        fn address_to_script_hash(
            &self,
            address: &str,
        ) -> core::result::Result<ScriptHash, CryptoError> {
            bump(&self.calls.address_to_script_hash);
            self.inner.address_to_script_hash(address)
        }
    }

    fn counting(input: &str) -> (Account<CountingCrypto>, Arc<Calls>) {
        let crypto = CountingCrypto::default();
        let calls = Arc::clone(&crypto.calls);
        (Account::with_crypto(input, crypto).unwrap(), calls)
    }

    fn assert_missing(result: Result<impl fmt::Debug>, requested: Representation, missing: Precursor) {
        match result {
            Err(Error::MissingPrecursor {
                requested: r,
                missing: m,
            }) => {
                assert_eq!(r, requested);
                assert_eq!(m, missing);
            }
            other => panic!("expected MissingPrecursor, got {other:?}"),
        }
    }

    #[test]
    fn test_golden_chain_from_private_key() {
        let account = Account::new(PRIVATE_KEY).unwrap();
        assert_eq!(hex::encode(*account.private_key().unwrap()), PRIVATE_KEY);
        assert_eq!(account.wallet_import_format().unwrap().as_str(), WIF);
        assert_eq!(account.public_key_hex(true).unwrap(), ENCODED);
        assert_eq!(account.public_key_hex(false).unwrap(), UNENCODED);
        assert_eq!(account.script_hash().unwrap().to_string(), SCRIPT_HASH);
        assert_eq!(account.address().unwrap(), ADDRESS);
    }

    #[test]
    fn test_construction_fills_only_the_input_slot() {
        let cases = [
            (PRIVATE_KEY, vec![Representation::PrivateKey]),
            (
                WIF,
                vec![Representation::WalletImportFormat, Representation::PrivateKey],
            ),
            (ENCODED, vec![Representation::PublicKey]),
            (UNENCODED, vec![Representation::PublicKey]),
            (ADDRESS, vec![Representation::Address]),
        ];
        for (input, expected) in cases {
            let account = Account::new(input).unwrap();
            assert_eq!(account.cached(), expected, "input {input}");
        }
    }

    #[test]
    fn test_wif_and_private_key_accounts_agree() {
        let from_key = Account::new(PRIVATE_KEY).unwrap();
        let from_wif = Account::new(WIF).unwrap();

        assert_eq!(*from_key.private_key().unwrap(), *from_wif.private_key().unwrap());
        assert_eq!(from_key.public_key(true).unwrap(), from_wif.public_key(true).unwrap());
        assert_eq!(from_key.script_hash().unwrap(), from_wif.script_hash().unwrap());
        assert_eq!(from_key.address().unwrap(), from_wif.address().unwrap());
        assert_eq!(
            *from_key.wallet_import_format().unwrap(),
            *from_wif.wallet_import_format().unwrap()
        );
    }

    #[test]
    fn test_public_key_reaches_forward_only() {
        let account = Account::new(ENCODED).unwrap();
        assert_eq!(account.script_hash().unwrap().to_string(), SCRIPT_HASH);
        assert_eq!(account.address().unwrap(), ADDRESS);
        assert_missing(
            account.private_key(),
            Representation::PrivateKey,
            Precursor::PrivateKey,
        );
        assert_missing(
            account.wallet_import_format(),
            Representation::WalletImportFormat,
            Precursor::PrivateKey,
        );
        assert!(!account.has_private_key());
    }

    #[test]
    fn test_unencoded_input_is_cached_encoded() {
        let account = Account::new(UNENCODED).unwrap();
        assert_eq!(account.public_key_hex(true).unwrap(), ENCODED);
        assert_eq!(account.public_key_hex(false).unwrap(), UNENCODED);
        assert_eq!(account.address().unwrap(), ADDRESS);
    }

    #[test]
    fn test_uppercase_public_key_is_stored_as_bytes() {
        let account = Account::new(&ENCODED.to_uppercase()).unwrap();
        assert_eq!(account.public_key_hex(true).unwrap(), ENCODED);
    }

    #[test]
    fn test_address_reaches_script_hash_only() {
        let account = Account::new(ADDRESS).unwrap();
        assert_eq!(account.script_hash().unwrap().to_string(), SCRIPT_HASH);
        assert_eq!(account.address().unwrap(), ADDRESS);
        assert_missing(
            account.public_key(true),
            Representation::PublicKey,
            Precursor::PrivateKey,
        );
        assert_missing(
            account.public_key(false),
            Representation::PublicKey,
            Precursor::PrivateKey,
        );
        assert_missing(
            account.private_key(),
            Representation::PrivateKey,
            Precursor::PrivateKey,
        );
        assert_missing(
            account.wallet_import_format(),
            Representation::WalletImportFormat,
            Precursor::PrivateKey,
        );
        // failures leave the cache untouched
        assert_eq!(
            account.cached(),
            vec![Representation::ScriptHash, Representation::Address]
        );
    }

    #[test]
    fn test_encrypted_key_rejected_without_derivation() {
        let crypto = CountingCrypto::default();
        let calls = Arc::clone(&crypto.calls);
        let err = Account::with_crypto(NEP2, crypto).unwrap_err();
        assert!(matches!(err, Error::UnsupportedInput { ref input } if input == NEP2));
        assert_eq!(calls.total(), 0);
    }

    #[test]
    fn test_any_well_formed_encrypted_key_rejected() {
        // flag and compression bytes, address hash, ciphertext
        let mut payload = vec![0x42, 0xe0];
        payload.extend_from_slice(&[0xab; 4]);
        payload.extend((0u8..32).map(|i| i.wrapping_mul(7)));
        let nep2 = crate::encoding::base58check_encode(0x01, &payload);
        assert_eq!(nep2.len(), 58);
        assert_eq!(classify_with(&nep2, Params::default()), Variant::EncryptedKey);

        let crypto = CountingCrypto::default();
        let calls = Arc::clone(&crypto.calls);
        let err = Account::with_crypto(&nep2, crypto).unwrap_err();
        assert!(matches!(err, Error::UnsupportedInput { ref input } if *input == nep2));
        assert_eq!(calls.total(), 0);
    }

    #[test]
    fn test_invalid_input_rejected() {
        let zero_scalar = "0".repeat(64);
        for input in ["", "not a key", "0x1234", zero_scalar.as_str()] {
            match Account::new(input) {
                Err(Error::InvalidInput { input: got }) => assert_eq!(got, input),
                other => panic!("expected InvalidInput for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_each_slot_derived_at_most_once() {
        let (account, calls) = counting(PRIVATE_KEY);

        for _ in 0..3 {
            assert_eq!(account.wallet_import_format().unwrap().as_str(), WIF);
            assert_eq!(account.public_key_hex(true).unwrap(), ENCODED);
            assert_eq!(account.script_hash().unwrap().to_string(), SCRIPT_HASH);
            assert_eq!(account.address().unwrap(), ADDRESS);
        }

        assert_eq!(Calls::get(&calls.private_key_to_wif), 1);
        assert_eq!(Calls::get(&calls.private_key_to_public_key), 1);
        assert_eq!(Calls::get(&calls.public_key_to_script_hash), 1);
        assert_eq!(Calls::get(&calls.script_hash_to_address), 1);
        assert_eq!(Calls::get(&calls.address_to_script_hash), 0);
        assert_eq!(Calls::get(&calls.wif_to_private_key), 0);
    }

    #[test]
    fn test_wif_input_decoded_once_at_construction() {
        let (account, calls) = counting(WIF);
        assert_eq!(Calls::get(&calls.wif_to_private_key), 1);

        account.wallet_import_format().unwrap();
        account.private_key().unwrap();
        assert_eq!(Calls::get(&calls.wif_to_private_key), 1);
        assert_eq!(Calls::get(&calls.private_key_to_wif), 0);
    }

    #[test]
    fn test_address_seeded_script_hash_decodes_address() {
        let (account, calls) = counting(ADDRESS);
        account.script_hash().unwrap();
        account.script_hash().unwrap();
        account.address().unwrap();
        assert_eq!(Calls::get(&calls.address_to_script_hash), 1);
        assert_eq!(Calls::get(&calls.public_key_to_script_hash), 0);
        assert_eq!(Calls::get(&calls.script_hash_to_address), 0);
    }

    #[test]
    fn test_unencoded_view_recomputed_each_call() {
        let (account, calls) = counting(ENCODED);
        let first = account.public_key(false).unwrap();
        let second = account.public_key(false).unwrap();
        assert_eq!(first, second);
        assert_eq!(Calls::get(&calls.reencode_public_key), 2);
        assert_eq!(account.cached(), vec![Representation::PublicKey]);
    }

    #[test]
    fn test_concurrent_readers_share_one_derivation() {
        let (account, calls) = counting(PRIVATE_KEY);

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    assert_eq!(account.address().unwrap(), ADDRESS);
                    assert_eq!(account.script_hash().unwrap().to_string(), SCRIPT_HASH);
                });
            }
        });

        assert_eq!(Calls::get(&calls.private_key_to_public_key), 1);
        assert_eq!(Calls::get(&calls.public_key_to_script_hash), 1);
        assert_eq!(Calls::get(&calls.script_hash_to_address), 1);
    }

    #[test]
    fn test_generate_yields_full_chain() {
        let account = Account::generate(Params::default());
        let wif = account.wallet_import_format().unwrap();
        let reimported = Account::new(&wif).unwrap();
        assert_eq!(account.address().unwrap(), reimported.address().unwrap());
        assert!(account.address().unwrap().starts_with('A'));
    }

    #[test]
    fn test_from_str() {
        let account: Account = ADDRESS.parse().unwrap();
        assert_eq!(account.address().unwrap(), ADDRESS);
    }

    #[test]
    fn test_custom_params() {
        let params = Params::new(0x35, Params::NEO_WIF_VERSION);
        let account = Account::with_params(PRIVATE_KEY, params).unwrap();
        let address = account.address().unwrap();
        assert_ne!(address, ADDRESS);
        assert_eq!(account.script_hash().unwrap().to_string(), SCRIPT_HASH);

        let watch_only = Account::with_params(&address, params).unwrap();
        assert_eq!(watch_only.script_hash().unwrap().to_string(), SCRIPT_HASH);
        assert!(Account::new(&address).is_err());
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let account = Account::new(WIF).unwrap();
        let debug = format!("{account:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains(PRIVATE_KEY));
        assert!(!debug.contains(WIF));
    }
}
