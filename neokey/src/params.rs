//! Protocol parameters shared by classification and derivation.

/// Version bytes that distinguish NEO encodings.
///
/// The default matches NEO 2.x mainnet and testnet, which share both values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    address_version: u8,
    wif_version: u8,
}

impl Params {
    /// NEO legacy address version (addresses start with `A`).
    pub const NEO_ADDRESS_VERSION: u8 = 0x17;
    /// WIF version byte.
    pub const NEO_WIF_VERSION: u8 = 0x80;

    /// Create parameters with custom version bytes.
    #[inline]
    #[must_use]
    pub const fn new(address_version: u8, wif_version: u8) -> Self {
        Self {
            address_version,
            wif_version,
        }
    }

    /// Leading byte of every base58check address payload.
    #[inline]
    #[must_use]
    pub const fn address_version(self) -> u8 {
        self.address_version
    }

    /// Leading byte of every WIF payload.
    #[inline]
    #[must_use]
    pub const fn wif_version(self) -> u8 {
        self.wif_version
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new(Self::NEO_ADDRESS_VERSION, Self::NEO_WIF_VERSION)
    }
}
