use core::fmt;

/// A 32-byte digest, the node value used by [`Sha256Hasher`]
///
/// Displays as lowercase hex, and (with the `serde` feature) serializes as a hex string
///
/// ```rust
/// # use batch_smt::*;
/// let hash = Hash256::new([0xab; 32]);
/// assert_eq!(hash.to_string(), "ab".repeat(32));
/// assert_eq!(Hash256::from_hex(&hash.to_hex()).unwrap(), hash);
/// ```
///
/// [`Sha256Hasher`]: crate::Sha256Hasher
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Hash256(#[cfg_attr(feature = "serde", serde(with = "hex::serde"))] [u8; 32]);

impl Hash256 {
    /// The all-zero digest, used as the empty leaf by [`Sha256Hasher`]
    ///
    /// [`Sha256Hasher`]: crate::Sha256Hasher
    pub const ZERO: Self = Self([0; 32]);

    /// Wrap 32 bytes
    #[inline]
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The underlying bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert this digest to a hex string
    #[inline]
    #[must_use]
    pub fn to_hex(self) -> String {
        hex::encode(self.0)
    }

    /// Parse a digest from exactly 64 hex characters
    #[inline]
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0; 32];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Whether every byte of this digest is zero
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Generate a digest from random bytes
    #[cfg(feature = "rand")]
    #[inline]
    pub fn random<R: rand::RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0; 32];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }
}

impl From<[u8; 32]> for Hash256 {
    #[inline]
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Hash256 {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }

        f.write_str(&self.to_hex())
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({self:#x})")
    }
}

#[cfg(any(test, feature = "proptest"))]
pub mod proptest {
    use super::Hash256;
    use ::proptest::{arbitrary::StrategyFor, prelude::*, strategy::Map};

    impl Arbitrary for Hash256 {
        type Strategy = Map<StrategyFor<[u8; 32]>, fn([u8; 32]) -> Self>;
        type Parameters = ();

        fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
            any::<[u8; 32]>().prop_map(Hash256)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{MerkleHasher, Sha256Hasher};

    use super::*;

    #[test]
    fn formatting() {
        let mut bytes = [0; 32];
        bytes[31] = 1;
        let hash = Hash256::new(bytes);

        let hex = format!("{}1", "0".repeat(63));

        assert_eq!(hash.to_string(), hex);
        assert_eq!(format!("{hash:#x}"), format!("0x{hex}"));
        assert_eq!(format!("{hash:?}"), format!("Hash256(0x{hex})"));
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(Hash256::from_hex("abcd").is_err());
        assert!(Hash256::from_hex(&"zz".repeat(32)).is_err());
        assert_eq!(Hash256::from_hex(&"00".repeat(32)).unwrap(), Hash256::ZERO);
    }

    #[test]
    fn only_all_zero_bytes_are_zero() {
        let mut bytes = [0; 32];
        assert!(Hash256::new(bytes).is_zero());
        assert!(Hash256::default().is_zero());

        bytes[17] = 1;
        assert!(!Hash256::new(bytes).is_zero());
        assert!(!Sha256Hasher.hash(Hash256::ZERO, Hash256::ZERO).is_zero());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_hex_string() {
        let hash = Hash256::new([0x11; 32]);
        let json = serde_json::to_string(&hash).unwrap();

        assert_eq!(json, format!("\"{}\"", "11".repeat(32)));
        assert_eq!(serde_json::from_str::<Hash256>(&json).unwrap(), hash);
    }
}
