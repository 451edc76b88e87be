//! Key parsing and parameter derivation.
//!
//! A key is exactly 16 hexadecimal digits. The first eight give the warm-up
//! `precount`; the last eight, read through two fixed permutations, give the
//! seeds of the two shift registers.

use std::fmt;
use std::str::FromStr;

use crate::error::Cr3Error;
use crate::utils::converter;

/// Number of hex digits in a key.
pub const KEY_LEN: usize = 16;

/// Key positions read, in order, to build the precount.
pub const PRECOUNT_POSITIONS: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

/// Key positions read, in order, to build the seed of [`LfsrA`](crate::lfsr::LfsrA).
pub const SEED_A_PERMUTATION: [usize; 8] = [12, 14, 10, 11, 8, 13, 9, 15];

/// Key positions read, in order, to build the seed of [`LfsrB`](crate::lfsr::LfsrB).
///
/// Positions 14 and 15 each appear twice and 9 and 10 are never read. Existing
/// keystreams depend on this exact table.
pub const SEED_B_PERMUTATION: [usize; 8] = [11, 14, 8, 15, 13, 12, 15, 14];

/// A validated 16-hex-digit key.
///
/// The `Debug` output never shows the key digits.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    digits: [u8; KEY_LEN],
}

impl KeyMaterial {
    /// Parses and validates a key.
    ///
    /// # Parameters
    /// - `key`: Exactly 16 hex digits, either case, without a `0x` prefix.
    ///
    /// # Errors
    /// - [`Cr3Error::InvalidKeyLength`] if `key` is not 16 characters long.
    /// - [`Cr3Error::MalformedKey`] for the first character that is not a hex digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use cr3::KeyMaterial;
    ///
    /// assert!(KeyMaterial::parse("0011223380a0f0ed").is_ok());
    /// assert!(KeyMaterial::parse("0x11223380a0f0ed").is_err());
    /// ```
    pub fn parse(key: &str) -> Result<Self, Cr3Error> {
        let len = key.chars().count();
        if len != KEY_LEN {
            return Err(Cr3Error::InvalidKeyLength(len));
        }
        let mut digits = [0u8; KEY_LEN];
        for (position, (slot, found)) in digits.iter_mut().zip(key.chars()).enumerate() {
            if !found.is_ascii_hexdigit() {
                return Err(Cr3Error::MalformedKey { position, found });
            }
            *slot = found as u8;
        }
        Ok(KeyMaterial { digits })
    }

    /// Returns the ASCII digits read at `positions`, in table order.
    fn select(&self, positions: [usize; 8]) -> [u8; 8] {
        positions.map(|p| self.digits[p])
    }
}

impl FromStr for KeyMaterial {
    type Err = Cr3Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyMaterial::parse(s)
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyMaterial(<redacted>)")
    }
}

impl Drop for KeyMaterial {
    fn drop(&mut self) {
        self.digits = [0u8; KEY_LEN];
    }
}

/// Warm-up count and register seeds derived from a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedParameters {
    /// Extra warm-up steps applied to both registers.
    pub precount: u32,
    /// Initial register value of [`LfsrA`](crate::lfsr::LfsrA).
    pub seed_a: u32,
    /// Initial register value of [`LfsrB`](crate::lfsr::LfsrB).
    pub seed_b: u32,
}

impl DerivedParameters {
    /// Derives the precount and both seeds from a validated key.
    ///
    /// # Examples
    ///
    /// ```
    /// use cr3::{DerivedParameters, KeyMaterial};
    ///
    /// let key = KeyMaterial::parse("0000001100000030").unwrap();
    /// let params = DerivedParameters::derive(&key);
    /// assert_eq!(params.precount, 0x11);
    /// assert_eq!(params.seed_a, 0x0300_0000);
    /// assert_eq!(params.seed_b, 0x0300_0003);
    /// ```
    pub fn derive(key: &KeyMaterial) -> Self {
        DerivedParameters {
            precount: fold_hex(&key.select(PRECOUNT_POSITIONS)),
            seed_a: fold_hex(&key.select(SEED_A_PERMUTATION)),
            seed_b: fold_hex(&key.select(SEED_B_PERMUTATION)),
        }
    }
}

/// Folds eight digits that [`KeyMaterial::parse`] already validated.
fn fold_hex(digits: &[u8; 8]) -> u32 {
    converter::hex_to_u32(digits).unwrap_or_default()
}
