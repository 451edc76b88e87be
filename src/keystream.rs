//! Keystream: dual-LFSR combiner.
//!
//! Owns one [`LfsrA`] and one [`LfsrB`]. Every output value consumes sixteen
//! bits from A, then sixteen bits from B, packs each MSB first and XORs the
//! two 16-bit words.

use log::debug;

use crate::error::Cr3Error;
use crate::key::{DerivedParameters, KeyMaterial};
use crate::lfsr::{LfsrA, LfsrB, ShiftRegister};
use crate::mode::OutputMode;
use crate::warmup;

/// Deterministic keystream generator built from a 16-hex-digit key.
///
/// # Examples
///
/// ```
/// use cr3::{KeyMaterial, Keystream, OutputMode};
///
/// let key = KeyMaterial::parse("0000001100000030").unwrap();
/// let mut ks = Keystream::new(&key).unwrap();
/// let first: String = ks.symbols(OutputMode::Digit).take(5).collect();
/// assert_eq!(first, "34071");
/// ```
#[derive(Debug, Clone)]
pub struct Keystream {
    a: LfsrA,
    b: LfsrB,
}

impl Keystream {
    /// Derives parameters from `key`, seeds both registers and warms them up.
    ///
    /// # Errors
    /// Returns [`Cr3Error::DegenerateKey`] if a register is zero after warm-up.
    pub fn new(key: &KeyMaterial) -> Result<Self, Cr3Error> {
        Self::from_parameters(DerivedParameters::derive(key))
    }

    /// Seeds both registers from already derived parameters and warms them up.
    ///
    /// # Errors
    /// Returns [`Cr3Error::DegenerateKey`] if a register is zero after warm-up.
    pub fn from_parameters(params: DerivedParameters) -> Result<Self, Cr3Error> {
        let mut a = LfsrA::new(params.seed_a);
        let mut b = LfsrB::new(params.seed_b);
        warmup::warm_up(&mut a, &mut b, params.precount)?;
        debug!("keystream ready");
        Ok(Keystream { a, b })
    }

    /// Returns the next combined 16-bit value.
    pub fn next_value(&mut self) -> u16 {
        let num_a = self.a.next_u16();
        let num_b = self.b.next_u16();
        num_a ^ num_b
    }

    /// Returns the next symbol in the alphabet of `mode`.
    pub fn next_symbol(&mut self, mode: OutputMode) -> char {
        mode.symbol(self.next_value())
    }

    /// Returns an endless iterator of symbols in the alphabet of `mode`.
    pub fn symbols(&mut self, mode: OutputMode) -> Symbols<'_> {
        Symbols { ks: self, mode }
    }

    /// Current contents of the two registers, `(a, b)`.
    pub fn states(&self) -> (u32, u32) {
        (self.a.state(), self.b.state())
    }
}

/// Iterator returned by [`Keystream::symbols`].
#[derive(Debug)]
pub struct Symbols<'a> {
    ks: &'a mut Keystream,
    mode: OutputMode,
}

impl Iterator for Symbols<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        Some(self.ks.next_symbol(self.mode))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for Symbols<'_> {}
