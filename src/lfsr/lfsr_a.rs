//! LfsrA: 32-bit Fibonacci LFSR with taps (32, 7, 5, 2, 1).
//!
//! The feedback bit is the XOR of register bits 31, 6, 4, 1 and 0. Each step
//! shifts the register right by one and inserts the feedback at bit 31. The
//! output bit is the low bit of the new register, i.e. bit 1 of the old one.

use std::fmt;

use super::shift_register::ShiftRegister;
use crate::utils::bits::bit;

/// Position at which the feedback bit re-enters the register.
const FEEDBACK_POS: u32 = 31;

/// Register bits XOR-combined into the feedback bit.
pub const TAPS_A: [u32; 5] = [31, 6, 4, 1, 0];

/// First keystream generator: a full-width 32-bit LFSR.
#[derive(Clone, PartialEq, Eq)]
pub struct LfsrA {
    register: u32,
}

impl LfsrA {
    /// Creates a generator whose register is loaded with `seed`.
    ///
    /// A zero seed is accepted here; it is rejected after warm-up.
    pub fn new(seed: u32) -> Self {
        LfsrA { register: seed }
    }
}

impl ShiftRegister for LfsrA {
    fn step(&mut self) -> u8 {
        let r = self.register;
        let feedback = TAPS_A.iter().fold(0, |acc, &pos| acc ^ bit(r, pos));
        self.register = (feedback << FEEDBACK_POS) | (r >> 1);
        (self.register & 1) as u8
    }

    fn state(&self) -> u32 {
        self.register
    }
}

impl fmt::Debug for LfsrA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LfsrA(<redacted>)")
    }
}

impl Drop for LfsrA {
    /// Clears the register on drop.
    fn drop(&mut self) {
        self.register = 0;
    }
}
