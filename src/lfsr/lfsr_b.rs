//! LfsrB: 24-bit Fibonacci LFSR with taps (24, 4, 3, 1, 0) in a 32-bit word.
//!
//! The feedback bit is the XOR of register bits 23, 3, 2 and 0 and re-enters
//! at bit 23. The register is never masked to 24 bits: anything seeded above
//! bit 23 shifts down and ORs into the feedback position until it drains.

use std::fmt;

use super::shift_register::ShiftRegister;
use crate::utils::bits::bit;

/// Position at which the feedback bit re-enters the register.
const FEEDBACK_POS: u32 = 23;

/// Register bits XOR-combined into the feedback bit.
pub const TAPS_B: [u32; 4] = [23, 3, 2, 0];

/// Second keystream generator.
#[derive(Clone, PartialEq, Eq)]
pub struct LfsrB {
    register: u32,
}

impl LfsrB {
    /// Creates a generator whose register is loaded with the full 32-bit `seed`.
    pub fn new(seed: u32) -> Self {
        LfsrB { register: seed }
    }
}

impl ShiftRegister for LfsrB {
    fn step(&mut self) -> u8 {
        let r = self.register;
        let feedback = TAPS_B.iter().fold(0, |acc, &pos| acc ^ bit(r, pos));
        self.register = (feedback << FEEDBACK_POS) | (r >> 1);
        (self.register & 1) as u8
    }

    fn state(&self) -> u32 {
        self.register
    }
}

impl fmt::Debug for LfsrB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LfsrB(<redacted>)")
    }
}

impl Drop for LfsrB {
    fn drop(&mut self) {
        self.register = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_is_old_bit_one() {
        let mut lfsr = LfsrB::new(0b10);
        assert_eq!(lfsr.step(), 1);
        assert_eq!(lfsr.state(), 0x0000_0001);

        let mut lfsr = LfsrB::new(0b01);
        assert_eq!(lfsr.step(), 0);
        assert_eq!(lfsr.state(), 0x0080_0000);
    }

    #[test]
    fn test_each_tap_contributes() {
        for &pos in TAPS_B.iter() {
            let mut lfsr = LfsrB::new(1 << pos);
            lfsr.step();
            assert_eq!(
                bit(lfsr.state(), FEEDBACK_POS),
                1,
                "tap at bit {} did not feed back",
                pos
            );
        }
    }

    #[test]
    fn test_upper_bits_are_not_masked() {
        // bit 24 shifts into bit 23 and ORs with feedback (bit 0 = 1)
        let mut lfsr = LfsrB::new(0xFF00_0001);
        lfsr.step();
        assert_eq!(lfsr.state(), 0x7F80_0000);
    }

    #[test]
    fn test_upper_bits_drain_downward() {
        let mut lfsr = LfsrB::new(0xFF00_0000);
        lfsr.advance(8);
        assert_eq!(lfsr.state(), 0x00FF_0000);
    }

    #[test]
    fn test_frozen_sequence_seed_12345678() {
        let mut lfsr = LfsrB::new(0x1234_5678);
        assert_eq!(lfsr.next_u16(), 0x3CD4);
        assert_eq!(lfsr.state(), 0x0047_1734);
    }

    #[test]
    fn test_zero_is_fixed_point() {
        let mut lfsr = LfsrB::new(0);
        lfsr.advance(100);
        assert!(lfsr.is_zero());
    }

    #[test]
    fn test_new_loads_full_word() {
        let lfsr = LfsrB::new(0xFFAB_CDEF);
        assert_eq!(lfsr.state(), 0xFFAB_CDEF);
    }

    #[test]
    fn test_debug_hides_register() {
        let shown = format!("{:?}", LfsrB::new(0x00AB_CDEF));
        assert!(!shown.to_lowercase().contains("abcdef"));
        assert!(!shown.contains(&0x00AB_CDEFu32.to_string()));
    }
}
