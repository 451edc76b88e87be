//! ShiftRegister trait for single-bit keystream generators.
//!
//! Defines the interface shared by the two LFSR variants. Implementations
//! own their register and advance it one bit per [`step`](ShiftRegister::step);
//! everything else is derived from that transition.

use crate::utils::bits;

/// A shift register that yields one output bit per step.
///
/// Implementations must be pure state machines: a step touches only the
/// register it owns, and two instances seeded identically produce identical
/// bit sequences.
pub trait ShiftRegister {
    /// Advances the register once and returns the output bit (0 or 1).
    fn step(&mut self) -> u8;

    /// Returns the current register contents.
    fn state(&self) -> u32;

    /// Returns `true` if the register is zero, a fixed point of the feedback.
    fn is_zero(&self) -> bool {
        self.state() == 0
    }

    /// Advances the register `steps` times, discarding every output bit.
    fn advance(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Draws sixteen bits and packs them with the first bit most significant.
    fn next_u16(&mut self) -> u16 {
        bits::pack_msb_first((0..16).map(|_| self.step()))
    }
}
