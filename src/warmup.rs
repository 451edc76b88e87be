//! Warm-up scheduler.
//!
//! Before any symbol is produced both registers are advanced a key-dependent
//! number of steps and their output is discarded. The fixed offsets keep the
//! two streams apart even when the precount is zero.

use log::debug;

use crate::error::Cr3Error;
use crate::lfsr::ShiftRegister;

/// Steps added to the precount when warming up [`LfsrA`](crate::lfsr::LfsrA).
pub const WARMUP_OFFSET_A: u64 = 109;

/// Steps added to the precount when warming up [`LfsrB`](crate::lfsr::LfsrB).
pub const WARMUP_OFFSET_B: u64 = 416;

/// Advances both registers past their warm-up and checks neither is zero.
///
/// `a` (the [`LfsrA`](crate::lfsr::LfsrA) of a keystream) is stepped
/// `precount + 109` times, then `b` is stepped `precount + 416` times.
/// Counts are 64-bit so the largest precount does not wrap.
///
/// # Errors
/// Returns [`Cr3Error::DegenerateKey`] if either register is zero afterward.
/// The registers are left warmed up either way.
pub fn warm_up<A, B>(a: &mut A, b: &mut B, precount: u32) -> Result<(), Cr3Error>
where
    A: ShiftRegister,
    B: ShiftRegister,
{
    a.advance(u64::from(precount) + WARMUP_OFFSET_A);
    b.advance(u64::from(precount) + WARMUP_OFFSET_B);

    if a.is_zero() || b.is_zero() {
        debug!(
            "shift register is zero after warm-up (a: {}, b: {})",
            if a.is_zero() { "zero" } else { "ok" },
            if b.is_zero() { "zero" } else { "ok" }
        );
        return Err(Cr3Error::DegenerateKey);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lfsr::{LfsrA, LfsrB};

    /// Register that only counts the steps it is asked to take.
    #[derive(Default)]
    struct StepCounter {
        steps: u64,
    }

    impl ShiftRegister for StepCounter {
        fn step(&mut self) -> u8 {
            self.steps += 1;
            0
        }

        fn state(&self) -> u32 {
            1
        }

        fn advance(&mut self, steps: u64) {
            self.steps += steps;
        }
    }

    #[test]
    fn test_step_counts_do_not_wrap() {
        for precount in [0, 0x7FFF_FFFF, 0x8000_0000, 0xDEAD_BEEF, u32::MAX] {
            let mut a = StepCounter::default();
            let mut b = StepCounter::default();
            warm_up(&mut a, &mut b, precount).unwrap();
            assert_eq!(a.steps, u64::from(precount) + 109, "precount {:#x}", precount);
            assert_eq!(b.steps, u64::from(precount) + 416, "precount {:#x}", precount);
        }
    }

    // About 4.3 billion steps: only practical in release builds.
    #[test]
    #[cfg_attr(debug_assertions, ignore)]
    fn test_warm_up_precount_above_i32_max() {
        let mut a = LfsrA::new(0x1234_5678);
        let mut b = LfsrB::new(0x00AB_CDEF);
        warm_up(&mut a, &mut b, 0x8000_0000).unwrap();
        assert_eq!(a.state(), 0xB390_8E31);
        assert_eq!(b.state(), 0x0048_CA63);
    }

    #[test]
    fn test_warm_up_reference_key() {
        // precount 0x11, seeds from key 0000001100000030
        let mut a = LfsrA::new(0x0300_0000);
        let mut b = LfsrB::new(0x0300_0003);
        warm_up(&mut a, &mut b, 0x11).unwrap();
        assert_eq!(a.state(), 0x50C0_00CC);
        assert_eq!(b.state(), 0x0093_DC38);
    }

    #[test]
    fn test_warm_up_step_counts() {
        let mut a = LfsrA::new(0x1357_9BDF);
        let mut b = LfsrB::new(0x0246_8ACE);
        let mut expected_a = a.clone();
        let mut expected_b = b.clone();
        expected_a.advance(5 + 109);
        expected_b.advance(5 + 416);

        warm_up(&mut a, &mut b, 5).unwrap();
        assert_eq!(a, expected_a);
        assert_eq!(b, expected_b);
    }

    #[test]
    fn test_zero_seed_a_is_degenerate() {
        let mut a = LfsrA::new(0);
        let mut b = LfsrB::new(1);
        assert_eq!(warm_up(&mut a, &mut b, 0), Err(Cr3Error::DegenerateKey));
    }

    #[test]
    fn test_zero_seed_b_is_degenerate() {
        let mut a = LfsrA::new(1);
        let mut b = LfsrB::new(0);
        assert_eq!(warm_up(&mut a, &mut b, 3), Err(Cr3Error::DegenerateKey));
    }

    #[test]
    fn test_smallest_seeds_survive() {
        let mut a = LfsrA::new(1);
        let mut b = LfsrB::new(1);
        assert!(warm_up(&mut a, &mut b, 0).is_ok());
        assert!(!a.is_zero());
        assert!(!b.is_zero());
    }
}
