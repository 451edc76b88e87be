//! Linear-feedback shift register subsystem.
//!
//! Two fixed-tap generators share the [`ShiftRegister`] interface:
//! [`LfsrA`](lfsr_a::LfsrA), a full 32-bit register, and
//! [`LfsrB`](lfsr_b::LfsrB), a 24-bit register housed in a 32-bit word.

pub mod lfsr_a;
pub mod lfsr_b;
pub mod shift_register;

pub use lfsr_a::LfsrA;
pub use lfsr_b::LfsrB;
pub use shift_register::ShiftRegister;
