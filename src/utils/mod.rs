//! Low-level bit and hex conversion helpers.

pub mod bits;
pub mod converter;
