//! Bit extraction and packing helpers shared by the shift registers and
//! the combiner.

/// Returns bit `pos` of `value` (bit 0 is the least significant) as 0 or 1.
///
/// # Parameters
/// - `value`: The 32-bit word to read.
/// - `pos`: Bit position (0..32).
#[inline]
pub(crate) fn bit(value: u32, pos: u32) -> u32 {
    (value >> pos) & 1
}

/// Appends one bit below the bits already accumulated in `acc`.
///
/// Repeated application packs a bit sequence big-endian: the first bit
/// pushed ends up as the most significant.
#[inline]
pub(crate) fn push_bit(acc: u16, bit: u8) -> u16 {
    (acc << 1) | u16::from(bit & 1)
}

/// Packs a sequence of 16 bits into a `u16`, first bit most significant.
///
/// # Parameters
/// - `bits`: Iterator yielding bit values (only the lowest bit of each is used).
///   Items beyond the sixteenth are ignored.
///
/// # Returns
/// The packed 16-bit value. Fewer than 16 bits leave the value right-aligned.
pub fn pack_msb_first<I>(bits: I) -> u16
where
    I: IntoIterator<Item = u8>,
{
    bits.into_iter().take(16).fold(0u16, push_bit)
}
