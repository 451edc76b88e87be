//! Hexadecimal character conversion utilities.
//!
//! Folds ASCII hex digits into unsigned integers with integer shift/OR,
//! big-endian: the first digit occupies the most significant nibble.

/// Converts one ASCII hex digit (either case) to its value.
///
/// # Parameters
/// - `c`: The ASCII byte to convert.
///
/// # Returns
/// `Some(0..=15)` for `0-9`, `a-f` and `A-F`; `None` otherwise.
pub fn hex_digit_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Converts up to eight hex digits into a `u32`, first digit most significant.
///
/// # Parameters
/// - `digits`: ASCII hex digits. Only the first eight are used.
///
/// # Returns
/// The parsed value, or `None` if any used digit is not hexadecimal.
pub fn hex_to_u32(digits: &[u8]) -> Option<u32> {
    digits
        .iter()
        .take(8)
        .try_fold(0u32, |acc, &c| Some((acc << 4) | u32::from(hex_digit_value(c)?)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_digit_value_ranges() {
        assert_eq!(hex_digit_value(b'0'), Some(0));
        assert_eq!(hex_digit_value(b'9'), Some(9));
        assert_eq!(hex_digit_value(b'a'), Some(10));
        assert_eq!(hex_digit_value(b'F'), Some(15));
        assert_eq!(hex_digit_value(b'g'), None);
        assert_eq!(hex_digit_value(b'x'), None);
        assert_eq!(hex_digit_value(b' '), None);
    }

    #[test]
    fn test_hex_to_u32_big_endian() {
        assert_eq!(hex_to_u32(b"00000011"), Some(0x11));
        assert_eq!(hex_to_u32(b"03000000"), Some(0x0300_0000));
        assert_eq!(hex_to_u32(b"DeadBeef"), Some(0xDEAD_BEEF));
        assert_eq!(hex_to_u32(b"ffffffff"), Some(u32::MAX));
    }

    #[test]
    fn test_hex_to_u32_short_and_empty() {
        assert_eq!(hex_to_u32(b"abc"), Some(0xABC));
        assert_eq!(hex_to_u32(b""), Some(0));
    }

    #[test]
    fn test_hex_to_u32_uses_first_eight() {
        assert_eq!(hex_to_u32(b"123456789"), Some(0x1234_5678));
    }

    #[test]
    fn test_hex_to_u32_rejects_non_hex() {
        assert_eq!(hex_to_u32(b"0000000g"), None);
        assert_eq!(hex_to_u32(b"0x000000"), None);
    }
}
