//! Output alphabets.
//!
//! The mode decides only how a combined 16-bit value is reduced to a symbol;
//! it never influences the shift registers.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::Cr3Error;

/// Alphabet of the emitted keystream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputMode {
    /// Decimal digits `0-9`.
    Digit,
    /// Upper-case letters `A-Z`.
    Letter,
    /// Lower-case hex digits `0-9a-f`.
    Hex,
}

impl OutputMode {
    /// All modes, in invocation-name order (`cr3n`, `cr3l`, `cr3h`).
    pub const ALL: [OutputMode; 3] = [OutputMode::Digit, OutputMode::Letter, OutputMode::Hex];

    /// Returns the size of the alphabet.
    pub fn modulus(self) -> u16 {
        match self {
            OutputMode::Digit => 10,
            OutputMode::Letter => 26,
            OutputMode::Hex => 16,
        }
    }

    /// Reduces a combined value modulo the alphabet size and maps it to a character.
    ///
    /// # Examples
    ///
    /// ```
    /// use cr3::OutputMode;
    ///
    /// assert_eq!(OutputMode::Digit.symbol(24183), '3');
    /// assert_eq!(OutputMode::Letter.symbol(26), 'A');
    /// assert_eq!(OutputMode::Hex.symbol(0xBEEF), 'f');
    /// ```
    pub fn symbol(self, value: u16) -> char {
        let d = (value % self.modulus()) as u8;
        match self {
            OutputMode::Digit => char::from(b'0' + d),
            OutputMode::Letter => char::from(b'A' + d),
            OutputMode::Hex => char::from(b"0123456789abcdef"[d as usize]),
        }
    }

    /// Returns `true` if `c` belongs to this mode's alphabet.
    pub fn contains(self, c: char) -> bool {
        match self {
            OutputMode::Digit => c.is_ascii_digit(),
            OutputMode::Letter => c.is_ascii_uppercase(),
            OutputMode::Hex => matches!(c, '0'..='9' | 'a'..='f'),
        }
    }

    /// Selects the mode from the name the program was invoked under.
    ///
    /// Only the file name is considered, so `/usr/local/bin/cr3n` and
    /// `cr3n.exe` both select [`OutputMode::Digit`].
    ///
    /// # Errors
    /// Returns [`Cr3Error::UnknownInvocation`] for any other name, including
    /// the generic `cr3`.
    pub fn from_invocation_name(argv0: &str) -> Result<Self, Cr3Error> {
        let path = Path::new(argv0);
        let name = match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("exe") => path.file_stem(),
            _ => path.file_name(),
        }
        .and_then(|n| n.to_str())
        .unwrap_or(argv0);

        match name {
            "cr3n" => Ok(OutputMode::Digit),
            "cr3l" => Ok(OutputMode::Letter),
            "cr3h" => Ok(OutputMode::Hex),
            _ => Err(Cr3Error::UnknownInvocation(name.to_string())),
        }
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "digit" | "n" => Ok(OutputMode::Digit),
            "letter" | "l" => Ok(OutputMode::Letter),
            "hex" | "h" => Ok(OutputMode::Hex),
            other => Err(format!(
                "unknown output mode '{}' (expected digit, letter or hex)",
                other
            )),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputMode::Digit => "digit",
            OutputMode::Letter => "letter",
            OutputMode::Hex => "hex",
        };
        f.write_str(name)
    }
}
