//! Error types for the cr3 keystream generator.

use std::fmt;

/// Errors produced by the cr3 library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cr3Error {
    /// Key is not exactly 16 characters long (holds the observed length).
    InvalidKeyLength(usize),
    /// Key contains a character that is not a hexadecimal digit.
    MalformedKey {
        /// Zero-based character position of the offending character.
        position: usize,
        /// The offending character.
        found: char,
    },
    /// A shift register reached zero after warm-up.
    DegenerateKey,
    /// The program was invoked under a name that selects no output mode.
    UnknownInvocation(String),
}

impl fmt::Display for Cr3Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cr3Error::InvalidKeyLength(len) => {
                write!(f, "Key must be exactly 16 hex digits, got {} characters", len)
            }
            Cr3Error::MalformedKey { position, found } => {
                write!(
                    f,
                    "Key character {:?} at position {} is not a hex digit",
                    found, position
                )
            }
            Cr3Error::DegenerateKey => {
                write!(
                    f,
                    "the key values MUST not be 0. Please run again with a different key value."
                )
            }
            Cr3Error::UnknownInvocation(name) => {
                write!(f, "Unknown invocation '{}': please use cr3h, cr3l or cr3n", name)
            }
        }
    }
}

impl std::error::Error for Cr3Error {}
