//! cr3: deterministic dual-LFSR keystream generator.
//!
//! A 16-hex-digit key is split into a warm-up count and two 32-bit seeds.
//! Two shift registers with different taps are warmed up, then run in
//! lockstep: each output symbol takes sixteen bits from each register, XORs
//! the resulting words and reduces the result to a digit, letter or hex digit.
//! The output is meant as a one-time keystream for manual (Vigenère-style)
//! encryption.
//!
//! # Architecture
//!
//! ```text
//! KeyMaterial ──derive──▶ DerivedParameters { precount, seed_a, seed_b }
//!                                   │
//!                   LfsrA(seed_a)   │   LfsrB(seed_b)
//!                         └── warm_up(precount) ──┘
//!                                   │
//!                Keystream: (A₁₆ ⊕ B₁₆) mod |alphabet| ──▶ format
//! ```
//!
//! # Examples
//!
//! ```
//! use cr3::{format, KeyMaterial, Keystream, OutputMode};
//!
//! let key = KeyMaterial::parse("0000001100000030").unwrap();
//! let mut ks = Keystream::new(&key).unwrap();
//! let text = format::format_blocks(&mut ks, OutputMode::Digit, 3);
//! assert_eq!(
//!     text,
//!     "34071 13986 48742 63295 41317 \n\
//!      85250 04428 42196 93633 92673 \n\
//!      76031 21683 15046 53786 65616 \n"
//! );
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod format;
pub mod key;
pub mod keystream;
pub mod lfsr;
pub mod mode;
pub mod utils;
pub mod warmup;

pub use error::Cr3Error;
pub use key::{DerivedParameters, KeyMaterial};
pub use keystream::Keystream;
pub use mode::OutputMode;
