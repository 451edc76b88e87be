//! Block formatter for printed keystreams.
//!
//! A block is one line of 25 symbols split into five groups of five. Every
//! group, the last one included, is followed by a single space, and every
//! line ends with a newline.

use std::io::{self, Write};

use crate::keystream::Keystream;
use crate::mode::OutputMode;

/// Symbols printed per line (one block).
pub const SYMBOLS_PER_LINE: usize = 25;

/// Symbols per space-separated group.
pub const SYMBOLS_PER_GROUP: usize = 5;

/// Blocks printed when the caller does not ask for a count.
pub const DEFAULT_BLOCKS: u32 = 20;

/// Writes `blocks` lines of keystream to `out`.
///
/// # Parameters
/// - `ks`: The keystream to draw from. It advances by `blocks * 25` symbols.
/// - `mode`: Output alphabet.
/// - `blocks`: Number of lines. Zero writes nothing.
/// - `out`: Destination writer.
///
/// # Errors
/// Propagates any error from `out`.
pub fn write_blocks<W: Write>(
    ks: &mut Keystream,
    mode: OutputMode,
    blocks: u32,
    out: &mut W,
) -> io::Result<()> {
    let mut line = String::with_capacity(SYMBOLS_PER_LINE * 2);
    for _ in 0..blocks {
        line.clear();
        push_block(ks, mode, &mut line);
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}

/// Appends one formatted line, newline included, to `buf`.
fn push_block(ks: &mut Keystream, mode: OutputMode, buf: &mut String) {
    for (i, c) in ks.symbols(mode).take(SYMBOLS_PER_LINE).enumerate() {
        buf.push(c);
        if (i + 1) % SYMBOLS_PER_GROUP == 0 {
            buf.push(' ');
        }
    }
    buf.push('\n');
}

/// Formats `blocks` lines of keystream into a `String`.
///
/// # Examples
///
/// ```
/// use cr3::{format, KeyMaterial, Keystream, OutputMode};
///
/// let key = KeyMaterial::parse("0000001100000030").unwrap();
/// let mut ks = Keystream::new(&key).unwrap();
/// let text = format::format_blocks(&mut ks, OutputMode::Digit, 1);
/// assert_eq!(text, "34071 13986 48742 63295 41317 \n");
/// ```
pub fn format_blocks(ks: &mut Keystream, mode: OutputMode, blocks: u32) -> String {
    let mut text = String::with_capacity(blocks as usize * SYMBOLS_PER_LINE * 2);
    for _ in 0..blocks {
        push_block(ks, mode, &mut text);
    }
    text
}
