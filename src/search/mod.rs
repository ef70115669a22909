//! Byte-pattern synchronization.
//!
//! A [`SearchPattern`] is a big-endian bit pattern up to 64 bits wide.
//! [`synchronize`] scans a [`Source`] one byte at a time through a rolling
//! window until the pattern appears, then seeds the line buffer with the
//! matched bytes so the following read continues right after the match.
//! Frame markers in raw captures are the typical use.

use std::io::Read;

use log::{debug, trace, warn};

use crate::buffer::Buffer;
use crate::error::DumpError;
use crate::field;
use crate::source::Source;

/// A big-endian bit pattern to synchronize on.
///
/// Widths that are not a whole number of bytes are padded up to the next
/// byte boundary, shifting the value toward the high bits; matching is
/// byte-at-a-time, so a 4-bit pattern `0x1` actually matches the byte
/// `0x10`. A warning is logged when that happens.
///
/// # Example
///
/// ```
/// use dumprs::SearchPattern;
///
/// let pattern = SearchPattern::from_hex("6c6c")?;
/// assert_eq!(pattern.bits(), 16);
/// assert_eq!(pattern.value(), 0x6c6c);
/// assert_eq!(pattern.byte_width(), 2);
/// # Ok::<(), dumprs::DumpError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchPattern {
    bits: u32,
    value: u64,
}

impl SearchPattern {
    /// Creates a pattern from an explicit bit width and value.
    ///
    /// # Errors
    ///
    /// Returns [`DumpError::InvalidConfig`] if `bits` is zero or greater
    /// than 64, or if `value` does not fit in `bits` bits.
    pub fn new(bits: u32, value: u64) -> Result<Self, DumpError> {
        if bits == 0 {
            return Err(DumpError::InvalidConfig {
                message: "search pattern must be non-empty",
            });
        }
        if bits > 64 {
            return Err(DumpError::InvalidConfig {
                message: "search pattern is limited to 64 bits",
            });
        }
        if bits < 64 && value >> bits != 0 {
            return Err(DumpError::InvalidConfig {
                message: "search pattern value is wider than its bit width",
            });
        }

        let padded = bits.next_multiple_of(8);
        let value = if padded == bits {
            value
        } else {
            warn!(
                "search pattern width padded from {} to {} bits",
                bits, padded
            );
            value << (padded - bits)
        };

        Ok(SearchPattern {
            bits: padded,
            value,
        })
    }

    /// Parses a pattern from a hex string such as `"ff04"`.
    ///
    /// Every digit counts toward the width, so leading zeros widen the
    /// pattern: `"0123"` is a 16-bit pattern.
    ///
    /// # Errors
    ///
    /// Returns [`DumpError::InvalidConfig`] if the string is empty, longer
    /// than 16 digits, or contains a non-hex character.
    pub fn from_hex(hex: &str) -> Result<Self, DumpError> {
        if hex.is_empty() {
            return Err(DumpError::InvalidConfig {
                message: "search pattern must be non-empty",
            });
        }
        if hex.len() > 16 {
            return Err(DumpError::InvalidConfig {
                message: "search pattern is limited to 16 hex digits",
            });
        }
        let value = u64::from_str_radix(hex, 16).map_err(|_| DumpError::InvalidConfig {
            message: "search pattern must be hexadecimal",
        })?;
        Self::new(4 * hex.len() as u32, value)
    }

    /// Pattern width in bits, always a multiple of 8 after padding.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Pattern value, aligned to the padded width.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Pattern width in whole bytes.
    pub fn byte_width(&self) -> usize {
        (self.bits / 8) as usize
    }

    /// Window mask covering the pattern width.
    pub(crate) fn mask(&self) -> u64 {
        if self.bits == 64 {
            u64::MAX
        } else {
            (1u64 << self.bits) - 1
        }
    }
}

/// Scans `source` forward until `pattern` appears, or gives up at end of
/// stream or at the `end` offset.
///
/// On a match the buffer's base address is set to the offset of the first
/// matched byte and the matched bytes are deposited into the buffer, so the
/// caller's next read appends right after them. Returns `Ok(false)` when the
/// pattern was not found; the stream is then positioned wherever scanning
/// stopped.
///
/// Bytes at or past `end` are never read.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use dumprs::{Buffer, SearchPattern, Source, synchronize};
///
/// let mut source = Source::new(Cursor::new(b"hello"));
/// let pattern = SearchPattern::from_hex("6c6c")?;
/// let mut line = Buffer::with_capacity(16)?;
///
/// assert!(synchronize(&mut source, &pattern, &mut line, None)?);
/// assert_eq!(line.base(), 2);
/// assert_eq!(line.as_slice(), b"ll");
/// assert_eq!(source.position(), 4);
/// # Ok::<(), dumprs::DumpError>(())
/// ```
pub fn synchronize<R: Read>(
    source: &mut Source<R>,
    pattern: &SearchPattern,
    buffer: &mut Buffer,
    end: Option<u64>,
) -> Result<bool, DumpError> {
    let width = pattern.byte_width();
    let mask = pattern.mask();
    let target = pattern.value();

    let mut window = 0u64;
    let mut primed = 0usize;

    loop {
        if let Some(end) = end {
            if source.position() >= end {
                debug!("synchronization stopped at the end bound {:#x}", end);
                return Ok(false);
            }
        }

        let byte = match source.read_one()? {
            Some(byte) => byte,
            None => {
                debug!("synchronization reached end of stream");
                return Ok(false);
            }
        };

        window = (window << 8) | u64::from(byte);
        if primed < width {
            primed += 1;
        }

        if primed == width && (window & mask) == target {
            let base = source.position() - width as u64;
            trace!("pattern {:#x} matched at offset {:#x}", target, base);

            buffer.set_base(base);
            let mut matched = [0u8; 8];
            for (index, slot) in matched[..width].iter_mut().enumerate() {
                *slot = field::extract_byte(window & mask, width, index);
            }
            buffer.extend_from_slice(&matched[..width]);
            return Ok(true);
        }
    }
}
