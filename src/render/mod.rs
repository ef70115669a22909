//! Line rendering.
//!
//! Turns one buffered line into text: an optional address prefix, then one
//! rendered field per `field_width` bytes with delimiters between fields and
//! a row delimiter at the end. [`OutputKind::Raw`] bypasses all of that and
//! copies the bytes through untouched.

use std::io::{self, Write};

use crate::buffer::Buffer;
use crate::config::{DumpConfig, OutputKind};
use crate::error::DumpError;
use crate::field;

/// Writes `buffer` to `out` as one formatted line.
///
/// The configuration's field width drives the grouping; a trailing field
/// with fewer bytes than the width renders from whatever bytes are present.
/// Hex and ASCII output render exactly the bytes held, while the decimal
/// kinds pack missing trailing positions as zero. The address prefix is the
/// buffer's base address as eight lowercase hex digits.
///
/// # Example
///
/// ```
/// use dumprs::{Buffer, DumpConfig, write_line};
///
/// let mut line = Buffer::with_capacity(4)?;
/// line.set_base(0x10);
/// line.extend_from_slice(&[0x47, 0x48, 0x49]);
///
/// let config = DumpConfig::default().with_show_address(true);
/// let mut out = Vec::new();
/// write_line(&mut out, &line, &config)?;
///
/// assert_eq!(out, b"00000010: 47 48 49\n");
/// # Ok::<(), dumprs::DumpError>(())
/// ```
pub fn write_line<W: Write>(
    out: &mut W,
    buffer: &Buffer,
    config: &DumpConfig,
) -> Result<(), DumpError> {
    let data = buffer.as_slice();

    if config.output() == OutputKind::Raw {
        return out.write_all(data).map_err(DumpError::Write);
    }

    if config.show_address() {
        write!(out, "{:08x}: ", buffer.base()).map_err(DumpError::Write)?;
    }

    let width = config.field_width().max(1);
    for (index, group) in data.chunks(width).enumerate() {
        if index > 0 {
            out.write_all(config.col_delimiter().as_bytes())
                .map_err(DumpError::Write)?;
        }
        write_field(out, group, width, config.output()).map_err(DumpError::Write)?;
    }

    out.write_all(config.row_delimiter().as_bytes())
        .map_err(DumpError::Write)
}

fn write_field<W: Write>(out: &mut W, group: &[u8], width: usize, kind: OutputKind) -> io::Result<()> {
    match kind {
        OutputKind::Hex => {
            for &byte in group {
                write!(out, "{:02x}", byte)?;
            }
        }
        OutputKind::Decimal => {
            let packed = field::pack_field(group, width);
            write!(out, "{}", field::sign_extend(packed, width))?;
        }
        OutputKind::UnsignedDecimal => {
            write!(out, "{}", field::pack_field(group, width))?;
        }
        OutputKind::Ascii => {
            for &byte in group {
                let shown = if byte.is_ascii_graphic() || byte == b' ' {
                    byte as char
                } else {
                    '.'
                };
                write!(out, "{}", shown)?;
            }
        }
        // Raw lines never reach the field loop.
        OutputKind::Raw => {}
    }
    Ok(())
}
