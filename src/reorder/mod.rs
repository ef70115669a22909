//! Per-field byte reordering.
//!
//! Rearranges the bytes inside every field of a buffered line according to
//! a permutation, in place. This is how little-endian or otherwise scrambled
//! fixed-width records are straightened out before rendering.

use crate::buffer::Buffer;
use crate::field;

/// Rearranges every `order.len()`-byte field in `buffer` in place.
///
/// `order[i]` names the input position whose byte lands at output position
/// `i`. Each field is packed into a big-endian word first, so the rewrite
/// never reads a byte its own pass already overwrote. Orders of one byte or
/// fewer change nothing.
///
/// A partial field at the end of the buffer packs with its missing positions
/// zero-filled; output positions are then written left to right until one
/// would source a missing byte, and the buffer is truncated to what was
/// written. A partial tail can therefore shrink or even vanish.
///
/// # Example
///
/// ```
/// use dumprs::{Buffer, reorder_fields};
///
/// let mut line = Buffer::with_capacity(4)?;
/// line.extend_from_slice(&[0x80, 0x81, 0x82]);
///
/// reorder_fields(&mut line, &[2, 1, 0]);
/// assert_eq!(line.as_slice(), &[0x82, 0x81, 0x80]);
/// # Ok::<(), dumprs::DumpError>(())
/// ```
pub fn reorder_fields(buffer: &mut Buffer, order: &[usize]) {
    let width = order.len();
    if width <= 1 {
        return;
    }

    let len = buffer.len();
    let mut keep = len;
    let data = buffer.as_mut_slice();

    let mut start = 0;
    while start < len {
        let avail = (len - start).min(width);
        let packed = field::pack_field(&data[start..start + avail], width);

        let mut written = 0;
        for (out, &src) in order.iter().enumerate().take(avail) {
            if src >= avail {
                break;
            }
            data[start + out] = field::extract_byte(packed, width, src);
            written += 1;
        }

        if written < width {
            keep = start + written;
            break;
        }
        start += width;
    }

    buffer.truncate(keep);
}
