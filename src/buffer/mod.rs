//! Fixed-capacity line buffer.
//!
//! A [`Buffer`] accumulates the bytes of one output line together with the
//! stream address those bytes came from. The dump loop clears and refills
//! the same buffer for every line, so the backing allocation is made once
//! and reused.

use bytes::BytesMut;

use crate::error::DumpError;

/// A reusable byte accumulator with a fixed capacity and a base address.
///
/// The buffer never grows past the capacity it was created with; writes are
/// clipped instead. The base address records where in the source stream the
/// buffered bytes begin and is what the renderer prints as the line prefix.
///
/// # Example
///
/// ```
/// use dumprs::Buffer;
///
/// let mut buf = Buffer::with_capacity(16)?;
/// buf.set_base(0x40);
/// let appended = buf.extend_from_slice(b"abc");
///
/// assert_eq!(appended, 3);
/// assert_eq!(buf.len(), 3);
/// assert_eq!(buf.base(), 0x40);
///
/// buf.clear();
/// assert!(buf.is_empty());
/// assert_eq!(buf.base(), 0);
/// # Ok::<(), dumprs::DumpError>(())
/// ```
#[derive(Debug)]
pub struct Buffer {
    data: BytesMut,
    capacity: usize,
    base: u64,
}

impl Buffer {
    /// Creates a buffer able to hold `capacity` bytes.
    ///
    /// Returns [`DumpError::InvalidConfig`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, DumpError> {
        if capacity == 0 {
            return Err(DumpError::InvalidConfig {
                message: "buffer capacity must be non-zero",
            });
        }
        Ok(Buffer {
            data: BytesMut::with_capacity(capacity),
            capacity,
            base: 0,
        })
    }

    /// Total number of bytes the buffer can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of valid bytes currently held.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if no valid bytes are held.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Capacity not yet occupied by valid bytes.
    pub fn remaining(&self) -> usize {
        self.capacity - self.data.len()
    }

    /// Stream address of the first valid byte.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Records the stream address of the first valid byte.
    pub fn set_base(&mut self, base: u64) {
        self.base = base;
    }

    /// Drops all valid bytes and resets the base address to zero.
    ///
    /// The capacity and the backing allocation are untouched.
    pub fn clear(&mut self) {
        self.data.clear();
        self.base = 0;
    }

    /// Shortens the buffer to at most `len` valid bytes.
    ///
    /// Has no effect if the buffer already holds `len` bytes or fewer.
    pub fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
    }

    /// The valid bytes as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// The valid bytes as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Appends bytes from `src`, clipping at the capacity.
    ///
    /// Returns how many bytes were actually appended.
    pub fn extend_from_slice(&mut self, src: &[u8]) -> usize {
        let take = src.len().min(self.remaining());
        self.data.extend_from_slice(&src[..take]);
        take
    }

    /// Exposes up to `want` zeroed bytes past the valid region for a reader
    /// to fill. The caller must [`truncate`](Buffer::truncate) back to
    /// `len + filled` afterwards.
    pub(crate) fn grow_for_fill(&mut self, want: usize) -> &mut [u8] {
        let start = self.data.len();
        let take = want.min(self.capacity - start);
        self.data.resize(start + take, 0);
        &mut self.data[start..]
    }
}
