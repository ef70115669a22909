//! Positioned input stream.
//!
//! A [`Source`] wraps any [`Read`] implementor and tracks the stream offset
//! of the next byte. Reads deposit into a [`Buffer`] and stamp it with the
//! base address of the bytes it received, which is what ties dump lines back
//! to stream offsets.

use std::io::{ErrorKind, Read, Seek, SeekFrom};

use log::debug;

use crate::buffer::Buffer;
use crate::error::DumpError;

/// A readable stream with a tracked position.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use dumprs::{Buffer, Source};
///
/// let mut source = Source::measured(Cursor::new(b"hello"))?;
/// assert_eq!(source.length(), Some(5));
///
/// let mut line = Buffer::with_capacity(4)?;
/// source.seek(1)?;
/// let got = source.read_into(&mut line, 2)?;
///
/// assert_eq!(got, 2);
/// assert_eq!(line.as_slice(), b"el");
/// assert_eq!(line.base(), 1);
/// assert_eq!(source.position(), 3);
/// # Ok::<(), dumprs::DumpError>(())
/// ```
#[derive(Debug)]
pub struct Source<R> {
    reader: R,
    position: u64,
    length: Option<u64>,
}

impl<R: Read> Source<R> {
    /// Wraps a reader, starting at position zero with an unknown length.
    pub fn new(reader: R) -> Self {
        Source {
            reader,
            position: 0,
            length: None,
        }
    }

    /// Stream offset of the next byte to be read.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Total stream length, if it was measured at construction.
    pub fn length(&self) -> Option<u64> {
        self.length
    }

    /// Reads up to `max_bytes` bytes, appending them to `buffer`.
    ///
    /// If the buffer is empty when the call is made, its base address is set
    /// to the current stream position; an earlier deposit keeps the base it
    /// already stamped. Short reads are retried until `max_bytes` bytes have
    /// arrived or the stream ends, so anything less than `max_bytes` means
    /// end of stream. A return of `Ok(0)` means no bytes were available at
    /// all.
    ///
    /// `max_bytes` must not exceed the buffer's spare capacity.
    pub fn read_into(&mut self, buffer: &mut Buffer, max_bytes: usize) -> Result<usize, DumpError> {
        debug_assert!(
            max_bytes <= buffer.remaining(),
            "read request exceeds spare buffer capacity"
        );

        if buffer.is_empty() {
            buffer.set_base(self.position);
        }

        let start = buffer.len();
        let mut filled = 0;
        {
            let dest = buffer.grow_for_fill(max_bytes);
            while filled < dest.len() {
                match self.reader.read(&mut dest[filled..]) {
                    Ok(0) => break, // EOF
                    Ok(n) => filled += n,
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => return Err(DumpError::Read(e)),
                }
            }
        }
        buffer.truncate(start + filled);
        self.position += filled as u64;
        Ok(filled)
    }

    /// Reads the next single byte, or `None` at end of stream.
    pub fn read_one(&mut self) -> Result<Option<u8>, DumpError> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.position += 1;
                    return Ok(Some(byte[0]));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(DumpError::Read(e)),
            }
        }
    }
}

impl<R: Read + Seek> Source<R> {
    /// Wraps a seekable reader and measures its length by seeking to the
    /// end and back.
    pub fn measured(mut reader: R) -> Result<Self, DumpError> {
        let length = reader.seek(SeekFrom::End(0)).map_err(DumpError::Seek)?;
        reader.seek(SeekFrom::Start(0)).map_err(DumpError::Seek)?;
        debug!("stream length is {} bytes", length);
        Ok(Source {
            reader,
            position: 0,
            length: Some(length),
        })
    }

    /// Moves the stream position to `offset` from the start.
    ///
    /// The tracked position is only updated if the underlying seek
    /// succeeds.
    pub fn seek(&mut self, offset: u64) -> Result<(), DumpError> {
        self.reader.seek(SeekFrom::Start(offset)).map_err(DumpError::Seek)?;
        self.position = offset;
        Ok(())
    }
}
