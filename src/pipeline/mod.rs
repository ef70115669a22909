//! The dump pipeline.
//!
//! [`Dumper`] owns a validated [`DumpConfig`] and drives the whole
//! read-transform-render loop: clear the line buffer, optionally synchronize
//! to the search pattern, fill the buffer from the source, optionally
//! reorder field bytes, render one line. The loop ends when a fill returns
//! no bytes.

use std::fs::File;
use std::io::{Read, Seek, Write};
use std::path::Path;

use log::debug;

use crate::buffer::Buffer;
use crate::config::{ByteOrder, DumpConfig};
use crate::error::DumpError;
use crate::render::write_line;
use crate::reorder::reorder_fields;
use crate::search::synchronize;
use crate::source::Source;

/// Runs dumps described by a [`DumpConfig`].
///
/// A `Dumper` is cheap to build and reusable; each [`dump`](Dumper::dump)
/// call works through one stream with one line buffer allocated up front.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use dumprs::{DumpConfig, Dumper};
///
/// let config = DumpConfig::default().with_show_address(true);
/// let dumper = Dumper::new(config)?;
///
/// let mut out = Vec::new();
/// let total = dumper.dump(Cursor::new(b"0123456789ABCDEF"), &mut out)?;
///
/// assert_eq!(total, 16);
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "00000000: 30 31 32 33 34 35 36 37 38 39 41 42 43 44 45 46\n"
/// );
/// # Ok::<(), dumprs::DumpError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dumper {
    config: DumpConfig,
}

impl Dumper {
    /// Creates a dumper from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DumpError::InvalidConfig`] if the configuration fails
    /// [`DumpConfig::validate`].
    pub fn new(config: DumpConfig) -> Result<Self, DumpError> {
        config.validate()?;
        Ok(Dumper { config })
    }

    /// Returns the configuration this dumper runs with.
    pub fn config(&self) -> &DumpConfig {
        &self.config
    }

    /// Dumps `reader` to `out`, returning how many bytes were rendered.
    ///
    /// The stream length is measured up front, reading starts at the
    /// configured start offset, and no byte at or past the configured end
    /// offset is ever read. With a search pattern configured, every line
    /// starts at a fresh pattern match and stretches of the stream between
    /// matches are skipped; a match with no renderable bytes after it ends
    /// the dump silently.
    pub fn dump<R, W>(&self, reader: R, out: &mut W) -> Result<u64, DumpError>
    where
        R: Read + Seek,
        W: Write,
    {
        let mut source = Source::measured(reader)?;
        if self.config.start() > 0 {
            source.seek(self.config.start())?;
        }

        let mut buffer = Buffer::with_capacity(self.config.line_capacity())?;
        let mut total = 0u64;

        loop {
            buffer.clear();

            if let Some(pattern) = self.config.search() {
                if !synchronize(&mut source, pattern, &mut buffer, self.config.end())? {
                    break;
                }
            }

            let want = self.fill_request(&buffer, source.position());
            if source.read_into(&mut buffer, want)? == 0 {
                break;
            }

            if let ByteOrder::Permuted(order) = self.config.byte_order() {
                reorder_fields(&mut buffer, order);
                if buffer.is_empty() {
                    break;
                }
            }

            total += buffer.len() as u64;
            write_line(out, &buffer, &self.config)?;
        }

        debug!("dump rendered {} bytes", total);
        Ok(total)
    }

    /// Opens `path` and dumps it to `out`.
    pub fn dump_file<W: Write>(&self, path: impl AsRef<Path>, out: &mut W) -> Result<u64, DumpError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DumpError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.dump(file, out)
    }

    /// Bytes to request for the next fill: the buffer's spare capacity,
    /// clipped so the read cannot cross the end bound.
    fn fill_request(&self, buffer: &Buffer, position: u64) -> usize {
        let mut want = buffer.remaining();
        if let Some(end) = self.config.end() {
            let left = end.saturating_sub(position);
            if left < want as u64 {
                want = left as usize;
            }
        }
        want
    }
}
