//! dumprs
//!
//! Streaming binary-to-text dumps for Rust.
//!
//! `dumprs` transforms a byte stream into formatted text, one fixed-capacity
//! line at a time: hex, signed or unsigned decimal, printable ASCII, or raw
//! bytes copied through untouched. Lines can carry address prefixes, custom
//! delimiters, per-field byte reordering, address bounds, and byte-pattern
//! synchronization. It is designed as a small, composable primitive for:
//!
//! - inspecting firmware images and wire captures
//! - converting fixed-width binary records to CSV
//! - straightening little-endian fields into readable text
//! - carving frames out of raw captures by marker
//!
//! The crate intentionally:
//! - does NOT edit streams in place
//! - does NOT guess file formats
//! - does NOT manage concurrency
//! - does NOT buffer more than one line
//!
//! It only does one thing: **Read bytes → write formatted lines**
//!
//! # Quick start
//!
//! ```
//! use std::io::Cursor;
//! use dumprs::{DumpConfig, Dumper, DumpError};
//!
//! fn main() -> Result<(), DumpError> {
//!     let config = DumpConfig::default().with_show_address(true);
//!     let dumper = Dumper::new(config)?;
//!
//!     let mut out = Vec::new();
//!     dumper.dump(Cursor::new(b"0123456789ABCDEF"), &mut out)?;
//!     print!("{}", String::from_utf8_lossy(&out));
//!     Ok(())
//! }
//! ```
//!
//! # Files
//!
//! ```no_run
//! use std::io::{self, BufWriter, Write};
//! use dumprs::{DumpConfig, Dumper, DumpError, OutputKind};
//!
//! fn main() -> Result<(), DumpError> {
//!     let config = DumpConfig::new(4, 4)?.with_output(OutputKind::UnsignedDecimal);
//!     let dumper = Dumper::new(config)?;
//!
//!     let stdout = io::stdout();
//!     let mut out = BufWriter::new(stdout.lock());
//!     dumper.dump_file("data.bin", &mut out)?;
//!     out.flush().map_err(DumpError::Write)?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod config;
mod error;
mod pipeline;
mod render;
mod reorder;
mod search;
mod source;

mod field; // internal big-endian packing

//
// Public surface (intentionally tiny)
//

pub use buffer::Buffer;
pub use config::{ByteOrder, DumpConfig, OutputKind};
pub use error::DumpError;
pub use pipeline::Dumper;
pub use render::write_line;
pub use reorder::reorder_fields;
pub use search::{SearchPattern, synchronize};
pub use source::Source;
