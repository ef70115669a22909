//! File hex-dump example.
//!
//! Run with:
//!     cargo run --example hex_file -- /path/to/file

use std::env;
use std::io::{self, BufWriter, Write};

use dumprs::{DumpConfig, Dumper};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    // Classic layout: one-byte fields, 16 per line, address prefixes
    let config = DumpConfig::default().with_show_address(true);
    let dumper = Dumper::new(config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let total = dumper.dump_file(&path, &mut out)?;
    out.flush()?;

    eprintln!("\nDumped {} bytes from {}", total, path);

    Ok(())
}
