//! Command-line front end for the dump engine.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, error, info};

use dumprs::{ByteOrder, DumpConfig, DumpError, Dumper, OutputKind, SearchPattern};

/// Dump binary streams as hex, decimal, ASCII or raw bytes.
#[derive(Debug, Parser)]
#[command(name = "dumprs", version, about, long_about = None)]
struct Cli {
    /// File to dump
    infile: PathBuf,

    /// Write output here instead of stdout
    outfile: Option<PathBuf>,

    /// Bytes per field
    #[arg(short = 'l', long, value_name = "BYTES")]
    length: Option<usize>,

    /// Fields per line
    #[arg(short = 'f', long, value_name = "COUNT", default_value_t = 16)]
    fields: usize,

    /// Prefix each line with its address
    #[arg(short = 'a', long)]
    show_address: bool,

    /// Render fields as signed decimal
    #[arg(short = 'i', long, group = "mode")]
    decimal: bool,

    /// Render fields as unsigned decimal
    #[arg(short = 'u', long, group = "mode")]
    unsigned: bool,

    /// Render bytes as printable ASCII
    #[arg(short = 'A', long, group = "mode")]
    ascii: bool,

    /// Copy bytes through without formatting
    #[arg(short = 'b', long, group = "mode")]
    binary: bool,

    /// Delimiter between fields
    #[arg(short = 'd', long, value_name = "TEXT")]
    delimiter: Option<String>,

    /// Delimiter after each line
    #[arg(long, value_name = "TEXT")]
    row_delimiter: Option<String>,

    /// Start reading at this offset (0x prefix for hex)
    #[arg(short = 's', long, value_name = "ADDR", value_parser = parse_offset)]
    start_address: Option<u64>,

    /// Stop reading at this offset (0x prefix for hex)
    #[arg(short = 'e', long, value_name = "ADDR", value_parser = parse_offset)]
    end_address: Option<u64>,

    /// Byte order within each field as digits ("3210" reverses four-byte
    /// fields); implies the field width
    #[arg(short = 'r', long, value_name = "DIGITS")]
    reorder: Option<String>,

    /// Hex pattern each line synchronizes to
    #[arg(short = 'S', long, value_name = "HEX")]
    search: Option<String>,

    /// Log verbosity, 0 (errors only) to 9 (trace)
    #[arg(short = 'v', long, value_name = "LEVEL")]
    verbose: Option<u8>,
}

fn parse_offset(raw: &str) -> Result<u64, String> {
    let parsed = if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else {
        raw.parse()
    };
    parsed.map_err(|_| format!("invalid address: {}", raw))
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0..=3 => LevelFilter::Error,
        4 => LevelFilter::Warn,
        5 | 6 => LevelFilter::Info,
        7 | 8 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logger(verbose: Option<u8>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = verbose {
        builder.filter_level(level_filter(level));
    }
    builder.format_timestamp(None).init();
}

fn build_config(cli: &Cli) -> Result<DumpConfig, DumpError> {
    let byte_order = match &cli.reorder {
        Some(spec) => ByteOrder::from_digits(spec)?,
        None => ByteOrder::Natural,
    };

    // A reorder spec implies the field width; -l sets it directly.
    let field_width = cli.length.or(byte_order.field_width()).unwrap_or(1);

    let output = if cli.decimal {
        OutputKind::Decimal
    } else if cli.unsigned {
        OutputKind::UnsignedDecimal
    } else if cli.ascii {
        OutputKind::Ascii
    } else if cli.binary {
        OutputKind::Raw
    } else {
        OutputKind::Hex
    };

    let mut config = DumpConfig::new(field_width, cli.fields)?
        .with_output(output)
        .with_show_address(cli.show_address)
        .with_byte_order(byte_order);

    if let Some(delimiter) = &cli.delimiter {
        config = config.with_col_delimiter(delimiter.clone());
    }
    if let Some(delimiter) = &cli.row_delimiter {
        config = config.with_row_delimiter(delimiter.clone());
    }
    if let Some(start) = cli.start_address {
        config = config.with_start(start);
    }
    if let Some(end) = cli.end_address {
        config = config.with_end(end);
    }
    if let Some(hex) = &cli.search {
        config = config.with_search(SearchPattern::from_hex(hex)?);
    }

    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli) -> Result<u64, DumpError> {
    let dumper = Dumper::new(build_config(cli)?)?;

    match &cli.outfile {
        Some(path) => {
            let file = File::create(path).map_err(|source| DumpError::Open {
                path: path.clone(),
                source,
            })?;
            let mut out = BufWriter::new(file);
            let total = dumper.dump_file(&cli.infile, &mut out)?;
            out.flush().map_err(DumpError::Write)?;
            Ok(total)
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            let total = dumper.dump_file(&cli.infile, &mut out)?;
            out.flush().map_err(DumpError::Write)?;
            Ok(total)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli) {
        Ok(total) => {
            info!("dumped {} bytes from {}", total, cli.infile.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
