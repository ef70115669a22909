#![no_main]

use std::io::Cursor;

use dumprs::{ByteOrder, DumpConfig, Dumper, OutputKind};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    let configs = vec![
        // Classic hex dump
        DumpConfig::default().with_show_address(true),
        // CSV decimals
        DumpConfig::new(4, 4)
            .unwrap()
            .with_output(OutputKind::Decimal)
            .with_col_delimiter(","),
        // Unsigned words
        DumpConfig::new(8, 2)
            .unwrap()
            .with_output(OutputKind::UnsignedDecimal),
        // ASCII preview
        DumpConfig::new(1, 32)
            .unwrap()
            .with_output(OutputKind::Ascii)
            .with_col_delimiter(""),
        // Reversed four-byte fields
        DumpConfig::new(4, 8)
            .unwrap()
            .with_byte_order(ByteOrder::from_digits("3210").unwrap()),
    ];

    for config in configs {
        let dumper = Dumper::new(config).unwrap();

        let mut out = Vec::new();
        let total = dumper.dump(Cursor::new(data.clone()), &mut out).unwrap();
        assert!(total <= data.len() as u64);

        // Every rendering mode here emits ASCII text ending in a row
        // delimiter, or nothing at all.
        let text = String::from_utf8(out.clone()).unwrap();
        if total == 0 {
            assert!(text.is_empty());
        } else {
            assert!(text.ends_with('\n'));
        }

        // Determinism: a second run over the same bytes is identical.
        let mut again = Vec::new();
        let total_again = dumper.dump(Cursor::new(data.clone()), &mut again).unwrap();
        assert_eq!(total, total_again);
        assert_eq!(out, again);
    }

    // A plain hex dump renders every byte and one line per buffer fill.
    let dumper = Dumper::new(DumpConfig::default()).unwrap();
    let mut out = Vec::new();
    let total = dumper.dump(Cursor::new(data.clone()), &mut out).unwrap();
    assert_eq!(total, data.len() as u64);

    let lines = out.iter().filter(|&&byte| byte == b'\n').count();
    assert_eq!(lines, data.len().div_ceil(16));
});
