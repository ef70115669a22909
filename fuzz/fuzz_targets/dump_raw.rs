#![no_main]

use std::io::Cursor;

use dumprs::{DumpConfig, Dumper, OutputKind};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    // Raw mode must be the identity no matter how the line layout and
    // decorations are configured.
    let configs = vec![
        DumpConfig::default().with_output(OutputKind::Raw),
        DumpConfig::new(4, 4)
            .unwrap()
            .with_output(OutputKind::Raw)
            .with_show_address(true)
            .with_col_delimiter(","),
        DumpConfig::new(7, 3)
            .unwrap()
            .with_output(OutputKind::Raw)
            .with_row_delimiter("|"),
    ];

    for config in configs {
        let dumper = Dumper::new(config).unwrap();
        let mut out = Vec::new();
        let total = dumper.dump(Cursor::new(data.clone()), &mut out).unwrap();

        assert_eq!(out, data);
        assert_eq!(total, data.len() as u64);
    }

    // Address bounds clip the copy to exactly the in-range window.
    if !data.is_empty() {
        let start = data.len() / 3;
        let end = 2 * data.len() / 3;
        let config = DumpConfig::default()
            .with_output(OutputKind::Raw)
            .with_start(start as u64)
            .with_end(end as u64);
        let dumper = Dumper::new(config).unwrap();

        let mut out = Vec::new();
        dumper.dump(Cursor::new(data.clone()), &mut out).unwrap();
        assert_eq!(out, &data[start..end]);
    }
});
