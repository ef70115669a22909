// Integration tests for the dump pipeline
// Tests cover: line shapes, numeric rendering, reordering, synchronization,
// address bounds, raw passthrough, file-backed dumps

use std::io::{Cursor, Write};

use dumprs::{ByteOrder, DumpConfig, DumpError, Dumper, OutputKind, SearchPattern};

// ============================================================================
// Test Helpers
// ============================================================================

fn dump_bytes(config: DumpConfig, input: &[u8]) -> Vec<u8> {
    let dumper = Dumper::new(config).unwrap();
    let mut out = Vec::new();
    dumper.dump(Cursor::new(input.to_vec()), &mut out).unwrap();
    out
}

fn dump_string(config: DumpConfig, input: &[u8]) -> String {
    String::from_utf8(dump_bytes(config, input)).unwrap()
}

// ============================================================================
// Line Shape Tests
// ============================================================================

#[test]
fn test_hex_dump_with_addresses() {
    let config = DumpConfig::default().with_show_address(true);
    let out = dump_string(config, b"0123456789ABCDEFGHIJK");

    assert_eq!(
        out,
        "00000000: 30 31 32 33 34 35 36 37 38 39 41 42 43 44 45 46\n\
         00000010: 47 48 49 4a 4b\n",
        "21 bytes must render as one full line and one short line"
    );
}

#[test]
fn test_field_layout_does_not_change_the_digits() {
    let input = b"0123456789ABCDEF";
    let mut seen = Vec::new();
    for (width, fields) in [(1, 16), (2, 8), (4, 4), (8, 2)] {
        let config = DumpConfig::new(width, fields)
            .unwrap()
            .with_col_delimiter("");
        seen.push(dump_string(config, input));
    }

    assert_eq!(seen[0], "30313233343536373839414243444546\n");
    assert!(
        seen.iter().all(|line| line == &seen[0]),
        "with no delimiter, the hex digit stream is layout-independent"
    );
}

#[test]
fn test_single_short_line() {
    let out = dump_string(DumpConfig::default(), b"GHIJK");
    assert_eq!(out, "47 48 49 4a 4b\n");
}

// ============================================================================
// Numeric Rendering Tests
// ============================================================================

#[test]
fn test_decimal_csv_dump() {
    let config = DumpConfig::default()
        .with_output(OutputKind::Decimal)
        .with_col_delimiter(",");
    let out = dump_string(config, b"0123456789ABCDEFGHIJK");

    assert_eq!(
        out,
        "48,49,50,51,52,53,54,55,56,57,65,66,67,68,69,70\n71,72,73,74,75\n"
    );
}

#[test]
fn test_signed_versus_unsigned_bytes() {
    let config = DumpConfig::default().with_output(OutputKind::Decimal);
    assert_eq!(dump_string(config, &[0x81]), "-127\n");

    let config = DumpConfig::default().with_output(OutputKind::UnsignedDecimal);
    assert_eq!(dump_string(config, &[0x81]), "129\n");
}

#[test]
fn test_word_wide_fields() {
    let positive = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
    let negative = [0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88];

    let signed = DumpConfig::new(8, 1).unwrap().with_output(OutputKind::Decimal);
    assert_eq!(dump_string(signed.clone(), &positive), "72623859790382856\n");
    assert_eq!(dump_string(signed, &negative), "-9114578090645354616\n");

    let unsigned = DumpConfig::new(8, 1)
        .unwrap()
        .with_output(OutputKind::UnsignedDecimal);
    assert_eq!(dump_string(unsigned, &negative), "9332165983064197000\n");
}

#[test]
fn test_partial_trailing_field_packs_zeros() {
    // Ten bytes of four-byte fields leave a two-byte tail; the missing tail
    // positions pack as zero.
    let input = [0, 0, 0, 1, 0, 0, 0, 2, 0x81, 0x02];
    let config = DumpConfig::new(4, 2)
        .unwrap()
        .with_output(OutputKind::Decimal)
        .with_col_delimiter(",");

    assert_eq!(dump_string(config, &input), "1,2\n-2130575360\n");
}

// ============================================================================
// ASCII Preview Tests
// ============================================================================

#[test]
fn test_ascii_preview_masks_control_bytes() {
    let config = DumpConfig::new(4, 1)
        .unwrap()
        .with_output(OutputKind::Ascii)
        .with_col_delimiter("");
    let out = dump_string(config, b"12\r4\n6");

    assert_eq!(out, "12.4\n.6\n", "CR and LF render as dots");
}

#[test]
fn test_ascii_keeps_spaces() {
    let config = DumpConfig::default()
        .with_output(OutputKind::Ascii)
        .with_col_delimiter("");
    assert_eq!(dump_string(config, b"a b\x00c"), "a b.c\n");
}

// ============================================================================
// Field Reordering Tests
// ============================================================================

#[test]
fn test_reversed_four_byte_fields() {
    let config = DumpConfig::new(4, 1)
        .unwrap()
        .with_byte_order(ByteOrder::from_digits("3210").unwrap());
    let out = dump_string(config, b"01234567");

    assert_eq!(
        out, "33323130\n37363534\n",
        "each four-byte field renders reversed"
    );
}

#[test]
fn test_reorder_drops_unsourceable_tail() {
    let config = DumpConfig::new(4, 1)
        .unwrap()
        .with_byte_order(ByteOrder::from_digits("3210").unwrap());
    let out = dump_string(config, b"012345");

    // The two-byte tail cannot source its first reversed position, so only
    // the full field survives.
    assert_eq!(out, "33323130\n");
}

#[test]
fn test_reorder_swap_pairs_with_hex() {
    let config = DumpConfig::new(2, 8)
        .unwrap()
        .with_byte_order(ByteOrder::from_digits("10").unwrap())
        .with_col_delimiter(" ");
    let out = dump_string(config, &[0xDE, 0xAD, 0xBE, 0xEF]);

    assert_eq!(out, "adde efbe\n");
}

// ============================================================================
// Pattern Synchronization Tests
// ============================================================================

#[test]
fn test_every_line_synchronizes_to_the_marker() {
    let input = [
        0x01, 0x02, 0xFF, 0x04, 0xBB, 0xFF, 0x07, 0x08, 0xFF, 0xBB, 0x0B, 0xFF, 0x0D, 0x0E, 0xFB,
    ];
    let config = DumpConfig::new(2, 1)
        .unwrap()
        .with_show_address(true)
        .with_search(SearchPattern::from_hex("FF").unwrap());
    let out = dump_string(config, &input);

    assert_eq!(
        out,
        "00000002: ff04\n\
         00000005: ff07\n\
         00000008: ffbb\n\
         0000000b: ff0d\n",
        "each line must start at a fresh marker match"
    );
}

#[test]
fn test_multi_byte_pattern_spans_reads() {
    let input = b"xxhelloxxhellox";
    let config = DumpConfig::new(1, 7)
        .unwrap()
        .with_show_address(true)
        .with_col_delimiter("")
        .with_output(OutputKind::Ascii)
        .with_search(SearchPattern::from_hex("68656c6c6f").unwrap());
    let out = dump_string(config, input);

    assert_eq!(out, "00000002: helloxx\n00000009: hellox\n");
}

#[test]
fn test_absent_pattern_renders_nothing() {
    let config = DumpConfig::new(2, 1)
        .unwrap()
        .with_search(SearchPattern::from_hex("AAAA").unwrap());
    let dumper = Dumper::new(config).unwrap();

    let mut out = Vec::new();
    let total = dumper
        .dump(Cursor::new(b"hello world".to_vec()), &mut out)
        .unwrap();
    assert_eq!(total, 0);
    assert!(out.is_empty());
}

#[test]
fn test_match_at_end_bound_is_not_rendered() {
    let input = [0x01, 0x02, 0xFF, 0x04, 0xBB, 0xFF, 0x07];
    let config = DumpConfig::new(2, 1)
        .unwrap()
        .with_show_address(true)
        .with_end(6)
        .with_search(SearchPattern::from_hex("FF").unwrap());
    let out = dump_string(config, &input);

    // The second marker at offset 5 is found, but the end bound leaves it
    // with no renderable byte after it.
    assert_eq!(out, "00000002: ff04\n");
}

#[test]
fn test_sub_byte_pattern_is_padded_to_a_byte() {
    let config = DumpConfig::new(1, 2)
        .unwrap()
        .with_show_address(true)
        .with_search(SearchPattern::from_hex("1").unwrap());
    let out = dump_string(config, &[0x00, 0x10, 0xAB]);

    assert_eq!(out, "00000001: 10 ab\n", "pattern 0x1 pads to the byte 0x10");
}

// ============================================================================
// Address Bound Tests
// ============================================================================

#[test]
fn test_start_and_end_bound_the_dump() {
    let config = DumpConfig::default()
        .with_show_address(true)
        .with_start(2)
        .with_end(5);
    let out = dump_string(config, b"ABCDEFGH");

    assert_eq!(out, "00000002: 43 44 45\n");
}

#[test]
fn test_empty_address_range() {
    let config = DumpConfig::default().with_start(5).with_end(5);
    assert_eq!(dump_string(config, b"ABCDEFGH"), "");

    let config = DumpConfig::default().with_start(7).with_end(5);
    assert_eq!(dump_string(config, b"ABCDEFGH"), "");
}

#[test]
fn test_end_bound_past_stream_end() {
    let config = DumpConfig::default().with_end(100);
    assert_eq!(dump_string(config, b"AB"), "41 42\n");
}

// ============================================================================
// Raw Passthrough Tests
// ============================================================================

#[test]
fn test_raw_dump_is_byte_identical() {
    let input: Vec<u8> = (0u8..=255).cycle().take(1000).collect();
    let config = DumpConfig::new(4, 4)
        .unwrap()
        .with_output(OutputKind::Raw)
        .with_show_address(true)
        .with_col_delimiter(",");
    let out = dump_bytes(config, &input);

    assert_eq!(out, input, "raw mode ignores layout and address settings");
}

#[test]
fn test_raw_dump_respects_bounds() {
    let config = DumpConfig::default()
        .with_output(OutputKind::Raw)
        .with_start(1)
        .with_end(4);
    assert_eq!(dump_bytes(config, b"ABCDEF"), b"BCD");
}

// ============================================================================
// File-Backed Dump Tests
// ============================================================================

#[test]
fn test_dump_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"0123456789ABCDEFGHIJK").unwrap();
    file.flush().unwrap();

    let dumper = Dumper::new(DumpConfig::default().with_show_address(true)).unwrap();
    let mut out = Vec::new();
    let total = dumper.dump_file(file.path(), &mut out).unwrap();

    assert_eq!(total, 21);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "00000000: 30 31 32 33 34 35 36 37 38 39 41 42 43 44 45 46\n\
         00000010: 47 48 49 4a 4b\n"
    );
}

#[test]
fn test_missing_file_reports_its_path() {
    let dumper = Dumper::new(DumpConfig::default()).unwrap();
    let mut out = Vec::new();
    let err = dumper.dump_file("no/such/file.bin", &mut out).unwrap_err();

    assert!(matches!(err, DumpError::Open { .. }));
    assert!(err.to_string().contains("no/such/file.bin"));
}

// ============================================================================
// Configuration Rejection Tests
// ============================================================================

#[test]
fn test_invalid_configs_fail_before_any_io() {
    let too_wide = DumpConfig::new(9, 1).unwrap().with_output(OutputKind::Decimal);
    assert!(matches!(
        Dumper::new(too_wide),
        Err(DumpError::InvalidConfig { .. })
    ));

    let mismatched = DumpConfig::new(2, 8)
        .unwrap()
        .with_byte_order(ByteOrder::from_digits("3210").unwrap());
    assert!(matches!(
        Dumper::new(mismatched),
        Err(DumpError::InvalidConfig { .. })
    ));

    let oversized_pattern = DumpConfig::new(1, 2)
        .unwrap()
        .with_search(SearchPattern::from_hex("01020304").unwrap());
    assert!(matches!(
        Dumper::new(oversized_pattern),
        Err(DumpError::InvalidConfig { .. })
    ));
}
