// Benchmarks for line rendering and full pipeline throughput.
//
// Run with: cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use dumprs::{Buffer, ByteOrder, DumpConfig, Dumper, OutputKind, write_line};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let mut line = Buffer::with_capacity(16).unwrap();
    line.extend_from_slice(b"0123456789ABCDEF");
    line.set_base(0x1000);
    group.throughput(Throughput::Bytes(16));

    let hex = DumpConfig::default().with_show_address(true);
    group.bench_function("hex_line", |b| {
        let mut out = Vec::with_capacity(128);
        b.iter(|| {
            out.clear();
            write_line(&mut out, black_box(&line), &hex).unwrap();
            black_box(out.len())
        })
    });

    let decimal = DumpConfig::new(4, 4)
        .unwrap()
        .with_output(OutputKind::Decimal)
        .with_col_delimiter(",");
    group.bench_function("decimal_line", |b| {
        let mut out = Vec::with_capacity(128);
        b.iter(|| {
            out.clear();
            write_line(&mut out, black_box(&line), &decimal).unwrap();
            black_box(out.len())
        })
    });

    let ascii = DumpConfig::default()
        .with_output(OutputKind::Ascii)
        .with_col_delimiter("");
    group.bench_function("ascii_line", |b| {
        let mut out = Vec::with_capacity(128);
        b.iter(|| {
            out.clear();
            write_line(&mut out, black_box(&line), &ascii).unwrap();
            black_box(out.len())
        })
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let size = 1024 * 1024;
    let data: Vec<u8> = (0..size).map(|i| (i % 256) as u8).collect();
    group.throughput(Throughput::Bytes(size as u64));

    let hex = Dumper::new(DumpConfig::default().with_show_address(true)).unwrap();
    group.bench_function("hex_1mb", |b| {
        b.iter(|| {
            let cursor = std::io::Cursor::new(black_box(&data));
            let mut out = Vec::with_capacity(size * 4);
            let total = hex.dump(cursor, &mut out).unwrap();
            black_box(total)
        })
    });

    let csv = Dumper::new(
        DumpConfig::new(4, 8)
            .unwrap()
            .with_output(OutputKind::UnsignedDecimal)
            .with_col_delimiter(","),
    )
    .unwrap();
    group.bench_function("csv_1mb", |b| {
        b.iter(|| {
            let cursor = std::io::Cursor::new(black_box(&data));
            let mut out = Vec::with_capacity(size * 4);
            let total = csv.dump(cursor, &mut out).unwrap();
            black_box(total)
        })
    });

    let reordered = Dumper::new(
        DumpConfig::new(4, 4)
            .unwrap()
            .with_byte_order(ByteOrder::from_digits("3210").unwrap()),
    )
    .unwrap();
    group.bench_function("reorder_1mb", |b| {
        b.iter(|| {
            let cursor = std::io::Cursor::new(black_box(&data));
            let mut out = Vec::with_capacity(size * 3);
            let total = reordered.dump(cursor, &mut out).unwrap();
            black_box(total)
        })
    });

    let raw = Dumper::new(DumpConfig::default().with_output(OutputKind::Raw)).unwrap();
    group.bench_function("raw_1mb", |b| {
        b.iter(|| {
            let cursor = std::io::Cursor::new(black_box(&data));
            let mut out = Vec::with_capacity(size);
            let total = raw.dump(cursor, &mut out).unwrap();
            black_box(total)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_pipeline);
criterion_main!(benches);
