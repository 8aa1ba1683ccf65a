//! Scan benchmarks for flatrow
//!
//! These benchmarks measure the per-row cost of the hot access paths:
//! fixed-width column decode, string field resolution, and window
//! traversal over partitioned streams.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box as hint_black_box;

use flatrow::lists::{
    ArrayList, Cursor, FixedColumn, List, StringColumn, WindowCursor, WindowMap,
};
use flatrow::rows::{FieldDef, FieldType, Row, RowLayout, RowWriter};

fn sensor_layout() -> RowLayout {
    RowLayout::new(vec![
        FieldDef::new("ts", FieldType::Int64),
        FieldDef::new("device", FieldType::Str),
        FieldDef::new("reading", FieldType::Double),
        FieldDef::new("note", FieldType::Str),
    ])
}

fn build_stream(layout: &RowLayout, count: usize, note: &[u8]) -> Vec<Vec<u8>> {
    let mut writer = RowWriter::new(layout);
    (0..count)
        .map(|i| {
            writer.reset();
            writer.set_int64(0, i as i64).unwrap();
            writer.set_str(1, "device-000").unwrap();
            writer.set_double(2, i as f64 * 0.5).unwrap();
            writer.set_str_bytes(3, note).unwrap();
            writer.build().unwrap()
        })
        .collect()
}

fn bench_fixed_column_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_column_scan");
    let layout = sensor_layout();

    for size in [256usize, 1024, 4096] {
        let bufs = build_stream(&layout, size, b"ok");
        let rows: Vec<Row<'_>> = bufs.iter().map(|b| Row::new(b)).collect();
        let timestamps: FixedColumn<i64, _> =
            FixedColumn::new(ArrayList::new(&rows), layout.fixed_offset(0));

        group.bench_with_input(BenchmarkId::new("cursor_walk", size), &size, |b, _| {
            b.iter(|| {
                let mut sum = 0i64;
                let mut cursor = timestamps.cursor();
                while cursor.valid() {
                    sum += cursor.value().unwrap();
                    cursor.advance().unwrap();
                }
                hint_black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("random_at", size), &size, |b, _| {
            b.iter(|| {
                let mut sum = 0i64;
                let mut pos = 0u64;
                for _ in 0..size {
                    pos = (pos.wrapping_mul(48271) + 1) % size as u64;
                    sum += timestamps.at(black_box(pos)).unwrap();
                }
                hint_black_box(sum)
            });
        });
    }

    group.finish();
}

fn bench_string_field_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_field_decode");
    let layout = sensor_layout();

    let short_bufs = build_stream(&layout, 1024, b"short note");
    let short_rows: Vec<Row<'_>> = short_bufs.iter().map(|b| Row::new(b)).collect();
    let short_notes = StringColumn::new(
        ArrayList::new(&short_rows),
        layout.str_addr(3).unwrap(),
    );

    group.bench_function("short_field_walk_1024", |b| {
        b.iter(|| {
            let mut total = 0usize;
            let mut cursor = short_notes.cursor();
            while cursor.valid() {
                total += cursor.value().unwrap().len();
                cursor.advance().unwrap();
            }
            hint_black_box(total)
        });
    });

    let long_note = vec![b'n'; 1024];
    let long_bufs = build_stream(&layout, 1024, &long_note);
    let long_rows: Vec<Row<'_>> = long_bufs.iter().map(|b| Row::new(b)).collect();
    let long_notes = StringColumn::new(
        ArrayList::new(&long_rows),
        layout.str_addr(3).unwrap(),
    );

    group.bench_function("long_field_walk_1024", |b| {
        b.iter(|| {
            let mut total = 0usize;
            let mut cursor = long_notes.cursor();
            while cursor.valid() {
                total += cursor.value().unwrap().len();
                cursor.advance().unwrap();
            }
            hint_black_box(total)
        });
    });

    group.bench_function("as_str_validation", |b| {
        b.iter(|| {
            let field = short_notes.at(black_box(512)).unwrap();
            hint_black_box(field.as_str().unwrap())
        });
    });

    group.finish();
}

fn bench_window_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_iteration");
    let layout = sensor_layout();

    let bufs = build_stream(&layout, 64 * 16, b"ok");
    let keys: Vec<String> = (0..64).map(|i| format!("device-{:03}", i)).collect();
    let mut windows = WindowMap::new();
    for (i, buf) in bufs.iter().enumerate() {
        windows.push(Row::new(keys[i % 64].as_bytes()), Row::new(buf));
    }

    group.bench_function("walk_64x16", |b| {
        b.iter(|| {
            let mut count = 0usize;
            let mut cursor = windows.cursor();
            while cursor.valid() {
                let mut rows = cursor.rows().unwrap();
                while rows.valid() {
                    hint_black_box(rows.value().unwrap());
                    count += 1;
                    rows.advance().unwrap();
                }
                drop(rows);
                cursor.advance().unwrap();
            }
            hint_black_box(count)
        });
    });

    group.bench_function("seek_middle_partition", |b| {
        b.iter(|| {
            let mut cursor = windows.cursor();
            cursor.seek(black_box(b"device-032"));
            hint_black_box(cursor.key().unwrap())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_fixed_column_scan,
    bench_string_field_decode,
    bench_window_iteration,
);
criterion_main!(benches);
