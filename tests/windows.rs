//! # Window Iteration Integration
//!
//! Builds a keyed row stream end to end and walks it through window
//! cursors:
//!
//! - Grouping rows into partitions by a projected string key
//! - Ordered key traversal and ranged seek
//! - Projecting columns out of a single partition's rows

use flatrow::lists::{
    ArrayList, Cursor, FixedColumn, List, StringColumn, WindowCursor, WindowMap,
};
use flatrow::rows::{FieldDef, FieldType, Row, RowLayout, RowWriter};

fn event_layout() -> RowLayout {
    RowLayout::new(vec![
        FieldDef::new("ts", FieldType::Int64),
        FieldDef::new("device", FieldType::Str),
        FieldDef::new("reading", FieldType::Double),
    ])
}

fn event_row(layout: &RowLayout, ts: i64, device: &str, reading: f64) -> Vec<u8> {
    let mut writer = RowWriter::new(layout);
    writer.set_int64(0, ts).unwrap();
    writer.set_str(1, device).unwrap();
    writer.set_double(2, reading).unwrap();
    writer.build().unwrap()
}

fn group_by_device<'a>(layout: &RowLayout, rows: &[Row<'a>]) -> WindowMap<'a> {
    let devices = StringColumn::new(ArrayList::new(rows), layout.str_addr(1).unwrap());
    let mut windows = WindowMap::new();
    for (i, &row) in rows.iter().enumerate() {
        let key = devices.at(i as u64).unwrap();
        windows.push(Row::new(key.as_bytes()), row);
    }
    windows
}

fn collect_rows<'a>(cursor: &impl WindowCursor<'a>) -> Vec<Row<'a>> {
    let mut rows = cursor.rows().unwrap();
    let mut out = Vec::new();
    while rows.valid() {
        out.push(rows.value().unwrap());
        rows.advance().unwrap();
    }
    out
}

#[test]
fn groups_rows_under_projected_keys() {
    let layout = event_layout();
    let bufs = vec![
        event_row(&layout, 30, "gamma", 3.0),
        event_row(&layout, 10, "alpha", 1.0),
        event_row(&layout, 11, "alpha", 1.5),
        event_row(&layout, 20, "beta", 2.0),
        event_row(&layout, 12, "alpha", 1.75),
    ];
    let rows: Vec<Row<'_>> = bufs.iter().map(|b| Row::new(b)).collect();

    let windows = group_by_device(&layout, &rows);
    assert_eq!(windows.len(), 3);

    let mut cursor = windows.cursor();
    let mut summary = Vec::new();
    while cursor.valid() {
        let key = cursor.key().unwrap();
        let count = collect_rows(&cursor).len();
        summary.push((key.as_bytes().to_vec(), count));
        cursor.advance().unwrap();
    }

    assert_eq!(
        summary,
        vec![
            (b"alpha".to_vec(), 3),
            (b"beta".to_vec(), 1),
            (b"gamma".to_vec(), 1),
        ]
    );
}

#[test]
fn seek_selects_one_partition() {
    let layout = event_layout();
    let bufs = vec![
        event_row(&layout, 1, "a", 0.5),
        event_row(&layout, 2, "b", 1.5),
        event_row(&layout, 3, "b", 2.5),
        event_row(&layout, 4, "c", 3.5),
    ];
    let rows: Vec<Row<'_>> = bufs.iter().map(|b| Row::new(b)).collect();

    let windows = group_by_device(&layout, &rows);
    let mut cursor = windows.cursor();
    cursor.seek(b"b");

    assert_eq!(cursor.key().unwrap(), Row::from("b"));
    let partition = collect_rows(&cursor);
    assert_eq!(partition.len(), 2);
    assert_eq!(partition[0], rows[1]);
    assert_eq!(partition[1], rows[2]);
}

#[test]
fn partition_rows_project_like_any_list() {
    let layout = event_layout();
    let bufs = vec![
        event_row(&layout, 100, "pump", 0.25),
        event_row(&layout, 50, "fan", 9.0),
        event_row(&layout, 101, "pump", 0.5),
        event_row(&layout, 102, "pump", 0.75),
    ];
    let rows: Vec<Row<'_>> = bufs.iter().map(|b| Row::new(b)).collect();

    let windows = group_by_device(&layout, &rows);
    let mut cursor = windows.cursor();
    cursor.seek(b"pump");

    let partition = collect_rows(&cursor);
    let list = ArrayList::new(&partition);
    let timestamps: FixedColumn<i64, _> = FixedColumn::new(list, layout.fixed_offset(0));
    let readings: FixedColumn<f64, _> = FixedColumn::new(list, layout.fixed_offset(2));

    assert_eq!(timestamps.len(), 3);
    assert_eq!(timestamps.at(0).unwrap(), 100);
    assert_eq!(timestamps.at(2).unwrap(), 102);

    let mut sum = 0.0;
    let mut cursor = readings.cursor();
    while cursor.valid() {
        sum += cursor.value().unwrap();
        cursor.advance().unwrap();
    }
    assert_eq!(sum, 1.5);
}

#[test]
fn seek_between_keys_and_past_end() {
    let layout = event_layout();
    let bufs = vec![
        event_row(&layout, 1, "aa", 0.0),
        event_row(&layout, 2, "cc", 0.0),
    ];
    let rows: Vec<Row<'_>> = bufs.iter().map(|b| Row::new(b)).collect();

    let windows = group_by_device(&layout, &rows);
    let mut cursor = windows.cursor();

    cursor.seek(b"bb");
    assert_eq!(cursor.key().unwrap(), Row::from("cc"));

    cursor.seek(b"zz");
    assert!(!cursor.valid());
    assert!(cursor.rows().is_err());

    cursor.seek_to_first();
    assert_eq!(cursor.key().unwrap(), Row::from("aa"));
}
