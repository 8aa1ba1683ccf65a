//! Fuzz testing for row building and read-back.
//!
//! Builds rows from arbitrary field values and reads every field back
//! through the layout to ensure the writer and the decoders agree on
//! the format at every addressing width.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use flatrow::lists::{ArrayList, FixedColumn, List, StringColumn};
use flatrow::rows::{addr_width, FieldDef, FieldType, Row, RowLayout, RowWriter, MAX_ADDR_WIDTH};

#[derive(Debug, Arbitrary)]
struct WriterInput {
    fields: Vec<FuzzField>,
}

#[derive(Debug, Arbitrary)]
enum FuzzField {
    Bool(bool),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float(f32),
    Double(f64),
    Timestamp(i64),
    Str(Vec<u8>),
}

impl FuzzField {
    fn field_type(&self) -> FieldType {
        match self {
            FuzzField::Bool(_) => FieldType::Bool,
            FuzzField::Int16(_) => FieldType::Int16,
            FuzzField::Int32(_) => FieldType::Int32,
            FuzzField::Int64(_) => FieldType::Int64,
            FuzzField::Float(_) => FieldType::Float,
            FuzzField::Double(_) => FieldType::Double,
            FuzzField::Timestamp(_) => FieldType::Timestamp,
            FuzzField::Str(_) => FieldType::Str,
        }
    }
}

fuzz_target!(|input: WriterInput| {
    if input.fields.is_empty() || input.fields.len() > 16 {
        return;
    }
    if input
        .fields
        .iter()
        .any(|f| matches!(f, FuzzField::Str(bytes) if bytes.len() > 100_000))
    {
        return;
    }

    let defs: Vec<FieldDef> = input
        .fields
        .iter()
        .enumerate()
        .map(|(i, f)| FieldDef::new(format!("f{}", i), f.field_type()))
        .collect();
    let layout = RowLayout::new(defs);

    let mut writer = RowWriter::new(&layout);
    for (i, field) in input.fields.iter().enumerate() {
        match field {
            FuzzField::Bool(v) => writer.set_bool(i, *v).unwrap(),
            FuzzField::Int16(v) => writer.set_int16(i, *v).unwrap(),
            FuzzField::Int32(v) => writer.set_int32(i, *v).unwrap(),
            FuzzField::Int64(v) => writer.set_int64(i, *v).unwrap(),
            FuzzField::Float(v) => writer.set_float(i, *v).unwrap(),
            FuzzField::Double(v) => writer.set_double(i, *v).unwrap(),
            FuzzField::Timestamp(v) => writer.set_timestamp(i, *v).unwrap(),
            FuzzField::Str(v) => writer.set_str_bytes(i, v).unwrap(),
        }
    }

    let data = writer.build().unwrap();
    assert!(addr_width(data.len()) <= MAX_ADDR_WIDTH);

    let rows = [Row::new(&data)];
    let list = ArrayList::new(&rows);

    for (i, field) in input.fields.iter().enumerate() {
        let offset = layout.fixed_offset(i);
        match field {
            FuzzField::Bool(v) => {
                assert_eq!(FixedColumn::<bool, _>::new(list, offset).at(0).unwrap(), *v);
            }
            FuzzField::Int16(v) => {
                assert_eq!(FixedColumn::<i16, _>::new(list, offset).at(0).unwrap(), *v);
            }
            FuzzField::Int32(v) => {
                assert_eq!(FixedColumn::<i32, _>::new(list, offset).at(0).unwrap(), *v);
            }
            FuzzField::Int64(v) => {
                assert_eq!(FixedColumn::<i64, _>::new(list, offset).at(0).unwrap(), *v);
            }
            FuzzField::Float(v) => {
                let read = FixedColumn::<f32, _>::new(list, offset).at(0).unwrap();
                assert_eq!(read.to_bits(), v.to_bits());
            }
            FuzzField::Double(v) => {
                let read = FixedColumn::<f64, _>::new(list, offset).at(0).unwrap();
                assert_eq!(read.to_bits(), v.to_bits());
            }
            FuzzField::Timestamp(v) => {
                assert_eq!(FixedColumn::<i64, _>::new(list, offset).at(0).unwrap(), *v);
            }
            FuzzField::Str(v) => {
                let column = StringColumn::new(list, layout.str_addr(i).unwrap());
                assert_eq!(column.at(0).unwrap().as_bytes(), v.as_slice());
            }
        }
    }
});
