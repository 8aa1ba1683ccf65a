//! Fuzz testing for row field decoding.
//!
//! Feeds arbitrary row bytes and addressing descriptors through the
//! string bounds resolver and the fixed-width column decoders to ensure
//! malformed rows fail with errors instead of panicking or reading out
//! of bounds.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use flatrow::lists::{ArrayList, FixedColumn, List, StringColumn};
use flatrow::rows::{Row, StrAddr};

#[derive(Debug, Arbitrary)]
struct RowReaderInput {
    data: Vec<u8>,
    addrs: Vec<FuzzStrAddr>,
    offsets: Vec<u16>,
}

#[derive(Debug, Arbitrary)]
enum FuzzStrAddr {
    Resolved {
        slot: u16,
        next_slot: Option<u16>,
        data_start: u16,
    },
    Derived {
        table_base: u16,
        index: u8,
        field_count: u8,
    },
}

impl From<&FuzzStrAddr> for StrAddr {
    fn from(addr: &FuzzStrAddr) -> Self {
        match addr {
            FuzzStrAddr::Resolved {
                slot,
                next_slot,
                data_start,
            } => StrAddr::Resolved {
                slot: *slot as usize,
                next_slot: next_slot.map(|s| s as usize),
                data_start: *data_start as usize,
            },
            FuzzStrAddr::Derived {
                table_base,
                index,
                field_count,
            } => StrAddr::Derived {
                table_base: *table_base as usize,
                index: *index as usize,
                field_count: *field_count as usize,
            },
        }
    }
}

fuzz_target!(|input: RowReaderInput| {
    if input.data.len() > 1 << 16 || input.addrs.len() > 64 || input.offsets.len() > 64 {
        return;
    }

    let rows = [Row::new(&input.data)];
    let list = ArrayList::new(&rows);

    for addr in &input.addrs {
        let column = StringColumn::new(list, addr.into());
        if let Ok(field) = column.at(0) {
            assert!(field.len() <= input.data.len());
            let _ = field.as_str();
        }
    }

    for &offset in &input.offsets {
        let offset = offset as usize;
        let _ = FixedColumn::<bool, _>::new(list, offset).at(0);
        let _ = FixedColumn::<i16, _>::new(list, offset).at(0);
        let _ = FixedColumn::<i32, _>::new(list, offset).at(0);
        let _ = FixedColumn::<i64, _>::new(list, offset).at(0);
        let _ = FixedColumn::<f32, _>::new(list, offset).at(0);
        let _ = FixedColumn::<f64, _>::new(list, offset).at(0);
    }
});
