//! # Fixed-Width Column Projection
//!
//! [`FixedColumn`] adapts any `List<Item = Row>` into a list of typed
//! values by decoding one fixed-width field out of each row. The field
//! lives at a constant byte offset inside the fixed region, so
//! projection is a bounds check plus a little-endian decode per row.
//! Rows are never copied and nothing is decoded ahead of access.
//!
//! ## Supported Value Types
//!
//! | Rust type | Width | Encoding                  |
//! |-----------|-------|---------------------------|
//! | `bool`    | 1     | zero is false             |
//! | `i16`     | 2     | little-endian             |
//! | `i32`     | 4     | little-endian             |
//! | `i64`     | 8     | little-endian (timestamps included) |
//! | `u16`     | 2     | little-endian             |
//! | `u32`     | 4     | little-endian             |
//! | `u64`     | 8     | little-endian             |
//! | `f32`     | 4     | IEEE 754 little-endian    |
//! | `f64`     | 8     | IEEE 754 little-endian    |
//!
//! Rows shorter than `offset + width` fail the decode with an error
//! naming the offending offset, so a stream mixing malformed rows in
//! with good ones reports the bad row instead of reading out of bounds.

use std::marker::PhantomData;

use eyre::{ensure, Result};

use super::{Cursor, List};
use crate::rows::Row;

/// A value type decodable from a fixed-width little-endian field.
pub trait FixedField: Copy {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Decodes a value from exactly [`Self::WIDTH`] bytes.
    fn decode(bytes: &[u8]) -> Result<Self>;
}

impl FixedField for bool {
    const WIDTH: usize = 1;

    fn decode(bytes: &[u8]) -> Result<Self> {
        ensure!(bytes.len() == 1, "insufficient data for bool");
        Ok(bytes[0] != 0)
    }
}

impl FixedField for i16 {
    const WIDTH: usize = 2;

    fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(i16::from_le_bytes(
            bytes
                .try_into()
                .map_err(|_| eyre::eyre!("insufficient data for i16"))?,
        ))
    }
}

impl FixedField for i32 {
    const WIDTH: usize = 4;

    fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(i32::from_le_bytes(
            bytes
                .try_into()
                .map_err(|_| eyre::eyre!("insufficient data for i32"))?,
        ))
    }
}

impl FixedField for i64 {
    const WIDTH: usize = 8;

    fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(i64::from_le_bytes(
            bytes
                .try_into()
                .map_err(|_| eyre::eyre!("insufficient data for i64"))?,
        ))
    }
}

impl FixedField for u16 {
    const WIDTH: usize = 2;

    fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(u16::from_le_bytes(
            bytes
                .try_into()
                .map_err(|_| eyre::eyre!("insufficient data for u16"))?,
        ))
    }
}

impl FixedField for u32 {
    const WIDTH: usize = 4;

    fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(u32::from_le_bytes(
            bytes
                .try_into()
                .map_err(|_| eyre::eyre!("insufficient data for u32"))?,
        ))
    }
}

impl FixedField for u64 {
    const WIDTH: usize = 8;

    fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(u64::from_le_bytes(
            bytes
                .try_into()
                .map_err(|_| eyre::eyre!("insufficient data for u64"))?,
        ))
    }
}

impl FixedField for f32 {
    const WIDTH: usize = 4;

    fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(f32::from_le_bytes(
            bytes
                .try_into()
                .map_err(|_| eyre::eyre!("insufficient data for f32"))?,
        ))
    }
}

impl FixedField for f64 {
    const WIDTH: usize = 8;

    fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(f64::from_le_bytes(
            bytes
                .try_into()
                .map_err(|_| eyre::eyre!("insufficient data for f64"))?,
        ))
    }
}

fn decode_field<V: FixedField>(row: &Row<'_>, offset: usize) -> Result<V> {
    let data = row.as_bytes();
    ensure!(
        offset <= data.len() && V::WIDTH <= data.len() - offset,
        "field offset {} width {} exceeds row length {}",
        offset,
        V::WIDTH,
        data.len()
    );
    V::decode(&data[offset..offset + V::WIDTH])
}

/// Projects a fixed-width field at a constant byte offset out of a row
/// list.
#[derive(Debug, Clone)]
pub struct FixedColumn<V, L> {
    rows: L,
    offset: usize,
    _value: PhantomData<V>,
}

impl<'a, V, L> FixedColumn<V, L>
where
    V: FixedField,
    L: List<Item = Row<'a>>,
{
    /// Creates a column reading `V` at byte `offset` of each row.
    pub fn new(rows: L, offset: usize) -> Self {
        Self {
            rows,
            offset,
            _value: PhantomData,
        }
    }

    /// Byte offset this column reads from.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Decodes this column's field out of a single row.
    pub fn field(&self, row: &Row<'a>) -> Result<V> {
        decode_field(row, self.offset)
    }
}

impl<'a, V, L> List for FixedColumn<V, L>
where
    V: FixedField,
    L: List<Item = Row<'a>>,
{
    type Item = V;
    type Cursor<'c>
        = FixedColumnCursor<V, L::Cursor<'c>>
    where
        Self: 'c;

    fn len(&self) -> u64 {
        self.rows.len()
    }

    fn at(&self, pos: u64) -> Result<V> {
        let row = self.rows.at(pos)?;
        decode_field(&row, self.offset)
    }

    fn cursor(&self) -> Self::Cursor<'_> {
        FixedColumnCursor {
            rows: self.rows.cursor(),
            offset: self.offset,
            _value: PhantomData,
        }
    }
}

/// Cursor adapter decoding a fixed-width field from each row the inner
/// cursor yields. Positioning is delegated wholesale; only `value`
/// touches row bytes.
#[derive(Debug, Clone)]
pub struct FixedColumnCursor<V, C> {
    rows: C,
    offset: usize,
    _value: PhantomData<V>,
}

impl<'a, V, C> Cursor for FixedColumnCursor<V, C>
where
    V: FixedField,
    C: Cursor<Key = u64, Value = Row<'a>>,
{
    type Key = u64;
    type Value = V;

    fn seek(&mut self, key: &u64) {
        self.rows.seek(key);
    }

    fn seek_to_first(&mut self) {
        self.rows.seek_to_first();
    }

    fn valid(&self) -> bool {
        self.rows.valid()
    }

    fn advance(&mut self) -> Result<bool> {
        self.rows.advance()
    }

    fn key(&self) -> Result<u64> {
        self.rows.key()
    }

    fn value(&self) -> Result<V> {
        let row = self.rows.value()?;
        decode_field(&row, self.offset)
    }
}
