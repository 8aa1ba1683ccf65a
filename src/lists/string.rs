//! # String Column Projection
//!
//! [`StringColumn`] adapts a `List<Item = Row>` into a list of
//! [`StringRef`] values by resolving one variable-length field per row
//! through its offset table. The column carries a [`StrAddr`] describing
//! where the field's offset entry sits; the entry width is recomputed
//! from each row's length, so one column instance serves a stream that
//! mixes rows encoded at different addressing widths.
//!
//! Field bounds come from consecutive offset entries. The last string
//! field runs to the end of the row, and a zero-length field is a valid
//! empty string. Decoding validates every bound against the row before
//! slicing, so corrupt offset tables surface as errors rather than
//! out-of-range reads.

use eyre::Result;

use super::{Cursor, List};
use crate::rows::{Row, StrAddr};

/// Borrowed view of one string field's bytes inside a row.
///
/// The bytes are not required to be UTF-8 at this layer; [`as_str`]
/// validates on demand for callers that need text.
///
/// [`as_str`]: StringRef::as_str
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringRef<'a> {
    data: &'a [u8],
}

impl<'a> StringRef<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Raw field bytes, borrowed from the row.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Field bytes as text, failing when they are not valid UTF-8.
    pub fn as_str(&self) -> Result<&'a str> {
        std::str::from_utf8(self.data)
            .map_err(|e| eyre::eyre!("invalid UTF-8 in string field: {}", e))
    }
}

fn field_ref<'a>(row: &Row<'a>, addr: &StrAddr) -> Result<StringRef<'a>> {
    let (start, end) = addr.field_bounds(row)?;
    Ok(StringRef::new(&row.as_bytes()[start..end]))
}

/// Projects one variable-length string field out of a row list.
#[derive(Debug, Clone)]
pub struct StringColumn<L> {
    rows: L,
    addr: StrAddr,
}

impl<'a, L> StringColumn<L>
where
    L: List<Item = Row<'a>>,
{
    /// Creates a column resolving the string field `addr` describes.
    pub fn new(rows: L, addr: StrAddr) -> Self {
        Self { rows, addr }
    }

    /// Addressing descriptor this column resolves fields through.
    pub fn addr(&self) -> StrAddr {
        self.addr
    }

    /// Resolves this column's field inside a single row.
    pub fn field(&self, row: &Row<'a>) -> Result<StringRef<'a>> {
        field_ref(row, &self.addr)
    }
}

impl<'a, L> List for StringColumn<L>
where
    L: List<Item = Row<'a>>,
{
    type Item = StringRef<'a>;
    type Cursor<'c>
        = StringColumnCursor<L::Cursor<'c>>
    where
        Self: 'c;

    fn len(&self) -> u64 {
        self.rows.len()
    }

    fn at(&self, pos: u64) -> Result<StringRef<'a>> {
        let row = self.rows.at(pos)?;
        field_ref(&row, &self.addr)
    }

    fn cursor(&self) -> Self::Cursor<'_> {
        StringColumnCursor {
            rows: self.rows.cursor(),
            addr: self.addr,
        }
    }
}

/// Cursor adapter resolving a string field from each row the inner
/// cursor yields.
#[derive(Debug, Clone)]
pub struct StringColumnCursor<C> {
    rows: C,
    addr: StrAddr,
}

impl<'a, C> Cursor for StringColumnCursor<C>
where
    C: Cursor<Key = u64, Value = Row<'a>>,
{
    type Key = u64;
    type Value = StringRef<'a>;

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

    fn value(&self) -> Result<StringRef<'a>> {
        let row = self.rows.value()?;
        field_ref(&row, &self.addr)
    }
}
