//! # Keyed Window Iteration
//!
//! [`WindowMap`] groups rows into partitions under opaque byte-string
//! keys and walks them through a [`WindowCursor`]: one cursor position
//! per partition, each handing out a nested row cursor over that
//! partition's rows.
//!
//! ```text
//! WindowMap
//! ├── "device-a" → [row, row, row]      ← rows() cursor per partition
//! ├── "device-b" → [row]
//! └── "device-c" → [row, row]
//!     ▲
//!     └── cursor walks keys in ascending Row order
//! ```
//!
//! ## Ordering
//!
//! Partitions are visited in ascending key order, keys comparing by
//! content first and length second like any other [`Row`]. Within a
//! partition, rows keep the order they were pushed in; the map never
//! reorders them, so a caller feeding newest-first sees newest-first
//! back. Pushing to an existing key appends.
//!
//! ## Usage
//!
//! ```
//! use flatrow::lists::{Cursor, WindowCursor, WindowMap};
//! use flatrow::rows::Row;
//!
//! # fn main() -> eyre::Result<()> {
//! let mut windows = WindowMap::new();
//! windows.push(Row::from("b"), Row::from("row-b1"));
//! windows.push(Row::from("a"), Row::from("row-a1"));
//! windows.push(Row::from("a"), Row::from("row-a2"));
//!
//! let mut cursor = windows.cursor();
//! assert_eq!(cursor.key()?, Row::from("a"));
//! {
//!     let rows = cursor.rows()?;
//!     assert_eq!(rows.value()?, Row::from("row-a1"));
//! }
//!
//! cursor.seek(b"b");
//! assert_eq!(cursor.key()?, Row::from("b"));
//! assert!(!cursor.advance()?);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

use eyre::{ensure, Result};

use super::array::ArrayListCursor;
use super::BoxedRowCursor;
use crate::rows::Row;

/// Ordered traversal over keyed partitions, one position per partition.
///
/// Mirrors [`Cursor`] but keys are byte strings with ordered seek
/// semantics: `seek(k)` lands on the first partition whose key is `>= k`
/// instead of requiring an exact hit.
///
/// [`Cursor`]: super::Cursor
pub trait WindowCursor<'a> {
    /// Positions the cursor on the first partition with key `>= key`,
    /// exhausting it when every key is smaller.
    fn seek(&mut self, key: &[u8]);

    /// Rewinds to the first partition in key order.
    fn seek_to_first(&mut self);

    /// Returns true while the cursor is positioned on a partition.
    fn valid(&self) -> bool;

    /// Steps to the next partition in key order. Returns `Ok(true)`
    /// while partitions remain.
    fn advance(&mut self) -> Result<bool>;

    /// Key of the current partition.
    fn key(&self) -> Result<Row<'a>>;

    /// Opens a row cursor over the current partition, positioned on its
    /// first row.
    fn rows(&self) -> Result<BoxedRowCursor<'a, '_>>;
}

/// Partition map from byte-string keys to the rows pushed under them.
#[derive(Debug, Default)]
pub struct WindowMap<'a> {
    parts: BTreeMap<Row<'a>, Vec<Row<'a>>>,
}

impl<'a> WindowMap<'a> {
    pub fn new() -> Self {
        Self {
            parts: BTreeMap::new(),
        }
    }

    /// Appends `row` to the partition under `key`, creating the
    /// partition on first use.
    pub fn push(&mut self, key: Row<'a>, row: Row<'a>) {
        self.parts.entry(key).or_default().push(row);
    }

    /// Number of partitions.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Opens a cursor positioned on the first partition in key order.
    pub fn cursor(&self) -> WindowMapCursor<'_, 'a> {
        WindowMapCursor {
            parts: self
                .parts
                .iter()
                .map(|(key, rows)| (*key, rows.as_slice()))
                .collect(),
            pos: 0,
        }
    }
}

/// Cursor over a [`WindowMap`] snapshot. Holds the partitions as a
/// sorted vector, so seek is a binary search over keys.
#[derive(Debug)]
pub struct WindowMapCursor<'w, 'a> {
    parts: Vec<(Row<'a>, &'w [Row<'a>])>,
    pos: usize,
}

impl<'w, 'a> WindowCursor<'a> for WindowMapCursor<'w, 'a> {
    fn seek(&mut self, key: &[u8]) {
        self.pos = self
            .parts
            .partition_point(|(part_key, _)| part_key.as_bytes() < key);
    }

    fn seek_to_first(&mut self) {
        self.pos = 0;
    }

    fn valid(&self) -> bool {
        self.pos < self.parts.len()
    }

    fn advance(&mut self) -> Result<bool> {
        if self.pos >= self.parts.len() {
            return Ok(false);
        }
        self.pos += 1;
        Ok(self.pos < self.parts.len())
    }

    fn key(&self) -> Result<Row<'a>> {
        ensure!(self.valid(), "cursor is exhausted");
        Ok(self.parts[self.pos].0)
    }

    fn rows(&self) -> Result<BoxedRowCursor<'a, '_>> {
        ensure!(self.valid(), "cursor is exhausted");
        Ok(Box::new(ArrayListCursor::over(self.parts[self.pos].1)))
    }
}
