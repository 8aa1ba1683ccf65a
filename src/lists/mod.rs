//! # Forward-Iterable List Collections
//!
//! Generic positional collections with ordered cursor iteration. Every
//! collection in this module exposes the same two-trait surface:
//!
//! - [`List`] for random access (`len`, `at`) and cursor construction
//! - [`Cursor`] for ordered forward traversal with positional seek
//!
//! ## Architecture
//!
//! ```text
//!                          ┌─────────────────┐
//!                          │   ArrayList     │  contiguous slice window
//!                          └────────┬────────┘
//!                                   │ List<Item = Row>
//!                  ┌────────────────┼────────────────┐
//!                  ▼                ▼                ▼
//!          ┌──────────────┐ ┌──────────────┐ ┌──────────────┐
//!          │ FixedColumn  │ │ StringColumn │ │  WindowMap   │
//!          │ i32/f64/...  │ │ StringRef    │ │ key → rows   │
//!          └──────────────┘ └──────────────┘ └──────────────┘
//! ```
//!
//! The column adapters are lists themselves: a `FixedColumn<i32, _>` wraps
//! any `List<Item = Row>` and projects one fixed-width field out of each
//! row, so columns compose with the same cursors and bounds as the row
//! lists they wrap. Nothing is decoded until a value is requested.
//!
//! ## Cursor Contract
//!
//! | Operation       | Effect                                             |
//! |-----------------|----------------------------------------------------|
//! | `seek(k)`       | position at entry `k` past the list start          |
//! | `seek_to_first` | rewind to the first entry                          |
//! | `valid`         | `true` while positioned on an entry                |
//! | `advance`       | step forward, `Ok(true)` while entries remain      |
//! | `key`           | offset of the current entry from the list start    |
//! | `value`         | decode the current entry                           |
//!
//! Cursors are born positioned on the first entry. Seeking past the end
//! parks the cursor in the exhausted state rather than failing; `key` and
//! `value` on an exhausted cursor return an error.
//!
//! ## Module Structure
//!
//! - `array`: slice-backed positional lists with subrange windows
//! - `column`: fixed-width field projection over row lists
//! - `string`: variable-length string field projection over row lists
//! - `window`: partition maps with key-ordered window cursors

mod array;
mod column;
mod string;
mod window;


pub use array::{ArrayList, ArrayListCursor};
pub use column::{FixedColumn, FixedColumnCursor, FixedField};
pub use string::{StringColumn, StringColumnCursor, StringRef};
pub use window::{WindowCursor, WindowMap, WindowMapCursor};

use eyre::Result;

use crate::rows::Row;

/// Ordered forward traversal over a list.
///
/// A cursor is always either positioned on an entry or exhausted. All
/// accessors report the exhausted state through `Result` rather than
/// panicking, so adapters can forward errors from the lists they wrap.
pub trait Cursor {
    type Key;
    type Value;

    /// Positions the cursor at the entry `key` places past the list
    /// start, or exhausts it when no such entry exists.
    fn seek(&mut self, key: &Self::Key);

    /// Rewinds the cursor to the first entry.
    fn seek_to_first(&mut self);

    /// Returns true while the cursor is positioned on an entry.
    fn valid(&self) -> bool;

    /// Steps to the next entry. Returns `Ok(true)` if the cursor landed
    /// on an entry and `Ok(false)` once it is exhausted.
    fn advance(&mut self) -> Result<bool>;

    /// Returns the key of the current entry.
    fn key(&self) -> Result<Self::Key>;

    /// Decodes and returns the current entry.
    fn value(&self) -> Result<Self::Value>;
}

/// Random access over a finite ordered collection.
///
/// Keys are dense positions: entry `i` has key `i`, counted from the
/// start of the list. Implementations that window a larger buffer
/// renumber from their own start, so key `0` is always the first
/// visible entry.
pub trait List {
    type Item;
    type Cursor<'c>: Cursor<Key = u64, Value = Self::Item>
    where
        Self: 'c;

    /// Number of entries in the list.
    fn len(&self) -> u64;

    /// Returns the entry at `pos`, failing when `pos >= len()`.
    fn at(&self, pos: u64) -> Result<Self::Item>;

    /// Opens a cursor positioned on the first entry.
    fn cursor(&self) -> Self::Cursor<'_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: List> List for &T {
    type Item = T::Item;
    type Cursor<'c>
        = T::Cursor<'c>
    where
        Self: 'c;

    fn len(&self) -> u64 {
        (**self).len()
    }

    fn at(&self, pos: u64) -> Result<Self::Item> {
        (**self).at(pos)
    }

    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }
}

/// Owned row cursor handed out by window iteration, where the concrete
/// cursor type depends on how the partition stores its rows.
pub type BoxedRowCursor<'a, 'c> = Box<dyn Cursor<Key = u64, Value = Row<'a>> + 'c>;

impl<'a, 'c> Cursor for BoxedRowCursor<'a, 'c> {
    type Key = u64;
    type Value = Row<'a>;

    fn seek(&mut self, key: &u64) {
        (**self).seek(key);
    }

    fn seek_to_first(&mut self) {
        (**self).seek_to_first();
    }

    fn valid(&self) -> bool {
        (**self).valid()
    }

    fn advance(&mut self) -> Result<bool> {
        (**self).advance()
    }

    fn key(&self) -> Result<u64> {
        (**self).key()
    }

    fn value(&self) -> Result<Row<'a>> {
        (**self).value()
    }
}
