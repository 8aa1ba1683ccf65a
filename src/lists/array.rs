//! # Slice-Backed Positional Lists
//!
//! [`ArrayList`] wraps a borrowed slice and exposes it through the
//! [`List`] trait, optionally restricted to a `[start, end)` window of
//! the underlying buffer. Windows renumber positions from their own
//! start, so position `0` is always the first visible entry regardless
//! of where the window sits in the buffer.
//!
//! ## Subranges
//!
//! [`ArrayList::range`] intersects the requested bounds with the current
//! window and clamps them to it:
//!
//! ```text
//! buffer:   [10, 20, 30, 40, 50]
//! range(1, 3)  ->  window over [20, 30]
//! range(3, 99) ->  window over [40, 50]   (end clamped)
//! range(4, 2)  ->  empty window           (inverted bounds)
//! ```
//!
//! An empty intersection produces a zero-length window anchored at the
//! parent's start, so cursors over it are exhausted immediately.
//!
//! ## Usage
//!
//! ```
//! use flatrow::lists::{ArrayList, Cursor, List};
//!
//! # fn main() -> eyre::Result<()> {
//! let items = [10u32, 20, 30, 40, 50];
//! let list = ArrayList::new(&items);
//! assert_eq!(list.len(), 5);
//! assert_eq!(list.at(2)?, 30);
//!
//! let window = list.range(1, 3);
//! let mut cursor = window.cursor();
//! assert_eq!(cursor.value()?, 20);
//! cursor.advance()?;
//! assert_eq!(cursor.value()?, 30);
//! assert!(!cursor.advance()?);
//! # Ok(())
//! # }
//! ```

use eyre::{ensure, Result};

use super::{Cursor, List};

/// Borrowed slice window implementing [`List`].
#[derive(Debug, Clone, Copy)]
pub struct ArrayList<'a, V> {
    items: &'a [V],
    start: usize,
    end: usize,
}

impl<'a, V: Copy> ArrayList<'a, V> {
    /// Creates a list over the whole slice.
    pub fn new(items: &'a [V]) -> Self {
        Self {
            items,
            start: 0,
            end: items.len(),
        }
    }

    /// Creates a list over `items[start..end]`, failing when the bounds
    /// do not describe a valid window of the slice.
    pub fn with_bounds(items: &'a [V], start: usize, end: usize) -> Result<Self> {
        ensure!(
            start <= end && end <= items.len(),
            "bounds [{}, {}) invalid for buffer of {} items",
            start,
            end,
            items.len()
        );
        Ok(Self { items, start, end })
    }

    /// First buffer position visible through this window.
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last buffer position visible through this window.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the window `[lo, hi)` intersected with this one. Bounds
    /// are absolute buffer positions. A disjoint or inverted request
    /// yields an empty window anchored at this window's start.
    pub fn range(&self, lo: usize, hi: usize) -> Self {
        let lo = lo.max(self.start);
        let hi = hi.min(self.end);
        if lo >= hi {
            Self {
                items: self.items,
                start: self.start,
                end: self.start,
            }
        } else {
            Self {
                items: self.items,
                start: lo,
                end: hi,
            }
        }
    }
}

impl<'a, V: Copy> List for ArrayList<'a, V> {
    type Item = V;
    type Cursor<'c>
        = ArrayListCursor<'a, V>
    where
        Self: 'c;

    fn len(&self) -> u64 {
        (self.end - self.start) as u64
    }

    fn at(&self, pos: u64) -> Result<V> {
        ensure!(
            pos < self.len(),
            "position {} out of range for list of {}",
            pos,
            self.len()
        );
        Ok(self.items[self.start + pos as usize])
    }

    fn cursor(&self) -> ArrayListCursor<'a, V> {
        ArrayListCursor {
            items: self.items,
            start: self.start,
            end: self.end,
            pos: self.start,
        }
    }
}

/// Cursor over an [`ArrayList`] window. Seek is O(1) position
/// arithmetic; seeking past the end exhausts the cursor.
#[derive(Debug, Clone, Copy)]
pub struct ArrayListCursor<'a, V> {
    items: &'a [V],
    start: usize,
    end: usize,
    pos: usize,
}

impl<'a, V: Copy> ArrayListCursor<'a, V> {
    /// Opens a cursor over the whole slice, positioned on the first
    /// entry.
    pub fn over(items: &'a [V]) -> Self {
        Self {
            items,
            start: 0,
            end: items.len(),
            pos: 0,
        }
    }

    /// Carves the window `[lo, hi)` out of this cursor's window, clamped
    /// the same way as [`ArrayList::range`], and returns a cursor
    /// positioned on its first entry.
    pub fn range(&self, lo: usize, hi: usize) -> Self {
        let lo = lo.max(self.start);
        let hi = hi.min(self.end);
        if lo >= hi {
            Self {
                items: self.items,
                start: self.start,
                end: self.start,
                pos: self.start,
            }
        } else {
            Self {
                items: self.items,
                start: lo,
                end: hi,
                pos: lo,
            }
        }
    }
}

impl<'a, V: Copy> Cursor for ArrayListCursor<'a, V> {
    type Key = u64;
    type Value = V;

    fn seek(&mut self, key: &u64) {
        // Compute in u64 so 32-bit targets never truncate the key.
        let target = (self.start as u64).saturating_add(*key);
        self.pos = target.min(self.end as u64) as usize;
    }

    fn seek_to_first(&mut self) {
        self.pos = self.start;
    }

    fn valid(&self) -> bool {
        self.pos < self.end
    }

    fn advance(&mut self) -> Result<bool> {
        if self.pos >= self.end {
            return Ok(false);
        }
        self.pos += 1;
        Ok(self.pos < self.end)
    }

    fn key(&self) -> Result<u64> {
        ensure!(self.valid(), "cursor is exhausted");
        Ok((self.pos - self.start) as u64)
    }

    fn value(&self) -> Result<V> {
        ensure!(self.valid(), "cursor is exhausted");
        Ok(self.items[self.pos])
    }
}
