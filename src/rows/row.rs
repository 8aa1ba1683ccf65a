//! # Row Views
//!
//! A [`Row`] is a borrowed view over one stored record's bytes. Rows are
//! `Copy`: passing one around never transfers or duplicates ownership of the
//! backing buffer, so any number of simultaneously live views may read the
//! same allocation. Ownership lives solely in [`RowBuf`](crate::rows::RowBuf).
//!
//! ## Ordering
//!
//! Rows order lexicographically by byte content with length as the
//! tiebreaker: of two rows sharing a prefix, the shorter sorts first.
//! Equality is content plus length, regardless of which buffer the bytes
//! live in.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Borrowed view over a row's bytes.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    data: &'a [u8],
}

impl<'a> Row<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn empty() -> Row<'static> {
        Row { data: &[] }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Three-way comparison: byte content first, length as the tiebreaker.
    pub fn compare(&self, other: &Row<'_>) -> Ordering {
        self.data.cmp(other.data)
    }
}

impl<'a> From<&'a [u8]> for Row<'a> {
    fn from(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

impl<'a> From<&'a str> for Row<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl PartialEq for Row<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for Row<'_> {}

impl PartialOrd for Row<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Row<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Row<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}
