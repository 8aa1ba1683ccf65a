//! # Owned Row Buffers
//!
//! `RowBuf` is the single owning handle for a row allocation. Clones share
//! the backing memory through a reference count, so the bytes are released
//! exactly once, when the last handle drops. Read access goes through
//! [`Row`] views, which carry no release responsibility.

use std::sync::Arc;

use crate::rows::row::Row;

/// Reference-counted immutable row bytes.
#[derive(Debug, Clone)]
pub struct RowBuf {
    data: Arc<[u8]>,
}

impl RowBuf {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data: data.into() }
    }

    pub fn from_slice(data: &[u8]) -> Self {
        Self {
            data: Arc::from(data),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrowed view over the buffer's bytes.
    pub fn row(&self) -> Row<'_> {
        Row::new(&self.data)
    }
}

impl From<Vec<u8>> for RowBuf {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for RowBuf {
    fn from(data: &[u8]) -> Self {
        Self::from_slice(data)
    }
}

impl AsRef<[u8]> for RowBuf {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
