//! # Row Layouts
//!
//! This module provides the `RowLayout` struct that describes one row shape:
//! which fields exist, their declared types, and where each lives in the
//! binary format. The layout pre-computes offsets so per-row decoding is pure
//! arithmetic.
//!
//! ## Layout Internals
//!
//! - `fields`: Vector of field definitions in declaration order
//! - `str_field_indices`: Indices of string fields (for the offset table)
//! - `fixed_offsets`: Pre-computed byte offsets into the fixed region
//! - `name_index`: Field name to index lookup
//! - `total_fixed_size`: Total size of all fixed-width fields, which is also
//!   where the offset table starts

use eyre::{ensure, Result};
use hashbrown::HashMap;

use crate::rows::addr::{addr_width, read_addr};
use crate::rows::row::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Bool,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    Timestamp,
    Str,
}

impl FieldType {
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            FieldType::Bool => Some(1),
            FieldType::Int16 => Some(2),
            FieldType::Int32 => Some(4),
            FieldType::Int64 => Some(8),
            FieldType::Float => Some(4),
            FieldType::Double => Some(8),
            FieldType::Timestamp => Some(8),
            FieldType::Str => None,
        }
    }

    pub fn is_variable(&self) -> bool {
        self.fixed_size().is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub field_type: FieldType,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RowLayout {
    fields: Vec<FieldDef>,
    str_field_indices: Vec<usize>,
    fixed_offsets: Vec<usize>,
    name_index: HashMap<String, usize>,
    total_fixed_size: usize,
}

impl RowLayout {
    pub fn new(fields: Vec<FieldDef>) -> Self {
        let mut str_field_indices = Vec::new();
        let mut fixed_offsets = Vec::with_capacity(fields.len());
        let mut name_index = HashMap::with_capacity(fields.len());
        let mut offset = 0;

        for (idx, field) in fields.iter().enumerate() {
            fixed_offsets.push(offset);
            if let Some(size) = field.field_type.fixed_size() {
                offset += size;
            } else {
                str_field_indices.push(idx);
            }
            name_index.insert(field.name.clone(), idx);
        }

        Self {
            fields,
            str_field_indices,
            fixed_offsets,
            name_index,
            total_fixed_size: offset,
        }
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn str_field_count(&self) -> usize {
        self.str_field_indices.len()
    }

    pub fn field(&self, idx: usize) -> Option<&FieldDef> {
        self.fields.get(idx)
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.name_index.get(name).copied()
    }

    pub fn fixed_offset(&self, idx: usize) -> usize {
        self.fixed_offsets[idx]
    }

    /// Position of `idx` among the row's string fields, if it is one.
    pub fn str_field_index(&self, idx: usize) -> Option<usize> {
        self.str_field_indices.iter().position(|&i| i == idx)
    }

    /// Total size of the fixed region; the offset table starts here.
    pub fn total_fixed_size(&self) -> usize {
        self.total_fixed_size
    }

    /// Addressing for the string field at `idx`, resolved against each row's
    /// own width at decode time.
    pub fn str_addr(&self, idx: usize) -> Result<StrAddr> {
        let table_idx = self
            .str_field_index(idx)
            .ok_or_else(|| eyre::eyre!("field {} is not a string field", idx))?;
        Ok(StrAddr::Derived {
            table_base: self.total_fixed_size,
            index: table_idx,
            field_count: self.str_field_indices.len(),
        })
    }
}

/// How to locate one string field's bounds inside a row.
///
/// `Resolved` carries absolute offset-table slot positions handed over by the
/// planner; it is only sound when every row of the stream shares one
/// addressing width. `Derived` re-computes slot positions from the table base
/// and field index using the width of the row actually being decoded, which
/// stays correct when row lengths in one stream straddle a width boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrAddr {
    Resolved {
        /// Byte position of this field's offset-table entry.
        slot: usize,
        /// Byte position of the next field's entry; `None` for the last field.
        next_slot: Option<usize>,
        /// Byte position where the string data region starts.
        data_start: usize,
    },
    Derived {
        /// Byte position of the offset table (end of the fixed region).
        table_base: usize,
        /// This field's position among the row's string fields.
        index: usize,
        /// Total number of string fields in the row.
        field_count: usize,
    },
}

impl StrAddr {
    /// Absolute `[start, end)` byte range of the field inside `row`.
    ///
    /// Table entries hold offsets relative to the string-data start; the last
    /// field ends where the row does.
    pub fn field_bounds(&self, row: &Row<'_>) -> Result<(usize, usize)> {
        let data = row.as_bytes();
        let width = addr_width(data.len());

        let (data_start, start, next) = match *self {
            StrAddr::Resolved {
                slot,
                next_slot,
                data_start,
            } => {
                let start = read_addr(data, slot, width)? as usize;
                let next = match next_slot {
                    Some(next_slot) => read_addr(data, next_slot, width)? as usize,
                    None => region_len(data.len(), data_start)?,
                };
                (data_start, start, next)
            }
            StrAddr::Derived {
                table_base,
                index,
                field_count,
            } => {
                ensure!(
                    index < field_count,
                    "string field index {} out of range for {} fields",
                    index,
                    field_count
                );
                let slot = table_slot(table_base, index, width)?;
                let data_start = table_slot(table_base, field_count, width)?;
                let start = read_addr(data, slot, width)? as usize;
                let next = if index + 1 < field_count {
                    read_addr(data, slot + width, width)? as usize
                } else {
                    region_len(data.len(), data_start)?
                };
                (data_start, start, next)
            }
        };

        ensure!(
            start <= next,
            "string field bounds inverted: start {} > end {}",
            start,
            next
        );
        let end = data_start
            .checked_add(next)
            .ok_or_else(|| eyre::eyre!("string field end overflows"))?;
        ensure!(
            end <= data.len(),
            "string field end {} exceeds row length {}",
            end,
            data.len()
        );
        Ok((data_start + start, end))
    }
}

fn table_slot(table_base: usize, index: usize, width: usize) -> Result<usize> {
    index
        .checked_mul(width)
        .and_then(|offset| table_base.checked_add(offset))
        .ok_or_else(|| {
            eyre::eyre!(
                "offset table slot overflows: base {} index {}",
                table_base,
                index
            )
        })
}

fn region_len(row_len: usize, data_start: usize) -> Result<usize> {
    row_len.checked_sub(data_start).ok_or_else(|| {
        eyre::eyre!(
            "string data start {} exceeds row length {}",
            data_start,
            row_len
        )
    })
}
