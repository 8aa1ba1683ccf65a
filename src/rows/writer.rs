//! # RowWriter - Row Construction
//!
//! This module provides `RowWriter` for building rows in the flat binary
//! format with type-checked setters. Unset fixed fields encode as zeroes and
//! unset string fields as empty strings. The writer picks the narrowest
//! addressing width whose resulting total length still maps back to that
//! width, then lays out the fixed fields, the offset table, and the
//! concatenated string data.
//!
//! ## Usage
//!
//! ```rust
//! use flatrow::rows::{FieldDef, FieldType, RowLayout, RowWriter};
//!
//! let layout = RowLayout::new(vec![
//!     FieldDef::new("id", FieldType::Int32),
//!     FieldDef::new("name", FieldType::Str),
//! ]);
//!
//! let mut writer = RowWriter::new(&layout);
//! writer.set_int32(0, 42).unwrap();
//! writer.set_str(1, "hello").unwrap();
//! let data = writer.build().unwrap();
//! assert_eq!(data.len(), 10);
//!
//! // Reuse the writer for the next row
//! writer.reset();
//! ```

use eyre::{ensure, Result};
use smallvec::SmallVec;

use crate::rows::addr::{addr_width, write_addr, MAX_ADDR_WIDTH};
use crate::rows::layout::{FieldType, RowLayout};

pub struct RowWriter<'a> {
    layout: &'a RowLayout,
    fixed_data: Vec<u8>,
    str_data: Vec<Vec<u8>>,
}

impl<'a> RowWriter<'a> {
    pub fn new(layout: &'a RowLayout) -> Self {
        Self {
            layout,
            fixed_data: vec![0u8; layout.total_fixed_size()],
            str_data: vec![Vec::new(); layout.str_field_count()],
        }
    }

    pub fn reset(&mut self) {
        self.fixed_data.fill(0);
        for value in &mut self.str_data {
            value.clear();
        }
    }

    fn set_fixed_bytes(&mut self, idx: usize, expected: FieldType, bytes: &[u8]) -> Result<()> {
        let field = self
            .layout
            .field(idx)
            .ok_or_else(|| eyre::eyre!("field {} not found", idx))?;
        ensure!(
            field.field_type == expected,
            "field {} is {:?}, not {:?}",
            idx,
            field.field_type,
            expected
        );
        let offset = self.layout.fixed_offset(idx);
        self.fixed_data[offset..offset + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    pub fn set_bool(&mut self, idx: usize, value: bool) -> Result<()> {
        self.set_fixed_bytes(idx, FieldType::Bool, &[if value { 1 } else { 0 }])
    }

    pub fn set_int16(&mut self, idx: usize, value: i16) -> Result<()> {
        self.set_fixed_bytes(idx, FieldType::Int16, &value.to_le_bytes())
    }

    pub fn set_int32(&mut self, idx: usize, value: i32) -> Result<()> {
        self.set_fixed_bytes(idx, FieldType::Int32, &value.to_le_bytes())
    }

    pub fn set_int64(&mut self, idx: usize, value: i64) -> Result<()> {
        self.set_fixed_bytes(idx, FieldType::Int64, &value.to_le_bytes())
    }

    pub fn set_float(&mut self, idx: usize, value: f32) -> Result<()> {
        self.set_fixed_bytes(idx, FieldType::Float, &value.to_le_bytes())
    }

    pub fn set_double(&mut self, idx: usize, value: f64) -> Result<()> {
        self.set_fixed_bytes(idx, FieldType::Double, &value.to_le_bytes())
    }

    pub fn set_timestamp(&mut self, idx: usize, micros: i64) -> Result<()> {
        self.set_fixed_bytes(idx, FieldType::Timestamp, &micros.to_le_bytes())
    }

    pub fn set_str(&mut self, idx: usize, value: &str) -> Result<()> {
        self.set_str_bytes(idx, value.as_bytes())
    }

    pub fn set_str_bytes(&mut self, idx: usize, value: &[u8]) -> Result<()> {
        let table_idx = self
            .layout
            .str_field_index(idx)
            .ok_or_else(|| eyre::eyre!("field {} is not a string field", idx))?;
        self.str_data[table_idx] = value.to_vec();
        Ok(())
    }

    /// Total encoded length and the addressing width it implies.
    ///
    /// Widening the entries grows the row, which in turn can demand a wider
    /// entry, so each candidate width is checked against the total it
    /// produces.
    fn pick_width(&self) -> Result<(usize, usize)> {
        let fixed = self.layout.total_fixed_size();
        let entries = self.str_data.len();
        let str_bytes: usize = self.str_data.iter().map(|v| v.len()).sum();

        for width in 1..MAX_ADDR_WIDTH {
            let total = fixed + entries * width + str_bytes;
            if addr_width(total) <= width {
                return Ok((total, width));
            }
        }

        let total = fixed + entries * MAX_ADDR_WIDTH + str_bytes;
        ensure!(
            total <= u32::MAX as usize,
            "row length {} exceeds addressable size",
            total
        );
        Ok((total, MAX_ADDR_WIDTH))
    }

    pub fn build(&self) -> Result<Vec<u8>> {
        let (total, width) = self.pick_width()?;
        let table_base = self.layout.total_fixed_size();

        let mut starts: SmallVec<[u32; 8]> = SmallVec::with_capacity(self.str_data.len());
        let mut cursor: u32 = 0;
        for value in &self.str_data {
            starts.push(cursor);
            cursor += value.len() as u32;
        }

        let mut result = vec![0u8; total];
        result[..table_base].copy_from_slice(&self.fixed_data);

        for (table_idx, &start) in starts.iter().enumerate() {
            write_addr(&mut result, table_base + table_idx * width, width, start)?;
        }

        let mut pos = table_base + self.str_data.len() * width;
        for value in &self.str_data {
            result[pos..pos + value.len()].copy_from_slice(value);
            pos += value.len();
        }

        Ok(result)
    }
}
