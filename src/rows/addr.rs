//! # Offset-Table Addressing
//!
//! This module selects and decodes the per-row addressing width: the number
//! of bytes used for each entry in a row's string offset table. The width is
//! a step function of total row length, so small rows pay one byte per string
//! field while large rows widen their entries as needed.
//!
//! ## Width Selection
//!
//! | Row Length             | Entry Width |
//! |------------------------|-------------|
//! | 0 - 255                | 1           |
//! | 256 - 65535            | 2           |
//! | 65536 - 16777215       | 3           |
//! | 16777216 and above     | 4           |
//!
//! The width is always derived from the length of the row being decoded and
//! never cached across rows: rows in one stream may have different lengths
//! and therefore different widths.
//!
//! ## Boundary Values
//!
//! Key boundary values for testing:
//!
//! - 255 (0xFF): widest 1-byte row
//! - 256 (0x100): narrowest 2-byte row
//! - 65535 (0xFFFF): widest 2-byte row
//! - 65536 (0x1_0000): narrowest 3-byte row
//! - 16777215 (0xFF_FFFF): widest 3-byte row
//! - 16777216 (0x100_0000): narrowest 4-byte row
//!
//! ## Usage Example
//!
//! ```rust
//! use flatrow::rows::addr::{addr_width, read_addr, write_addr};
//!
//! let width = addr_width(13);
//! assert_eq!(width, 1);
//!
//! let mut buf = [0u8; 8];
//! write_addr(&mut buf, 4, width, 5).unwrap();
//! assert_eq!(read_addr(&buf, 4, width).unwrap(), 5);
//! ```
//!
//! ## Error Handling
//!
//! `read_addr` and `write_addr` return `eyre::Result` with descriptive
//! messages:
//! - Entry outside the buffer: "offset entry at X width W exceeds row length L"
//! - Value too wide for the entry: "offset value V does not fit addressing width W"
//! - Width outside 1..=4: "unsupported addressing width: W"

use eyre::{ensure, Result};

/// Widest offset-table entry the format allows.
pub const MAX_ADDR_WIDTH: usize = 4;

pub fn addr_width(row_len: usize) -> usize {
    if row_len <= 0xFF {
        1
    } else if row_len <= 0xFFFF {
        2
    } else if row_len <= 0xFF_FFFF {
        3
    } else {
        4
    }
}

pub fn read_addr(buf: &[u8], pos: usize, width: usize) -> Result<u32> {
    ensure!(
        (1..=MAX_ADDR_WIDTH).contains(&width),
        "unsupported addressing width: {}",
        width
    );
    ensure!(
        width <= buf.len() && pos <= buf.len() - width,
        "offset entry at {} width {} exceeds row length {}",
        pos,
        width,
        buf.len()
    );

    let bytes = &buf[pos..pos + width];
    let value = match width {
        1 => bytes[0] as u32,
        2 => u16::from_le_bytes([bytes[0], bytes[1]]) as u32,
        3 => (bytes[0] as u32) | ((bytes[1] as u32) << 8) | ((bytes[2] as u32) << 16),
        _ => u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
    };
    Ok(value)
}

pub fn write_addr(buf: &mut [u8], pos: usize, width: usize, value: u32) -> Result<()> {
    ensure!(
        (1..=MAX_ADDR_WIDTH).contains(&width),
        "unsupported addressing width: {}",
        width
    );
    if width < MAX_ADDR_WIDTH {
        let max = (1u32 << (8 * width)) - 1;
        ensure!(
            value <= max,
            "offset value {} does not fit addressing width {}",
            value,
            width
        );
    }
    ensure!(
        width <= buf.len() && pos <= buf.len() - width,
        "offset entry at {} width {} exceeds buffer length {}",
        pos,
        width,
        buf.len()
    );

    let le = value.to_le_bytes();
    buf[pos..pos + width].copy_from_slice(&le[..width]);
    Ok(())
}
