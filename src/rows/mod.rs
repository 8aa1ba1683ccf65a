//! # Flat Binary Row Format
//!
//! This module owns the row side of the crate: owned buffers, borrowed views,
//! the addressing-width scheme for variable-length fields, layouts describing
//! row shapes, and the writer that assembles rows. Everything downstream
//! (column projection, window iteration) consumes rows through the [`Row`]
//! view without copying them.
//!
//! ## Row Binary Layout
//!
//! ```text
//! +--------------------+---------------------+----------------------+
//! | Fixed Fields       | Offset Table        | String Data          |
//! | (declared sizes)   | [w bytes; S]        | [u8; ...]            |
//! +--------------------+---------------------+----------------------+
//! ```
//!
//! | Component | Description |
//! |-----------|-------------|
//! | **Fixed Fields** | Little-endian values of every fixed-width field, in declaration order |
//! | **Offset Table** | One `w`-byte entry per string field, holding the field's start relative to the string-data start |
//! | **String Data** | Concatenated string payloads in declaration order |
//!
//! `S` is the number of string fields. `w` is the addressing width, a step
//! function of total row length (1 byte for rows up to 255 bytes, 2 up to
//! 65535, 3 up to 16777215, 4 beyond), re-derived from each row at decode
//! time. String field `k` spans `[entry(k), entry(k+1))`, or
//! `[entry(S-1), row_len - data_start)` for the last field; concatenating all
//! fields in order reconstructs the string data region exactly.
//!
//! ## Design Goals
//!
//! 1. **Zero-copy reads**: field access returns slices into the row bytes
//! 2. **Single owner per allocation**: [`RowBuf`] owns, [`Row`] borrows;
//!    a double release is unrepresentable
//! 3. **Layout-dependent decoding**: offsets and types come from
//!    [`RowLayout`] or the planner, not from per-row metadata
//! 4. **Checked decoding**: truncated or inconsistent rows produce errors,
//!    never wild reads
//!
//! ## Module Structure
//!
//! - `addr`: addressing-width selection and checked offset entry reads/writes
//! - `buffer`: RowBuf owning handle
//! - `row`: Row borrowed view with content/length ordering
//! - `layout`: FieldType, RowLayout, and string-field addressing
//! - `writer`: RowWriter for construction

pub mod addr;
pub mod buffer;
pub mod layout;
pub mod row;
pub mod writer;


pub use addr::{addr_width, read_addr, write_addr, MAX_ADDR_WIDTH};
pub use buffer::RowBuf;
pub use layout::{FieldDef, FieldType, RowLayout, StrAddr};
pub use row::Row;
pub use writer::RowWriter;
