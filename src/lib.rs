//! # flatrow - Zero-Copy Row and Column Access
//!
//! flatrow reads and writes a flat binary row format and layers columnar
//! access on top of it. A row is one contiguous byte buffer: fixed-width
//! fields first, then an offset table addressing the variable-length
//! string fields packed at the tail. This implementation prioritizes:
//!
//! - **Zero-copy data access**: Rows, string fields, and partition keys
//!   are borrowed views into the original buffers
//! - **Lazy projection**: Columns adapt row lists without touching row
//!   bytes until a value is requested
//! - **Checked decoding**: Every field access validates offsets and
//!   widths against the row it reads, so corrupt rows surface as errors
//!   instead of out-of-range reads
//!
//! ## Quick Start
//!
//! ```
//! use flatrow::lists::{ArrayList, FixedColumn, List, StringColumn};
//! use flatrow::rows::{FieldDef, FieldType, Row, RowLayout, RowWriter};
//!
//! # fn main() -> eyre::Result<()> {
//! let layout = RowLayout::new(vec![
//!     FieldDef::new("id", FieldType::Int32),
//!     FieldDef::new("name", FieldType::Str),
//! ]);
//!
//! let mut writer = RowWriter::new(&layout);
//! writer.set_int32(0, 7)?;
//! writer.set_str(1, "alice")?;
//! let buf = writer.build()?;
//!
//! let rows = [Row::new(&buf)];
//! let ids: FixedColumn<i32, _> =
//!     FixedColumn::new(ArrayList::new(&rows), layout.fixed_offset(0));
//! let names = StringColumn::new(ArrayList::new(&rows), layout.str_addr(1)?);
//!
//! assert_eq!(ids.at(0)?, 7);
//! assert_eq!(names.at(0)?.as_str()?, "alice");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! flatrow uses a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Lists (ArrayList / WindowMap)     │
//! ├─────────────────────────────────────┤
//! │ Column Projection (Fixed / String)  │
//! ├─────────────────────────────────────┤
//! │    Row Views (Row / StrAddr)        │
//! ├─────────────────────────────────────┤
//! │  Row Encoding (RowLayout / Writer)  │
//! └─────────────────────────────────────┘
//! ```
//!
//! The rows layer owns the byte format: [`rows::RowLayout`] describes
//! field positions, [`rows::RowWriter`] encodes rows, and
//! [`rows::StrAddr`] resolves string field bounds through the offset
//! table. The lists layer is format-agnostic above [`rows::Row`]: lists
//! and cursors compose over any row source.
//!
//! ## Module Overview
//!
//! - [`rows`]: Row format, addressing widths, layouts, row building
//! - [`lists`]: List and cursor traits, slice lists, column projection,
//!   keyed window iteration

pub mod lists;
pub mod rows;

pub use lists::{
    ArrayList, ArrayListCursor, BoxedRowCursor, Cursor, FixedColumn, FixedColumnCursor,
    FixedField, List, StringColumn, StringColumnCursor, StringRef, WindowCursor, WindowMap,
    WindowMapCursor,
};
pub use rows::{FieldDef, FieldType, Row, RowBuf, RowLayout, RowWriter, StrAddr};
