//! Storage Module
//!
//! Persists the roster as a flat sequence of fixed-size record blocks.
//!
//! ## Responsibilities
//! - Encode/decode one `Student` to/from a fixed-size block
//! - Sequential whole-file read (load) and truncating write (save)
//! - Discard a trailing partial block without error
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │ Record 1 (48 bytes)                                 │
//! │   Name: [u8; 12] (UTF-8, NUL padded)                │
//! │   Korean: i32 | English: i32 | Math: i32            │
//! │   Total: i32 | Padding (4)                          │
//! │   Average: f64                                      │
//! │   Rank: u32 | Padding (4)                           │
//! ├─────────────────────────────────────────────────────┤
//! │ Record 2 (48 bytes)                                 │
//! │   ... repeated until end of file ...                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! No header, count, magic, or version: end of file ends the sequence.
//! Integers and the average use native byte order. The name is UTF-8,
//! NUL-padded to 12 bytes.

mod codec;
mod reader;
mod writer;

pub use codec::{decode_record, encode_record};
pub use reader::RecordReader;
pub use writer::RecordWriter;

/// Size of one encoded record block in bytes
pub const RECORD_SIZE: usize = 48;
