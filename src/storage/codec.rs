//! Record codec
//!
//! Converts between `Student` and its fixed-size on-disk block.
//!
//! The block follows the natural C layout of the record, including the
//! alignment padding before the `f64` average and after the rank.

use bincode::Options;
use serde::{Deserialize, Serialize};

use crate::error::{GradebookError, Result};
use crate::record::{truncate_name, Student, NAME_CAPACITY};

use super::RECORD_SIZE;

/// Exact on-disk shape of one record
#[derive(Debug, Serialize, Deserialize)]
struct RawRecord {
    name: [u8; NAME_CAPACITY],
    korean: i32,
    english: i32,
    math: i32,
    total: i32,
    pad_average: u32,
    average: f64,
    rank: u32,
    pad_tail: u32,
}

/// Fixed-width integers, native byte order, no length prefixes
fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_native_endian()
}

/// Encode a student into exactly `RECORD_SIZE` bytes
///
/// Names longer than the field are truncated on a character boundary.
pub fn encode_record(student: &Student) -> Result<Vec<u8>> {
    let raw = RawRecord {
        name: encode_name(&student.name),
        korean: student.korean,
        english: student.english,
        math: student.math,
        total: student.total,
        pad_average: 0,
        average: student.average,
        rank: student.rank,
        pad_tail: 0,
    };

    let bytes = options().serialize(&raw)?;
    if bytes.len() != RECORD_SIZE {
        return Err(GradebookError::Serialization(format!(
            "Encoded record is {} bytes, expected {}",
            bytes.len(),
            RECORD_SIZE
        )));
    }
    Ok(bytes)
}

/// Decode one full record block
///
/// Derived fields are taken verbatim; scores are not re-validated.
pub fn decode_record(bytes: &[u8]) -> Result<Student> {
    if bytes.len() != RECORD_SIZE {
        return Err(GradebookError::Serialization(format!(
            "Record block is {} bytes, expected {}",
            bytes.len(),
            RECORD_SIZE
        )));
    }

    let raw: RawRecord = options().deserialize(bytes)?;

    Ok(Student {
        name: decode_name(&raw.name),
        korean: raw.korean,
        english: raw.english,
        math: raw.math,
        total: raw.total,
        average: raw.average,
        rank: raw.rank,
    })
}

fn encode_name(name: &str) -> [u8; NAME_CAPACITY] {
    let mut field = [0u8; NAME_CAPACITY];
    let name = truncate_name(name);
    field[..name.len()].copy_from_slice(name.as_bytes());
    field
}

fn decode_name(field: &[u8; NAME_CAPACITY]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(NAME_CAPACITY);
    String::from_utf8_lossy(&field[..end]).into_owned()
}
