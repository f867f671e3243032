//! Record Writer
//!
//! Writes a roster file from scratch, truncating whatever was there.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{GradebookError, Result};
use crate::record::Student;

use super::encode_record;

/// Writes fixed-size record blocks to a new roster file
///
/// Call `append()` for each record in roster order, then `finish()` to
/// flush and sync.
pub struct RecordWriter {
    /// Output file path
    path: PathBuf,
    /// Buffered writer for performance
    writer: BufWriter<File>,
    /// Number of records written
    records_written: u64,
}

impl RecordWriter {
    /// Create (or truncate) a roster file for writing
    pub fn create(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(|source| GradebookError::Create {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            records_written: 0,
        })
    }

    /// Append one record block
    pub fn append(&mut self, student: &Student) -> Result<()> {
        let block = encode_record(student)?;
        self.writer.write_all(&block)?;
        self.records_written += 1;
        Ok(())
    }

    /// Flush and sync; returns the number of records written
    pub fn finish(mut self) -> Result<u64> {
        self.writer.flush()?;

        let file = self.writer.into_inner().map_err(|e| {
            GradebookError::Io(std::io::Error::new(
                e.error().kind(),
                format!("Failed to flush {}: {}", self.path.display(), e.error()),
            ))
        })?;
        file.sync_all()?;

        Ok(self.records_written)
    }
}
