//! Record Reader
//!
//! Sequential reader over a roster file, one fixed-size block at a time.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use crate::error::{GradebookError, Result};
use crate::record::Student;

use super::{decode_record, RECORD_SIZE};

/// Reads records from a roster source until end of input
pub struct RecordReader<R = BufReader<File>> {
    /// Where the records come from, kept for log messages
    source: String,
    /// Underlying byte stream
    reader: R,
    /// Full records decoded so far
    records_read: u64,
    /// Size of a trailing partial block, once end of input is reached
    discarded_bytes: usize,
    /// Set after end of input so the iterator stays fused
    finished: bool,
}

impl RecordReader<BufReader<File>> {
    /// Open a roster file for reading
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| GradebookError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_reader(
            BufReader::new(file),
            path.display().to_string(),
        ))
    }
}

impl<R: Read> RecordReader<R> {
    /// Read records from any byte stream
    pub fn from_reader(reader: R, source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            reader,
            records_read: 0,
            discarded_bytes: 0,
            finished: false,
        }
    }

    /// Read the next full record
    ///
    /// Returns:
    /// - `Ok(Some(student))`: a full block was decoded
    /// - `Ok(None)`: end of file; a trailing partial block is dropped here
    pub fn next_record(&mut self) -> Result<Option<Student>> {
        if self.finished {
            return Ok(None);
        }

        let mut block = [0u8; RECORD_SIZE];
        let filled = read_block(&mut self.reader, &mut block)?;

        if filled < RECORD_SIZE {
            self.finished = true;
            if filled > 0 {
                self.discarded_bytes = filled;
                tracing::debug!(
                    "Discarding {} trailing bytes of partial record in {}",
                    filled,
                    self.source
                );
            }
            return Ok(None);
        }

        let student = decode_record(&block)?;
        self.records_read += 1;
        Ok(Some(student))
    }

    /// Where the records come from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Full records decoded so far
    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    /// Bytes of a trailing partial record (0 if none, or EOF not reached yet)
    pub fn discarded_bytes(&self) -> usize {
        self.discarded_bytes
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Student>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_record() {
            Ok(Some(student)) => Some(Ok(student)),
            Ok(None) => None,
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Fill `block` as far as the file allows; returns the bytes read
fn read_block<R: Read>(reader: &mut R, block: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < block.len() {
        match reader.read(&mut block[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(GradebookError::Io(e)),
        }
    }
    Ok(filled)
}
