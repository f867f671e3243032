//! Gradebook Module
//!
//! The controller that owns the roster and coordinates all components.
//!
//! ## Responsibilities
//! - Own the roster for the lifetime of a session
//! - Load/save the roster file
//! - Validate and append new students
//! - Run the statistics engine before reporting

use std::io::Read;
use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::record::Student;
use crate::roster::Roster;
use crate::stats::compute_stats_and_ranks;
use crate::storage::{RecordReader, RecordWriter};

/// Outcome of a successful load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Records now in the roster
    pub records: usize,

    /// Bytes of a trailing partial record that were ignored
    pub discarded_bytes: usize,
}

/// Outcome of a save request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Roster was empty; the file was not touched
    NothingToSave,

    /// File rewritten with this many records
    Written { records: u64 },
}

/// A gradebook session: configuration plus the roster it manages
pub struct Gradebook {
    /// Session configuration
    config: Config,

    /// The record store
    roster: Roster,
}

impl Gradebook {
    /// Create a gradebook with an empty roster
    pub fn new(config: Config) -> Self {
        Self {
            config,
            roster: Roster::new(),
        }
    }

    /// Replace the roster with the contents of the roster file
    ///
    /// The roster is cleared first, even when the file cannot be opened.
    /// If a read fails midway, the records read before the failure stay in
    /// the roster and the error is returned.
    pub fn load(&mut self) -> Result<LoadReport> {
        self.roster.clear();

        let reader = RecordReader::open(&self.config.data_file)?;
        self.load_from(reader)
    }

    /// Replace the roster with every record `reader` yields
    ///
    /// Stops at the first read error, keeping the records read before it.
    pub fn load_from<R: Read>(&mut self, mut reader: RecordReader<R>) -> Result<LoadReport> {
        self.roster.clear();

        while let Some(student) = reader.next_record()? {
            self.roster.append(student);
        }

        let report = LoadReport {
            records: self.roster.len(),
            discarded_bytes: reader.discarded_bytes(),
        };
        tracing::info!(
            "Loaded {} students from {}",
            report.records,
            reader.source()
        );
        Ok(report)
    }

    /// Write the roster to the roster file
    ///
    /// An empty roster is a no-op that leaves the file untouched.
    pub fn save(&self) -> Result<SaveOutcome> {
        if self.roster.is_empty() {
            tracing::debug!("Nothing to save");
            return Ok(SaveOutcome::NothingToSave);
        }

        let path = self.config.data_file.as_path();
        let mut writer = RecordWriter::create(path)?;
        for student in &self.roster {
            writer.append(student)?;
        }
        let records = writer.finish()?;

        tracing::info!("Saved {} students to {}", records, path.display());
        Ok(SaveOutcome::Written { records })
    }

    /// Validate a new student and append it to the roster
    ///
    /// Derived fields stay zeroed until the next stats computation.
    pub fn add_student(
        &mut self,
        name: &str,
        korean: i32,
        english: i32,
        math: i32,
    ) -> Result<&Student> {
        let student = Student::new(name, korean, english, math)?;
        tracing::debug!("Adding student {:?}", student.name);
        self.roster.append(student);

        let index = self.roster.len() - 1;
        Ok(&self.roster.as_slice()[index])
    }

    /// Recompute total, average, and rank for every record
    ///
    /// Returns `false` when the roster is empty.
    pub fn compute_stats(&mut self) -> bool {
        compute_stats_and_ranks(&mut self.roster, self.config.ranking)
    }

    /// Compute stats and return the rows to display
    ///
    /// Returns `None` for an empty roster so callers skip the table.
    pub fn report(&mut self) -> Option<&[Student]> {
        if !self.compute_stats() {
            return None;
        }
        Some(self.roster.as_slice())
    }

    /// End the session, releasing every record
    pub fn close(mut self) {
        tracing::debug!("Clearing {} students", self.roster.len());
        self.roster.clear();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The record store
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The roster file path
    pub fn data_file(&self) -> &Path {
        &self.config.data_file
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
