//! Student record definitions
//!
//! A `Student` carries a name, three subject scores, and the derived
//! statistics (total, average, rank) filled in by [`crate::stats`].

use std::fmt;

use crate::error::{GradebookError, Result};

// =============================================================================
// Domain Constants
// =============================================================================

/// Number of scored subjects per student
pub const SUBJECT_COUNT: usize = 3;

/// Lowest score accepted at entry time
pub const MIN_SCORE: i32 = 0;

/// Highest score accepted at entry time
pub const MAX_SCORE: i32 = 100;

/// On-disk width of the name field, NUL terminator included
pub const NAME_CAPACITY: usize = 12;

/// Longest name (in UTF-8 bytes) kept in memory and on disk
pub const MAX_NAME_BYTES: usize = NAME_CAPACITY - 1;

// =============================================================================
// Subject
// =============================================================================

/// A scored subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Korean,
    English,
    Math,
}

impl Subject {
    /// All subjects, in storage and display order
    pub const ALL: [Subject; SUBJECT_COUNT] = [Subject::Korean, Subject::English, Subject::Math];

    /// Human-readable subject name
    pub fn name(self) -> &'static str {
        match self {
            Subject::Korean => "Korean",
            Subject::English => "English",
            Subject::Math => "Math",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check that a score lies within [MIN_SCORE, MAX_SCORE]
pub fn validate_score(subject: Subject, score: i32) -> Result<i32> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(score)
    } else {
        Err(GradebookError::ScoreOutOfRange { subject, score })
    }
}

/// Cut a name down to what the record can hold
///
/// Stops at the first NUL and keeps at most `MAX_NAME_BYTES` bytes, never
/// splitting a character.
pub fn truncate_name(name: &str) -> String {
    let name = name.split('\0').next().unwrap_or_default();
    if name.len() <= MAX_NAME_BYTES {
        return name.to_string();
    }

    let mut end = MAX_NAME_BYTES;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    name[..end].to_string()
}

// =============================================================================
// Student
// =============================================================================

/// One row of the roster
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Student {
    /// Display name (at most `MAX_NAME_BYTES` bytes)
    pub name: String,

    pub korean: i32,
    pub english: i32,
    pub math: i32,

    /// Sum of the three scores; 0 until computed
    pub total: i32,

    /// total / 3.0; 0.0 until computed
    pub average: f64,

    /// 1-based competition rank; 0 until computed
    pub rank: u32,
}

impl Student {
    /// Create a student from entry-time input
    ///
    /// Every score must be within [0, 100] and the name must not be blank.
    /// The name is truncated to the storage budget. Derived fields start
    /// zeroed.
    pub fn new(name: &str, korean: i32, english: i32, math: i32) -> Result<Self> {
        let name = truncate_name(name.trim());
        if name.is_empty() {
            return Err(GradebookError::EmptyName);
        }

        Ok(Self {
            name,
            korean: validate_score(Subject::Korean, korean)?,
            english: validate_score(Subject::English, english)?,
            math: validate_score(Subject::Math, math)?,
            total: 0,
            average: 0.0,
            rank: 0,
        })
    }

    /// Score for a given subject
    pub fn score(&self, subject: Subject) -> i32 {
        match subject {
            Subject::Korean => self.korean,
            Subject::English => self.english,
            Subject::Math => self.math,
        }
    }

    /// Scores in `Subject::ALL` order
    pub fn scores(&self) -> [i32; SUBJECT_COUNT] {
        [self.korean, self.english, self.math]
    }
}
