//! Statistics Engine
//!
//! Fills in total, average, and rank for every record of a roster.
//!
//! ## Ranking
//! Competition ranking on total score: a record's rank is
//! `1 + (number of records with a strictly greater total)`. Ties share the
//! better rank; records are never reordered.
//!
//! Two strategies produce the same ranks:
//! - `Pairwise`: compares every ordered pair, O(n^2)
//! - `Sorted`: sorts totals once and binary-searches, O(n log n)

use std::fmt;
use std::str::FromStr;

use crate::error::GradebookError;
use crate::record::{Student, SUBJECT_COUNT};
use crate::roster::Roster;

/// How ranks are assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankingStrategy {
    /// Compare every ordered pair of records
    #[default]
    Pairwise,

    /// Sort totals descending and look each record up
    Sorted,
}

impl fmt::Display for RankingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankingStrategy::Pairwise => f.write_str("pairwise"),
            RankingStrategy::Sorted => f.write_str("sorted"),
        }
    }
}

impl FromStr for RankingStrategy {
    type Err = GradebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pairwise" => Ok(RankingStrategy::Pairwise),
            "sorted" => Ok(RankingStrategy::Sorted),
            other => Err(GradebookError::Config(format!(
                "unknown ranking strategy '{}' (expected 'pairwise' or 'sorted')",
                other
            ))),
        }
    }
}

/// Compute total, average, and rank for every record
///
/// Returns `false` without touching anything when the roster is empty.
/// Calling it again with no mutation in between yields the same values.
pub fn compute_stats_and_ranks(roster: &mut Roster, strategy: RankingStrategy) -> bool {
    if roster.is_empty() {
        return false;
    }

    let students = roster.as_mut_slice();
    compute_totals(students);
    match strategy {
        RankingStrategy::Pairwise => rank_pairwise(students),
        RankingStrategy::Sorted => rank_sorted(students),
    }

    tracing::debug!(
        "Computed stats for {} students using {} ranking",
        students.len(),
        strategy
    );
    true
}

/// Fill in `total` and `average` for each record
pub fn compute_totals(students: &mut [Student]) {
    for student in students.iter_mut() {
        student.total = total_of(student);
        student.average = f64::from(student.total) / SUBJECT_COUNT as f64;
    }
}

/// Sum of the three scores
///
/// Saturates instead of overflowing; only unvalidated file contents can get
/// anywhere near `i32::MAX`.
pub fn total_of(student: &Student) -> i32 {
    student
        .scores()
        .iter()
        .fold(0i32, |acc, &score| acc.saturating_add(score))
}

/// Reference ranking: every record starts at 1 and gains one rank for each
/// record with a strictly greater total (itself included, which never counts)
pub fn rank_pairwise(students: &mut [Student]) {
    let totals: Vec<i32> = students.iter().map(|s| s.total).collect();

    for student in students.iter_mut() {
        student.rank = 1;
        for &other in &totals {
            if other > student.total {
                student.rank += 1;
            }
        }
    }
}

/// Sort-based ranking, identical output to [`rank_pairwise`]
pub fn rank_sorted(students: &mut [Student]) {
    let mut totals: Vec<i32> = students.iter().map(|s| s.total).collect();
    totals.sort_unstable_by(|a, b| b.cmp(a));

    for student in students.iter_mut() {
        // Number of totals strictly greater than ours
        let greater = totals.partition_point(|&t| t > student.total);
        student.rank = greater as u32 + 1;
    }
}
