//! # Gradebook
//!
//! A console gradebook for a classroom-sized roster of students:
//! - Ordered in-memory roster (name plus Korean, English, Math scores)
//! - Total, average, and competition rank computed on demand
//! - Load/save as a flat file of fixed-size binary records
//! - Numbered-menu interactive shell
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Shell (menu loop)                       │
//! │                  (BufRead in / Write out)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Gradebook                              │
//! │              (owns Config + Roster)                          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼─────────────┐
//!          │            │             │
//!          ▼            ▼             ▼
//!   ┌───────────┐ ┌───────────┐ ┌─────────────┐
//!   │  Roster   │ │   Stats   │ │   Storage   │
//!   │  (Vec)    │ │ (ranking) │ │ (48B blocks)│
//!   └───────────┘ └───────────┘ └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod roster;
pub mod stats;
pub mod storage;
pub mod gradebook;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{GradebookError, Result};
pub use config::Config;
pub use gradebook::{Gradebook, LoadReport, SaveOutcome};
pub use record::{Student, Subject};
pub use roster::Roster;
pub use stats::{compute_stats_and_ranks, RankingStrategy};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the gradebook
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
