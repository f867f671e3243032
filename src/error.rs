//! Error types for the gradebook
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::record::Subject;

/// Result type alias using GradebookError
pub type Result<T> = std::result::Result<T, GradebookError>;

/// Unified error type for gradebook operations
#[derive(Debug, Error)]
pub enum GradebookError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot open '{}' for reading: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot open '{}' for writing: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("{subject} score {score} is out of range (0-100)")]
    ScoreOutOfRange { subject: Subject, score: i32 },

    #[error("Student name must not be empty")]
    EmptyName,

    // -------------------------------------------------------------------------
    // Shell Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0:?}")]
    InvalidInput(String),

    #[error("Invalid menu choice: {0}")]
    InvalidMenuChoice(i64),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<bincode::Error> for GradebookError {
    fn from(e: bincode::Error) -> Self {
        GradebookError::Serialization(e.to_string())
    }
}
