//! Configuration for the gradebook
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::stats::RankingStrategy;

/// Default roster file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "students.dat";

/// Main configuration for a gradebook session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Roster file used by load and save
    pub data_file: PathBuf,

    /// Load the roster file when the session starts
    pub autoload: bool,

    // -------------------------------------------------------------------------
    // Statistics Configuration
    // -------------------------------------------------------------------------
    /// Rank assignment strategy
    pub ranking: RankingStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            autoload: true,
            ranking: RankingStrategy::Pairwise,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the roster file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Enable or disable the initial load
    pub fn autoload(mut self, enabled: bool) -> Self {
        self.config.autoload = enabled;
        self
    }

    /// Set the ranking strategy
    pub fn ranking(mut self, strategy: RankingStrategy) -> Self {
        self.config.ranking = strategy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
