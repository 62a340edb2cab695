//! Application Configuration
//!
//! Configuration for the archiving subsystem.

use std::time::Duration;

/// Archive scheduler configuration
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    /// Time between sweeps (first tick fires immediately)
    pub sweep_interval: Duration,
    /// Upper bound for archiving a single space within a sweep
    pub space_timeout: Duration,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            sweep_interval: Duration::from_secs(300), // 5 minutes
            space_timeout: Duration::from_secs(30),
        }
    }
}

impl ArchiveConfig {
    /// Create config from second counts (the env-var entry points)
    pub fn from_secs(sweep_interval_secs: u64, space_timeout_secs: u64) -> Self {
        Self {
            sweep_interval: Duration::from_secs(sweep_interval_secs),
            space_timeout: Duration::from_secs(space_timeout_secs),
        }
    }
}
