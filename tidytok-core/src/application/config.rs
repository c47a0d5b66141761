//! Execution configuration for the application layer
//!
//! These knobs only affect how runs are scheduled, never what is produced:
//! every mode yields the same output table.

use crate::application::executor::ExecutionMode;
use crate::error::ConfigError;

/// Default execution constants
pub mod defaults {
    /// Minimum number of rows before adaptive mode goes parallel
    pub const PARALLEL_THRESHOLD: usize = 10_000;
}

/// How runs are scheduled onto threads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Execution mode selector
    pub mode: ExecutionMode,

    /// Number of worker threads (None = use all available)
    pub threads: Option<usize>,

    /// Minimum row count for adaptive mode to use the thread pool
    pub parallel_threshold: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: defaults::PARALLEL_THRESHOLD,
        }
    }
}

impl ExecutionConfig {
    /// Always run on the calling thread
    pub fn sequential() -> Self {
        Self {
            mode: ExecutionMode::Sequential,
            threads: Some(1),
            ..Default::default()
        }
    }

    /// Always use a thread pool
    pub fn parallel(threads: Option<usize>) -> Self {
        Self {
            mode: ExecutionMode::Parallel,
            threads,
            ..Default::default()
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads == Some(0) {
            return Err(ConfigError::InvalidThreadCount);
        }
        Ok(())
    }

    /// Number of threads a parallel executor would use
    pub fn effective_threads(&self) -> usize {
        #[cfg(feature = "parallel")]
        {
            self.threads.unwrap_or_else(num_cpus::get).max(1)
        }

        #[cfg(not(feature = "parallel"))]
        {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExecutionConfig::default();
        assert_eq!(config.mode, ExecutionMode::Adaptive);
        assert_eq!(config.parallel_threshold, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_threads_rejected() {
        let config = ExecutionConfig {
            threads: Some(0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidThreadCount));
    }

    #[test]
    fn test_presets() {
        let seq = ExecutionConfig::sequential();
        assert_eq!(seq.mode, ExecutionMode::Sequential);
        assert_eq!(seq.effective_threads(), 1);

        let par = ExecutionConfig::parallel(Some(3));
        assert_eq!(par.mode, ExecutionMode::Parallel);
        #[cfg(feature = "parallel")]
        assert_eq!(par.effective_threads(), 3);
    }
}
