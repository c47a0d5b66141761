//! Execution strategies for processing runs

use crate::application::{cancel::CancellationToken, plan::ExecutionPlan};
use crate::domain::{OutputRow, Run};
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Single-threaded sequential processing
    Sequential,
    /// Multi-threaded parallel processing
    Parallel,
    /// Choose between the two from the input size
    #[default]
    Adaptive,
}

/// Trait for execution strategies
///
/// Implementations return one output batch per run, in run order.
pub trait Executor: Send + Sync {
    /// Process every run with the given plan
    fn execute(
        &self,
        runs: &[Run<'_, '_>],
        plan: &ExecutionPlan,
        cancel: &CancellationToken,
    ) -> Result<Vec<Vec<OutputRow>>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;

    /// Number of worker threads used
    fn thread_count(&self) -> usize {
        1
    }
}

/// Resolve [`ExecutionMode::Adaptive`] to a concrete mode.
pub fn auto_select(row_count: usize, run_count: usize, threshold: usize) -> ExecutionMode {
    if run_count < 2 || row_count < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}
