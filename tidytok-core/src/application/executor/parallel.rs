//! Parallel execution strategy
//!
//! Runs share no state, so they are mapped independently on a rayon pool.
//! `collect` on an indexed parallel iterator keeps run order, which makes
//! the output identical to sequential execution.

use crate::{
    application::{
        cancel::CancellationToken,
        executor::{ExecutionMode, Executor},
        plan::ExecutionPlan,
    },
    domain::{OutputRow, Run},
    error::{Error, Result},
};
use rayon::prelude::*;

/// Parallel multi-threaded executor
#[derive(Debug, Clone)]
pub struct ParallelExecutor {
    threads: usize,
}

impl ParallelExecutor {
    /// Create a new parallel executor
    pub fn new(threads: usize) -> Self {
        Self {
            threads: threads.max(1),
        }
    }
}

impl Executor for ParallelExecutor {
    fn execute(
        &self,
        runs: &[Run<'_, '_>],
        plan: &ExecutionPlan,
        cancel: &CancellationToken,
    ) -> Result<Vec<Vec<OutputRow>>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|i| format!("tidytok-worker-{i}"))
            .build()
            .map_err(|e| Error::ThreadPool {
                source: Box::new(e),
            })?;

        pool.install(|| {
            runs.par_iter()
                .map(|run| {
                    if cancel.is_cancelled() {
                        return Err(Error::Cancelled);
                    }
                    plan.process_run(run)
                })
                .collect::<Result<Vec<_>>>()
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }

    fn thread_count(&self) -> usize {
        self.threads
    }
}
