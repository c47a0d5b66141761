//! Sequential execution strategy

use crate::{
    application::{
        cancel::CancellationToken,
        executor::{ExecutionMode, Executor},
        plan::ExecutionPlan,
    },
    domain::{OutputRow, Run},
    error::{Error, Result},
};

/// Sequential single-threaded executor
#[derive(Debug, Clone, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn execute(
        &self,
        runs: &[Run<'_, '_>],
        plan: &ExecutionPlan,
        cancel: &CancellationToken,
    ) -> Result<Vec<Vec<OutputRow>>> {
        let mut batches = Vec::with_capacity(runs.len());

        for run in runs {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }
            batches.push(plan.process_run(run)?);
        }

        Ok(batches)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
