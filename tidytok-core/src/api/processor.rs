//! Main table tokenizer implementation

use std::time::Instant;

use crate::api::{ProcessingMetadata, TokenTable, TokenizeConfig};
use crate::application::executor::auto_select;
use crate::application::{
    CancellationToken, ExecutionMode, ExecutionPlan, Executor, OutputAssembler, SequentialExecutor,
};
use crate::domain::{RowTable, RunDetector};
use crate::error::Result;

#[cfg(feature = "parallel")]
use crate::application::ParallelExecutor;

/// Tokenizer for row tables with a resolved configuration
#[derive(Debug, Clone, Default)]
pub struct TableTokenizer {
    config: TokenizeConfig,
}

impl TableTokenizer {
    /// Create a tokenizer with the given configuration
    pub fn new(config: TokenizeConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &TokenizeConfig {
        &self.config
    }

    /// Tokenize a table into a flat token table
    pub fn tokenize(&self, table: &RowTable) -> Result<TokenTable> {
        self.tokenize_with_cancel(table, &CancellationToken::new())
    }

    /// Tokenize a table, checking `cancel` between runs
    ///
    /// A cancelled call returns [`Error::Cancelled`](crate::Error::Cancelled)
    /// and no partial output.
    pub fn tokenize_with_cancel(
        &self,
        table: &RowTable,
        cancel: &CancellationToken,
    ) -> Result<TokenTable> {
        let start = Instant::now();

        let plan = ExecutionPlan::resolve(table, &self.config)?;
        let rows = plan.rows(table);
        let runs = RunDetector::detect(&rows);

        let executor = self.select_executor(rows.len(), runs.len());
        log::debug!(
            "tokenizing {} rows in {} runs ({:?}, {} threads)",
            rows.len(),
            runs.len(),
            executor.mode(),
            executor.thread_count()
        );

        let batches = executor.execute(&runs, &plan, cancel)?;
        let output = OutputAssembler::new().assemble(batches);

        let metadata = ProcessingMetadata {
            duration: start.elapsed(),
            execution_mode: executor.mode(),
            thread_count: executor.thread_count(),
            rows_processed: rows.len(),
            runs_processed: runs.len(),
            tokens_produced: output.len(),
            cross_row_tokens: output.iter().filter(|r| r.token.is_cross_row()).count(),
        };
        log::debug!(
            "produced {} tokens ({} cross-row) in {:?}",
            metadata.tokens_produced,
            metadata.cross_row_tokens,
            metadata.duration
        );

        Ok(TokenTable {
            columns: plan.output_column_names(table),
            token_column: self.config.output_column().to_string(),
            rows: output,
            metadata,
        })
    }

    /// Pick an executor for the resolved input size
    fn select_executor(&self, row_count: usize, run_count: usize) -> Box<dyn Executor> {
        let execution = self.config.execution();
        let mode = match execution.mode {
            ExecutionMode::Adaptive => {
                auto_select(row_count, run_count, execution.parallel_threshold)
            }
            mode => mode,
        };

        match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => {
                Box::new(ParallelExecutor::new(execution.effective_threads()))
            }
            _ => Box::new(SequentialExecutor),
        }
    }
}
