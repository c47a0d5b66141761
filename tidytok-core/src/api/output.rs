//! Output types for the tokenization API

use crate::application::ExecutionMode;
use crate::domain::{OutputRow, Value};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The flattened token table
///
/// One row per token, in input order. Every row carries the metadata of its
/// representative source row, aligned with [`columns`](Self::columns).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenTable {
    /// Metadata column names
    pub columns: Vec<String>,
    /// Name of the token column
    pub token_column: String,
    /// Output rows
    pub rows: Vec<OutputRow>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Metadata about the processing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Execution mode actually used
    pub execution_mode: ExecutionMode,
    /// Number of worker threads used
    pub thread_count: usize,
    /// Number of input rows
    pub rows_processed: usize,
    /// Number of runs the rows were partitioned into
    pub runs_processed: usize,
    /// Number of tokens produced
    pub tokens_produced: usize,
    /// Number of tokens drawn from more than one row
    pub cross_row_tokens: usize,
}

impl TokenTable {
    /// Number of tokens
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no tokens were produced
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Token texts in order
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(|r| r.token.text.as_str())
    }

    /// Position of a metadata column
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Metadata value of one output row
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let col = self.column_index(column)?;
        self.rows.get(row)?.metadata.get(col)
    }

    /// Iterate over output rows
    pub fn iter(&self) -> std::slice::Iter<'_, OutputRow> {
        self.rows.iter()
    }

    /// Take ownership of the output rows
    pub fn into_rows(self) -> Vec<OutputRow> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a TokenTable {
    type Item = &'a OutputRow;
    type IntoIter = std::slice::Iter<'a, OutputRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
