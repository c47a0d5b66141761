//! Output assembly module
//!
//! Concatenates per-run output batches into the final flat sequence. Input
//! order is output order: no sorting, no deduplication.

use crate::domain::OutputRow;

/// Assembler for combining per-run batches
#[derive(Debug, Default)]
pub struct OutputAssembler;

impl OutputAssembler {
    /// Create a new output assembler
    pub fn new() -> Self {
        Self
    }

    /// Flatten batches in run order, then token order
    pub fn assemble(&self, batches: Vec<Vec<OutputRow>>) -> Vec<OutputRow> {
        let total = batches.iter().map(Vec::len).sum();
        let mut rows = Vec::with_capacity(total);
        for batch in batches {
            rows.extend(batch);
        }
        rows
    }
}
