//! Tokens and output rows.

use crate::domain::projector::SourceRows;
use crate::domain::value::Value;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A token produced from an assembled unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token text
    pub text: String,
    /// Rows the token was derived from, in row order; never empty
    pub source_rows: SourceRows,
    /// Position of the token within its unit
    pub ordinal: usize,
    /// Byte range within the assembled unit
    pub span: Range<usize>,
}

impl Token {
    /// Returns true if the token spans more than one row.
    pub fn is_cross_row(&self) -> bool {
        self.source_rows.len() > 1
    }
}

/// One row of the output table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRow {
    /// The token
    pub token: Token,
    /// Index of the representative source row
    pub row_index: usize,
    /// Metadata of the representative row, aligned with the output columns
    pub metadata: Vec<Value>,
}
