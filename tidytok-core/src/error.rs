//! Error types for table tokenization
//!
//! Configuration problems are detected before any row is processed and fail
//! the whole call; there is no partial output on any error path.

use thiserror::Error;

/// Invalid tokenization configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Both an explicit collapse policy and a group-by were supplied
    #[error("collapse and group_by cannot both be specified")]
    ConflictingCollapseSpecification,

    /// A granularity parameter is out of range
    #[error("invalid parameter for {granularity} granularity: {reason}")]
    InvalidGranularityParameter {
        /// Name of the granularity the parameter belongs to
        granularity: &'static str,
        /// What is wrong with the parameter
        reason: String,
    },

    /// A referenced column does not exist in the input table
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// A user-supplied split pattern does not compile
    #[error("invalid split pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Compiler message
        reason: String,
    },

    /// A thread count of zero was requested
    #[error("thread count must be greater than 0")]
    InvalidThreadCount,
}

/// Malformed table construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The schema names the same column twice
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    /// A row does not have one value per schema column
    #[error("row {row} has {actual} values, expected {expected}")]
    RowArity {
        /// Position the row would have taken
        row: usize,
        /// Number of schema columns
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },
}

/// Top-level error for a tokenization call
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Table construction error
    #[error("table error: {0}")]
    Table(#[from] TableError),

    /// The call was cancelled between runs
    #[error("tokenization cancelled")]
    Cancelled,

    /// A token could not be mapped back onto a row of its run
    #[error("token at {start}..{end} in run {run} maps to no source row")]
    UnmappedToken {
        /// Ordinal of the run
        run: usize,
        /// Byte offset where the token starts
        start: usize,
        /// Byte offset where the token ends
        end: usize,
    },

    /// The worker pool could not be created
    #[error("failed to build thread pool")]
    ThreadPool {
        /// Underlying pool error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for tokenization operations
pub type Result<T> = std::result::Result<T, Error>;
