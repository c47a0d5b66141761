//! Application layer for orchestrating tokenization
//!
//! This module sits between the pure domain pipeline and the public API. It
//! resolves configuration against a table, schedules runs onto executors
//! and stitches the per-run results back together.
//!
//! # Example
//!
//! ```rust
//! use tidytok_core::{RowTable, TableTokenizer, TokenizeConfig, Value};
//!
//! let table = RowTable::from_rows(
//!     ["text", "line"],
//!     vec![vec![Value::from("This text will be tokenized."), Value::Integer(1)]],
//! )
//! .unwrap();
//!
//! let config = TokenizeConfig::builder().text_column("text").build().unwrap();
//! let output = TableTokenizer::new(config).tokenize(&table).unwrap();
//! assert_eq!(output.len(), 5);
//! ```

pub mod assembler;
pub mod cancel;
pub mod config;
pub mod executor;
pub mod plan;

pub use assembler::OutputAssembler;
pub use cancel::CancellationToken;
pub use config::ExecutionConfig;
pub use executor::{ExecutionMode, Executor, SequentialExecutor};
pub use plan::ExecutionPlan;

#[cfg(feature = "parallel")]
pub use executor::ParallelExecutor;
