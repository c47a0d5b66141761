//! Adjacency-aware tokenization of tabular text
//!
//! A [`RowTable`] holds text fragments, one per row, alongside arbitrary
//! metadata columns. Tokenizing it produces a [`TokenTable`] with one row per
//! token. When a collapse policy or group-by is in effect, maximal runs of
//! *adjacent* rows with equal keys are joined before segmentation, so
//! multi-word tokens may span a row boundary without ever bridging rows that
//! are not neighbours.
//!
//! # Architecture
//!
//! - **Domain layer**: values, tables, run detection, text assembly,
//!   segmentation and metadata projection
//! - **Application layer**: plan resolution and sequential or parallel
//!   execution of runs
//! - **API layer**: configuration builder, tokenizer and output table
//!
//! # Example
//!
//! ```rust
//! use tidytok_core::{Granularity, RowTable, TokenizeConfig, Value};
//!
//! let table = RowTable::from_rows(
//!     ["text", "line", "stanza"],
//!     vec![
//!         vec![Value::from("Because I could not stop for Death"), Value::Integer(1), Value::Integer(1)],
//!         vec![Value::from("He kindly stopped for me"), Value::Integer(2), Value::Integer(1)],
//!     ],
//! )
//! .unwrap();
//!
//! let config = TokenizeConfig::builder()
//!     .granularity(Granularity::ngram(2))
//!     .collapse_on(["stanza"])
//!     .build()
//!     .unwrap();
//!
//! let output = tidytok_core::tokenize(&table, &config).unwrap();
//! assert!(output.tokens().any(|t| t == "death he"));
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod error;

pub use api::{
    tokenize, ProcessingMetadata, TableTokenizer, TokenTable, TokenizeConfig,
    TokenizeConfigBuilder,
};
pub use application::{CancellationToken, ExecutionConfig, ExecutionMode};
pub use domain::{CollapsePolicy, Granularity, OutputRow, RowTable, Token, Value};
pub use error::{ConfigError, Error, Result, TableError};
