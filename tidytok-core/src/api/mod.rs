//! Public API for table tokenization
//!
//! Callers build a [`TokenizeConfig`], hand it to a [`TableTokenizer`] and get
//! a [`TokenTable`] back. Everything below this layer is an implementation
//! detail.

mod config;
mod output;
mod processor;


pub use config::{defaults, TokenizeConfig, TokenizeConfigBuilder};
pub use output::{ProcessingMetadata, TokenTable};
pub use processor::TableTokenizer;

use crate::domain::RowTable;
use crate::error::Result;

/// Tokenize `table` with `config` in a single call
pub fn tokenize(table: &RowTable, config: &TokenizeConfig) -> Result<TokenTable> {
    TableTokenizer::new(config.clone()).tokenize(table)
}
