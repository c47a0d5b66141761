//! Domain layer: the pure tokenization pipeline.
//!
//! Nothing here performs I/O, spawns threads or keeps state between calls.
//! The pipeline for one run is:
//!
//! 1. [`run::RunDetector`] partitions rows into runs
//! 2. [`assembler::TextAssembler`] joins a run's text
//! 3. [`tokenizer::Segmenter`] splits the joined text
//! 4. [`projector::MetadataProjector`] maps tokens back to rows

pub mod assembler;
pub mod projector;
pub mod run;
pub mod table;
pub mod token;
pub mod tokenizer;
pub mod value;

pub use assembler::{AssembledUnit, RowSpan, TextAssembler, SEPARATOR};
pub use projector::{MetadataProjector, Projection, SourceRows};
pub use run::{CollapsePolicy, KeyExtractor, Run, RunDetector};
pub use table::{CollapseKey, Row, RowTable};
pub use token::{OutputRow, Token};
pub use tokenizer::{Granularity, Segment, Segmenter};
pub use value::Value;
