//! Configuration module
//!
//! A TOML file supplies defaults for every tokenization option; command-line
//! flags are applied on top before the core configuration is built.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tidytok_core::api::defaults;
use tidytok_core::application::config::defaults as execution_defaults;
use tidytok_core::{CollapsePolicy, ExecutionMode, Granularity, TokenizeConfig};

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Tokenization configuration
    #[serde(default)]
    pub tokenize: TokenizeSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceSection,
}

/// Unit of tokenization as named on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenUnit {
    /// Unicode words
    #[default]
    Words,
    /// Word n-grams
    Ngrams,
    /// Sentences
    Sentences,
    /// Non-whitespace characters
    Characters,
    /// Character n-grams
    CharacterShingles,
    /// Lines
    Lines,
    /// Blank-line separated paragraphs
    Paragraphs,
    /// Pieces between matches of a pattern
    Regex,
}

impl TokenUnit {
    /// Resolve to a core granularity
    ///
    /// `n` sizes n-grams and shingles; with `n_min`, n-grams span every size
    /// from `n_min` to `n`.
    pub fn to_granularity(
        self,
        n: usize,
        n_min: Option<usize>,
        pattern: Option<&str>,
    ) -> Result<Granularity, CliError> {
        let granularity = match self {
            TokenUnit::Words => Granularity::Word,
            TokenUnit::Ngrams => match n_min {
                Some(min) => Granularity::NgramRange { min, max: n },
                None => Granularity::ngram(n),
            },
            TokenUnit::Sentences => Granularity::Sentence,
            TokenUnit::Characters => Granularity::Character,
            TokenUnit::CharacterShingles => Granularity::CharacterShingles { n },
            TokenUnit::Lines => Granularity::Line,
            TokenUnit::Paragraphs => Granularity::Paragraph,
            TokenUnit::Regex => Granularity::Regex {
                pattern: pattern
                    .ok_or_else(|| {
                        CliError::ConfigError("a pattern is required for regex tokens".into())
                    })?
                    .to_string(),
            },
        };
        Ok(granularity)
    }
}

/// Tokenization-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TokenizeSection {
    /// Column holding the text
    pub text_column: String,

    /// Name of the output token column
    pub output_column: String,

    /// Unit of tokenization
    pub token: TokenUnit,

    /// N-gram or shingle size
    pub n: usize,

    /// Smallest n-gram size (ranges only)
    pub n_min: Option<usize>,

    /// Split pattern for regex tokens
    pub pattern: Option<String>,

    /// Collapse adjacent rows equal on these columns (empty = whole table)
    pub collapse: Option<Vec<String>>,

    /// Group rows by these columns
    pub group_by: Vec<String>,

    /// Lowercase token text
    pub lowercase: bool,

    /// Keep the text column in the output
    pub keep_text_column: bool,
}

impl Default for TokenizeSection {
    fn default() -> Self {
        Self {
            text_column: defaults::TEXT_COLUMN.to_string(),
            output_column: defaults::OUTPUT_COLUMN.to_string(),
            token: TokenUnit::Words,
            n: 2,
            n_min: None,
            pattern: None,
            collapse: None,
            group_by: Vec::new(),
            lowercase: defaults::LOWERCASE,
            keep_text_column: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    /// Default output format
    pub format: OutputFormat,
}

/// Performance-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceSection {
    /// Execution mode
    pub mode: ExecutionMode,

    /// Number of worker threads (0 = auto)
    pub threads: usize,

    /// Minimum rows before adaptive mode goes parallel
    pub parallel_threshold: usize,
}

impl Default for PerformanceSection {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::Adaptive,
            threads: 0,
            parallel_threshold: execution_defaults::PARALLEL_THRESHOLD,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build and validate the core configuration
    pub fn to_tokenize_config(&self) -> Result<TokenizeConfig> {
        let section = &self.tokenize;
        let granularity =
            section
                .token
                .to_granularity(section.n, section.n_min, section.pattern.as_deref())?;

        let collapse = match &section.collapse {
            Some(columns) => CollapsePolicy::columns(columns.iter().cloned()),
            None => CollapsePolicy::None,
        };

        let threads = match self.performance.threads {
            0 => None,
            n => Some(n),
        };

        let config = TokenizeConfig::builder()
            .text_column(section.text_column.as_str())
            .output_column(section.output_column.as_str())
            .granularity(granularity)
            .collapse(collapse)
            .group_by(section.group_by.iter().cloned())
            .lowercase(section.lowercase)
            .keep_text_column(section.keep_text_column)
            .execution_mode(self.performance.mode)
            .threads(threads)
            .parallel_threshold(self.performance.parallel_threshold)
            .build()
            .context("Invalid tokenization configuration")?;

        Ok(config)
    }
}
