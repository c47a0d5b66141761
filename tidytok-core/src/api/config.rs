//! Configuration API for table tokenization

use crate::application::{ExecutionConfig, ExecutionMode};
use crate::domain::{CollapsePolicy, Granularity, Segmenter};
use crate::error::ConfigError;

/// Default configuration constants
pub mod defaults {
    /// Name of the column holding the text fragments
    pub const TEXT_COLUMN: &str = "text";

    /// Name given to the token column of the output table
    pub const OUTPUT_COLUMN: &str = "word";

    /// Token text is lowercased unless disabled
    pub const LOWERCASE: bool = true;
}

/// Tokenization configuration
///
/// Built through [`TokenizeConfig::builder`]; a built configuration has
/// already passed every check that does not need the input table.
#[derive(Debug, Clone)]
pub struct TokenizeConfig {
    pub(crate) text_column: String,
    pub(crate) output_column: String,
    pub(crate) granularity: Granularity,
    pub(crate) collapse: CollapsePolicy,
    pub(crate) group_by: Vec<String>,
    pub(crate) lowercase: bool,
    pub(crate) keep_text_column: bool,
    pub(crate) execution: ExecutionConfig,
}

impl Default for TokenizeConfig {
    fn default() -> Self {
        Self {
            text_column: defaults::TEXT_COLUMN.to_string(),
            output_column: defaults::OUTPUT_COLUMN.to_string(),
            granularity: Granularity::default(),
            collapse: CollapsePolicy::None,
            group_by: Vec::new(),
            lowercase: defaults::LOWERCASE,
            keep_text_column: false,
            execution: ExecutionConfig::default(),
        }
    }
}

impl TokenizeConfig {
    /// Create a configuration builder
    pub fn builder() -> TokenizeConfigBuilder {
        TokenizeConfigBuilder::default()
    }

    /// Validate everything that does not depend on the input table
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.collapse.is_none() && !self.group_by.is_empty() {
            return Err(ConfigError::ConflictingCollapseSpecification);
        }
        Segmenter::new(&self.granularity, self.lowercase)?;
        self.execution.validate()
    }

    /// Column holding the text fragments
    pub fn text_column(&self) -> &str {
        &self.text_column
    }

    /// Name of the output token column
    pub fn output_column(&self) -> &str {
        &self.output_column
    }

    /// Unit of tokenization
    pub fn granularity(&self) -> &Granularity {
        &self.granularity
    }

    /// Explicit collapse policy
    pub fn collapse(&self) -> &CollapsePolicy {
        &self.collapse
    }

    /// Group-by columns (empty = no grouping)
    pub fn group_by(&self) -> &[String] {
        &self.group_by
    }

    /// Whether token text is lowercased
    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    /// Whether the text column is kept among the output metadata
    pub fn keep_text_column(&self) -> bool {
        self.keep_text_column
    }

    /// Execution settings
    pub fn execution(&self) -> &ExecutionConfig {
        &self.execution
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct TokenizeConfigBuilder {
    config: TokenizeConfig,
}

impl TokenizeConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text column
    pub fn text_column(mut self, name: impl Into<String>) -> Self {
        self.config.text_column = name.into();
        self
    }

    /// Set the output token column name
    pub fn output_column(mut self, name: impl Into<String>) -> Self {
        self.config.output_column = name.into();
        self
    }

    /// Set the granularity
    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.config.granularity = granularity;
        self
    }

    /// Set the collapse policy
    pub fn collapse(mut self, policy: CollapsePolicy) -> Self {
        self.config.collapse = policy;
        self
    }

    /// Collapse adjacent rows equal on these columns
    pub fn collapse_on<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.collapse(CollapsePolicy::columns(columns))
    }

    /// Group rows by these columns; duplicates are ignored
    pub fn group_by<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        for name in columns {
            let name = name.into();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        self.config.group_by = names;
        self
    }

    /// Enable or disable lowercasing of token text
    pub fn lowercase(mut self, enabled: bool) -> Self {
        self.config.lowercase = enabled;
        self
    }

    /// Keep the text column in the output metadata
    pub fn keep_text_column(mut self, keep: bool) -> Self {
        self.config.keep_text_column = keep;
        self
    }

    /// Replace all execution settings
    pub fn execution(mut self, execution: ExecutionConfig) -> Self {
        self.config.execution = execution;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution.mode = mode;
        self
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.execution.threads = count;
        self
    }

    /// Set the adaptive parallel threshold in rows
    pub fn parallel_threshold(mut self, rows: usize) -> Self {
        self.config.execution.parallel_threshold = rows;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<TokenizeConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
