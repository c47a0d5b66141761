//! Tokenize command implementation

use crate::config::{CliConfig, TokenUnit};
use crate::input::{resolve_patterns, TableReader};
use crate::output::{create_formatter, OutputFormat, TokenRecord};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tidytok_core::{ExecutionMode, TableTokenizer};

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Input tables or patterns (supports glob; .json, .jsonl, .ndjson, .csv, .tsv)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Column holding the text
    #[arg(short = 't', long, value_name = "COLUMN")]
    pub text_column: Option<String>,

    /// Name of the output token column
    #[arg(long, value_name = "NAME")]
    pub output_column: Option<String>,

    /// Unit of tokenization
    #[arg(long, value_enum)]
    pub token: Option<TokenUnit>,

    /// N-gram or shingle size
    #[arg(short, long, value_name = "N")]
    pub n: Option<usize>,

    /// Smallest n-gram size; emits every size from this up to --n
    #[arg(long, value_name = "N")]
    pub n_min: Option<usize>,

    /// Split pattern for regex tokens
    #[arg(long, value_name = "REGEX")]
    pub pattern: Option<String>,

    /// Collapse adjacent rows equal on this column (repeatable)
    #[arg(long, value_name = "COLUMN")]
    pub collapse: Vec<String>,

    /// Collapse the whole table into one run
    #[arg(long, conflicts_with = "collapse")]
    pub collapse_all: bool,

    /// Group adjacent rows by this column (repeatable)
    #[arg(short, long, value_name = "COLUMN")]
    pub group_by: Vec<String>,

    /// Keep the original case of tokens
    #[arg(long)]
    pub keep_case: bool,

    /// Keep the text column in the output
    #[arg(long)]
    pub keep_text: bool,

    /// Force parallel processing even for small tables
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting table tokenization");
        log::debug!("Arguments: {self:?}");

        let mut config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        self.apply_overrides(&mut config);

        let tokenizer = TableTokenizer::new(config.to_tokenize_config()?);
        let files = resolve_patterns(&self.input)?;

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(BufWriter::new(io::stdout())),
        };
        let mut formatter = create_formatter(config.output.format, writer);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let text_column = tokenizer.config().text_column();
        for path in &files {
            let table = TableReader::read_table(path, Some(text_column))?;
            let output = tokenizer
                .tokenize(&table)
                .with_context(|| format!("Failed to tokenize {}", path.display()))?;

            log::info!(
                "{}: {} rows, {} runs, {} tokens in {:?}",
                path.display(),
                output.metadata.rows_processed,
                output.metadata.runs_processed,
                output.metadata.tokens_produced,
                output.metadata.duration
            );

            let source = path.display().to_string();
            formatter.start_table(&source, &TokenRecord::column_names(&output))?;
            for row in &output {
                formatter.format_record(TokenRecord::from_output(&output, row))?;
            }
            progress.file_completed(&source, output.len());
        }

        formatter.finish()?;
        progress.finish();
        Ok(())
    }

    /// Layer command-line flags over file configuration
    ///
    /// Collapsing flags replace both collapsing settings from the file, so a
    /// file `group_by` never conflicts with a command-line `--collapse`.
    pub fn apply_overrides(&self, config: &mut CliConfig) {
        let section = &mut config.tokenize;

        if let Some(column) = &self.text_column {
            section.text_column = column.clone();
        }
        if let Some(name) = &self.output_column {
            section.output_column = name.clone();
        }
        if let Some(token) = self.token {
            section.token = token;
        }
        if let Some(n) = self.n {
            section.n = n;
        }
        if self.n_min.is_some() {
            section.n_min = self.n_min;
        }
        if self.pattern.is_some() {
            section.pattern = self.pattern.clone();
        }

        if self.collapse_all || !self.collapse.is_empty() || !self.group_by.is_empty() {
            section.collapse = if self.collapse_all {
                Some(Vec::new())
            } else if self.collapse.is_empty() {
                None
            } else {
                Some(self.collapse.clone())
            };
            section.group_by = self.group_by.clone();
        }

        if self.keep_case {
            section.lowercase = false;
        }
        if self.keep_text {
            section.keep_text_column = true;
        }

        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.parallel {
            config.performance.mode = ExecutionMode::Parallel;
        }
        if let Some(threads) = self.threads {
            config.performance.threads = threads;
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A second initialisation in the same process is not an error
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
