//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Commented configuration template with every default spelled out
pub const TEMPLATE: &str = r#"# tidytok configuration
#
# Every key is optional; command-line flags override these values.

[tokenize]
# Column holding the text fragments
text_column = "text"

# Name of the token column in the output
output_column = "word"

# Unit of tokenization: words, ngrams, sentences, characters,
# character-shingles, lines, paragraphs or regex
token = "words"

# Size of n-grams and character shingles
n = 2

# Smallest n-gram size; emits every size from n_min up to n
# n_min = 1

# Split pattern, required when token = "regex"
# pattern = "\\s*;\\s*"

# Merge adjacent rows equal on these columns before tokenizing.
# An empty list merges the whole table; leave unset to tokenize rows alone.
# collapse = ["book", "chapter"]

# Same effect as collapse; cannot be combined with it
group_by = []

# Lowercase token text
lowercase = true

# Carry the text column into the output
keep_text_column = false

[output]
# Output format: tsv, json or jsonl
format = "tsv"

[performance]
# Execution mode: sequential, parallel or adaptive
mode = "adaptive"

# Number of worker threads (0 = all available)
threads = 0

# Minimum rows before adaptive mode goes parallel
parallel_threshold = 10000
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        std::fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file");
        println!("2. Validate it:");
        println!("   tidytok validate -c {}", self.output.display());
        println!("3. Use it for tokenization:");
        println!("   tidytok tokenize -i table.csv -c {}", self.output.display());

        Ok(())
    }
}
