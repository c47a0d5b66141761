//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No input file matched the given patterns
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Input file extension is not a supported table format
    UnsupportedFormat(String),
    /// Input file content does not form a table
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(pattern) => write!(f, "No files found matching: {pattern}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::UnsupportedFormat(path) => write!(
                f,
                "Unsupported input format: {path} (expected .json, .jsonl, .ndjson, .csv or .tsv)"
            ),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CliError::FileNotFound("*.csv".to_string()).to_string(),
            "No files found matching: *.csv"
        );
        assert_eq!(
            CliError::InvalidPattern("[invalid".to_string()).to_string(),
            "Invalid file pattern: [invalid"
        );
        assert_eq!(
            CliError::ConfigError("--pattern is required".to_string()).to_string(),
            "Configuration error: --pattern is required"
        );
        assert!(CliError::UnsupportedFormat("poem.txt".to_string())
            .to_string()
            .starts_with("Unsupported input format: poem.txt"));
    }

    #[test]
    fn test_cli_result_with_context() {
        use anyhow::Context;

        let failure: CliResult<()> = Err(CliError::InvalidInput("row 2 is not an object".into()))
            .context("Failed to read poem.jsonl");
        let err = failure.unwrap_err();
        assert_eq!(err.to_string(), "Failed to read poem.jsonl");
        assert!(err.root_cause().to_string().contains("row 2 is not an object"));
    }
}
