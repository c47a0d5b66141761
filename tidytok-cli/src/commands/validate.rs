//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let config = CliConfig::from_file(&self.config)
            .and_then(|file| file.to_tokenize_config().map(|core| (file, core)));

        match config {
            Ok((file, core)) => {
                println!("✓ Configuration is valid!");
                println!("  Text column: {}", core.text_column());
                println!("  Granularity: {}", core.granularity().name());
                if !core.collapse().is_none() {
                    println!("  Collapse:    {:?}", core.collapse());
                }
                if !core.group_by().is_empty() {
                    println!("  Group by:    {}", core.group_by().join(", "));
                }
                println!("  Format:      {:?}", file.output.format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(e.context("Validation failed"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn validate(content: &str) -> Result<()> {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{content}").unwrap();

        ValidateArgs {
            config: temp_file.path().to_path_buf(),
        }
        .execute()
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(validate("[tokenize]\ntoken = \"ngrams\"\nn = 3\ncollapse = [\"chapter\"]\n").is_ok());
    }

    #[test]
    fn test_validate_invalid_configs() {
        assert!(validate("[tokenize]\ntoken = \"ngrams\"\nn = 0\n").is_err());
        assert!(validate("[tokenize]\ntoken = \"regex\"\n").is_err());
        assert!(validate("[performance]\nmode = \"eager\"\n").is_err());
        assert!(validate("not toml at all").is_err());
    }
}
