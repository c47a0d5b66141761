//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to table files, sorted and deduplicated
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    files.sort();
    files.dedup();

    log::debug!("resolved {} input files", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_sorted_and_deduplicated() {
        let dir = TempDir::new().unwrap();
        for name in ["b.csv", "a.csv", "notes.txt"] {
            fs::write(dir.path().join(name), "text\nx\n").unwrap();
        }

        let pattern = dir.path().join("*.csv").display().to_string();
        let literal = dir.path().join("a.csv").display().to_string();
        let files = resolve_patterns(&[pattern, literal]).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn test_no_match_is_an_error() {
        let dir = TempDir::new().unwrap();
        let pattern = dir.path().join("*.jsonl").display().to_string();

        let err = resolve_patterns(&[pattern]).unwrap_err();
        assert!(err.to_string().starts_with("No files found matching"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid file pattern: [invalid");
    }
}
