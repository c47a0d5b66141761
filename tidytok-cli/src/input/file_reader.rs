//! Table file reading
//!
//! JSON files hold an array of objects, JSON Lines files one object per line.
//! The schema is the union of object keys in first-seen order; absent keys
//! become missing values. CSV and TSV files take their schema from the header
//! row and infer a scalar type per cell.

use crate::error::CliError;
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde_json::{Map, Value as JsonValue};
use std::fs;
use std::path::Path;
use tidytok_core::{RowTable, Value};

/// Supported table file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Array of objects
    Json,
    /// One object per line
    JsonLines,
    /// Comma-separated values with a header row
    Csv,
    /// Tab-separated values with a header row
    Tsv,
}

impl InputFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("json") => Ok(InputFormat::Json),
            Some("jsonl") | Some("ndjson") => Ok(InputFormat::JsonLines),
            Some("csv") => Ok(InputFormat::Csv),
            Some("tsv") => Ok(InputFormat::Tsv),
            _ => Err(CliError::UnsupportedFormat(path.display().to_string()).into()),
        }
    }
}

/// Reader turning table files into row tables
pub struct TableReader;

impl TableReader {
    /// Read a table file
    ///
    /// Cells of `text_column` are kept as text in delimited files instead of
    /// being type-inferred.
    pub fn read_table(path: &Path, text_column: Option<&str>) -> Result<RowTable> {
        let format = InputFormat::from_path(path)?;
        let content = Self::read_text(path)?;

        let table = match format {
            InputFormat::Json => Self::parse_json(&content),
            InputFormat::JsonLines => Self::parse_json_lines(&content),
            InputFormat::Csv => Self::parse_delimited(&content, b',', text_column),
            InputFormat::Tsv => Self::parse_delimited(&content, b'\t', text_column),
        }
        .with_context(|| format!("Failed to parse {}", path.display()))?;

        log::debug!(
            "read {} rows x {} columns from {}",
            table.len(),
            table.columns().len(),
            path.display()
        );
        Ok(table)
    }

    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Parse a JSON array of objects
    pub fn parse_json(content: &str) -> Result<RowTable> {
        let records: Vec<JsonValue> = serde_json::from_str(content)?;
        Self::from_objects(records)
    }

    /// Parse JSON Lines; blank lines are skipped
    pub fn parse_json_lines(content: &str) -> Result<RowTable> {
        let records = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str(line).with_context(|| format!("invalid JSON on line {}", i + 1))
            })
            .collect::<Result<Vec<JsonValue>>>()?;
        Self::from_objects(records)
    }

    /// Parse delimited text with a header row
    pub fn parse_delimited(
        content: &str,
        delimiter: u8,
        text_column: Option<&str>,
    ) -> Result<RowTable> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .context("missing header row")?
            .iter()
            .map(str::to_string)
            .collect();
        let text_index = text_column.and_then(|name| headers.iter().position(|h| h == name));

        let mut table = RowTable::new(headers)?;
        for (i, record) in reader.records().enumerate() {
            let record = record.with_context(|| format!("invalid row {}", i + 1))?;
            let values = record
                .iter()
                .enumerate()
                .map(|(c, cell)| {
                    if Some(c) == text_index {
                        Value::Text(cell.to_string())
                    } else {
                        parse_cell(cell)
                    }
                })
                .collect();
            table.push_row(values)?;
        }

        Ok(table)
    }

    fn from_objects(records: Vec<JsonValue>) -> Result<RowTable> {
        let objects = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| match record {
                JsonValue::Object(map) => Ok(map),
                other => Err(CliError::InvalidInput(format!(
                    "record {} is not an object: {}",
                    i + 1,
                    json_type(&other)
                ))),
            })
            .collect::<Result<Vec<Map<String, JsonValue>>, _>>()?;

        let mut columns: Vec<String> = Vec::new();
        for object in &objects {
            for key in object.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }

        let mut table = RowTable::new(columns.clone())?;
        for mut object in objects {
            let values = columns
                .iter()
                .map(|c| object.remove(c).map(json_to_value).unwrap_or_default())
                .collect();
            table.push_row(values)?;
        }

        Ok(table)
    }
}

/// Infer a scalar from a delimited cell
fn parse_cell(cell: &str) -> Value {
    let trimmed = cell.trim();
    if trimmed.is_empty() || trimmed == "NA" {
        return Value::Missing;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Integer(i);
    }
    match trimmed {
        "true" | "TRUE" | "True" => return Value::Boolean(true),
        "false" | "FALSE" | "False" => return Value::Boolean(false),
        _ => {}
    }
    match trimmed.parse::<f64>() {
        Ok(x) if x.is_finite() => Value::Real(x),
        _ => Value::Text(cell.to_string()),
    }
}

fn json_to_value(value: JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Missing,
        JsonValue::Bool(b) => Value::Boolean(b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => n.as_f64().map(Value::Real).unwrap_or_default(),
        },
        JsonValue::String(s) => Value::Text(s),
        nested => Value::Text(nested.to_string()),
    }
}

fn json_type(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
