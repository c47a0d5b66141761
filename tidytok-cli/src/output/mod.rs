//! Output formatting module

use anyhow::Result;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use std::io::Write;
use tidytok_core::{OutputRow, TokenTable, Value};

pub mod json;
pub mod jsonl;
pub mod tsv;

pub use json::JsonFormatter;
pub use jsonl::JsonLinesFormatter;
pub use tsv::TsvFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated values with a header row
    #[default]
    Tsv,
    /// Pretty-printed JSON array of objects
    Json,
    /// One JSON object per line
    Jsonl,
}

/// One output row as ordered (column, value) pairs, token column last
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRecord {
    fields: Vec<(String, Value)>,
}

impl TokenRecord {
    /// Column names every record of `table` carries, token column last
    pub fn column_names(table: &TokenTable) -> Vec<String> {
        table
            .columns
            .iter()
            .filter(|name| **name != table.token_column)
            .chain(std::iter::once(&table.token_column))
            .cloned()
            .collect()
    }

    /// Flatten one row of a token table
    ///
    /// A metadata column named like the token column is dropped.
    pub fn from_output(table: &TokenTable, row: &OutputRow) -> Self {
        let mut fields: Vec<(String, Value)> = table
            .columns
            .iter()
            .zip(&row.metadata)
            .filter(|(name, _)| **name != table.token_column)
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        fields.push((
            table.token_column.clone(),
            Value::Text(row.token.text.clone()),
        ));
        Self { fields }
    }

    /// Column names in output order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Values in output order
    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.fields.iter().map(|(_, value)| value)
    }

    /// Value of a column
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }
}

impl Serialize for TokenRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Announce the next input table and the columns of its records
    ///
    /// Called once per input file, before any of its records.
    fn start_table(&mut self, _source: &str, _columns: &[String]) -> Result<()> {
        Ok(())
    }

    /// Format and output a single token row
    fn format_record(&mut self, record: TokenRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<W: Write + 'static>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Tsv => Box::new(TsvFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Jsonl => Box::new(JsonLinesFormatter::new(writer)),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tidytok_core::{tokenize, RowTable, TokenizeConfig};

    #[test]
    fn test_record_from_output_orders_token_last() {
        let table = RowTable::from_rows(
            ["line", "text", "word"],
            vec![vec![
                Value::Integer(1),
                Value::from("Because I"),
                Value::from("stale"),
            ]],
        )
        .unwrap();
        let output = tokenize(&table, &TokenizeConfig::default()).unwrap();

        let record = TokenRecord::from_output(&output, &output.rows[1]);
        assert_eq!(record.names().collect::<Vec<_>>(), vec!["line", "word"]);
        assert_eq!(record.get("word"), Some(&Value::from("i")));
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"line":1,"word":"i"}"#
        );
    }

    #[test]
    fn test_column_names_match_records() {
        let table = RowTable::from_rows(
            ["word", "book", "text"],
            vec![vec![
                Value::from("stale"),
                Value::from("Emma"),
                Value::from("Emma Woodhouse"),
            ]],
        )
        .unwrap();
        let output = tokenize(&table, &TokenizeConfig::default()).unwrap();

        let names = TokenRecord::column_names(&output);
        assert_eq!(names, vec!["book", "word"]);
        let record = TokenRecord::from_output(&output, &output.rows[0]);
        assert_eq!(record.names().collect::<Vec<_>>(), names);
    }
}
