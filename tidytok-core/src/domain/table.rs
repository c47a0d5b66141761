//! Row-oriented input table and the per-call row view.

use crate::domain::value::Value;
use crate::error::TableError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// An ordered table of rows aligned with a column schema.
///
/// Row order defines adjacency and output order. Rows are immutable once
/// pushed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl RowTable {
    /// Create an empty table with the given schema.
    pub fn new<I, S>(columns: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        for name in columns {
            let name = name.into();
            if names.contains(&name) {
                return Err(TableError::DuplicateColumn(name));
            }
            names.push(name);
        }
        Ok(Self {
            columns: names,
            rows: Vec::new(),
        })
    }

    /// Create a table from a schema and a list of rows.
    pub fn from_rows<I, S>(columns: I, rows: Vec<Vec<Value>>) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(columns)?;
        table.rows.reserve(rows.len());
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append a row; it must have one value per column.
    pub fn push_row(&mut self, values: Vec<Value>) -> Result<(), TableError> {
        if values.len() != self.columns.len() {
            return Err(TableError::RowArity {
                row: self.rows.len(),
                expected: self.columns.len(),
                actual: values.len(),
            });
        }
        self.rows.push(values);
        Ok(())
    }

    /// Column names in schema order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Position of a column in the schema.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one row, in schema order.
    pub fn row(&self, index: usize) -> Option<&[Value]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// A single cell.
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let col = self.column_index(column)?;
        self.rows.get(row)?.get(col)
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[Value]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }
}

/// Values of the collapsing-key columns of one row.
pub type CollapseKey = Vec<Value>;

/// A row as seen by one tokenization call.
///
/// The text column has been resolved to a string and the collapsing key,
/// when one is in effect, has been extracted.
#[derive(Debug, Clone)]
pub struct Row<'a> {
    /// Ordinal position in the input table
    pub index: usize,
    /// Text fragment from the text column
    pub text: Cow<'a, str>,
    /// Every value of the row, in schema order
    pub metadata: &'a [Value],
    /// Collapsing key, if any is in effect
    pub group_key: Option<CollapseKey>,
}

/// Render a text-column cell as a text fragment.
pub(crate) fn cell_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Text(s) => Cow::Borrowed(s.as_str()),
        Value::Missing => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}
