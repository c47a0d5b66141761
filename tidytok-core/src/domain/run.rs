//! Run detection over ordered rows.
//!
//! A run is a maximal contiguous slice of rows whose collapsing keys are
//! identical. Membership is decided by adjacency alone: two rows with equal
//! keys separated by a row with a different key land in different runs.

use crate::domain::table::{CollapseKey, Row, RowTable};
use crate::domain::value::Value;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Whether adjacent rows may be merged before tokenizing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollapsePolicy {
    /// Every row is tokenized on its own
    #[default]
    None,
    /// Adjacent rows equal on these columns are merged; an empty list
    /// merges the whole table
    Columns(Vec<String>),
}

impl CollapsePolicy {
    /// Collapse on the given columns.
    pub fn columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CollapsePolicy::Columns(columns.into_iter().map(Into::into).collect())
    }

    /// Returns true for [`CollapsePolicy::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, CollapsePolicy::None)
    }
}

/// Extracts the collapsing key of a row from resolved column positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyExtractor {
    /// No collapsing: every row stands alone
    None,
    /// Key is the tuple of values at these column positions
    Columns(Vec<usize>),
}

impl KeyExtractor {
    /// Resolve the effective key from a collapse policy or a group-by.
    ///
    /// The two are mutually exclusive; an empty group-by means no grouping.
    pub fn resolve(
        collapse: &CollapsePolicy,
        group_by: &[String],
        table: &RowTable,
    ) -> Result<Self, ConfigError> {
        let columns = match (collapse, group_by.is_empty()) {
            (CollapsePolicy::Columns(_), false) => {
                return Err(ConfigError::ConflictingCollapseSpecification)
            }
            (CollapsePolicy::Columns(cols), true) => cols.as_slice(),
            (CollapsePolicy::None, false) => group_by,
            (CollapsePolicy::None, true) => return Ok(KeyExtractor::None),
        };

        columns
            .iter()
            .map(|name| {
                table
                    .column_index(name)
                    .ok_or_else(|| ConfigError::UnknownColumn(name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(KeyExtractor::Columns)
    }

    /// Extract the key for a row's values.
    pub fn extract(&self, values: &[Value]) -> Option<CollapseKey> {
        match self {
            KeyExtractor::None => None,
            KeyExtractor::Columns(cols) => Some(
                cols.iter()
                    .map(|&c| values.get(c).cloned().unwrap_or_default())
                    .collect(),
            ),
        }
    }
}

/// A maximal run of adjacent rows sharing a collapsing key.
#[derive(Debug, Clone, Copy)]
pub struct Run<'r, 'a> {
    /// Position of the run in the run sequence
    pub ordinal: usize,
    /// Member rows, contiguous and in input order
    pub rows: &'r [Row<'a>],
}

impl Run<'_, '_> {
    /// Number of member rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the run has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first member row.
    pub fn first_index(&self) -> Option<usize> {
        self.rows.first().map(|r| r.index)
    }
}

/// Partitions ordered rows into runs.
pub struct RunDetector;

impl RunDetector {
    /// Returns true if `current` continues the run ending at `previous`.
    ///
    /// Rows without a key never continue a run.
    pub fn continues(previous: &Row<'_>, current: &Row<'_>) -> bool {
        match (&previous.group_key, &current.group_key) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Single left-to-right scan producing runs that cover every row once.
    pub fn detect<'r, 'a>(rows: &'r [Row<'a>]) -> Vec<Run<'r, 'a>> {
        let mut runs = Vec::new();
        let mut start = 0;

        for i in 1..rows.len() {
            if !Self::continues(&rows[i - 1], &rows[i]) {
                runs.push(Run {
                    ordinal: runs.len(),
                    rows: &rows[start..i],
                });
                start = i;
            }
        }

        if start < rows.len() {
            runs.push(Run {
                ordinal: runs.len(),
                rows: &rows[start..],
            });
        }

        log::trace!("detected {} runs over {} rows", runs.len(), rows.len());
        runs
    }
}
