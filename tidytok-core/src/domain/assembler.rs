//! Text assembly for a run.

use crate::domain::run::Run;
use std::ops::Range;

/// Separator placed between consecutive row fragments.
pub const SEPARATOR: &str = " ";

/// The byte range one source row occupies in an assembled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSpan {
    /// Index of the source row in the input table
    pub row_index: usize,
    /// Half-open byte range in the assembled text
    pub range: Range<usize>,
}

/// A run's text fragments joined into one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledUnit {
    /// Joined text
    pub text: String,
    /// One span per member row, in row order
    pub spans: Vec<RowSpan>,
}

/// Joins the fragments of a run.
pub struct TextAssembler;

impl TextAssembler {
    /// Join member rows with a single space, recording each row's range.
    ///
    /// Empty rows still get a zero-length span and a separator.
    pub fn assemble(run: &Run<'_, '_>) -> AssembledUnit {
        if let [only] = run.rows {
            return AssembledUnit {
                text: only.text.to_string(),
                spans: vec![RowSpan {
                    row_index: only.index,
                    range: 0..only.text.len(),
                }],
            };
        }

        let capacity = run.rows.iter().map(|r| r.text.len()).sum::<usize>()
            + run.rows.len().saturating_sub(1) * SEPARATOR.len();
        let mut text = String::with_capacity(capacity);
        let mut spans = Vec::with_capacity(run.rows.len());

        for (i, row) in run.rows.iter().enumerate() {
            if i > 0 {
                text.push_str(SEPARATOR);
            }
            let start = text.len();
            text.push_str(&row.text);
            spans.push(RowSpan {
                row_index: row.index,
                range: start..text.len(),
            });
        }

        AssembledUnit { text, spans }
    }
}
