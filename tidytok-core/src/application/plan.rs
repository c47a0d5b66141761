//! Resolved per-call execution plan.
//!
//! A plan binds a [`TokenizeConfig`] to a concrete table: column names are
//! resolved to positions and patterns are compiled. Every configuration error
//! surfaces here, before any row is touched.

use crate::api::TokenizeConfig;
use crate::domain::{
    table::cell_text, KeyExtractor, MetadataProjector, OutputRow, Row, RowTable, Run, Segmenter,
    TextAssembler, Token,
};
use crate::error::{ConfigError, Error, Result};

/// A configuration resolved against one table.
#[derive(Debug, Clone)]
pub struct ExecutionPlan {
    text_column: usize,
    keys: KeyExtractor,
    output_columns: Vec<usize>,
    segmenter: Segmenter,
}

impl ExecutionPlan {
    /// Resolve `config` against `table`.
    pub fn resolve(
        table: &RowTable,
        config: &TokenizeConfig,
    ) -> std::result::Result<Self, ConfigError> {
        config.validate()?;

        let text_column = table
            .column_index(config.text_column())
            .ok_or_else(|| ConfigError::UnknownColumn(config.text_column().to_string()))?;
        let keys = KeyExtractor::resolve(config.collapse(), config.group_by(), table)?;
        let segmenter = Segmenter::new(config.granularity(), config.lowercase())?;

        let output_columns = (0..table.columns().len())
            .filter(|&c| c != text_column || config.keep_text_column())
            .collect();

        Ok(Self {
            text_column,
            keys,
            output_columns,
            segmenter,
        })
    }

    /// Names of the metadata columns carried on every output row.
    pub fn output_column_names(&self, table: &RowTable) -> Vec<String> {
        self.output_columns
            .iter()
            .map(|&c| table.columns()[c].clone())
            .collect()
    }

    /// Returns true if rows are merged into runs at all.
    pub fn collapses(&self) -> bool {
        !matches!(self.keys, KeyExtractor::None)
    }

    /// Build the per-call row views, in table order.
    pub fn rows<'a>(&self, table: &'a RowTable) -> Vec<Row<'a>> {
        table
            .rows()
            .enumerate()
            .map(|(index, values)| Row {
                index,
                text: values.get(self.text_column).map(cell_text).unwrap_or_default(),
                metadata: values,
                group_key: self.keys.extract(values),
            })
            .collect()
    }

    /// Assemble, segment and project one run.
    ///
    /// Fails if a token cannot be placed on a row of `run`, which means the
    /// run's rows are not contiguous in the table.
    pub fn process_run(&self, run: &Run<'_, '_>) -> Result<Vec<OutputRow>> {
        let Some(base) = run.first_index() else {
            return Ok(Vec::new());
        };

        let unit = TextAssembler::assemble(run);

        self.segmenter
            .segment(&unit.text)
            .into_iter()
            .enumerate()
            .map(|(ordinal, segment)| {
                let unmapped = || Error::UnmappedToken {
                    run: run.ordinal,
                    start: segment.range.start,
                    end: segment.range.end,
                };
                let projection = MetadataProjector::project(&segment.range, &unit.spans)
                    .ok_or_else(unmapped)?;
                let row = projection
                    .representative
                    .checked_sub(base)
                    .and_then(|offset| run.rows.get(offset))
                    .filter(|row| row.index == projection.representative)
                    .ok_or_else(unmapped)?;
                let metadata = self
                    .output_columns
                    .iter()
                    .map(|&c| row.metadata.get(c).cloned().unwrap_or_default())
                    .collect();

                Ok(OutputRow {
                    token: Token {
                        text: segment.text,
                        source_rows: projection.source_rows,
                        ordinal,
                        span: segment.range,
                    },
                    row_index: projection.representative,
                    metadata,
                })
            })
            .collect()
    }
}
