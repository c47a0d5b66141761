//! TSV output formatter

use super::{OutputFormatter, TokenRecord};
use crate::error::CliError;
use anyhow::Result;
use csv::{Writer, WriterBuilder};
use std::io::Write;

/// TSV formatter - one header line, then one line per token row
///
/// Every table written to the same output must share the header's columns.
pub struct TsvFormatter<W: Write> {
    writer: Writer<W>,
    header: Option<Vec<String>>,
}

impl<W: Write> TsvFormatter<W> {
    /// Create a new TSV formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer: WriterBuilder::new().delimiter(b'\t').from_writer(writer),
            header: None,
        }
    }

    /// Write the header on first use, otherwise check `columns` against it
    fn ensure_header(&mut self, source: Option<&str>, columns: &[String]) -> Result<()> {
        if let Some(header) = &self.header {
            if header.as_slice() == columns {
                return Ok(());
            }
            let origin = source.map(|s| format!("{s}: ")).unwrap_or_default();
            return Err(CliError::InvalidInput(format!(
                "{origin}columns [{}] do not match the TSV header [{}]",
                columns.join(", "),
                header.join(", ")
            ))
            .into());
        }

        self.writer.write_record(columns)?;
        self.header = Some(columns.to_vec());
        Ok(())
    }
}

impl<W: Write> OutputFormatter for TsvFormatter<W> {
    fn start_table(&mut self, source: &str, columns: &[String]) -> Result<()> {
        self.ensure_header(Some(source), columns)
    }

    fn format_record(&mut self, record: TokenRecord) -> Result<()> {
        let names: Vec<String> = record.names().map(str::to_string).collect();
        self.ensure_header(None, &names)?;

        let cells: Vec<String> = record.values().map(ToString::to_string).collect();
        self.writer.write_record(&cells)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
