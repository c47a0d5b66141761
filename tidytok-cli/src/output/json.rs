//! JSON output formatter

use super::{OutputFormatter, TokenRecord};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs token rows as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<TokenRecord>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_record(&mut self, record: TokenRecord) -> Result<()> {
        self.records.push(record);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
