//! JSON Lines output formatter

use super::{OutputFormatter, TokenRecord};
use anyhow::Result;
use std::io::Write;

/// JSON Lines formatter - streams one object per token row
pub struct JsonLinesFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesFormatter<W> {
    /// Create a new JSON Lines formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for JsonLinesFormatter<W> {
    fn format_record(&mut self, record: TokenRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &record)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
