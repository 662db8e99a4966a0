//! Plain text output formatter

use super::{OutputFormatter, NOT_FOUND_MESSAGE};
use anyhow::Result;
use compound_engine::{SearchMetadata, SearchOutcome};
use std::io::{self, Write};

/// Plain text formatter - the word on one line, optionally its parts
pub struct TextFormatter<W: Write> {
    writer: W,
    show_parts: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, show_parts: bool) -> Self {
        Self { writer, show_parts }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout(show_parts: bool) -> Self {
        Self::new(io::stdout(), show_parts)
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_outcome(&mut self, outcome: &SearchOutcome, _metadata: &SearchMetadata) -> Result<()> {
        match outcome {
            SearchOutcome::Found(compound) => {
                writeln!(self.writer, "{}", compound.word)?;
                if self.show_parts {
                    writeln!(self.writer, "  = {}", compound.parts.join(" + "))?;
                }
            }
            SearchOutcome::NotFound => writeln!(self.writer, "{NOT_FOUND_MESSAGE}")?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
