use crate::{core::stats::RunStats, utils::util::Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Per-run conversion log: one `Warning:` line per skipped input line,
/// followed by the statistics summary.
pub struct ConversionLog<W: Write> {
    writer: W,
    warnings: usize,
}

impl ConversionLog<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .map_err(|e| crate::svhap_error!("Failed to create log file {}: {e}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ConversionLog<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            warnings: 0,
        }
    }

    /// Records `message` together with the offending raw line.
    pub fn warn(&mut self, message: &str, line: &str) -> Result<()> {
        log::warn!("{message}: {line}");
        writeln!(self.writer, "Warning: {message}: {line}")?;
        self.warnings += 1;
        Ok(())
    }

    pub fn warnings(&self) -> usize {
        self.warnings
    }

    pub fn write_summary(&mut self, stats: &RunStats) -> Result<()> {
        write!(self.writer, "{stats}")?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
