//! Emission of `KEY=value` build values
//!
//! Values always go to stdout. When an accumulation file is configured
//! (`GITHUB_OUTPUT` in GitHub Actions) they are appended there as well.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[cfg(test)]
mod tests;

/// Writes build values to stdout and an optional accumulation file
#[derive(Debug, Clone, Default)]
pub struct OutputSink {
    accumulator: Option<PathBuf>,
}

impl OutputSink {
    pub fn new(accumulator: Option<PathBuf>) -> Self {
        Self { accumulator }
    }

    /// Emit lines to stdout and the accumulation file
    pub fn emit(&self, lines: &[String]) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.emit_to(&mut handle, lines)
    }

    /// Emit lines to `out` and the accumulation file.
    ///
    /// Only a failure to write `out` is an error; accumulation file problems
    /// are logged and skipped.
    pub fn emit_to<W: Write>(&self, out: &mut W, lines: &[String]) -> Result<()> {
        info!("Output values:");

        if let Some(path) = &self.accumulator {
            match append_lines(path, lines) {
                Ok(()) => info!("Appended {} value(s) to {}", lines.len(), path.display()),
                Err(e) => warn!("Failed to write to {}: {:#}", path.display(), e),
            }
        }

        for line in lines {
            writeln!(out, "{}", line).context("Failed to write output values")?;
        }
        out.flush().context("Failed to flush output values")?;

        Ok(())
    }
}

fn append_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    for line in lines {
        writeln!(file, "{}", line)?;
    }
    file.flush()?;

    Ok(())
}
