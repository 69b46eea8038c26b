//! Plain-text extraction report

use std::fs;
use std::path::Path;

use crate::errors::ExtractResult;

/// Report log collected during a run and written once at the end
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    lines: Vec<String>,
}

impl ExtractionReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a page's text layer was unusable and OCR was used instead
    pub fn ocr_fallback(&mut self, page: u32) {
        self.lines.push(format!("WARNING: Page {} unreadable → OCR fallback", page));
    }

    /// Recorded lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines joined by newlines, without a trailing newline
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    /// Write the report to `path`
    pub fn write<P: AsRef<Path>>(&self, path: P) -> ExtractResult<()> {
        fs::write(path, self.render())?;
        Ok(())
    }
}
