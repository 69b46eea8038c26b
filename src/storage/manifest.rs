//! Extraction manifest
//!
//! Maps page numbers to the stored text file and to the accepted figures.
//! Pages are keyed by number so the JSON output is always in page order.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use crate::errors::ExtractResult;

/// Manifest written as `manifest.json` at the end of a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionManifest {
    /// Page number -> text file path
    pub text_pages: BTreeMap<u32, String>,
    /// Page number -> accepted figure paths in detection order
    pub figures: BTreeMap<u32, Vec<String>>,
}

impl ExtractionManifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the text file of a page
    pub fn set_text_page(&mut self, page: u32, path: &Path) {
        self.text_pages.insert(page, path.display().to_string());
    }

    /// Text file recorded for a page
    pub fn text_page(&self, page: u32) -> Option<&str> {
        self.text_pages.get(&page).map(String::as_str)
    }

    /// Make sure a page has a (possibly empty) figure list
    pub fn ensure_page(&mut self, page: u32) {
        self.figures.entry(page).or_default();
    }

    /// Append an accepted figure to a page
    pub fn add_figure(&mut self, page: u32, path: &Path) {
        self.figures.entry(page).or_default().push(path.display().to_string());
    }

    /// Accepted figures of a page
    pub fn figures_for(&self, page: u32) -> &[String] {
        self.figures.get(&page).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total accepted figures across all pages
    pub fn figure_count(&self) -> usize {
        self.figures.values().map(Vec::len).sum()
    }

    /// Serialize with four-space indentation
    pub fn to_json(&self) -> ExtractResult<String> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Write the manifest to `path`
    pub fn write<P: AsRef<Path>>(&self, path: P) -> ExtractResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
