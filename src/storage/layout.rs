//! Output directory layout

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::ExtractResult;

/// Where a run writes its text pages, figures, manifest and report
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    /// Layout rooted at `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        OutputLayout {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Create the root, text and image directories
    pub fn create_dirs(&self) -> ExtractResult<()> {
        fs::create_dir_all(self.text_dir())?;
        fs::create_dir_all(self.images_dir())?;
        Ok(())
    }

    /// Output root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one text file per page
    pub fn text_dir(&self) -> PathBuf {
        self.root.join("text_pages")
    }

    /// Directory holding accepted figures
    pub fn images_dir(&self) -> PathBuf {
        self.root.join("images")
    }

    /// Text file for a 1-based page number, e.g. `page_007.txt`
    pub fn text_page_path(&self, page: u32) -> PathBuf {
        self.text_dir().join(format!("page_{:03}.txt", page))
    }

    /// JSON manifest
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join("manifest.json")
    }

    /// Plain-text report log
    pub fn report_path(&self) -> PathBuf {
        self.root.join("extraction_report.txt")
    }
}
