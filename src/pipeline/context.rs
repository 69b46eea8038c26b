//! Pipeline configuration and per-run state

use log::info;

use crate::diagram::DiagramThresholds;
use crate::document::VerticalBand;
use crate::storage::{ExtractionManifest, ExtractionReport, OutputLayout};

/// Settings for one extraction run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Pixels per PDF point when rendering the figure band
    pub render_scale: f32,
    /// Part of each page rendered when looking for figures
    pub figure_band: VerticalBand,
    /// Resolution of the full-page raster handed to OCR
    pub ocr_dpi: f32,
    /// Diagram cropper and validator thresholds
    pub thresholds: DiagramThresholds,
    /// Show progress bars
    pub show_progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            render_scale: 3.0,
            figure_band: VerticalBand::FIGURE_AREA,
            ocr_dpi: 300.0,
            thresholds: DiagramThresholds::default(),
            show_progress: true,
        }
    }
}

impl PipelineConfig {
    /// Render scale that yields `ocr_dpi` from 72-point pages
    pub fn ocr_scale(&self) -> f32 {
        self.ocr_dpi / 72.0
    }
}

/// Counters reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    /// Pages processed
    pub pages: u32,
    /// Pages whose text came from OCR
    pub ocr_fallbacks: u32,
    /// Figure candidates rendered from captions
    pub candidates: u32,
    /// Candidates kept as figures
    pub accepted: u32,
    /// Candidates deleted after validation
    pub rejected: u32,
}

impl ExtractionSummary {
    /// Log the counters at info level
    pub fn log(&self) {
        info!(
            "Processed {} pages ({} via OCR); {} figure candidates, {} accepted, {} rejected",
            self.pages, self.ocr_fallbacks, self.candidates, self.accepted, self.rejected
        );
    }
}

/// State threaded through the stages of one run
///
/// The manifest, report and summary are only touched between pages.
#[derive(Debug)]
pub struct PipelineContext {
    /// Run settings
    pub config: PipelineConfig,
    /// Output locations
    pub layout: OutputLayout,
    /// Manifest under construction
    pub manifest: ExtractionManifest,
    /// Report log under construction
    pub report: ExtractionReport,
    /// Running counters
    pub summary: ExtractionSummary,
}

impl PipelineContext {
    /// Fresh context for a run writing to `layout`
    pub fn new(config: PipelineConfig, layout: OutputLayout) -> Self {
        PipelineContext {
            config,
            layout,
            manifest: ExtractionManifest::new(),
            report: ExtractionReport::new(),
            summary: ExtractionSummary::default(),
        }
    }
}
