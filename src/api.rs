use std::path::Path;

use crate::caption::{locate_captions, FigureId};
use crate::diagram::DiagramCropper;
use crate::document::TesseractCli;
use crate::errors::ExtractResult;
use crate::pipeline::{extract_pdf, ExtractionSummary, PipelineConfig};
use crate::utils::logger::Logger;

/// Main interface to the figurekit library
pub struct FigureKit {
    logger: Logger,
    config: PipelineConfig,
    ocr: TesseractCli,
}

impl FigureKit {
    /// Create a new FigureKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "figurekit.log"
    ///
    /// # Returns
    /// A FigureKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> ExtractResult<Self> {
        let log_path = log_file.unwrap_or("figurekit.log");
        let logger = Logger::new(log_path)?;
        Ok(FigureKit {
            logger,
            config: PipelineConfig::default(),
            ocr: TesseractCli::new(),
        })
    }

    /// Extract page text and figures from a PDF
    ///
    /// Writes `text_pages/`, `images/`, `manifest.json` and
    /// `extraction_report.txt` under `output_dir`.
    ///
    /// # Returns
    /// Counters describing the run
    pub fn extract(&self, pdf_path: &str, output_dir: &str) -> ExtractResult<ExtractionSummary> {
        let context = extract_pdf(pdf_path, output_dir, self.config.clone(), &self.ocr, &self.logger)?;
        Ok(context.summary)
    }

    /// Crop an image file to its diagram in place
    ///
    /// # Returns
    /// `true` if the file now holds an accepted diagram, `false` otherwise
    pub fn crop_diagram<P: AsRef<Path>>(&self, image_path: P) -> bool {
        DiagramCropper::new(self.config.thresholds).crop_file(image_path)
    }

    /// Figure identifiers referenced in a piece of text
    pub fn locate_captions(&self, text: &str) -> Vec<FigureId> {
        locate_captions(Some(text))
    }
}
