//! Sequential pipeline driver

use std::path::Path;

use log::info;

use crate::diagram::DiagramCropper;
use crate::document::{bind_pdfium, OcrEngine, PageSource, PdfiumSource};
use crate::errors::ExtractResult;
use crate::storage::{FigureStore, FsFigureStore, OutputLayout};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

use super::context::{PipelineConfig, PipelineContext};
use super::figure_stage::extract_page_figures;
use super::text_stage::extract_page_text;

/// Runs the text and figure stages over every page of a document
pub struct Pipeline<'a> {
    config: PipelineConfig,
    cropper: DiagramCropper,
    /// Logger for the per-page journal
    logger: &'a Logger,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline
    pub fn new(config: PipelineConfig, logger: &'a Logger) -> Self {
        let cropper = DiagramCropper::new(config.thresholds);
        Pipeline { config, cropper, logger }
    }

    /// Run both stages and write the manifest and report
    ///
    /// # Arguments
    /// * `source` - Document pages
    /// * `ocr` - Fallback text recognition
    /// * `store` - Where figure candidates are written
    /// * `layout` - Where text pages, manifest and report are written
    ///
    /// # Returns
    /// The finished context holding manifest, report and counters
    pub fn run<S, O, F>(&self, source: &S, ocr: &O, store: &mut F, layout: OutputLayout) -> ExtractResult<PipelineContext>
    where
        S: PageSource + ?Sized,
        O: OcrEngine + ?Sized,
        F: FigureStore + ?Sized,
    {
        layout.create_dirs()?;
        let mut context = PipelineContext::new(self.config.clone(), layout);
        let page_count = source.page_count();
        info!("Extracting {} pages into {}", page_count, context.layout.root().display());

        let progress = ProgressTracker::new(page_count as u64, "Extracting text", self.config.show_progress);
        for page in 1..=page_count {
            extract_page_text(source, ocr, &mut context, page)?;
            context.summary.pages += 1;
            progress.increment(1);
        }
        progress.finish();

        let progress = ProgressTracker::new(page_count as u64, "Extracting figures", self.config.show_progress);
        for page in 1..=page_count {
            let candidates = extract_page_figures(source, store, &self.cropper, &mut context, page);
            let accepted = candidates.iter().filter(|c| c.is_accepted()).count();
            self.logger.log(&format!(
                "page {}: {} figure candidates, {} accepted",
                page,
                candidates.len(),
                accepted
            ))?;
            progress.increment(1);
        }
        progress.finish();

        context.manifest.write(context.layout.manifest_path())?;
        context.report.write(context.layout.report_path())?;
        context.summary.log();

        Ok(context)
    }
}

/// Extract a PDF with the PDFium backend into `out_dir`
pub fn extract_pdf<P, Q, O>(
    pdf_path: P,
    out_dir: Q,
    config: PipelineConfig,
    ocr: &O,
    logger: &Logger,
) -> ExtractResult<PipelineContext>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    O: OcrEngine + ?Sized,
{
    let pdfium = bind_pdfium()?;
    let source = PdfiumSource::open(&pdfium, pdf_path)?;
    let layout = OutputLayout::new(out_dir);
    let mut store = FsFigureStore::create(layout.images_dir())?;

    Pipeline::new(config, logger).run(&source, ocr, &mut store, layout)
}
