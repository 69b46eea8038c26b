//! Caption-driven figure extraction

use std::fs;

use log::{debug, warn};

use crate::caption::{locate_captions, number_repeats};
use crate::diagram::DiagramCropper;
use crate::document::PageSource;
use crate::storage::FigureStore;

use super::candidate::Candidate;
use super::context::PipelineContext;

/// Find, render and validate the figures of one page
///
/// The page's stored text is read back and scanned for captions. For every
/// caption the figure band is saved as a candidate and validated
/// independently; survivors are appended to the manifest in detection
/// order. Repeated identifiers are told apart by their position on the
/// page. Pages without stored text or without captions get an empty list.
pub fn extract_page_figures<S, F>(
    source: &S,
    store: &mut F,
    cropper: &DiagramCropper,
    context: &mut PipelineContext,
    page: u32,
) -> Vec<Candidate>
where
    S: PageSource + ?Sized,
    F: FigureStore + ?Sized,
{
    context.manifest.ensure_page(page);

    let Some(text_file) = context.manifest.text_page(page).map(str::to_string) else {
        return Vec::new();
    };
    let text = match fs::read(&text_file) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            warn!("Could not read text of page {} from {}: {}", page, text_file, e);
            return Vec::new();
        }
    };

    let figures = locate_captions(Some(&text));
    if figures.is_empty() {
        return Vec::new();
    }
    debug!("Page {} references {} figures", page, figures.len());

    let band = match source.render_band(page, context.config.render_scale, context.config.figure_band) {
        Ok(band) => band,
        Err(e) => {
            warn!("Could not render figure band of page {}: {}", page, e);
            return Vec::new();
        }
    };

    let mut settled = Vec::with_capacity(figures.len());
    for (figure, occurrence) in number_repeats(figures) {
        let candidate = match Candidate::render(store, page, figure, occurrence, &band) {
            Ok(candidate) => candidate,
            Err(e) => {
                warn!("Could not save figure candidate on page {}: {}", page, e);
                continue;
            }
        };
        context.summary.candidates += 1;

        let candidate = candidate.settle(cropper, store);
        if candidate.is_accepted() {
            context.summary.accepted += 1;
            context.manifest.add_figure(page, candidate.path());
        } else {
            context.summary.rejected += 1;
        }
        settled.push(candidate);
    }

    settled
}
