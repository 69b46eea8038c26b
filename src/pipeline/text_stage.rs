//! Page text extraction with OCR fallback

use std::fs;

use log::{debug, warn};

use crate::document::{is_text_garbled, OcrEngine, PageSource};
use crate::errors::ExtractResult;

use super::context::PipelineContext;

/// Extract and store the text of one page
///
/// The embedded text layer is used when it looks sound. Otherwise the page
/// is rendered at the OCR resolution and recognized; the fallback is logged
/// and recorded in the report. An OCR failure leaves the page with empty
/// text. Only failing to write the text file is an error.
pub fn extract_page_text<S, O>(
    source: &S,
    ocr: &O,
    context: &mut PipelineContext,
    page: u32,
) -> ExtractResult<String>
where
    S: PageSource + ?Sized,
    O: OcrEngine + ?Sized,
{
    let embedded = source.page_text(page).unwrap_or_else(|e| {
        debug!("No text layer for page {}: {}", page, e);
        None
    });

    let text = match embedded {
        Some(text) if !is_text_garbled(&text) => text,
        _ => {
            warn!("Page {} unreadable, falling back to OCR", page);
            context.report.ocr_fallback(page);
            context.summary.ocr_fallbacks += 1;
            ocr_page(source, ocr, context, page)
        }
    };

    let out_file = context.layout.text_page_path(page);
    fs::write(&out_file, &text)?;
    context.manifest.set_text_page(page, &out_file);
    debug!("Wrote {} characters of text for page {}", text.chars().count(), page);

    Ok(text)
}

fn ocr_page<S, O>(source: &S, ocr: &O, context: &PipelineContext, page: u32) -> String
where
    S: PageSource + ?Sized,
    O: OcrEngine + ?Sized,
{
    let image = match source.render_page(page, context.config.ocr_scale()) {
        Ok(image) => image,
        Err(e) => {
            warn!("Could not render page {} for OCR: {}", page, e);
            return String::new();
        }
    };

    ocr.recognize(&image).unwrap_or_else(|e| {
        warn!("OCR failed for page {}: {}", page, e);
        String::new()
    })
}
