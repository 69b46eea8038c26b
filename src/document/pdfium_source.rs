//! PDFium-backed page source
//!
//! Text layers and rasters come from pdfium-render. The library is bound
//! dynamically, so `libpdfium` must be present next to the binary, under
//! `./vendor/pdfium/lib/`, or in a system library path.

use std::path::{Path, PathBuf};

use image::DynamicImage;
use log::{debug, info};
use pdfium_render::prelude::*;

use crate::errors::{ExtractError, ExtractResult};

use super::source::PageSource;

/// Page source reading a PDF file through PDFium
///
/// The document is parsed once in `open` and borrowed from the bound
/// library for as long as the source lives.
pub struct PdfiumSource<'a> {
    document: PdfDocument<'a>,
    path: PathBuf,
    page_count: u32,
}

impl<'a> PdfiumSource<'a> {
    /// Load `path` with an already bound PDFium library
    pub fn open<P: AsRef<Path>>(pdfium: &'a Pdfium, path: P) -> ExtractResult<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(ExtractError::PdfError(format!("{} is not a file", path.display())));
        }

        let document = pdfium
            .load_pdf_from_file(&path, None)
            .map_err(|e| ExtractError::PdfError(format!("Failed to load {}: {}", path.display(), e)))?;
        let page_count = document.pages().len() as u32;
        info!("Opened {} with {} pages", path.display(), page_count);

        Ok(PdfiumSource { document, path, page_count })
    }

    /// Path of the opened document
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn page(&self, page: u32) -> ExtractResult<PdfPage<'_>> {
        if page == 0 || page > self.page_count {
            return Err(ExtractError::PageOutOfRange(page));
        }
        let index = u16::try_from(page - 1).map_err(|_| ExtractError::PageOutOfRange(page))?;

        self.document
            .pages()
            .get(index)
            .map_err(|e| ExtractError::PdfError(format!("Failed to get page {}: {}", page, e)))
    }
}

/// Bind to a local copy of PDFium, falling back to the system library
pub fn bind_pdfium() -> ExtractResult<Pdfium> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| {
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                "./vendor/pdfium/lib/",
            ))
        })
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| ExtractError::PdfError(format!("Failed to load PDFium library: {:?}", e)))?;

    Ok(Pdfium::new(bindings))
}

impl PageSource for PdfiumSource<'_> {
    fn page_count(&self) -> u32 {
        self.page_count
    }

    fn page_text(&self, page: u32) -> ExtractResult<Option<String>> {
        let pdf_page = self.page(page)?;
        let text = pdf_page
            .text()
            .map_err(|e| ExtractError::PdfError(format!("Failed to read text of page {}: {}", page, e)))?
            .all();
        Ok(if text.is_empty() { None } else { Some(text) })
    }

    fn render_page(&self, page: u32, scale: f32) -> ExtractResult<DynamicImage> {
        let pdf_page = self.page(page)?;
        let config = PdfRenderConfig::new().scale_page_by_factor(scale);
        let bitmap = pdf_page
            .render_with_config(&config)
            .map_err(|e| ExtractError::PdfError(format!("Failed to render page {}: {}", page, e)))?;

        let image = DynamicImage::ImageRgb8(bitmap.as_image().to_rgb8());
        debug!("Rendered page {} at scale {} to {}x{}", page, scale, image.width(), image.height());
        Ok(image)
    }
}
