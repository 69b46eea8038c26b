//! Tests for the PDFium page source
//!
//! These need a PDFium library at runtime and return early without one.

use pdfium_render::prelude::*;

use crate::document::{bind_pdfium, PageSource, PdfiumSource};
use crate::errors::ExtractError;

fn write_blank_pdf(pdfium: &Pdfium, path: &std::path::Path, pages: usize) {
    let mut document = pdfium.create_new_pdf().unwrap();
    for _ in 0..pages {
        document
            .pages_mut()
            .create_page_at_end(PdfPagePaperSize::a4())
            .unwrap();
    }
    document.save_to_file(path).unwrap();
}

#[test]
fn test_one_loaded_document_serves_every_call() {
    let Ok(pdfium) = bind_pdfium() else {
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.pdf");
    write_blank_pdf(&pdfium, &path, 2);

    let source = PdfiumSource::open(&pdfium, &path).unwrap();
    assert_eq!(source.page_count(), 2);
    assert_eq!(source.path(), path.as_path());

    std::fs::remove_file(&path).unwrap();
    for page in [1, 2, 1] {
        assert_eq!(source.page_text(page).unwrap(), None);
        let image = source.render_page(page, 0.5).unwrap();
        assert!(image.width() > 0 && image.height() > image.width());
    }
    assert!(matches!(source.page_text(3), Err(ExtractError::PageOutOfRange(3))));
    assert!(matches!(source.render_page(0, 1.0), Err(ExtractError::PageOutOfRange(0))));
}

#[test]
fn test_missing_file_is_a_pdf_error() {
    let Ok(pdfium) = bind_pdfium() else {
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let result = PdfiumSource::open(&pdfium, dir.path().join("missing.pdf"));
    assert!(matches!(result, Err(ExtractError::PdfError(_))));
}
