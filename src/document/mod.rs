//! Document access capabilities
//!
//! The pipeline never talks to a PDF library or an OCR program directly.
//! It uses the `PageSource` and `OcrEngine` traits defined here, with
//! PDFium and the `tesseract` command-line program as the shipped backends.

mod band;
mod ocr;
mod pdfium_source;
mod source;
mod text_quality;
#[cfg(test)]
mod tests;

pub use band::VerticalBand;
pub use ocr::{OcrEngine, TesseractCli};
pub use pdfium_source::{bind_pdfium, PdfiumSource};
pub use source::PageSource;
pub use text_quality::{is_text_garbled, GARBLED_NON_ASCII_FRACTION};
