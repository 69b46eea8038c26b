//! Fakes for the document capabilities


use std::cell::Cell;

use image::DynamicImage;

use crate::document::{OcrEngine, PageSource, VerticalBand};
use crate::errors::{ExtractError, ExtractResult};

/// One page of a fake document
pub struct FakePage {
    pub text: Option<String>,
    pub band: DynamicImage,
}

impl FakePage {
    pub fn new(text: Option<&str>, band: DynamicImage) -> Self {
        FakePage {
            text: text.map(str::to_string),
            band,
        }
    }
}

/// Page source serving fixed text and figure bands
pub struct FakeSource {
    pub pages: Vec<FakePage>,
}

impl FakeSource {
    fn page(&self, page: u32) -> ExtractResult<&FakePage> {
        page.checked_sub(1)
            .and_then(|index| self.pages.get(index as usize))
            .ok_or(ExtractError::PageOutOfRange(page))
    }
}

impl PageSource for FakeSource {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_text(&self, page: u32) -> ExtractResult<Option<String>> {
        Ok(self.page(page)?.text.clone())
    }

    fn render_page(&self, page: u32, _scale: f32) -> ExtractResult<DynamicImage> {
        self.page(page)?;
        Ok(DynamicImage::new_rgb8(100, 140))
    }

    fn render_band(&self, page: u32, _scale: f32, _band: VerticalBand) -> ExtractResult<DynamicImage> {
        Ok(self.page(page)?.band.clone())
    }
}

/// OCR engine returning a fixed answer and counting calls
pub struct FakeOcr {
    pub answer: Option<String>,
    pub calls: Cell<u32>,
}

impl FakeOcr {
    pub fn answering(text: &str) -> Self {
        FakeOcr {
            answer: Some(text.to_string()),
            calls: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        FakeOcr {
            answer: None,
            calls: Cell::new(0),
        }
    }
}

impl OcrEngine for FakeOcr {
    fn recognize(&self, _image: &DynamicImage) -> ExtractResult<String> {
        self.calls.set(self.calls.get() + 1);
        self.answer
            .clone()
            .ok_or_else(|| ExtractError::OcrError("engine unavailable".to_string()))
    }
}
