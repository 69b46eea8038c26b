//! Vertical page band

use image::DynamicImage;

/// Horizontal strip of a page given as fractions of the page height
///
/// Figures in the supported textbooks sit between the running header and
/// the footer, so only that strip is rendered when looking for diagrams.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalBand {
    /// Top edge as a fraction of page height (0.0 = top)
    pub top: f32,
    /// Bottom edge as a fraction of page height (1.0 = bottom)
    pub bottom: f32,
}

impl VerticalBand {
    /// Band between 25% and 90% of the page height
    pub const FIGURE_AREA: VerticalBand = VerticalBand { top: 0.25, bottom: 0.90 };

    /// Create a band, clamping both edges into `[0, 1]`
    pub fn new(top: f32, bottom: f32) -> Self {
        let top = top.clamp(0.0, 1.0);
        let bottom = bottom.clamp(top, 1.0);
        VerticalBand { top, bottom }
    }

    /// Pixel rows `(y, height)` of the band on an image `page_height` tall
    ///
    /// The span always lies inside the image and is at least one row high
    /// for a non-empty image.
    pub fn pixel_span(&self, page_height: u32) -> (u32, u32) {
        if page_height == 0 {
            return (0, 0);
        }
        let top = ((self.top * page_height as f32).floor() as u32).min(page_height - 1);
        let bottom = ((self.bottom * page_height as f32).ceil() as u32).clamp(top + 1, page_height);
        (top, bottom - top)
    }

    /// Crop a full-page raster to the band
    pub fn crop(&self, page: &DynamicImage) -> DynamicImage {
        let (y, height) = self.pixel_span(page.height());
        page.crop_imm(0, y, page.width(), height)
    }
}

impl Default for VerticalBand {
    fn default() -> Self {
        VerticalBand::FIGURE_AREA
    }
}
