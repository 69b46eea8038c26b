//! Page source capability

use image::DynamicImage;

use crate::errors::ExtractResult;

use super::band::VerticalBand;

/// Access to the pages of a document
///
/// Page numbers are 1-based throughout.
pub trait PageSource {
    /// Number of pages in the document
    fn page_count(&self) -> u32;

    /// Embedded text layer of a page, `None` when the page has none
    fn page_text(&self, page: u32) -> ExtractResult<Option<String>>;

    /// Rasterize a whole page, `scale` pixels per PDF point
    fn render_page(&self, page: u32, scale: f32) -> ExtractResult<DynamicImage>;

    /// Rasterize the part of a page inside `band`
    ///
    /// The default renders the whole page and crops it; backends that can
    /// clip while rendering may override this.
    fn render_band(&self, page: u32, scale: f32, band: VerticalBand) -> ExtractResult<DynamicImage> {
        let full = self.render_page(page, scale)?;
        Ok(band.crop(&full))
    }
}
