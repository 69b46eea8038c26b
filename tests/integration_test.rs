//! Integration tests running the pipeline against the filesystem

use std::fs;

use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use figurekit::document::{OcrEngine, PageSource};
use figurekit::storage::{ExtractionManifest, FsFigureStore, OutputLayout};
use figurekit::utils::logger::Logger;
use figurekit::{DiagramCropper, ExtractError, ExtractResult, FigureKit, Pipeline, PipelineConfig};

const INK: Rgb<u8> = Rgb([0, 0, 0]);

fn framed(width: u32, height: u32, x: i32, y: i32, w: u32, h: u32) -> DynamicImage {
    let mut canvas = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
    draw_filled_rect_mut(&mut canvas, Rect::at(x, y).of_size(w, 8), INK);
    draw_filled_rect_mut(&mut canvas, Rect::at(x, y + h as i32 - 8).of_size(w, 8), INK);
    draw_filled_rect_mut(&mut canvas, Rect::at(x, y).of_size(8, h), INK);
    draw_filled_rect_mut(&mut canvas, Rect::at(x + w as i32 - 8, y).of_size(8, h), INK);
    DynamicImage::ImageRgb8(canvas)
}

/// Two-page document: a diagram page and a scanned page without text layer
struct ScannedBook;

impl PageSource for ScannedBook {
    fn page_count(&self) -> u32 {
        2
    }

    fn page_text(&self, page: u32) -> ExtractResult<Option<String>> {
        match page {
            1 => Ok(Some("As Figure 5.2 shows, the cell divides.".to_string())),
            2 => Ok(None),
            _ => Err(ExtractError::PageOutOfRange(page)),
        }
    }

    fn render_page(&self, page: u32, scale: f32) -> ExtractResult<DynamicImage> {
        if page > 2 {
            return Err(ExtractError::PageOutOfRange(page));
        }
        let width = (200.0 * scale) as u32;
        let height = (280.0 * scale) as u32;
        Ok(framed(width, height, 20, 160, width - 40, height / 3))
    }
}

struct PlainOcr;

impl OcrEngine for PlainOcr {
    fn recognize(&self, _image: &DynamicImage) -> ExtractResult<String> {
        Ok("scanned page without captions".to_string())
    }
}

#[test]
fn test_extraction_to_directory() {
    let dir = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(dir.path().join("out"));
    let mut store = FsFigureStore::new(layout.images_dir());
    let logger = Logger::sink();
    let config = PipelineConfig {
        render_scale: 2.0,
        show_progress: false,
        ..PipelineConfig::default()
    };

    let context = Pipeline::new(config, &logger)
        .run(&ScannedBook, &PlainOcr, &mut store, layout.clone())
        .unwrap();

    let figure = layout.images_dir().join("page_001").join("Figure_5.2.png");
    assert!(figure.is_file());
    let cropped = image::open(&figure).unwrap();
    assert_eq!((cropped.width(), cropped.height()), (360, 186));

    let manifest: ExtractionManifest =
        serde_json::from_str(&fs::read_to_string(layout.manifest_path()).unwrap()).unwrap();
    assert_eq!(manifest.figures_for(1), [figure.display().to_string()]);
    assert!(manifest.figures_for(2).is_empty());

    assert_eq!(
        fs::read_to_string(layout.text_page_path(2)).unwrap(),
        "scanned page without captions"
    );
    assert_eq!(
        fs::read_to_string(layout.report_path()).unwrap(),
        "WARNING: Page 2 unreadable → OCR fallback"
    );
    assert_eq!(context.summary.accepted, 1);
}

#[test]
fn test_crop_file_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Figure_1.1.png");
    framed(400, 300, 50, 40, 300, 200).save(&path).unwrap();

    assert!(DiagramCropper::default().crop_file(&path));

    let cropped = image::open(&path).unwrap();
    assert_eq!((cropped.width(), cropped.height()), (300, 200));
}

#[test]
fn test_rejected_file_left_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Figure_1.2.png");
    framed(300, 400, 100, 50, 100, 200).save(&path).unwrap();
    let before = fs::read(&path).unwrap();

    assert!(!DiagramCropper::default().crop_file(&path));
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_facade_locates_captions() {
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("figurekit.log");
    let kit = FigureKit::new(log_file.to_str()).unwrap();

    let figures = kit.locate_captions("FIGURE 1.1, figure 1.1 and Figure 12.3");
    let names: Vec<&str> = figures.iter().map(|f| f.as_str()).collect();
    assert_eq!(names, vec!["Figure_1.1", "Figure_1.1", "Figure_12.3"]);
}
