//! Synthetic page bands shared by the diagram tests


use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

pub const PAPER: Rgb<u8> = Rgb([255, 255, 255]);
pub const INK: Rgb<u8> = Rgb([0, 0, 0]);
pub const FAINT_INK: Rgb<u8> = Rgb([220, 220, 220]);

/// Blank white canvas
pub fn blank(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, PAPER)
}

/// Filled rectangle
pub fn fill(canvas: &mut RgbImage, x: i32, y: i32, width: u32, height: u32, color: Rgb<u8>) {
    draw_filled_rect_mut(canvas, Rect::at(x, y).of_size(width, height), color);
}

/// Rectangular outline `thickness` pixels wide, drawn inside the given bounds
pub fn frame(canvas: &mut RgbImage, x: i32, y: i32, width: u32, height: u32, thickness: u32, color: Rgb<u8>) {
    fill(canvas, x, y, width, thickness, color);
    fill(canvas, x, y + (height - thickness) as i32, width, thickness, color);
    fill(canvas, x, y, thickness, height, color);
    fill(canvas, x + (width - thickness) as i32, y, thickness, height, color);
}

/// `count` 3x3 dots on a grid with a 10 pixel pitch, 15 dots per row
pub fn dots(canvas: &mut RgbImage, origin_x: i32, origin_y: i32, count: u32) {
    for i in 0..count {
        let x = origin_x + (i % 15) as i32 * 10;
        let y = origin_y + (i / 15) as i32 * 10;
        fill(canvas, x, y, 3, 3, INK);
    }
}

/// A 400x300 band holding a framed diagram at (50, 40) sized 300x200
pub fn framed_diagram() -> DynamicImage {
    let mut canvas = blank(400, 300);
    frame(&mut canvas, 50, 40, 300, 200, 8, INK);
    fill(&mut canvas, 150, 100, 60, 60, INK);
    fill(&mut canvas, 230, 150, 80, 10, INK);
    DynamicImage::ImageRgb8(canvas)
}

/// A 400x300 band with 150 dark glyph-sized dots inside a faint box
pub fn boxed_text() -> DynamicImage {
    let mut canvas = blank(400, 300);
    frame(&mut canvas, 50, 40, 300, 200, 8, FAINT_INK);
    dots(&mut canvas, 70, 60, 150);
    DynamicImage::ImageRgb8(canvas)
}

/// A 300x400 band with a framed shape twice as tall as it is wide
pub fn tall_column() -> DynamicImage {
    let mut canvas = blank(300, 400);
    frame(&mut canvas, 100, 50, 100, 200, 8, INK);
    DynamicImage::ImageRgb8(canvas)
}
