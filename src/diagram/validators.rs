//! Accept/reject heuristics for candidate crops

use image::{DynamicImage, GenericImageView};
use log::debug;

use super::binarize::{binarize_inverted, to_gray_bt601};
use super::contour::external_blobs;
use super::thresholds::DiagramThresholds;

/// Decide whether a region is mostly printed text
///
/// Printed text binarizes into many small disconnected glyphs, while a
/// diagram produces a few large connected shapes. The region is text-heavy
/// when the number of external contours smaller than
/// `small_contour_area` exceeds `max_small_contours`.
pub fn is_text_heavy(image: &DynamicImage, thresholds: &DiagramThresholds) -> bool {
    let gray = to_gray_bt601(image);
    let mask = binarize_inverted(&gray, thresholds.density_binarize_level);

    let small = external_blobs(&mask)
        .iter()
        .filter(|blob| blob.area < thresholds.small_contour_area)
        .count();

    debug!("Text density check: {} small contours (limit {})", small, thresholds.max_small_contours);
    small > thresholds.max_small_contours
}

/// Decide whether a region is too tall and narrow to be a diagram
///
/// Only the tall direction is checked; wide regions always pass.
pub fn has_bad_aspect_ratio(image: &DynamicImage, thresholds: &DiagramThresholds) -> bool {
    let (width, height) = image.dimensions();
    let ratio = height as f64 / width as f64;
    debug!("Aspect check: {}x{} ratio {:.3} (limit {})", width, height, ratio, thresholds.max_aspect_ratio);
    ratio > thresholds.max_aspect_ratio
}
