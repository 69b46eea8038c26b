//! External contour detection on binary masks

use image::GrayImage;
use imageproc::contours::{find_contours, BorderType, Contour};
use log::debug;

use super::region::Region;

/// An outermost connected foreground shape
#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    /// Area enclosed by the border polygon, in px^2
    pub area: f64,
    /// Axis-aligned bounding box of the border pixels
    pub bounds: Region,
}

/// Find the outermost contours of a binary mask
///
/// Only top-level outer borders are returned; shapes nested inside the hole
/// of another shape are ignored, as are the holes themselves.
pub fn external_blobs(mask: &GrayImage) -> Vec<Blob> {
    let contours: Vec<Contour<u32>> = find_contours(mask);

    let blobs: Vec<Blob> = contours
        .iter()
        .filter(|c| c.parent.is_none() && matches!(c.border_type, BorderType::Outer))
        .filter_map(|c| {
            let bounds = Region::bounding(c.points.iter().map(|p| (p.x, p.y)))?;
            Some(Blob {
                area: polygon_area(c),
                bounds,
            })
        })
        .collect();

    debug!("Found {} external contours out of {} borders", blobs.len(), contours.len());
    blobs
}

/// Shoelace area of the border polygon through the pixel centres
///
/// A single pixel or a one-pixel-wide line encloses no area.
fn polygon_area(contour: &Contour<u32>) -> f64 {
    let points = &contour.points;
    if points.len() < 3 {
        return 0.0;
    }

    let twice_area: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.x as f64 * b.y as f64 - b.x as f64 * a.y as f64)
        .sum();

    twice_area.abs() / 2.0
}
