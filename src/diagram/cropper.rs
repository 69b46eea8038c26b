//! Diagram cropping
//!
//! The cropper locates the largest ink blob in a candidate image, crops to
//! its bounding box and runs the validators on the result. Any failure along
//! the way is an ordinary rejection, never an error.

use std::fmt;
use std::path::Path;

use image::DynamicImage;
use log::{debug, info};

use crate::storage::{FigureStore, FsFigureStore};

use super::binarize::{binarize_inverted, open_square, to_gray_bt601};
use super::contour::external_blobs;
use super::region::Region;
use super::thresholds::DiagramThresholds;
use super::validators::{has_bad_aspect_ratio, is_text_heavy};

/// Why a candidate was not accepted as a diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The candidate image could not be loaded or written back
    Unreadable,
    /// No foreground survived thresholding and opening
    NoContent,
    /// The crop is dominated by small glyph-like contours
    TextHeavy,
    /// The crop is too tall for its width
    BadAspectRatio,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RejectReason::Unreadable => "unreadable image",
            RejectReason::NoContent => "no diagram content",
            RejectReason::TextHeavy => "text-heavy crop",
            RejectReason::BadAspectRatio => "implausible aspect ratio",
        };
        f.write_str(text)
    }
}

/// Outcome of isolating a diagram
#[derive(Debug, Clone)]
pub enum CropDecision {
    /// The crop passed both validators
    Accept {
        /// Cropped image
        image: DynamicImage,
        /// Crop bounds within the source image
        bounds: Region,
    },
    /// The candidate is not a diagram
    Reject(RejectReason),
}

impl CropDecision {
    /// Whether the candidate was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, CropDecision::Accept { .. })
    }
}

/// Crops rendered regions down to their diagram and validates the result
#[derive(Debug, Clone, Default)]
pub struct DiagramCropper {
    thresholds: DiagramThresholds,
}

impl DiagramCropper {
    /// Create a cropper using the given thresholds
    pub fn new(thresholds: DiagramThresholds) -> Self {
        DiagramCropper { thresholds }
    }

    /// Locate the diagram in an in-memory image and validate the crop
    ///
    /// This is the pure part of the cropper: the input is never modified.
    pub fn isolate(&self, image: &DynamicImage) -> CropDecision {
        let gray = to_gray_bt601(image);
        let mask = binarize_inverted(&gray, self.thresholds.crop_binarize_level);
        let mask = open_square(&mask, self.thresholds.opening_kernel_size);

        let blobs = external_blobs(&mask);
        let Some(largest) = blobs
            .iter()
            .max_by(|a, b| a.area.total_cmp(&b.area))
        else {
            debug!("No contours after opening");
            return CropDecision::Reject(RejectReason::NoContent);
        };

        let bounds = largest.bounds;
        if !bounds.fits_within(image.width(), image.height()) {
            return CropDecision::Reject(RejectReason::NoContent);
        }
        debug!("Largest blob area {:.1} at x={}, y={}, width={}, height={}",
               largest.area, bounds.x, bounds.y, bounds.width, bounds.height);

        let cropped = image.crop_imm(bounds.x, bounds.y, bounds.width, bounds.height);

        if is_text_heavy(&cropped, &self.thresholds) {
            return CropDecision::Reject(RejectReason::TextHeavy);
        }
        if has_bad_aspect_ratio(&cropped, &self.thresholds) {
            return CropDecision::Reject(RejectReason::BadAspectRatio);
        }

        CropDecision::Accept { image: cropped, bounds }
    }

    /// Crop a persisted candidate and overwrite it in place on acceptance
    ///
    /// On rejection the stored image is left untouched; deleting it is the
    /// caller's job.
    pub fn crop_stored<S: FigureStore + ?Sized>(&self, store: &mut S, path: &Path) -> CropDecision {
        let image = match store.load(path) {
            Ok(image) => image,
            Err(e) => {
                debug!("Cannot load candidate {}: {}", path.display(), e);
                return CropDecision::Reject(RejectReason::Unreadable);
            }
        };

        let decision = self.isolate(&image);
        if let CropDecision::Accept { image: cropped, .. } = &decision {
            if let Err(e) = store.save(path, cropped) {
                debug!("Cannot write cropped candidate {}: {}", path.display(), e);
                return CropDecision::Reject(RejectReason::Unreadable);
            }
        }
        decision
    }

    /// Crop an image file in place
    ///
    /// # Returns
    /// `true` when the file now holds an accepted diagram crop, `false` when
    /// it is not a diagram (the file is then unchanged)
    pub fn crop_file<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let mut store = FsFigureStore::new(dir);

        match self.crop_stored(&mut store, path) {
            CropDecision::Accept { bounds, .. } => {
                info!("Accepted {} ({}x{})", path.display(), bounds.width, bounds.height);
                true
            }
            CropDecision::Reject(reason) => {
                info!("Rejected {}: {}", path.display(), reason);
                false
            }
        }
    }
}
