//! Diagram isolation and validation
//!
//! Given a rendered page band that is believed to contain a figure, this
//! module finds the largest connected piece of ink, crops the band to it and
//! decides whether the crop is a real diagram or a false positive such as a
//! block of body text.

mod binarize;
mod contour;
mod cropper;
mod region;
mod thresholds;
mod validators;
#[cfg(test)]
pub(crate) mod tests;

pub use binarize::{binarize_inverted, open_square, to_gray_bt601};
pub use contour::{external_blobs, Blob};
pub use cropper::{CropDecision, DiagramCropper, RejectReason};
pub use region::Region;
pub use thresholds::DiagramThresholds;
pub use validators::{has_bad_aspect_ratio, is_text_heavy};
