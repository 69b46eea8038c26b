//! Grayscale thresholding and morphology

use image::{DynamicImage, GrayImage, Luma};
use imageproc::distance_transform::Norm;
use imageproc::morphology::open;

/// Foreground value in binary masks
pub const INK: u8 = 255;

/// Grayscale with the ITU-R BT.601 luma weights
///
/// The thresholds are calibrated against `0.299 R + 0.587 G + 0.114 B`,
/// rounded. `DynamicImage::to_luma8` uses the Rec. 709 weights and must not
/// be used before thresholding.
pub fn to_gray_bt601(image: &DynamicImage) -> GrayImage {
    let rgb = image.to_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
        Luma([luma.round().clamp(0.0, 255.0) as u8])
    })
}

/// Inverted binary threshold: dark ink on light paper becomes foreground
///
/// Pixels brighter than `level` become background (0); everything else
/// becomes foreground (255).
pub fn binarize_inverted(gray: &GrayImage, level: u8) -> GrayImage {
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        if gray.get_pixel(x, y)[0] > level {
            Luma([0])
        } else {
            Luma([INK])
        }
    })
}

/// Morphological opening with a `kernel_size` x `kernel_size` square
///
/// Erosion followed by dilation removes specks smaller than the kernel while
/// leaving larger shapes intact. A kernel of size 1 is the identity.
pub fn open_square(mask: &GrayImage, kernel_size: u8) -> GrayImage {
    let radius = kernel_size / 2;
    if radius == 0 {
        return mask.clone();
    }
    // The L-infinity ball of radius r is the (2r + 1) square
    open(mask, Norm::LInf, radius)
}
