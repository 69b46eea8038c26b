//! Tunable constants for diagram isolation
//!
//! Every numeric cut-off used by the cropper and the two validators lives
//! here so that recalibrating against a new textbook series only means
//! editing a TOML file.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::{ExtractError, ExtractResult};

/// Thresholds passed explicitly to the cropper and validators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiagramThresholds {
    /// Gray level at or below which a pixel is ink when locating the diagram
    pub crop_binarize_level: u8,
    /// Gray level at or below which a pixel is ink when counting glyphs
    pub density_binarize_level: u8,
    /// Contours with a smaller area (px^2) count as glyph strokes
    pub small_contour_area: f64,
    /// A crop with more small contours than this is text-heavy
    pub max_small_contours: usize,
    /// A crop with height / width above this is too tall to be a diagram
    pub max_aspect_ratio: f64,
    /// Side of the square structuring element used for the opening
    pub opening_kernel_size: u8,
}

impl Default for DiagramThresholds {
    fn default() -> Self {
        DiagramThresholds {
            crop_binarize_level: 240,
            density_binarize_level: 200,
            small_contour_area: 300.0,
            max_small_contours: 100,
            max_aspect_ratio: 1.6,
            opening_kernel_size: 5,
        }
    }
}

impl DiagramThresholds {
    /// Parse thresholds from TOML; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> ExtractResult<Self> {
        let thresholds: DiagramThresholds = toml::from_str(content)?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Load thresholds from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ExtractResult<Self> {
        let path = path.as_ref();
        info!("Loading diagram thresholds from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Reject values the image operations cannot work with
    pub fn validate(&self) -> ExtractResult<()> {
        if self.opening_kernel_size == 0 || self.opening_kernel_size % 2 == 0 {
            return Err(ExtractError::ConfigError(format!(
                "opening_kernel_size must be odd and positive, got {}",
                self.opening_kernel_size
            )));
        }
        if !(self.max_aspect_ratio.is_finite() && self.max_aspect_ratio > 0.0) {
            return Err(ExtractError::ConfigError(format!(
                "max_aspect_ratio must be a positive number, got {}",
                self.max_aspect_ratio
            )));
        }
        if !(self.small_contour_area.is_finite() && self.small_contour_area >= 0.0) {
            return Err(ExtractError::ConfigError(format!(
                "small_contour_area must be non-negative, got {}",
                self.small_contour_area
            )));
        }
        Ok(())
    }
}
