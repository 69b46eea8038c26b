//! OCR capability and the Tesseract command-line backend

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use image::{DynamicImage, ImageFormat};
use log::debug;

use crate::errors::{ExtractError, ExtractResult};

/// Text recognition from a page image
pub trait OcrEngine {
    /// Recognize the text in `image`
    fn recognize(&self, image: &DynamicImage) -> ExtractResult<String>;
}

/// OCR through an installed `tesseract` binary
#[derive(Debug, Clone)]
pub struct TesseractCli {
    binary: PathBuf,
    language: String,
}

impl TesseractCli {
    /// Use `tesseract` from `PATH` with English
    pub fn new() -> Self {
        TesseractCli {
            binary: PathBuf::from("tesseract"),
            language: "eng".to_string(),
        }
    }

    /// Use a specific binary
    pub fn with_binary<P: AsRef<Path>>(mut self, binary: P) -> Self {
        self.binary = binary.as_ref().to_path_buf();
        self
    }

    /// Use a specific language pack, e.g. "eng+hin"
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }
}

impl Default for TesseractCli {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractCli {
    fn recognize(&self, image: &DynamicImage) -> ExtractResult<String> {
        // Tesseract reads files, so hand it a grayscale PNG
        let input = tempfile::Builder::new()
            .prefix("figurekit-ocr-")
            .suffix(".png")
            .tempfile()?;
        DynamicImage::ImageLuma8(image.to_luma8()).save_with_format(input.path(), ImageFormat::Png)?;

        debug!("Running {} on {}x{} image", self.binary.display(), image.width(), image.height());
        let output = Command::new(&self.binary)
            .arg(input.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    ExtractError::OcrError(format!("{} not found", self.binary.display()))
                }
                _ => ExtractError::OcrError(format!("failed to run {}: {}", self.binary.display(), e)),
            })?;

        if !output.status.success() {
            return Err(ExtractError::OcrError(format!(
                "{} exited with {}: {}",
                self.binary.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
