//! Custom error types for figure extraction

use std::fmt;
use std::io;

/// Errors surfaced by the extraction pipeline and its backends
#[derive(Debug)]
pub enum ExtractError {
    /// I/O error
    IoError(io::Error),
    /// Image decoding or encoding failed
    ImageError(image::ImageError),
    /// The PDF backend could not be bound or could not open the document
    PdfError(String),
    /// Requested page is outside the document
    PageOutOfRange(u32),
    /// OCR engine failed to produce text
    OcrError(String),
    /// Invalid configuration value or file
    ConfigError(String),
    /// Manifest serialization failed
    ManifestError(serde_json::Error),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::IoError(e) => write!(f, "I/O error: {}", e),
            ExtractError::ImageError(e) => write!(f, "Image error: {}", e),
            ExtractError::PdfError(msg) => write!(f, "PDF error: {}", msg),
            ExtractError::PageOutOfRange(page) => write!(f, "Page {} is out of range", page),
            ExtractError::OcrError(msg) => write!(f, "OCR error: {}", msg),
            ExtractError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ExtractError::ManifestError(e) => write!(f, "Manifest error: {}", e),
            ExtractError::GenericError(msg) => write!(f, "Extraction error: {}", msg),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::IoError(e) => Some(e),
            ExtractError::ImageError(e) => Some(e),
            ExtractError::ManifestError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ExtractError {
    fn from(error: io::Error) -> Self {
        ExtractError::IoError(error)
    }
}

impl From<image::ImageError> for ExtractError {
    fn from(error: image::ImageError) -> Self {
        ExtractError::ImageError(error)
    }
}

impl From<serde_json::Error> for ExtractError {
    fn from(error: serde_json::Error) -> Self {
        ExtractError::ManifestError(error)
    }
}

impl From<toml::de::Error> for ExtractError {
    fn from(error: toml::de::Error) -> Self {
        ExtractError::ConfigError(error.to_string())
    }
}

impl From<String> for ExtractError {
    fn from(msg: String) -> Self {
        ExtractError::GenericError(msg)
    }
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;
