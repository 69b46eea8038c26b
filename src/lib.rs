pub mod errors;
pub mod utils;
pub mod caption;
pub mod diagram;
pub mod document;
pub mod storage;
pub mod pipeline;
pub mod commands;
pub mod api;

pub use crate::api::FigureKit;

pub use errors::{ExtractError, ExtractResult};
pub use caption::{locate_captions, FigureId};
pub use diagram::{DiagramCropper, DiagramThresholds, CropDecision, RejectReason};
pub use document::{is_text_garbled, OcrEngine, PageSource};
pub use pipeline::{Pipeline, PipelineConfig};
