//! Extraction pipeline
//!
//! Pages are processed sequentially in two stages. The text stage stores one
//! text file per page, falling back to OCR when the embedded text layer is
//! unusable. The figure stage reads that text back, looks for figure
//! captions, renders the figure band of the page and keeps only the
//! candidates the diagram cropper accepts.

mod candidate;
mod context;
mod driver;
mod figure_stage;
mod text_stage;
#[cfg(test)]
mod tests;

pub use candidate::{Candidate, CandidateState};
pub use context::{ExtractionSummary, PipelineConfig, PipelineContext};
pub use driver::{extract_pdf, Pipeline};
pub use figure_stage::extract_page_figures;
pub use text_stage::extract_page_text;
