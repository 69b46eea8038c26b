//! Persistence of extraction results
//!
//! Figures are written speculatively and then either finalized or deleted,
//! so storage sits behind the `FigureStore` trait. The manifest and the
//! report log are written once at the end of a run.

mod figure_store;
mod layout;
mod manifest;
mod memory_store;
mod report;
#[cfg(test)]
mod tests;

pub use figure_store::{FigureStore, FsFigureStore};
pub use layout::OutputLayout;
pub use manifest::ExtractionManifest;
pub use memory_store::MemoryFigureStore;
pub use report::ExtractionReport;
