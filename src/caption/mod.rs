//! Figure caption detection
//!
//! This module finds figure references such as "Figure 1.1" in page text
//! and turns them into the identifiers used to name stored figures.

mod figure_id;
mod locator;
#[cfg(test)]
mod tests;

pub use figure_id::{number_repeats, FigureId};
pub use locator::locate_captions;
