//! Caption pattern matching

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use super::figure_id::FigureId;

lazy_static! {
    // "figure", whitespace, then <chapter>.<number>
    static ref FIGURE_CAPTION: Regex = Regex::new(r"(?i)figure\s+(\d+\.\d+)")
        .unwrap_or_else(|e| panic!("invalid caption pattern: {}", e));
}

/// Find every figure caption in a page's text
///
/// Matches are returned in document order and duplicates are kept, so two
/// references to "Figure 1.1" on the same page yield two entries.
///
/// # Arguments
/// * `text` - Page text, or `None` when the page has no text at all
///
/// # Returns
/// One `FigureId` per caption match; empty for missing or empty text
pub fn locate_captions(text: Option<&str>) -> Vec<FigureId> {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return Vec::new();
    };

    let figures: Vec<FigureId> = FIGURE_CAPTION
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|number| FigureId::from_number(number.as_str()))
        .collect();

    debug!("Located {} figure captions", figures.len());
    figures
}
