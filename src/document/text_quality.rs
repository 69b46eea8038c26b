//! Text layer quality check

/// Above this share of non-ASCII characters a text layer counts as garbled
///
/// Textbooks typeset with legacy fonts often extract as private-use or
/// mis-mapped code points instead of readable text.
pub const GARBLED_NON_ASCII_FRACTION: f64 = 0.30;

/// Whether an extracted text layer is unusable and needs OCR
///
/// Empty or whitespace-only text is unusable, as is text where more than
/// 30% of the characters fall outside ASCII.
pub fn is_text_garbled(text: &str) -> bool {
    if text.trim().is_empty() {
        return true;
    }

    let (total, non_ascii) = text.chars().fold((0usize, 0usize), |(total, non_ascii), c| {
        (total + 1, non_ascii + usize::from(!c.is_ascii()))
    });

    non_ascii as f64 / total as f64 > GARBLED_NON_ASCII_FRACTION
}
