//! Figure identifier derived from caption text

use std::collections::HashMap;
use std::fmt;

/// Normalized key for a figure, of the form `Figure_<chapter>.<number>`
///
/// The same caption number always produces the same identifier. Identifiers
/// are not unique within a page; storage appends a counter suffix when two
/// captions collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FigureId(String);

impl FigureId {
    /// Build an identifier from the numeric part of a caption (e.g. "2.10")
    pub fn from_number(number: &str) -> Self {
        FigureId(format!("Figure_{}", number))
    }

    /// The identifier as a string slice, suitable as a file stem
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FigureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FigureId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Pair each identifier with how often it already occurred before it
///
/// The first "Figure 1.1" of a page gets 0, the second 1, and so on. The
/// numbering only depends on detection order, so the same page text always
/// yields the same pairs.
pub fn number_repeats(figures: Vec<FigureId>) -> Vec<(FigureId, u32)> {
    let mut seen: HashMap<FigureId, u32> = HashMap::new();
    figures
        .into_iter()
        .map(|figure| {
            let count = seen.entry(figure.clone()).or_insert(0);
            let occurrence = *count;
            *count += 1;
            (figure, occurrence)
        })
        .collect()
}
