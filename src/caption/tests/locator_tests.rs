//! Tests for caption detection

use crate::caption::{locate_captions, number_repeats, FigureId};

fn ids(figures: &[FigureId]) -> Vec<&str> {
    figures.iter().map(FigureId::as_str).collect()
}

#[test]
fn test_empty_and_missing_text() {
    assert!(locate_captions(None).is_empty());
    assert!(locate_captions(Some("")).is_empty());
    assert_eq!(locate_captions(None), locate_captions(Some("")));
}

#[test]
fn test_captions_in_document_order() {
    let text = "The cell is shown in Figure  1.1 below.\nSee also Figure 2.10 for the tissue.";
    let figures = locate_captions(Some(text));
    assert_eq!(ids(&figures), vec!["Figure_1.1", "Figure_2.10"]);
}

#[test]
fn test_case_insensitive_and_multiline_whitespace() {
    let text = "FIGURE\n3.4 and figure\t5.6 and FiGuRe 7.8";
    let figures = locate_captions(Some(text));
    assert_eq!(ids(&figures), vec!["Figure_3.4", "Figure_5.6", "Figure_7.8"]);
}

#[test]
fn test_duplicates_are_kept() {
    let text = "Figure 1.1 shows a leaf. Looking again at Figure 1.1 we see veins.";
    let figures = locate_captions(Some(text));
    assert_eq!(ids(&figures), vec!["Figure_1.1", "Figure_1.1"]);
}

#[test]
fn test_malformed_numbers_are_skipped() {
    let text = "Figure 3 has no decimal. Figure .5 neither. Figure1.2 lacks a space. Figure 4.2 is fine.";
    let figures = locate_captions(Some(text));
    assert_eq!(ids(&figures), vec!["Figure_4.2"]);
}

#[test]
fn test_identifier_is_deterministic() {
    let first = locate_captions(Some("Figure 9.12"));
    let second = locate_captions(Some("figure   9.12"));
    assert_eq!(first, second);
    assert_eq!(first[0].to_string(), "Figure_9.12");
}

#[test]
fn test_count_matches_regex_matches() {
    let text = "Figure 1.1 Figure 1.2 text text figure 10.20 Figures 3.3";
    // "Figures 3.3" does not match: the 's' sits between the word and the whitespace
    assert_eq!(locate_captions(Some(text)).len(), 3);
}

#[test]
fn test_repeats_are_numbered_in_detection_order() {
    let figures = locate_captions(Some("Figure 1.1, Figure 2.1, figure 1.1 and FIGURE 1.1"));
    let repeats = number_repeats(figures.clone());
    let numbered: Vec<(&str, u32)> = repeats.iter().map(|(figure, n)| (figure.as_str(), *n)).collect();
    assert_eq!(
        numbered,
        vec![("Figure_1.1", 0), ("Figure_2.1", 0), ("Figure_1.1", 1), ("Figure_1.1", 2)]
    );
    assert_eq!(number_repeats(figures.clone()), number_repeats(figures));
}
