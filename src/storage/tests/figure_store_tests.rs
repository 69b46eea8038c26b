//! Tests for figure paths and the two stores

use std::path::Path;

use image::{DynamicImage, GenericImageView};

use crate::caption::FigureId;
use crate::storage::{FigureStore, FsFigureStore, MemoryFigureStore};

#[test]
fn test_first_occurrence_has_no_suffix() {
    let store = MemoryFigureStore::new("images");
    let path = store.figure_path(3, &FigureId::from_number("1.1"), 0);
    assert_eq!(path, Path::new("images/page_003/Figure_1.1.png"));
}

#[test]
fn test_repeats_get_positional_suffixes() {
    let store = MemoryFigureStore::new("images");
    let figure = FigureId::from_number("1.1");

    let paths: Vec<_> = (0..3).map(|n| store.figure_path(1, &figure, n)).collect();
    assert_eq!(
        paths,
        vec![
            Path::new("images/page_001/Figure_1.1.png").to_path_buf(),
            Path::new("images/page_001/Figure_1.1_1.png").to_path_buf(),
            Path::new("images/page_001/Figure_1.1_2.png").to_path_buf(),
        ]
    );
}

#[test]
fn test_path_ignores_stored_content() {
    let mut store = MemoryFigureStore::new("images");
    let figure = FigureId::from_number("2.4");
    let before = store.figure_path(7, &figure, 0);
    store.save(&before, &DynamicImage::new_rgb8(4, 4)).unwrap();

    assert_eq!(store.figure_path(7, &figure, 0), before);
}

#[test]
fn test_same_figure_on_two_pages_does_not_collide() {
    let store = MemoryFigureStore::new("images");
    let figure = FigureId::from_number("1.1");
    assert_ne!(store.figure_path(1, &figure, 0), store.figure_path(2, &figure, 0));
}

#[test]
fn test_memory_store_delete() {
    let mut store = MemoryFigureStore::new("images");
    let path = store.figure_path(1, &FigureId::from_number("3.2"), 0);
    store.save(&path, &DynamicImage::new_rgb8(2, 2)).unwrap();
    assert_eq!(store.len(), 1);

    store.delete(&path).unwrap();
    assert!(store.is_empty());
    assert!(store.delete(&path).is_err());
    assert!(store.load(&path).is_err());
}

#[test]
fn test_fs_store_creates_page_dir_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FsFigureStore::create(dir.path().join("images")).unwrap();
    let path = store.figure_path(12, &FigureId::from_number("2.10"), 0);

    store.save(&path, &DynamicImage::new_rgb8(30, 20)).unwrap();
    assert!(dir.path().join("images/page_012/Figure_2.10.png").is_file());

    store.save(&path, &DynamicImage::new_rgb8(10, 5)).unwrap();
    assert_eq!(store.load(&path).unwrap().dimensions(), (10, 5));

    store.delete(&path).unwrap();
    assert!(!store.exists(&path));
}
