//! In-memory figure store

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::errors::{ExtractError, ExtractResult};

use super::figure_store::FigureStore;

/// Figure store that keeps images in a map instead of on disk
///
/// Useful for dry runs and for checking the save/crop/delete sequence
/// without touching the filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryFigureStore {
    root: PathBuf,
    images: BTreeMap<PathBuf, DynamicImage>,
}

impl MemoryFigureStore {
    /// Create an empty store whose paths live under `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        MemoryFigureStore {
            root: root.as_ref().to_path_buf(),
            images: BTreeMap::new(),
        }
    }

    /// Stored paths in sorted order
    pub fn paths(&self) -> Vec<&Path> {
        self.images.keys().map(PathBuf::as_path).collect()
    }

    /// Number of stored images
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Borrow a stored image
    pub fn get(&self, path: &Path) -> Option<&DynamicImage> {
        self.images.get(path)
    }
}

fn not_found(path: &Path) -> ExtractError {
    ExtractError::IoError(io::Error::new(
        io::ErrorKind::NotFound,
        format!("no stored image at {}", path.display()),
    ))
}

impl FigureStore for MemoryFigureStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self, path: &Path) -> bool {
        self.images.contains_key(path)
    }

    fn save(&mut self, path: &Path, image: &DynamicImage) -> ExtractResult<()> {
        self.images.insert(path.to_path_buf(), image.clone());
        Ok(())
    }

    fn load(&self, path: &Path) -> ExtractResult<DynamicImage> {
        self.images.get(path).cloned().ok_or_else(|| not_found(path))
    }

    fn delete(&mut self, path: &Path) -> ExtractResult<()> {
        self.images.remove(path).map(|_| ()).ok_or_else(|| not_found(path))
    }
}
