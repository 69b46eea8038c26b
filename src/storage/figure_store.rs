//! Figure storage trait and filesystem implementation

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};

use crate::caption::FigureId;
use crate::errors::ExtractResult;

/// Storage capability for figure candidates
///
/// Paths are the handles: `figure_path` names one, `save` writes it,
/// `load` reads it back and `delete` removes it.
pub trait FigureStore {
    /// Directory figure paths are placed under
    fn root(&self) -> &Path;

    /// Whether something is already stored at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Write (or overwrite) an image at `path`
    fn save(&mut self, path: &Path, image: &DynamicImage) -> ExtractResult<()>;

    /// Read the image stored at `path`
    fn load(&self, path: &Path) -> ExtractResult<DynamicImage>;

    /// Remove the image stored at `path`
    fn delete(&mut self, path: &Path) -> ExtractResult<()>;

    /// Path of a figure on a page
    ///
    /// `occurrence` counts earlier captions with the same identifier on the
    /// page. The first one lives at `<root>/page_<NNN>/<figure>.png`, later
    /// ones at `<figure>_1.png`, `<figure>_2.png`, ... The path never depends
    /// on what is already stored, so a rerun writes to the same places.
    fn figure_path(&self, page: u32, figure: &FigureId, occurrence: u32) -> PathBuf {
        let file_name = match occurrence {
            0 => format!("{}.png", figure),
            n => format!("{}_{}.png", figure, n),
        };
        self.root().join(format!("page_{:03}", page)).join(file_name)
    }
}

/// Figure store backed by a directory of PNG files
#[derive(Debug, Clone)]
pub struct FsFigureStore {
    root: PathBuf,
}

impl FsFigureStore {
    /// Create a store rooted at `root` (the directory is not created here)
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        FsFigureStore {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Create a store and make sure its directory exists
    pub fn create<P: AsRef<Path>>(root: P) -> ExtractResult<Self> {
        fs::create_dir_all(root.as_ref())?;
        Ok(Self::new(root))
    }
}

impl FigureStore for FsFigureStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn save(&mut self, path: &Path, image: &DynamicImage) -> ExtractResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    fn load(&self, path: &Path) -> ExtractResult<DynamicImage> {
        Ok(image::open(path)?)
    }

    fn delete(&mut self, path: &Path) -> ExtractResult<()> {
        fs::remove_file(path)?;
        Ok(())
    }
}
