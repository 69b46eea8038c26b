//! Speculative figure candidates
//!
//! A candidate is written to storage before it is validated. Validation then
//! either finalizes it (the stored copy is replaced by the diagram crop) or
//! deletes it, so a rejected candidate never outlives its page.
//!
//! ```text
//! Rendered -> CroppedPending -> Accepted
//!                            -> RejectedDeleted
//! ```

use std::path::{Path, PathBuf};

use image::DynamicImage;
use log::{debug, warn};

use crate::caption::FigureId;
use crate::diagram::{CropDecision, DiagramCropper, RejectReason};
use crate::errors::ExtractResult;
use crate::storage::FigureStore;

/// Lifecycle state of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateState {
    /// Rendered band saved under the candidate's path
    Rendered,
    /// Crop computed, decision not yet applied to storage
    CroppedPending,
    /// Stored image replaced by the accepted crop
    Accepted,
    /// Stored image removed
    RejectedDeleted,
}

/// A figure candidate and where it is stored
#[derive(Debug, Clone)]
pub struct Candidate {
    figure: FigureId,
    path: PathBuf,
    state: CandidateState,
    reject_reason: Option<RejectReason>,
}

impl Candidate {
    /// Save a copy of the rendered band for `figure` on `page`
    ///
    /// `occurrence` is the number of earlier captions with the same
    /// identifier on the page. A copy left by an earlier run is overwritten.
    pub fn render<S: FigureStore + ?Sized>(
        store: &mut S,
        page: u32,
        figure: FigureId,
        occurrence: u32,
        band: &DynamicImage,
    ) -> ExtractResult<Self> {
        let path = store.figure_path(page, &figure, occurrence);
        if store.exists(&path) {
            debug!("Overwriting {} from an earlier run", path.display());
        }
        store.save(&path, band)?;
        debug!("Saved candidate {} to {}", figure, path.display());

        Ok(Candidate {
            figure,
            path,
            state: CandidateState::Rendered,
            reject_reason: None,
        })
    }

    /// Crop and validate the stored copy, then keep or delete it
    pub fn settle<S: FigureStore + ?Sized>(mut self, cropper: &DiagramCropper, store: &mut S) -> Self {
        if self.state != CandidateState::Rendered {
            return self;
        }

        let decision = cropper.crop_stored(store, &self.path);
        self.state = CandidateState::CroppedPending;

        match decision {
            CropDecision::Accept { bounds, .. } => {
                debug!("{} accepted with bounds {:?}", self.figure, bounds);
                self.state = CandidateState::Accepted;
            }
            CropDecision::Reject(reason) => {
                debug!("{} rejected: {}", self.figure, reason);
                if let Err(e) = store.delete(&self.path) {
                    warn!("Failed to delete rejected candidate {}: {}", self.path.display(), e);
                }
                self.reject_reason = Some(reason);
                self.state = CandidateState::RejectedDeleted;
            }
        }
        self
    }

    /// Figure identifier the candidate was rendered for
    pub fn figure(&self) -> &FigureId {
        &self.figure
    }

    /// Storage path of the candidate
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current lifecycle state
    pub fn state(&self) -> CandidateState {
        self.state
    }

    /// Why the candidate was rejected, if it was
    pub fn reject_reason(&self) -> Option<RejectReason> {
        self.reject_reason
    }

    /// Whether the candidate ended up as a stored figure
    pub fn is_accepted(&self) -> bool {
        self.state == CandidateState::Accepted
    }
}
