//! Standalone diagram cropping command
//!
//! Applies the diagram cropper to existing image files, which is handy when
//! recalibrating thresholds against already rendered candidates.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::thresholds_from_args;
use crate::diagram::DiagramCropper;
use crate::errors::{ExtractError, ExtractResult};

/// Command that crops image files in place
pub struct CropCommand {
    /// Images to crop
    images: Vec<String>,
    /// Cropper with the configured thresholds
    cropper: DiagramCropper,
}

impl CropCommand {
    /// Create a new crop command
    pub fn new(args: &ArgMatches) -> ExtractResult<Self> {
        let images: Vec<String> = args.get_many::<String>("input")
            .ok_or_else(|| ExtractError::GenericError("Missing input image".to_string()))?
            .cloned()
            .collect();

        let cropper = DiagramCropper::new(thresholds_from_args(args)?);

        Ok(CropCommand { images, cropper })
    }
}

impl Command for CropCommand {
    fn execute(&self) -> ExtractResult<()> {
        let mut accepted = 0;
        for image in &self.images {
            let verdict = if self.cropper.crop_file(image) {
                accepted += 1;
                "diagram"
            } else {
                "rejected"
            };
            println!("{}: {}", image, verdict);
        }
        info!("{} of {} images accepted as diagrams", accepted, self.images.len());
        Ok(())
    }
}
