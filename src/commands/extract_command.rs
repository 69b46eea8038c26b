//! PDF extraction command
//!
//! Runs the full pipeline on a PDF: page text with OCR fallback, then
//! caption-driven figure extraction.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{parse_arg, thresholds_from_args};
use crate::document::TesseractCli;
use crate::errors::{ExtractError, ExtractResult};
use crate::pipeline::{extract_pdf, PipelineConfig};
use crate::utils::logger::Logger;

/// Command for extracting text and figures from a PDF
pub struct ExtractCommand<'a> {
    /// Path to the input PDF
    input_file: String,
    /// Output directory
    output_dir: String,
    /// Pipeline settings
    config: PipelineConfig,
    /// OCR backend
    ocr: TesseractCli,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ExtractCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ExtractResult<Self> {
        let inputs: Vec<&String> = args.get_many::<String>("input")
            .ok_or_else(|| ExtractError::GenericError("Missing input PDF".to_string()))?
            .collect();
        let input_file = match inputs.as_slice() {
            [single] => (*single).clone(),
            _ => return Err(ExtractError::GenericError(format!(
                "Extraction takes exactly one PDF, got {}", inputs.len()))),
        };
        info!("Input file: {}", input_file);

        let output_dir = args.get_one::<String>("out")
            .cloned()
            .unwrap_or_else(|| "output".to_string());
        info!("Output directory: {}", output_dir);

        let mut config = PipelineConfig {
            thresholds: thresholds_from_args(args)?,
            show_progress: !args.get_flag("no-progress"),
            ..PipelineConfig::default()
        };
        if let Some(scale) = parse_arg::<f32>(args, "scale")? {
            if !(scale.is_finite() && scale > 0.0) {
                return Err(ExtractError::ConfigError(format!("Render scale must be positive, got {}", scale)));
            }
            config.render_scale = scale;
        }
        if let Some(dpi) = parse_arg::<f32>(args, "ocr-dpi")? {
            if !(dpi.is_finite() && dpi > 0.0) {
                return Err(ExtractError::ConfigError(format!("OCR DPI must be positive, got {}", dpi)));
            }
            config.ocr_dpi = dpi;
        }
        info!("Render scale {}, OCR at {} dpi, thresholds {:?}",
              config.render_scale, config.ocr_dpi, config.thresholds);

        let mut ocr = TesseractCli::new();
        if let Some(binary) = args.get_one::<String>("tesseract") {
            ocr = ocr.with_binary(binary);
        }
        if let Some(language) = args.get_one::<String>("ocr-lang") {
            ocr = ocr.with_language(language);
        }

        Ok(ExtractCommand {
            input_file,
            output_dir,
            config,
            ocr,
            logger,
        })
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> ExtractResult<()> {
        info!("Extracting {} into {}", self.input_file, self.output_dir);

        let context = extract_pdf(
            &self.input_file,
            &self.output_dir,
            self.config.clone(),
            &self.ocr,
            self.logger,
        )?;

        self.logger.log(&format!(
            "Extraction finished: {} pages, {} figures",
            context.summary.pages, context.summary.accepted
        ))?;
        println!("Extraction complete");

        Ok(())
    }
}
