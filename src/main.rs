use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::{error, LevelFilter};

use figurekit::utils::logger::Logger;
use figurekit::commands::{CommandFactory, FigurekitCommandFactory};

fn main() {
    let matches = ClapCommand::new("figurekit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract page text and diagrams from scanned textbook PDFs")
        .arg(
            Arg::new("input")
                .help("Input PDF (or images to crop with --crop)")
                .required(true)
                .num_args(1..)
                .action(ArgAction::Append)
                .index(1),
        )
        .arg(
            Arg::new("out")
                .short('o')
                .long("out")
                .help("Output directory")
                .value_name("DIR")
                .default_value("output"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML file overriding diagram thresholds")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("scale")
                .long("scale")
                .help("Render scale for figure bands (pixels per PDF point)")
                .value_name("FACTOR")
                .required(false),
        )
        .arg(
            Arg::new("ocr-dpi")
                .long("ocr-dpi")
                .help("Resolution of page images handed to OCR")
                .value_name("DPI")
                .required(false),
        )
        .arg(
            Arg::new("ocr-lang")
                .long("ocr-lang")
                .help("Tesseract language pack(s), e.g. eng or eng+hin")
                .value_name("LANG")
                .default_value("eng"),
        )
        .arg(
            Arg::new("tesseract")
                .long("tesseract")
                .help("Path to the tesseract binary")
                .value_name("PATH")
                .default_value("tesseract"),
        )
        .arg(
            Arg::new("crop")
                .long("crop")
                .help("Crop the given images to their diagram in place instead of extracting a PDF")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Log file path")
                .value_name("FILE")
                .default_value("figurekit.log"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .help("Hide progress bars")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Info };
    let log_file = matches
        .get_one::<String>("log-file")
        .cloned()
        .unwrap_or_else(|| "figurekit.log".to_string());

    let logger = match Logger::new(format!("{}.journal", log_file)) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger(&log_file, level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = FigurekitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
