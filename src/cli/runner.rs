use std::io::{self, Write};
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::SliceRandom;
use tracing::info;

use picstitch::core::compose::{new_canvas, paste_row};
use picstitch::core::layout::plan;
use picstitch::detect::{FaceDetector, NoDetection};
use picstitch::io::discover::list_images;
use picstitch::io::loader::ImageRecord;
use picstitch::io::writers::save_canvas;
use picstitch::types::CanvasSpec;

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    run_with_confirm(args, prompt_overwrite)
}

/// The full pipeline with the overwrite confirmation injected, so the
/// logic runs under test without a terminal.
pub(crate) fn run_with_confirm(
    args: CliArgs,
    confirm: impl FnOnce(&Path) -> bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.width == 0 {
        return Err(AppError::ZeroDimension { dim: "width" }.into());
    }
    if args.height == 0 {
        return Err(AppError::ZeroDimension { dim: "height" }.into());
    }
    if args.num_rows == Some(0) {
        return Err(AppError::ZeroRows.into());
    }

    if args.output.exists() && !args.overwrite && !confirm(&args.output) {
        println!("Operation cancelled.");
        return Ok(());
    }

    let mut paths = list_images(&args.input_folder)?;
    if paths.is_empty() {
        println!("No images found in the folder.");
        return Ok(());
    }
    if args.shuffle {
        paths.shuffle(&mut rand::rng());
    }

    let mut detector = build_detector(&args)?;

    // A single unreadable image aborts the run rather than being skipped.
    let bar = progress_bar(paths.len() as u64, "Loading images");
    let mut records = Vec::with_capacity(paths.len());
    for path in &paths {
        records.push(ImageRecord::open(path)?);
        bar.inc(1);
    }
    bar.finish();

    let canvas_spec = CanvasSpec {
        width: args.width,
        height: args.height,
        padding: args.padding,
        background: args.color,
    };
    let aspects: Vec<f64> = records.iter().map(|r| r.aspect_ratio()).collect();
    let rows = plan(&aspects, &canvas_spec, args.num_rows);
    info!("Arranging {} images into {} rows", records.len(), rows.len());

    let mut canvas = new_canvas(&canvas_spec);
    let bar = progress_bar(rows.len() as u64, "Arranging rows");
    for row in &rows {
        paste_row(&mut canvas, row, &records, detector.as_mut(), &canvas_spec)?;
        bar.inc(1);
    }
    bar.finish();

    save_canvas(&canvas, &args.output)?;
    println!("Canvas saved at {}", args.output.display());

    Ok(())
}

fn build_detector(args: &CliArgs) -> Result<Box<dyn FaceDetector>, Box<dyn std::error::Error>> {
    match &args.face_model {
        #[cfg(feature = "rustface")]
        Some(path) => Ok(Box::new(picstitch::RustfaceDetector::from_model(path)?)),
        #[cfg(not(feature = "rustface"))]
        Some(_) => Err(AppError::DetectionUnavailable.into()),
        None => Ok(Box::new(NoDetection)),
    }
}

fn prompt_overwrite(path: &Path) -> bool {
    print!(
        "File '{}' already exists. Overwrite? (y/n): ",
        path.display()
    );
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    answer.trim().eq_ignore_ascii_case("y")
}

fn progress_bar(len: u64, message: &'static str) -> ProgressBar {
    let style = ProgressStyle::with_template("{msg:>15} [{bar:40}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    let bar = ProgressBar::new(len).with_style(style);
    bar.set_message(message);
    bar
}
