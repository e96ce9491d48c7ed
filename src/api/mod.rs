//! High-level, ergonomic library API: build a collage from already-loaded
//! images or straight from a folder. Prefer these entrypoints over the
//! low-level core modules when embedding picstitch; they carry no
//! prompting or progress reporting, so callers own overwrite policy.
use std::path::Path;

use image::RgbImage;
use rand::seq::SliceRandom;
use tracing::info;

use crate::core::compose::{new_canvas, paste_row};
use crate::core::layout::plan;
use crate::core::params::CollageParams;
use crate::detect::FaceDetector;
use crate::error::{Error, Result};
use crate::io::discover::list_images;
use crate::io::loader::ImageRecord;
use crate::io::writers::save_canvas;

/// Plan and compose a collage from loaded images, in slice order.
///
/// The layout planner is never invoked with zero images; an empty slice
/// is rejected here instead.
pub fn build_collage(
    records: &[ImageRecord],
    params: &CollageParams,
    detector: &mut dyn FaceDetector,
) -> Result<RgbImage> {
    if records.is_empty() {
        return Err(Error::Processing(
            "cannot build a collage from zero images".to_string(),
        ));
    }

    let canvas_spec = params.canvas();
    let aspects: Vec<f64> = records.iter().map(|r| r.aspect_ratio()).collect();
    let rows = plan(&aspects, &canvas_spec, params.num_rows);

    let mut canvas = new_canvas(&canvas_spec);
    for row in &rows {
        paste_row(&mut canvas, row, records, detector, &canvas_spec)?;
    }

    info!("Arranged {} images into {} rows", records.len(), rows.len());
    Ok(canvas)
}

/// Discover, load, optionally shuffle, build, and save in one call.
///
/// An unreadable image aborts the whole run; an empty folder is reported
/// as [`Error::NoImages`].
pub fn collage_folder_to_path(
    folder: &Path,
    output: &Path,
    params: &CollageParams,
    detector: &mut dyn FaceDetector,
) -> Result<()> {
    let mut paths = list_images(folder)?;
    if paths.is_empty() {
        return Err(Error::NoImages {
            folder: folder.to_path_buf(),
        });
    }
    if params.shuffle {
        paths.shuffle(&mut rand::rng());
    }

    let records = paths
        .iter()
        .map(|path| ImageRecord::open(path))
        .collect::<Result<Vec<_>>>()?;

    let canvas = build_collage(&records, params, detector)?;
    save_canvas(&canvas, output)?;
    info!("Canvas saved at {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::NoDetection;
    use image::Rgb;
    use std::path::PathBuf;

    fn black(width: u32, height: u32) -> ImageRecord {
        ImageRecord {
            path: PathBuf::new(),
            width,
            height,
            pixels: image::DynamicImage::ImageRgb8(RgbImage::from_pixel(
                width,
                height,
                Rgb([0, 0, 0]),
            )),
        }
    }

    #[test]
    fn canvas_is_filled_edge_to_edge() {
        let params = CollageParams {
            width: 300,
            height: 200,
            ..CollageParams::default()
        };
        let records = vec![black(100, 100), black(100, 100), black(100, 100)];

        let canvas = build_collage(&records, &params, &mut NoDetection).unwrap();
        assert_eq!(canvas.dimensions(), (300, 200));
        assert!(
            canvas.pixels().all(|p| *p == Rgb([0, 0, 0])),
            "no background should remain with zero padding"
        );
    }

    #[test]
    fn zero_images_are_rejected() {
        assert!(build_collage(&[], &CollageParams::default(), &mut NoDetection).is_err());
    }

    #[test]
    fn folder_pipeline_writes_the_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("photos");
        std::fs::create_dir(&input).unwrap();
        RgbImage::from_pixel(40, 20, Rgb([200, 10, 10]))
            .save(input.join("a.png"))
            .unwrap();
        RgbImage::from_pixel(20, 20, Rgb([10, 10, 200]))
            .save(input.join("b.png"))
            .unwrap();

        let output = dir.path().join("collage.png");
        let params = CollageParams {
            width: 120,
            height: 40,
            ..CollageParams::default()
        };
        collage_folder_to_path(&input, &output, &params, &mut NoDetection).unwrap();

        let saved = image::open(&output).unwrap();
        assert_eq!((saved.width(), saved.height()), (120, 40));
    }

    #[test]
    fn empty_folder_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let result = collage_folder_to_path(
            dir.path(),
            &dir.path().join("out.png"),
            &CollageParams::default(),
            &mut NoDetection,
        );
        assert!(matches!(result, Err(Error::NoImages { .. })));
    }
}
