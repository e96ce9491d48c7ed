//! Image loading with EXIF orientation correction.
//!
//! A file that cannot be opened or decoded aborts the run (never silently
//! skipped); a missing or corrupt EXIF block is the expected case for
//! many files and leaves the image unrotated.
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use exif::{In, Tag, Value};
use image::{DynamicImage, GenericImageView};
use tracing::debug;

use crate::error::Result;

/// One discovered photograph, orientation-corrected and immutable from
/// here on. Consumed read-only by the planner and the cropper.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub pixels: DynamicImage,
}

impl ImageRecord {
    pub fn open(path: &Path) -> Result<Self> {
        let pixels = image::open(path)?;
        let pixels = apply_exif_orientation(pixels, path);
        let (width, height) = pixels.dimensions();

        Ok(Self {
            path: path.to_path_buf(),
            width,
            height,
            pixels,
        })
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Rotate pixels upright according to the EXIF orientation tag.
///
/// Values 3, 6, and 8 are the rotations cameras actually write; mirrored
/// orientations and absent/corrupt EXIF leave the image untouched.
fn apply_exif_orientation(image: DynamicImage, path: &Path) -> DynamicImage {
    match read_orientation(path) {
        Some(3) => image.rotate180(),
        Some(6) => image.rotate90(),
        Some(8) => image.rotate270(),
        _ => image,
    }
}

fn read_orientation(path: &Path) -> Option<u16> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut reader).ok()?;

    let field = exif.get_field(Tag::Orientation, In::PRIMARY)?;
    match field.value {
        Value::Short(ref v) => {
            let orientation = v.first().copied();
            debug!("{}: EXIF orientation {:?}", path.display(), orientation);
            orientation
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn opens_and_measures_a_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        RgbImage::from_pixel(40, 30, Rgb([1, 2, 3]))
            .save(&path)
            .unwrap();

        let record = ImageRecord::open(&path).unwrap();
        assert_eq!((record.width, record.height), (40, 30));
        assert!((record.aspect_ratio() - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn missing_exif_leaves_image_unrotated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.jpg");
        RgbImage::from_pixel(64, 16, Rgb([9, 9, 9]))
            .save(&path)
            .unwrap();

        let record = ImageRecord::open(&path).unwrap();
        assert_eq!((record.width, record.height), (64, 16));
    }

    #[test]
    fn unreadable_file_is_an_error() {
        assert!(ImageRecord::open(Path::new("/nonexistent/photo.jpg")).is_err());
    }

    #[test]
    fn decode_failure_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(ImageRecord::open(&path).is_err());
    }
}
