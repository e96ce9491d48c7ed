//! Face-aware cropping: reduce an image to its cell's aspect ratio by
//! trimming one axis, then resample to the exact cell size.
//!
//! The crop window is symmetric around the image center. When a detected
//! face's midpoint falls outside that window, the window snaps to the
//! nearer image edge rather than re-centering on the face: the face is
//! guaranteed to stay inside the visible area, at the cost of off-center
//! faces not being perfectly centered.

use image::{DynamicImage, GenericImageView, RgbImage};

use crate::core::resize::resize_rgb;
use crate::detect::FaceDetector;
use crate::error::Result;
use crate::io::loader::ImageRecord;
use crate::types::FaceBox;

/// Source crop window `(x, y, width, height)` matching the target aspect
/// ratio. Equal aspect ratios yield the full frame.
pub fn crop_window(
    width: u32,
    height: u32,
    target_width: u32,
    target_height: u32,
    face: Option<FaceBox>,
) -> (u32, u32, u32, u32) {
    let aspect = width as f64 / height as f64;
    let target_aspect = target_width as f64 / target_height as f64;

    if aspect > target_aspect {
        // Source relatively wider: trim width only.
        let new_width = (target_aspect * height as f64) as u32;
        let mut left = (width - new_width) / 2;
        let mut right = left + new_width;
        if let Some(face) = face {
            let center = face.center_x();
            if center < left {
                left = 0;
                right = new_width;
            } else if center > right {
                left = width - new_width;
                right = width;
            }
        }
        (left, 0, right - left, height)
    } else if aspect < target_aspect {
        // Source relatively taller: trim height only.
        let new_height = (width as f64 / target_aspect) as u32;
        let mut top = (height - new_height) / 2;
        let mut bottom = top + new_height;
        if let Some(face) = face {
            let center = face.center_y();
            if center < top {
                top = 0;
                bottom = new_height;
            } else if center > bottom {
                top = height - new_height;
                bottom = height;
            }
        }
        (0, top, width, bottom - top)
    } else {
        (0, 0, width, height)
    }
}

/// Crop `image` to the target aspect ratio and resample to exactly
/// `target_width` x `target_height`.
pub fn crop_to_fill(
    image: &DynamicImage,
    target_width: u32,
    target_height: u32,
    face: Option<FaceBox>,
) -> Result<RgbImage> {
    let (width, height) = image.dimensions();
    let window = crop_window(width, height, target_width, target_height, face);

    let visible = if window == (0, 0, width, height) {
        image.to_rgb8()
    } else {
        let (x, y, w, h) = window;
        image.crop_imm(x, y, w, h).to_rgb8()
    };

    resize_rgb(&visible, target_width, target_height)
}

/// Produce the pixel data for one cell.
///
/// Detection only runs when the image actually needs cropping; an image
/// whose aspect ratio already matches the cell resizes directly.
pub fn fill_cell(
    record: &ImageRecord,
    target_width: u32,
    target_height: u32,
    detector: &mut dyn FaceDetector,
) -> Result<RgbImage> {
    let needs_crop = record.aspect_ratio() != target_width as f64 / target_height as f64;
    let face = if needs_crop {
        detector.detect(&record.pixels)
    } else {
        None
    };
    crop_to_fill(&record.pixels, target_width, target_height, face)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::path::PathBuf;

    fn face(top: u32, right: u32, bottom: u32, left: u32) -> Option<FaceBox> {
        Some(FaceBox {
            top,
            right,
            bottom,
            left,
        })
    }

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 0])
        }))
    }

    #[test]
    fn wider_source_keeps_symmetric_window_when_face_inside() {
        // 200x100 into a square cell: window is the middle 100 columns.
        assert_eq!(
            crop_window(200, 100, 50, 50, face(40, 110, 60, 90)),
            (50, 0, 100, 100)
        );
    }

    #[test]
    fn wider_source_without_face_is_center_cropped() {
        assert_eq!(crop_window(200, 100, 50, 50, None), (50, 0, 100, 100));
    }

    #[test]
    fn face_left_of_window_snaps_to_left_edge() {
        assert_eq!(
            crop_window(200, 100, 50, 50, face(40, 30, 60, 10)),
            (0, 0, 100, 100)
        );
    }

    #[test]
    fn face_right_of_window_snaps_to_right_edge() {
        assert_eq!(
            crop_window(200, 100, 50, 50, face(40, 190, 60, 170)),
            (100, 0, 100, 100)
        );
    }

    #[test]
    fn taller_source_snaps_vertically() {
        // 100x200 into a square cell: symmetric window is rows 50..150.
        assert_eq!(crop_window(100, 200, 50, 50, None), (0, 50, 100, 100));
        assert_eq!(
            crop_window(100, 200, 50, 50, face(0, 60, 20, 40)),
            (0, 0, 100, 100)
        );
        assert_eq!(
            crop_window(100, 200, 50, 50, face(180, 60, 198, 40)),
            (0, 100, 100, 100)
        );
    }

    #[test]
    fn equal_aspect_is_full_frame() {
        assert_eq!(crop_window(1000, 500, 100, 50, None), (0, 0, 1000, 500));
    }

    #[test]
    fn crop_output_dimensions_are_exact() {
        for (sw, sh) in [(200, 100), (100, 200), (97, 43)] {
            let out = crop_to_fill(&gradient(sw, sh), 50, 50, None).unwrap();
            assert_eq!(out.dimensions(), (50, 50));
        }
    }

    #[test]
    fn matching_aspect_is_a_direct_resize() {
        // Aspect 2.0 source into an aspect 2.0 cell: no crop, plain resize.
        let out = crop_to_fill(&gradient(100, 50), 1000, 500, None).unwrap();
        assert_eq!(out.dimensions(), (1000, 500));
    }

    struct CountingDetector {
        calls: usize,
    }

    impl FaceDetector for CountingDetector {
        fn detect(&mut self, _image: &DynamicImage) -> Option<FaceBox> {
            self.calls += 1;
            None
        }
    }

    fn record(width: u32, height: u32) -> ImageRecord {
        ImageRecord {
            path: PathBuf::new(),
            width,
            height,
            pixels: gradient(width, height),
        }
    }

    #[test]
    fn detection_is_skipped_for_matching_aspect() {
        let mut detector = CountingDetector { calls: 0 };
        fill_cell(&record(100, 50), 200, 100, &mut detector).unwrap();
        assert_eq!(detector.calls, 0);

        fill_cell(&record(100, 50), 100, 100, &mut detector).unwrap();
        assert_eq!(detector.calls, 1);
    }
}
