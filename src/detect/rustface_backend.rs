//! SeetaFace detection backend built on the `rustface` crate.
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use tracing::debug;

use crate::detect::FaceDetector;
use crate::error::{Error, Result};
use crate::types::FaceBox;

/// Detection runs on a downscaled copy capped at this long side;
/// coordinates are mapped back to source space afterwards.
const MAX_DETECTION_SIDE: u32 = 800;

pub struct RustfaceDetector {
    inner: Box<dyn rustface::Detector>,
}

impl RustfaceDetector {
    /// Load a SeetaFace frontal-face model (e.g. `seeta_fd_frontal_v1.0.bin`).
    pub fn from_model(path: &Path) -> Result<Self> {
        let mut inner = rustface::create_detector(&path.to_string_lossy()).map_err(|e| {
            Error::FaceModel(format!(
                "failed to load model from {}: {}",
                path.display(),
                e
            ))
        })?;

        inner.set_min_face_size(20);
        inner.set_score_thresh(2.0);
        inner.set_pyramid_scale_factor(0.8);
        inner.set_slide_window_step(4, 4);

        Ok(Self { inner })
    }
}

impl FaceDetector for RustfaceDetector {
    fn detect(&mut self, image: &DynamicImage) -> Option<FaceBox> {
        let (width, height) = image.dimensions();
        let long_side = width.max(height);

        let (analysis, scale) = if long_side > MAX_DETECTION_SIDE {
            let scale = MAX_DETECTION_SIDE as f64 / long_side as f64;
            let scaled = image.resize(
                (width as f64 * scale).round() as u32,
                (height as f64 * scale).round() as u32,
                FilterType::Triangle,
            );
            (scaled, scale)
        } else {
            (image.clone(), 1.0)
        };

        let gray = analysis.to_luma8();
        let (gray_width, gray_height) = gray.dimensions();
        let gray_data = gray.into_raw();
        let buffer = rustface::ImageData::new(&gray_data, gray_width, gray_height);

        let faces = self.inner.detect(&buffer);
        // Only the first face matters; further detections are ignored.
        let face = faces.first()?;
        debug!(score = face.score(), "face detected");

        let bbox = face.bbox();
        let left = bbox.x().max(0) as f64;
        let top = bbox.y().max(0) as f64;
        let right = left + bbox.width() as f64;
        let bottom = top + bbox.height() as f64;

        let unscale = 1.0 / scale;
        Some(FaceBox {
            top: ((top * unscale).round() as u32).min(height),
            right: ((right * unscale).round() as u32).min(width),
            bottom: ((bottom * unscale).round() as u32).min(height),
            left: ((left * unscale).round() as u32).min(width),
        })
    }
}
