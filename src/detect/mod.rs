//! Face detection seam.
//!
//! Detection is abstracted as a polymorphic interface returning zero or
//! one bounding boxes per image, so the cropper can be exercised with
//! synthetic boxes and the crate builds without any real backend.
use image::DynamicImage;

use crate::types::FaceBox;

#[cfg(feature = "rustface")]
pub mod rustface_backend;

/// Pluggable face detection backend.
///
/// Implementations return the first detected face, if any; when multiple
/// faces are found, the rest are ignored. Detection failures map to
/// `None` — they never abort a run.
pub trait FaceDetector {
    fn detect(&mut self, image: &DynamicImage) -> Option<FaceBox>;
}

/// Detector that never finds a face, leaving every crop on the symmetric
/// center window.
pub struct NoDetection;

impl FaceDetector for NoDetection {
    fn detect(&mut self, _image: &DynamicImage) -> Option<FaceBox> {
        None
    }
}
