//! Core collage building blocks: layout planning, face-aware cropping,
//! resampling, and canvas compositing. These are internal primitives
//! consumed by the high-level `api` module.
pub mod compose;
pub mod crop;
pub mod layout;
pub mod params;
pub mod resize;
