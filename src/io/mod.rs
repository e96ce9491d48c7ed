//! I/O layer: input-folder discovery, image loading with EXIF
//! orientation correction, and extension-dispatched output writers.
pub mod discover;
pub use discover::list_images;

pub mod loader;
pub use loader::ImageRecord;

pub mod writers;
