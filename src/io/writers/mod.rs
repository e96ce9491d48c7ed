//! Output writers dispatched on the output filename's extension.
use std::path::Path;

use image::RgbImage;

use crate::error::Result;

pub mod jpeg;

/// Write the composed canvas to `output` in the format implied by its
/// extension: `.jpg`/`.jpeg` through the dedicated JPEG writer, anything
/// else through the `image` crate's format dispatch.
pub fn save_canvas(canvas: &RgbImage, output: &Path) -> Result<()> {
    let ext = output
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => jpeg::write_rgb_jpeg(
            output,
            canvas.width() as usize,
            canvas.height() as usize,
            canvas.as_raw(),
        ),
        _ => {
            canvas.save(output)?;
            Ok(())
        }
    }
}
