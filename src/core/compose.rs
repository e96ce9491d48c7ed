//! Canvas compositing: paste cropped cells onto an explicitly owned
//! background-filled buffer.
//!
//! Iteration order is part of the contract: rows top-to-bottom, cells
//! left-to-right. A row's origin is `padding + index * (row_height +
//! padding)`; the x cursor starts at `padding` and advances by
//! `cell.width + padding` after each paste. Cell rectangles are disjoint,
//! so nothing outside the compositor ever writes to the canvas.

use image::{Rgb, RgbImage, imageops};

use crate::core::crop::fill_cell;
use crate::core::layout::RowPlan;
use crate::detect::FaceDetector;
use crate::error::Result;
use crate::io::loader::ImageRecord;
use crate::types::CanvasSpec;

/// Blank canvas filled with the background color.
pub fn new_canvas(spec: &CanvasSpec) -> RgbImage {
    let bg = Rgb([spec.background.r, spec.background.g, spec.background.b]);
    RgbImage::from_pixel(spec.width, spec.height, bg)
}

/// Crop and paste one row's cells onto the canvas.
pub fn paste_row(
    canvas: &mut RgbImage,
    row: &RowPlan,
    records: &[ImageRecord],
    detector: &mut dyn FaceDetector,
    spec: &CanvasSpec,
) -> Result<()> {
    let y = spec.padding + row.index as u32 * (row.height + spec.padding);
    let mut x = spec.padding;

    for cell in &row.cells {
        let pixels = fill_cell(&records[cell.image], cell.width, cell.height, detector)?;
        imageops::replace(canvas, &pixels, x as i64, y as i64);
        x += cell.width + spec.padding;
    }

    Ok(())
}
