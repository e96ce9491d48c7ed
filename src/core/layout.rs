//! Layout planning: decide how many rows to use, which images land in
//! which row, and the exact pixel width of every cell so each row fills
//! the canvas width with no leftover columns.
//!
//! Row membership is a contiguous slice of the (possibly shuffled) input
//! order, not a bin-packing optimization: the order of the aspect-ratio
//! slice directly determines grouping.

use crate::types::CanvasSpec;

/// One image's target rectangle within its row.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CellPlan {
    /// Index into the caller's image slice.
    pub image: usize,
    pub width: u32,
    /// Equals the row's target height.
    pub height: u32,
}

/// An ordered group of images assigned to one horizontal band of the canvas.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RowPlan {
    pub index: usize,
    pub cells: Vec<CellPlan>,
    /// Shared target height; identical for every row of a collage.
    pub height: u32,
}

impl RowPlan {
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Row-count heuristic balancing total image area units against the
/// canvas's own aspect ratio:
/// `max(1, round(sqrt((height/width) * (count / mean_aspect))))`.
///
/// Empirical, not derived from an optimality proof; the arithmetic is
/// load-bearing for reproducible layouts and must not be tweaked.
pub fn estimate_rows(num_images: usize, mean_aspect: f64, canvas: &CanvasSpec) -> usize {
    let fill = (canvas.height as f64 / canvas.width as f64) * (num_images as f64 / mean_aspect);
    (fill.sqrt().round() as usize).max(1)
}

/// Assign images to rows and compute per-cell target dimensions.
///
/// `aspects` holds width/height ratios in paste order; callers guard
/// against an empty slice. A forced `num_rows` larger than the images can
/// fill yields empty trailing rows, rendered as background bands.
pub fn plan(aspects: &[f64], canvas: &CanvasSpec, num_rows: Option<usize>) -> Vec<RowPlan> {
    let num_images = aspects.len();
    let mean_aspect = aspects.iter().sum::<f64>() / num_images as f64;

    let rows = num_rows
        .unwrap_or_else(|| estimate_rows(num_images, mean_aspect, canvas))
        .max(1);
    let cols = num_images.div_ceil(rows);

    let padding = canvas.padding as i64;
    let row_height = (canvas.height as i64 - (rows as i64 + 1) * padding)
        .div_euclid(rows as i64)
        .max(0) as u32;

    (0..rows)
        .map(|index| {
            let start = (index * cols).min(num_images);
            let end = ((index + 1) * cols).min(num_images);
            let cells = fit_row_widths(&aspects[start..end], row_height, canvas)
                .into_iter()
                .enumerate()
                .map(|(offset, width)| CellPlan {
                    image: start + offset,
                    width,
                    height: row_height,
                })
                .collect();
            RowPlan {
                index,
                cells,
                height: row_height,
            }
        })
        .collect()
}

/// Scale one row's natural widths so they fill the canvas width exactly.
///
/// Natural width = aspect * row height. Widths are floored after scaling,
/// then the positive remainder is handed out one pixel at a time, cycling
/// from the first image; flooring only ever under-counts, so the
/// remainder is never negative.
fn fit_row_widths(aspects: &[f64], row_height: u32, canvas: &CanvasSpec) -> Vec<u32> {
    let gaps = (aspects.len() as i64 + 1) * canvas.padding as i64;
    let available = canvas.width as i64 - gaps;

    let naturals: Vec<f64> = aspects.iter().map(|a| a * row_height as f64).collect();
    let total: f64 = naturals.iter().sum();
    let scale = if total > 0.0 { available as f64 / total } else { 1.0 };

    let mut widths: Vec<i64> = naturals.iter().map(|n| (n * scale).floor() as i64).collect();

    let assigned: i64 = widths.iter().sum();
    let remainder = canvas.width as i64 - assigned - gaps;
    if remainder > 0 && !widths.is_empty() {
        for i in 0..remainder as usize {
            widths[i % aspects.len()] += 1;
        }
    }

    widths.into_iter().map(|w| w.max(0) as u32).collect()
}
