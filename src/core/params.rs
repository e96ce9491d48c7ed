use serde::{Deserialize, Serialize};

use crate::types::{CanvasSpec, Rgb};

/// Collage parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollageParams {
    pub width: u32,
    pub height: u32,
    /// Forced row count; None means the row-count heuristic decides
    pub num_rows: Option<usize>,
    /// Randomize input order before grouping into rows
    pub shuffle: bool,
    /// Pixels between and around images
    pub padding: u32,
    pub background: Rgb,
}

impl CollageParams {
    pub fn canvas(&self) -> CanvasSpec {
        CanvasSpec {
            width: self.width,
            height: self.height,
            padding: self.padding,
            background: self.background,
        }
    }
}

impl Default for CollageParams {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            num_rows: None,
            shuffle: false,
            padding: 0,
            background: Rgb::WHITE,
        }
    }
}
