use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Collect image files directly inside `folder` (non-recursive).
///
/// Matches extensions case-insensitively and sorts the result so
/// unshuffled collages are reproducible across filesystems. An empty
/// result is not an error at this layer; callers decide how to report it.
pub fn list_images(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && has_image_extension(&path) {
            paths.push(path);
        }
    }

    paths.sort();
    info!("Found {} images in {}", paths.len(), folder.display());
    Ok(paths)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
