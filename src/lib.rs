#![doc = r#"
picstitch — a grid-packing photo collage generator with face-aware cropping.

This crate lays a folder of photographs, of arbitrary and differing aspect
ratios, onto a single fixed-size canvas, filling it edge-to-edge with no
blank gaps. Images are grouped into rows, scaled to a shared row height,
and cropped to their cell's aspect ratio; when a face detector is plugged
in, the crop window shifts so detected faces stay visible instead of being
cut off by a blind center crop. It powers the picstitch CLI and can be
embedded in your own Rust applications.

Quick start: collage a folder to a file
---------------------------------------
```rust,no_run
use std::path::Path;
use picstitch::{collage_folder_to_path, CollageParams, NoDetection};

fn main() -> picstitch::Result<()> {
    let params = CollageParams {
        width: 1920,
        height: 1080,
        ..CollageParams::default()
    };

    collage_folder_to_path(
        Path::new("/photos/vacation"),
        Path::new("/out/collage.jpg"),
        &params,
        &mut NoDetection,
    )
}
```

Build in memory from already-loaded images
------------------------------------------
```rust,no_run
use std::path::Path;
use picstitch::{build_collage, CollageParams, ImageRecord, NoDetection};

fn main() -> picstitch::Result<()> {
    let records = vec![
        ImageRecord::open(Path::new("/photos/a.jpg"))?,
        ImageRecord::open(Path::new("/photos/b.png"))?,
    ];
    let canvas = build_collage(&records, &CollageParams::default(), &mut NoDetection)?;
    canvas.save("/out/collage.png")?;
    Ok(())
}
```

Face-aware cropping
-------------------
Detection is abstracted behind the [`detect::FaceDetector`] trait, which
returns zero or one bounding boxes per image. The built-in backend (behind
the default-on `rustface` feature) loads a SeetaFace model:

```rust,no_run
use std::path::Path;
use picstitch::RustfaceDetector;

# fn main() -> picstitch::Result<()> {
let mut detector = RustfaceDetector::from_model(Path::new("seeta_fd_frontal_v1.0.bin"))?;
# Ok(())
# }
```

Detection is only invoked for images whose aspect ratio differs from their
cell's; images that fit exactly are resized directly.

Error handling
--------------
All public functions return `picstitch::Result<T>`; match on
`picstitch::Error` to handle specific cases, e.g. unreadable image files
or a bad face model path. An unreadable image aborts collage generation
rather than being silently skipped; a missing or corrupt EXIF orientation
tag is not an error and leaves the image unrotated.

Feature flags
-------------
- `rustface` (default): builds the SeetaFace detection backend.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — layout planning, cropping, and compositing primitives.
- [`detect`] — the face detector trait and backends.
- [`io`] — input discovery, image loading, and output writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod detect;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::layout::{CellPlan, RowPlan};
pub use crate::core::params::CollageParams;
pub use crate::error::{Error, Result};
pub use crate::types::{CanvasSpec, FaceBox, Rgb};

// Loading
pub use crate::io::loader::ImageRecord;

// Detection
pub use crate::detect::{FaceDetector, NoDetection};
#[cfg(feature = "rustface")]
pub use crate::detect::rustface_backend::RustfaceDetector;

// High-level API re-exports
pub use crate::api::{build_collage, collage_folder_to_path};
