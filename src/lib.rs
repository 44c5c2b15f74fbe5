#![doc = r#"
imgscale — scale images by a fixed factor with high-quality resampling.

The crate decodes an image, computes the target size as the truncated product of each
side and a scale factor, resamples with Lanczos3 (via `fast_image_resize`) and encodes
the result. It powers the `imgscale` CLI and can be embedded in your own Rust
applications.

Quick start: scale a file
-------------------------
```rust,no_run
use std::path::Path;

fn main() -> imgscale::Result<()> {
    // 400x300 -> 100x75
    imgscale::scale_image(Path::new("logo.png"), Path::new("logo-0.25x.png"), 0.25)
}
```

Presets and in-memory results
-----------------------------
```rust,no_run
use std::path::Path;
use imgscale::{scale_to_buffer, OutputFormat, ResampleFilter, ScaleParams};

fn main() -> imgscale::Result<()> {
    let params = ScaleParams {
        scale: 0.5,
        filter: ResampleFilter::CatmullRom,
        format: Some(OutputFormat::Png),
        sidecar: false,
    };
    let scaled = scale_to_buffer(Path::new("photo.jpg"), &params)?;
    println!("{}x{} -> {}x{}", scaled.source_width, scaled.source_height, scaled.width(), scaled.height());
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use imgscale::{scale_directory, ScaleParams};

fn main() -> imgscale::Result<()> {
    let report = scale_directory(
        Path::new("assets"),
        Path::new("assets/small"),
        &ScaleParams::with_scale(0.25),
        true, // continue_on_error
    )?;
    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Error handling
--------------
All public functions return `imgscale::Result<T>`; match on `imgscale::Error` to handle
specific cases.

```rust,no_run
use std::path::Path;
use imgscale::{scale_image, Error};

fn main() {
    match scale_image(Path::new("logo.png"), Path::new("logo-0x.png"), 0.0) {
        Ok(()) => {}
        Err(Error::InvalidScale { scale }) => eprintln!("bad factor {scale}"),
        Err(Error::Image(e)) => eprintln!("codec error: {e}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — `ResampleFilter` and `OutputFormat`.
- [`io`] — decoding, output naming, encoders and sidecars.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::{DEFAULT_SCALE, ScaleParams};
pub use error::{Error, Result};
pub use types::{OutputFormat, ResampleFilter};

pub use crate::core::processing::dimensions::{scaled_dimensions, validate_scale};
pub use crate::core::processing::resize::{resize_image, scale_image_data};
pub use io::naming::default_output_path;
pub use io::{open_image, save_image};

pub use api::{
    BatchReport, ScaleReport, ScaledImage, load_params, scale_directory, scale_image,
    scale_image_with_params, scale_to_buffer,
};
