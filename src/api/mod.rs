//! High-level, ergonomic library API: scale a file to a file or to an in-memory
//! image, and batch helpers for directories. Prefer using these entrypoints over
//! the low-level `core` and `io` modules when integrating imgscale.
use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView};
use serde::Serialize;
use tracing::{info, warn};

use crate::core::params::ScaleParams;
use crate::core::processing::dimensions::validate_scale;
use crate::core::processing::resize::scale_image_data;
use crate::error::{Error, Result};
use crate::io::naming::{is_scaled_output, output_path_in};
use crate::io::writers::encode::{resolve_format, save_image};
use crate::io::writers::metadata::write_sidecar;
use crate::io::open_image;
use crate::types::ResampleFilter;

/// Description of one completed scaling run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub source_width: u32,
    pub source_height: u32,
    pub width: u32,
    pub height: u32,
    pub scale: f64,
    pub filter: ResampleFilter,
    /// Encoder used for the output, as its canonical extension
    pub format: String,
}

/// Result of in-memory scaling
#[derive(Debug, Clone)]
pub struct ScaledImage {
    pub source_width: u32,
    pub source_height: u32,
    pub image: DynamicImage,
}

impl ScaledImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Counters returned by [`scale_directory`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Scale `input` by `scale` with Lanczos resampling and write the result to `output`.
///
/// The output encoding follows the extension of `output`.
pub fn scale_image(input: &Path, output: &Path, scale: f64) -> Result<()> {
    scale_image_with_params(input, output, &ScaleParams::with_scale(scale)).map(|_| ())
}

/// Decode `input` and resample it according to `params` without touching the disk.
pub fn scale_to_buffer(input: &Path, params: &ScaleParams) -> Result<ScaledImage> {
    validate_scale(params.scale)?;

    let source = open_image(input)?;
    let (source_width, source_height) = source.dimensions();
    let image = scale_image_data(&source, params.scale, params.filter)?;

    Ok(ScaledImage {
        source_width,
        source_height,
        image,
    })
}

/// Scale `input` according to `params` and write it to `output`.
pub fn scale_image_with_params(
    input: &Path,
    output: &Path,
    params: &ScaleParams,
) -> Result<ScaleReport> {
    // Fail on a bad destination format before spending time on decode/resample.
    let image_format = resolve_format(output, params.format)?;

    let scaled = scale_to_buffer(input, params)?;
    save_image(&scaled.image, output, params.format)?;

    let report = ScaleReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        source_width: scaled.source_width,
        source_height: scaled.source_height,
        width: scaled.width(),
        height: scaled.height(),
        scale: params.scale,
        filter: params.filter,
        format: image_format
            .extensions_str()
            .first()
            .copied()
            .unwrap_or_default()
            .to_string(),
    };

    if params.sidecar {
        write_sidecar(output, &report)?;
    }

    info!(
        "Scaled {:?} ({}x{}) -> {:?} ({}x{})",
        input, report.source_width, report.source_height, output, report.width, report.height
    );
    Ok(report)
}

fn is_image_file(path: &Path) -> bool {
    path.is_file() && image::ImageFormat::from_path(path).is_ok()
}

/// Scale every image file directly inside `input_dir` into `output_dir`.
///
/// Outputs are named `<stem>-<scale>x.<ext>`. Files that already carry that suffix are
/// skipped so re-running into the same directory does not compound. With
/// `continue_on_error` false the first failure is returned.
pub fn scale_directory(
    input_dir: &Path,
    output_dir: &Path,
    params: &ScaleParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    validate_scale(params.scale)?;
    fs::create_dir_all(output_dir)?;

    info!("Starting batch scaling from directory: {:?}", input_dir);
    info!("Output directory: {:?}", output_dir);

    let mut entries = fs::read_dir(input_dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort();

    let mut report = BatchReport::default();
    for path in entries {
        if !is_image_file(&path) || is_scaled_output(&path, params.scale) {
            info!("Skipping: {:?}", path);
            report.skipped += 1;
            continue;
        }

        let output_path = output_path_in(output_dir, &path, params.scale, params.format);
        info!("Processing: {:?} -> {:?}", path, output_path);

        match scale_image_with_params(&path, &output_path, params) {
            Ok(_) => report.processed += 1,
            Err(e) if continue_on_error => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Batch scaling complete: processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(report)
}

/// Load a `ScaleParams` preset, mapping a missing path to a clear argument error.
pub fn load_params(path: &Path) -> Result<ScaleParams> {
    if !path.exists() {
        return Err(Error::InvalidArgument {
            arg: "config",
            value: path.display().to_string(),
        });
    }
    ScaleParams::from_json_file(path)
}
