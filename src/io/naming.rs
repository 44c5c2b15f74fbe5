use std::path::{Path, PathBuf};

use crate::types::OutputFormat;

/// Render a scale factor for a filename. Whole numbers keep one decimal (`2.0`),
/// everything else uses the shortest exact representation (`0.25`).
pub fn format_scale(scale: f64) -> String {
    if scale.is_finite() && scale.fract() == 0.0 && scale.abs() < 1e16 {
        format!("{:.1}", scale)
    } else {
        format!("{}", scale)
    }
}

/// Suffix appended to the file stem for a given scale, e.g. `-0.25x`.
pub fn scale_suffix(scale: f64) -> String {
    format!("-{}x", format_scale(scale))
}

/// `<dir>/<stem>-<scale>x.<ext>` next to `input`.
///
/// The extension is taken from `format` when given, otherwise from `input`.
pub fn default_output_path(input: &Path, scale: f64, format: Option<OutputFormat>) -> PathBuf {
    let dir = input.parent().unwrap_or_else(|| Path::new(""));
    output_path_in(dir, input, scale, format)
}

/// Same naming as [`default_output_path`], but placed in `dir`.
pub fn output_path_in(
    dir: &Path,
    input: &Path,
    scale: f64,
    format: Option<OutputFormat>,
) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = match format {
        Some(f) => Some(f.extension().to_string()),
        None => input
            .extension()
            .map(|e| e.to_string_lossy().into_owned()),
    };

    let mut name = format!("{}{}", stem, scale_suffix(scale));
    if let Some(ext) = extension {
        name.push('.');
        name.push_str(&ext);
    }
    dir.join(name)
}

/// True when `path` already looks like the output of scaling by `scale`.
pub fn is_scaled_output(path: &Path, scale: f64) -> bool {
    path.file_stem()
        .map(|s| s.to_string_lossy().ends_with(&scale_suffix(scale)))
        .unwrap_or(false)
}
