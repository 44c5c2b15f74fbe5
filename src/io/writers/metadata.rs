use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::api::ScaleReport;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct Sidecar<'a> {
    #[serde(flatten)]
    report: &'a ScaleReport,
    processed_at: String,
    generator: String,
}

/// Path of the JSON sidecar that accompanies `output_path`: the full file name plus
/// `.json`, so `a.png` and `a.jpg` get distinct sidecars.
pub fn sidecar_path(output_path: &Path) -> PathBuf {
    let mut name = output_path.as_os_str().to_os_string();
    name.push(".json");
    PathBuf::from(name)
}

/// Write a pretty-printed JSON description of a scaling run next to its output.
pub fn write_sidecar(output_path: &Path, report: &ScaleReport) -> Result<PathBuf> {
    let sidecar = Sidecar {
        report,
        processed_at: chrono::Utc::now().to_rfc3339(),
        generator: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
    };

    let path = sidecar_path(output_path);
    let json_string = serde_json::to_string_pretty(&sidecar)?;
    std::fs::write(&path, json_string)?;

    info!("Created metadata sidecar: {:?}", path);
    Ok(path)
}
