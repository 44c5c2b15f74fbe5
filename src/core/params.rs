use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::types::{OutputFormat, ResampleFilter};

/// Factor the CLI applies when none is given.
pub const DEFAULT_SCALE: f64 = 0.25;

/// Scaling parameters suitable for config files and presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleParams {
    /// Multiplier applied to both width and height
    pub scale: f64,
    pub filter: ResampleFilter,
    /// Explicit output encoding; None infers it from the output extension
    pub format: Option<OutputFormat>,
    /// If true, write a JSON sidecar next to each output
    pub sidecar: bool,
}

impl Default for ScaleParams {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            filter: ResampleFilter::Lanczos3,
            format: None,
            sidecar: false,
        }
    }
}

impl ScaleParams {
    pub fn with_scale(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Load a preset from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let params: ScaleParams = serde_json::from_str(&text)?;
        debug!("Loaded scale preset from {:?}: {:?}", path, params);
        Ok(params)
    }
}
