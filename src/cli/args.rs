use clap::Parser;
use std::path::PathBuf;

use imgscale::{DEFAULT_SCALE, OutputFormat, ResampleFilter};

#[derive(Parser, Debug)]
#[command(name = "imgscale", version, about = "Scale an image by a fixed factor")]
pub struct CliArgs {
    /// Input image (single file mode)
    #[arg(short, long, default_value = "logo.png")]
    pub input: PathBuf,

    /// Output filename (single file mode). Defaults to <stem>-<scale>x.<ext> next to the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Input directory containing images (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output directory for batch processing (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Scale factor applied to width and height; must be greater than 0
    #[arg(short, long, default_value_t = DEFAULT_SCALE, allow_negative_numbers = true)]
    pub scale: f64,

    /// Resampling filter
    #[arg(long, value_enum, default_value_t = ResampleFilter::Lanczos3)]
    pub filter: ResampleFilter,

    /// Output format; inferred from the output extension when omitted
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// JSON preset with scale, filter, format and sidecar; replaces those flags
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write a JSON metadata sidecar next to each output
    #[arg(long, default_value_t = false)]
    pub sidecar: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: continue processing other files when one fails
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}
