use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use imgscale::{ScaleParams, default_output_path, load_params, scale_directory};

use super::args::CliArgs;
use super::errors::AppError;

// Silent unless --log or RUST_LOG asks for output.
fn init_logging(verbose: bool) {
    let result = if verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .try_init()
    } else if let Ok(filter) = EnvFilter::try_from_default_env() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        Ok(())
    };
    if let Err(e) = result {
        eprintln!("Logging already initialized: {e}");
    }
}

/// Resolve the parameter set: a `--config` preset wins over the individual flags.
pub fn resolve_params(args: &CliArgs) -> Result<ScaleParams, AppError> {
    match &args.config {
        Some(path) => Ok(load_params(path)?),
        None => Ok(ScaleParams {
            scale: args.scale,
            filter: args.filter,
            format: args.format,
            sidecar: args.sidecar,
        }),
    }
}

fn process_single_file(
    input: &Path,
    output: Option<&Path>,
    params: &ScaleParams,
) -> Result<(), AppError> {
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(input, params.scale, params.format),
    };

    let report = imgscale::scale_image_with_params(input, &output, params)?;
    info!(
        "Successfully scaled: {:?} -> {:?} ({}x{})",
        report.input, report.output, report.width, report.height
    );
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let params = resolve_params(&args)?;
    let batch_mode = args.batch || args.input_dir.is_some();

    if batch_mode {
        if args.output.is_some() {
            return Err(AppError::Conflict {
                first: "--output",
                second: "--input-dir/--batch",
            }
            .into());
        }
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        let output_dir = args.output_dir.unwrap_or_else(|| input_dir.clone());

        let report = scale_directory(&input_dir, &output_dir, &params, args.batch)?;
        info!("Processed: {}", report.processed);
        info!("Skipped: {}", report.skipped);
        info!("Errors: {}", report.errors);
    } else {
        process_single_file(&args.input, args.output.as_deref(), &params)?;
    }

    Ok(())
}
