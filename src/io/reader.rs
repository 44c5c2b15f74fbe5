use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageReader};
use tracing::{debug, info};

use crate::error::Result;

/// Decode the image at `path`, detecting its format from the file contents.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    debug!("Detected format {:?} for {:?}", reader.format(), path);

    let image = reader.decode()?;
    let (cols, rows) = image.dimensions();
    info!(
        "Decoded {:?}: {}x{} {:?}",
        path,
        cols,
        rows,
        image.color()
    );
    Ok(image)
}
