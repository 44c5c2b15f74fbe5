use std::borrow::Cow;
use std::io::Cursor;
use std::path::Path;

use image::{ColorType, DynamicImage, ImageFormat};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::OutputFormat;

/// Pick the encoder: the explicit format if given, else the destination extension.
pub fn resolve_format(output: &Path, format: Option<OutputFormat>) -> Result<ImageFormat> {
    match format {
        Some(f) => Ok(f.image_format()),
        None => ImageFormat::from_path(output).map_err(|_| Error::UnsupportedFormat {
            path: output.to_path_buf(),
        }),
    }
}

// JPEG takes 8-bit gray or RGB, the WebP encoder 8-bit RGB(A).
fn prepare_for_format(image: &DynamicImage, format: ImageFormat) -> Cow<'_, DynamicImage> {
    match (format, image.color()) {
        (ImageFormat::Jpeg, ColorType::L8 | ColorType::Rgb8) => Cow::Borrowed(image),
        (ImageFormat::Jpeg, ColorType::La8 | ColorType::L16 | ColorType::La16) => {
            debug!("Converting {:?} to L8 for JPEG", image.color());
            Cow::Owned(DynamicImage::ImageLuma8(image.to_luma8()))
        }
        (ImageFormat::Jpeg, other) => {
            debug!("Converting {:?} to Rgb8 for JPEG", other);
            Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8()))
        }
        (ImageFormat::WebP, ColorType::Rgb8 | ColorType::Rgba8) => Cow::Borrowed(image),
        (ImageFormat::WebP, other) if other.has_alpha() => {
            debug!("Converting {:?} to Rgba8 for WebP", other);
            Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8()))
        }
        (ImageFormat::WebP, other) => {
            debug!("Converting {:?} to Rgb8 for WebP", other);
            Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8()))
        }
        _ => Cow::Borrowed(image),
    }
}

/// Encode `image` and write it to `output`, replacing any existing file.
///
/// The file is only touched once encoding has succeeded.
pub fn save_image(image: &DynamicImage, output: &Path, format: Option<OutputFormat>) -> Result<()> {
    let image_format = resolve_format(output, format)?;
    let prepared = prepare_for_format(image, image_format);

    let mut buffer = Cursor::new(Vec::new());
    prepared.write_to(&mut buffer, image_format)?;
    let bytes = buffer.into_inner();

    std::fs::write(output, &bytes)?;
    info!(
        "Saved {:?} as {:?} ({} bytes)",
        output,
        image_format,
        bytes.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba, RgbaImage};

    fn rgba() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(6, 4, Rgba([1, 2, 3, 128])))
    }

    #[test]
    fn infers_format_from_extension() {
        assert_eq!(
            resolve_format(Path::new("a.PNG"), None).unwrap(),
            ImageFormat::Png
        );
        assert_eq!(
            resolve_format(Path::new("a.png"), Some(OutputFormat::Bmp)).unwrap(),
            ImageFormat::Bmp
        );
    }

    #[test]
    fn unknown_extension_is_rejected() {
        assert!(matches!(
            resolve_format(Path::new("a.unknown"), None),
            Err(Error::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            resolve_format(Path::new("no_extension"), None),
            Err(Error::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn jpeg_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        save_image(&rgba(), &path, None).unwrap();
        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.dimensions(), (6, 4));
        assert_eq!(decoded.color(), ColorType::Rgb8);
    }

    #[test]
    fn png_keeps_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        save_image(&rgba(), &path, None).unwrap();
        assert_eq!(image::open(&path).unwrap().color(), ColorType::Rgba8);
    }

    #[test]
    fn failed_format_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.unknown");
        assert!(save_image(&rgba(), &path, None).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn unwritable_destination_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        assert!(matches!(save_image(&rgba(), &path, None), Err(Error::Io(_))));
    }
}
