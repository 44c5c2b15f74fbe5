use fast_image_resize::{ResizeOptions, Resizer};
use image::{DynamicImage, GenericImageView};
use tracing::info;

use crate::core::processing::dimensions::{buffer_len, scaled_dimensions};
use crate::error::Result;
use crate::types::ResampleFilter;

/// Resample `image` into a new image of exactly `width`x`height`, keeping its color type.
///
/// The resampler runs even when the target matches the source size. Targets whose
/// pixel buffer cannot be allocated fail with `Error::DimensionOverflow`.
pub fn resize_image(
    image: &DynamicImage,
    width: u32,
    height: u32,
    filter: ResampleFilter,
) -> Result<DynamicImage> {
    buffer_len(width, height, image.color())?;

    let resize_options = ResizeOptions::new().resize_alg(filter.resize_alg());
    let mut resizer = Resizer::new();

    let mut dst_image = DynamicImage::new(width, height, image.color());
    resizer.resize(image, &mut dst_image, &resize_options)?;

    Ok(dst_image)
}

/// Scale `image` by `scale` using `filter`, returning the new image.
pub fn scale_image_data(
    image: &DynamicImage,
    scale: f64,
    filter: ResampleFilter,
) -> Result<DynamicImage> {
    let (original_cols, original_rows) = image.dimensions();
    let (new_cols, new_rows) = scaled_dimensions(original_cols, original_rows, scale)?;

    info!(
        "Original size: {}x{}, New size: {}x{} ({} filter)",
        original_cols, original_rows, new_cols, new_rows, filter
    );

    resize_image(image, new_cols, new_rows, filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, Rgb, RgbImage, Rgba, RgbaImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 255 / width) as u8, (y * 255 / height) as u8, 128])
        }))
    }

    #[test]
    fn produces_requested_size_and_color() {
        let src = gradient(40, 30);
        let dst = resize_image(&src, 10, 7, ResampleFilter::Lanczos3).unwrap();
        assert_eq!(dst.dimensions(), (10, 7));
        assert_eq!(dst.color(), ColorType::Rgb8);
    }

    #[test]
    fn keeps_alpha_channel() {
        let src = DynamicImage::ImageRgba8(RgbaImage::from_pixel(16, 16, Rgba([10, 20, 30, 255])));
        let dst = scale_image_data(&src, 0.5, ResampleFilter::Lanczos3).unwrap();
        assert_eq!(dst.color(), ColorType::Rgba8);
        assert_eq!(dst.dimensions(), (8, 8));
    }

    #[test]
    fn uniform_image_stays_uniform() {
        let src = DynamicImage::ImageRgb8(RgbImage::from_pixel(32, 24, Rgb([200, 100, 50])));
        let dst = scale_image_data(&src, 0.25, ResampleFilter::Lanczos3)
            .unwrap()
            .to_rgb8();
        for pixel in dst.pixels() {
            for (got, want) in pixel.0.iter().zip([200u8, 100, 50]) {
                assert!((*got as i16 - want as i16).abs() <= 1);
            }
        }
    }

    #[test]
    fn identity_scale_keeps_dimensions() {
        let src = gradient(21, 13);
        let dst = scale_image_data(&src, 1.0, ResampleFilter::Lanczos3).unwrap();
        assert_eq!(dst.dimensions(), src.dimensions());
    }

    #[test]
    fn every_filter_resizes() {
        let src = gradient(20, 20);
        for filter in [
            ResampleFilter::Nearest,
            ResampleFilter::Bilinear,
            ResampleFilter::CatmullRom,
            ResampleFilter::Mitchell,
            ResampleFilter::Gaussian,
            ResampleFilter::Lanczos3,
        ] {
            let dst = scale_image_data(&src, 1.5, filter).unwrap();
            assert_eq!(dst.dimensions(), (30, 30), "filter {filter}");
        }
    }

    #[test]
    fn huge_scale_is_an_error_not_a_panic() {
        let src = DynamicImage::ImageRgb8(RgbImage::new(2, 2));
        assert!(matches!(
            scale_image_data(&src, 2.0e9, ResampleFilter::Lanczos3),
            Err(crate::Error::DimensionOverflow { .. })
        ));
    }

    #[test]
    fn oversized_target_is_rejected_before_allocating() {
        let src = gradient(4, 4);
        assert!(matches!(
            resize_image(&src, 200_000, 200_000, ResampleFilter::Lanczos3),
            Err(crate::Error::DimensionOverflow {
                width: 200_000,
                height: 200_000
            })
        ));
    }

    #[test]
    fn zero_scale_is_rejected_before_resampling() {
        let src = gradient(4, 4);
        assert!(matches!(
            scale_image_data(&src, 0.0, ResampleFilter::Lanczos3),
            Err(crate::Error::InvalidScale { .. })
        ));
    }
}
