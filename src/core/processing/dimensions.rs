use image::ColorType;
use tracing::debug;

use crate::error::{Error, Result};

/// Largest pixel buffer, in bytes, a resize is allowed to allocate (8 GiB).
pub const MAX_BUFFER_BYTES: u64 = 1 << 33;

/// Reject factors that can never produce an image: zero, negative, NaN or infinite.
pub fn validate_scale(scale: f64) -> Result<()> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidScale { scale })
    }
}

/// Target size for `width`x`height` scaled by `scale`, each side truncated toward zero.
pub fn scaled_dimensions(width: u32, height: u32, scale: f64) -> Result<(u32, u32)> {
    validate_scale(scale)?;

    let new_width = (width as f64 * scale).floor();
    let new_height = (height as f64 * scale).floor();

    if new_width > u32::MAX as f64 || new_height > u32::MAX as f64 {
        return Err(Error::DimensionOverflow {
            width: new_width as u64,
            height: new_height as u64,
        });
    }
    if new_width < 1.0 || new_height < 1.0 {
        return Err(Error::ZeroDimension {
            width,
            height,
            scale,
        });
    }

    let dims = (new_width as u32, new_height as u32);
    debug!(
        "Scaled dimensions: {}x{} * {} -> {}x{}",
        width, height, scale, dims.0, dims.1
    );
    Ok(dims)
}

/// Byte length of a `width`x`height` buffer of `color`, if it fits in memory
/// and under [`MAX_BUFFER_BYTES`].
pub fn buffer_len(width: u32, height: u32, color: ColorType) -> Result<usize> {
    let overflow = || Error::DimensionOverflow {
        width: width as u64,
        height: height as u64,
    };
    let bytes = (width as u64)
        .checked_mul(height as u64)
        .and_then(|pixels| pixels.checked_mul(color.bytes_per_pixel() as u64))
        .filter(|&bytes| bytes <= MAX_BUFFER_BYTES)
        .ok_or_else(overflow)?;
    usize::try_from(bytes).map_err(|_| overflow())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn quarter_of_logo() {
        assert_eq!(scaled_dimensions(400, 300, 0.25).unwrap(), (100, 75));
    }

    #[test]
    fn truncates_instead_of_rounding() {
        assert_eq!(scaled_dimensions(399, 299, 0.25).unwrap(), (99, 74));
        assert_eq!(scaled_dimensions(10, 10, 0.19).unwrap(), (1, 1));
    }

    #[test]
    fn identity_scale_keeps_size() {
        assert_eq!(scaled_dimensions(123, 45, 1.0).unwrap(), (123, 45));
    }

    #[test]
    fn upscale() {
        assert_eq!(scaled_dimensions(3, 5, 2.5).unwrap(), (7, 12));
    }

    #[test]
    fn rejects_non_positive_and_non_finite() {
        for scale in [0.0, -0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                scaled_dimensions(100, 100, scale),
                Err(Error::InvalidScale { .. })
            ));
        }
    }

    #[test]
    fn rejects_collapsed_side() {
        let err = scaled_dimensions(400, 3, 0.25).unwrap_err();
        assert!(matches!(
            err,
            Error::ZeroDimension {
                width: 400,
                height: 3,
                ..
            }
        ));
    }

    #[test]
    fn rejects_overflow() {
        assert!(matches!(
            scaled_dimensions(u32::MAX, 1, 2.0),
            Err(Error::DimensionOverflow { .. })
        ));
    }

    #[test]
    fn buffer_len_counts_channels() {
        assert_eq!(buffer_len(100, 75, ColorType::Rgba8).unwrap(), 30_000);
        assert_eq!(buffer_len(3, 2, ColorType::Rgb16).unwrap(), 36);
    }

    #[test]
    fn buffer_len_rejects_huge_buffers() {
        assert!(matches!(
            buffer_len(u32::MAX, u32::MAX, ColorType::Rgba32F),
            Err(Error::DimensionOverflow { .. })
        ));
        assert!(matches!(
            buffer_len(100_000, 100_000, ColorType::Rgba8),
            Err(Error::DimensionOverflow {
                width: 100_000,
                height: 100_000
            })
        ));
    }

    #[quickcheck]
    fn matches_truncated_product(width: u16, height: u16, percent: u16) -> bool {
        let (width, height) = (width as u32 + 1, height as u32 + 1);
        let scale = (percent % 400 + 1) as f64 / 100.0;
        let expected_w = (width as f64 * scale) as u32;
        let expected_h = (height as f64 * scale) as u32;
        match scaled_dimensions(width, height, scale) {
            Ok(dims) => dims == (expected_w, expected_h),
            Err(Error::ZeroDimension { .. }) => expected_w == 0 || expected_h == 0,
            Err(_) => false,
        }
    }

    #[quickcheck]
    fn inverse_scale_restores_size_approximately(width: u16, height: u16) -> bool {
        let (width, height) = (width as u32 + 8, height as u32 + 8);
        let (w, h) = scaled_dimensions(width, height, 0.5).unwrap();
        let (back_w, back_h) = scaled_dimensions(w, h, 2.0).unwrap();
        width - back_w <= 1 && height - back_h <= 1
    }
}
