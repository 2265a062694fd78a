//! Finishing: resize, transparency keying, and PNG encoding.
//!
//! The finisher is the only place the requested output size matters; the
//! whole pipeline before it works at the fixed sprite geometry. Resampling
//! therefore happens at most once per render.

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::color::Rgb;
use crate::compose::Canvas;
use crate::error::{RenderError, Result};

/// Produces the final encoded PNG from the composed canvas.
///
/// When `transparent` is set, every pixel matching the canvas's recorded
/// background color is keyed out (alpha 0, color channels untouched) and the
/// PNG carries an alpha channel. Opaque output is encoded as plain RGB, so
/// the transparency key is the only difference between the two modes.
pub fn finish(canvas: Canvas, width: u32, height: u32, transparent: bool) -> Result<Vec<u8>> {
    let Canvas { image, background } = canvas;

    let image = resize_canvas(image, width, height)?;

    let output: DynamicImage = if transparent {
        key_out_background(image, background).into()
    } else {
        DynamicImage::ImageRgba8(image).to_rgb8().into()
    };

    encode_png(&output)
}

/// Resizes to the requested dimensions, passing the canvas through untouched
/// when it already matches.
fn resize_canvas(image: RgbaImage, width: u32, height: u32) -> Result<RgbaImage> {
    if image.dimensions() == (width, height) {
        return Ok(image);
    }
    ensure_fits(width, height)?;
    Ok(imageops::resize(&image, width, height, FilterType::Triangle))
}

/// Rejects dimensions whose pixel buffer cannot exist, before any allocation
/// is attempted.
fn ensure_fits(width: u32, height: u32) -> Result<()> {
    let fits = (width as u64)
        .checked_mul(height as u64)
        .and_then(|pixels| pixels.checked_mul(4))
        .is_some_and(|bytes| bytes <= isize::MAX as u64);

    if width == 0 || height == 0 || !fits {
        return Err(RenderError::Allocation { width, height });
    }
    Ok(())
}

/// Sets alpha to zero on every pixel that exactly matches the background
/// color, leaving the color channels in place.
fn key_out_background(mut image: RgbaImage, background: Rgb) -> RgbaImage {
    let key = background.to_rgba();
    for pixel in image.pixels_mut() {
        if pixel.0[..3] == key.0[..3] {
            pixel.0[3] = 0;
        }
    }
    image
}

/// Encodes to PNG in memory.
fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, Rgba};

    /// An 8×8 canvas, white except for a red left half.
    fn test_canvas() -> Canvas {
        let mut image = RgbaImage::from_pixel(8, 8, Rgb::WHITE.to_rgba());
        for y in 0..8 {
            for x in 0..4 {
                image.put_pixel(x, y, Rgba([200, 0, 0, 255]));
            }
        }
        Canvas {
            image,
            background: Rgb::WHITE,
        }
    }

    #[test]
    fn matching_dimensions_pass_through_unresampled() {
        let bytes = finish(test_canvas(), 8, 8, false).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();

        assert_eq!(decoded.dimensions(), (8, 8));
        // Unresampled pixels keep their exact values.
        assert_eq!(decoded.get_pixel(1, 1).0, [200, 0, 0]);
        assert_eq!(decoded.get_pixel(6, 6).0, [255, 255, 255]);
    }

    #[test]
    fn resizes_to_the_requested_square() {
        let bytes = finish(test_canvas(), 32, 32, false).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 32);
        assert_eq!(decoded.height(), 32);
    }

    #[test]
    fn opaque_output_is_rgb() {
        let bytes = finish(test_canvas(), 8, 8, false).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.color(), ColorType::Rgb8);
    }

    #[test]
    fn transparent_output_keys_only_the_background() {
        let bytes = finish(test_canvas(), 8, 8, true).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.color(), ColorType::Rgba8);

        let rgba = decoded.to_rgba8();
        // Background keyed out, color channels intact.
        assert_eq!(rgba.get_pixel(6, 6).0, [255, 255, 255, 0]);
        // Foreground untouched.
        assert_eq!(rgba.get_pixel(1, 1).0, [200, 0, 0, 255]);
    }

    #[test]
    fn transparency_never_changes_color_channels() {
        let opaque = finish(test_canvas(), 8, 8, false).unwrap();
        let keyed = finish(test_canvas(), 8, 8, true).unwrap();

        let opaque = image::load_from_memory(&opaque).unwrap().to_rgb8();
        let keyed = image::load_from_memory(&keyed).unwrap().to_rgba8();

        for (x, y, pixel) in opaque.enumerate_pixels() {
            assert_eq!(pixel.0, keyed.get_pixel(x, y).0[..3]);
        }
    }

    #[test]
    fn impossible_dimensions_fail_as_allocation_errors() {
        let err = finish(test_canvas(), u32::MAX, u32::MAX, false).unwrap_err();
        assert!(matches!(err, RenderError::Allocation { .. }));

        let err = finish(test_canvas(), 0, 0, false).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Allocation {
                width: 0,
                height: 0
            }
        ));
    }
}
