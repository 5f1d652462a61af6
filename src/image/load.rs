use anyhow::Context as _;
use image::{DynamicImage, ImageDecoder, ImageReader, RgbaImage};
use std::path::Path;

/// Largest accepted pixel count, matching the usual decompression-bomb bound
/// of image tooling (2 x 89_478_485). Width and height are not capped on
/// their own.
pub const MAX_TOTAL_PIXELS: u64 = 178_956_970;

pub(super) fn check_pixel_budget(width: u32, height: u32) -> anyhow::Result<()> {
    let total_pixels = u64::from(width) * u64::from(height);
    if total_pixels > MAX_TOTAL_PIXELS {
        anyhow::bail!(
            "Image too large: {width}x{height} ({total_pixels} pixels) exceeds limit of \
             {MAX_TOTAL_PIXELS} pixels"
        );
    }
    Ok(())
}

/// Load and decode an image from a filesystem path as 8-bit RGBA.
pub fn decode_image_from_path(path: &Path) -> anyhow::Result<RgbaImage> {
    let mut reader = ImageReader::open(path)
        .with_context(|| format!("Failed to read {}", path.display()))?
        .with_guessed_format()
        .context("Failed to detect image format")?;
    reader.no_limits();
    let decoder = reader
        .into_decoder()
        .context("Failed to decode image data")?;

    let (w, h) = decoder.dimensions();
    check_pixel_budget(w, h)?;

    let img = DynamicImage::from_decoder(decoder).context("Failed to decode image data")?;
    // Palette, grayscale and RGB inputs all end up as 8-bit RGBA.
    Ok(img.to_rgba8())
}
