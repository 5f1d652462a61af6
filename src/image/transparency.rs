use image::{Pixel as _, Rgba, RgbaImage};
use rayon::prelude::*;

/// Each of R, G and B must exceed this for a pixel to count as background.
pub const LIGHT_THRESHOLD: u8 = 200;

/// Replacement for background pixels: white with zero alpha.
pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Minimum pixel count before parallelizing the per-pixel map.
const PARALLEL_PIXEL_THRESHOLD: usize = 262_144; // 512x512

/// Whether a pixel is light enough to be treated as background.
///
/// Alpha is not considered.
pub const fn is_light(pixel: Rgba<u8>) -> bool {
    let [r, g, b, _] = pixel.0;
    r > LIGHT_THRESHOLD && g > LIGHT_THRESHOLD && b > LIGHT_THRESHOLD
}

pub const fn clear_pixel(pixel: Rgba<u8>) -> Rgba<u8> {
    if is_light(pixel) {
        TRANSPARENT_WHITE
    } else {
        pixel
    }
}

/// Map every pixel through [`clear_pixel`], keeping length and order.
pub fn clear_light_pixels(pixels: &[Rgba<u8>]) -> Vec<Rgba<u8>> {
    if pixels.len() >= PARALLEL_PIXEL_THRESHOLD {
        pixels.par_iter().map(|&px| clear_pixel(px)).collect()
    } else {
        pixels.iter().map(|&px| clear_pixel(px)).collect()
    }
}

/// Return a copy of `image` with its light background made transparent.
pub fn clear_light_background(image: &RgbaImage) -> RgbaImage {
    let mut out = image.clone();
    let samples: &mut [u8] = &mut out;
    let clear = |chunk: &mut [u8]| {
        let px = Rgba::from_slice_mut(chunk);
        *px = clear_pixel(*px);
    };
    if samples.len() / 4 >= PARALLEL_PIXEL_THRESHOLD {
        samples.par_chunks_exact_mut(4).for_each(clear);
    } else {
        samples.chunks_exact_mut(4).for_each(clear);
    }
    out
}
