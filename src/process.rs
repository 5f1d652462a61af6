use crate::image::{clear_light_background, decode_image_from_path, save_png};
use std::path::Path;

/// Decode `input`, clear its light background and write the PNG to `output`.
///
/// Returns the image dimensions as `[width, height]`. Nothing is written when
/// any step fails.
pub fn process_file(input: &Path, output: &Path) -> anyhow::Result<[u32; 2]> {
    let source = decode_image_from_path(input)?;
    let cleared = clear_light_background(&source);
    save_png(output, &cleared)?;
    Ok([cleared.width(), cleared.height()])
}
