use anyhow::Context as _;
use image::{ImageFormat, RgbaImage};
use std::ffi::OsString;
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

/// Encode an RGBA image as PNG bytes, alpha channel included.
pub fn encode_png(image: &RgbaImage) -> anyhow::Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .context("Failed to encode PNG")?;
    Ok(buf.into_inner())
}

/// Encode to PNG and write it to `path` through a sibling `<path>.tmp`.
///
/// The target is either fully replaced or left untouched.
pub fn save_png(path: &Path, image: &RgbaImage) -> anyhow::Result<()> {
    let bytes = encode_png(image)?;
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let tmp_path = temp_path_for(path);
    let result = write_temp_file(&tmp_path, &bytes).and_then(|()| {
        fs::rename(&tmp_path, path)
            .with_context(|| format!("Failed to replace {} with temp file", path.display()))
    });
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

pub(super) fn temp_path_for(target: &Path) -> PathBuf {
    let mut name = OsString::from(target.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_temp_file(tmp_path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let mut file = fs::File::create(tmp_path)
        .with_context(|| format!("Failed to create temp file {}", tmp_path.display()))?;
    file.write_all(data)
        .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
    file.sync_all()
        .with_context(|| format!("Failed to sync {}", tmp_path.display()))
}
