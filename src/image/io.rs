//! I/O helpers for packed buffers and JSON.
//!
//! - `load_nrgba_image`: decode a PNG/JPEG/etc. into a straight-alpha buffer.
//! - `save_nrgba_image`: encode a straight-alpha buffer (format from extension).
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::packed::NrgbaBuffer;
use image::{DynamicImage, RgbaImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk as 8-bit straight-alpha RGBA.
pub fn load_nrgba_image(path: &Path) -> Result<NrgbaBuffer, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    NrgbaBuffer::from_raw(width, height, img.into_raw())
        .ok_or_else(|| format!("Unexpected buffer size decoding {}", path.display()))
}

/// Save a straight-alpha buffer; the encoder is chosen from the extension.
pub fn save_nrgba_image(buffer: &NrgbaBuffer, path: &Path) -> Result<(), String> {
    create_parent(path)?;
    let image = RgbaImage::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.as_raw().to_vec(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageRgba8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Pretty-print `value` as JSON into `path`; missing parent directories are created.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    let json = serde_json::to_vec_pretty(value)
        .map_err(|e| format!("Cannot encode JSON for {}: {e}", path.display()))?;
    create_parent(path)?;
    fs::write(path, json).map_err(|e| format!("Cannot write {}: {e}", path.display()))
}

fn create_parent(path: &Path) -> Result<(), String> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .map_err(|e| format!("Cannot create directory {}: {e}", dir.display())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::write_json_file;
    use std::fs;

    #[test]
    fn json_file_lands_in_new_directory() {
        let dir = std::env::temp_dir().join(format!("grid-par-io-{}", std::process::id()));
        let path = dir.join("nested").join("summary.json");
        write_json_file(&path, &serde_json::json!({ "tasks": 3 })).unwrap();
        let back: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(back["tasks"], 3);
        fs::remove_dir_all(&dir).unwrap();
    }
}
