//! I/O helpers around the `image` crate and small output files.
//!
//! - `decode_file` / `decode_bytes`: decode any supported format to RGBA8.
//! - `has_supported_extension`: the file types the converter accepts.
//! - `write_text_file` / `write_json_file`: persist final results.
use super::RgbaBitmap;
use image::{ImageError, ImageFormat};
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

/// Extensions (lower-case, without the dot) accepted for conversion.
pub const SUPPORTED_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "bmp", "webp", "tiff", "gif"];

/// Whether `path` carries one of [`SUPPORTED_EXTENSIONS`] (case-insensitive).
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Read and decode an image file. A missing or unreadable file surfaces as
/// `ImageError::IoError`.
pub fn decode_file(path: &Path) -> Result<RgbaBitmap, ImageError> {
    let bytes = fs::read(path).map_err(ImageError::IoError)?;
    info!("loaded {} ({} bytes)", path.display(), bytes.len());
    decode_bytes(&bytes)
}

/// Decode an in-memory encoded image, guessing the format from its header.
pub fn decode_bytes(bytes: &[u8]) -> Result<RgbaBitmap, ImageError> {
    let format = image::guess_format(bytes)?;
    info!("format: {}", format_name(format));
    let decoded = image::load_from_memory_with_format(bytes, format)?;
    debug!("decoded {}x{} {:?}", decoded.width(), decoded.height(), decoded.color());
    Ok(RgbaBitmap::from(decoded.into_rgba8()))
}

fn format_name(format: ImageFormat) -> &'static str {
    format.extensions_str().first().copied().unwrap_or("unknown")
}

/// Write `text` to `path`, creating parent directories.
pub fn write_text_file(path: &Path, text: &str) -> io::Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, text)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba, RgbaImage};
    use std::io::Cursor;

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(has_supported_extension(Path::new("photo.PNG")));
        assert!(has_supported_extension(Path::new("dir/scan.tiff")));
        assert!(!has_supported_extension(Path::new("notes.txt")));
        assert!(!has_supported_extension(Path::new("no_extension")));
    }

    #[test]
    fn decode_bytes_round_trips_png() {
        let img = RgbaImage::from_fn(4, 3, |x, _| Rgba([x as u8 * 60, 0, 0, 255]));
        let mut buf = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        let bitmap = decode_bytes(&buf).unwrap();
        assert_eq!((bitmap.width(), bitmap.height()), (4, 3));
        assert_eq!(bitmap.as_view().get(3, 2), [180, 0, 0, 255]);
    }

    #[test]
    fn decode_bytes_rejects_garbage() {
        assert!(decode_bytes(b"this-is-not-a-valid-png").is_err());
    }

    #[test]
    fn decode_file_reports_missing_file_as_io_error() {
        let err = decode_file(Path::new("definitely/missing/image.png")).unwrap_err();
        assert!(matches!(err, ImageError::IoError(_)));
    }
}
