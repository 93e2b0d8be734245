//! PNG decode/encode for atlases and sprites.

use std::fs;
use std::path::Path;

use image::{ImageError, ImageFormat, RgbaImage};

use crate::error::{Result, SliceError};

/// Decodes an atlas into an 8-bit RGBA buffer, whatever its stored layout.
pub fn decode(bytes: &[u8], origin: &str) -> Result<RgbaImage> {
    image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map(|img| img.to_rgba8())
        .map_err(|source| SliceError::Decode {
            path: origin.to_string(),
            source,
        })
}

/// Writes `image` as PNG, creating parent directories and replacing any
/// existing file. Prints the written path for the operator.
pub fn write(path: &Path, image: &RgbaImage) -> Result<()> {
    let failure = |source: ImageError| SliceError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| failure(ImageError::IoError(e)))?;
    }

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(failure)?;

    let shown = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    println!("{}", shown.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_write_creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/c.png");

        let first = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 4]));
        write(&path, &first).expect("first write");

        let second = RgbaImage::from_pixel(3, 1, Rgba([9, 9, 9, 255]));
        write(&path, &second).expect("overwrite");

        let bytes = fs::read(&path).unwrap();
        let decoded = decode(&bytes, "c.png").unwrap();
        assert_eq!(decoded, second);
    }

    #[test]
    fn test_write_failure_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("blocker"), b"x").unwrap();

        let img = RgbaImage::new(1, 1);
        let err = write(&dir.path().join("blocker/out.png"), &img).unwrap_err();
        assert!(matches!(err, SliceError::WriteFailure { .. }), "got {err}");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode(b"definitely not a png", "junk.png").unwrap_err();
        match err {
            SliceError::Decode { path, .. } => assert_eq!(path, "junk.png"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
