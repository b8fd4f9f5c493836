// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for gallery and card images.

use crate::error::Result;
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Loads and decodes an image at full resolution.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::error::Error::Io) when the file cannot be read
/// and [`Error::Image`](crate::error::Error::Image) when it cannot be decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let bytes = fs::read(path.as_ref())?;
    let img = image_rs::load_from_memory(&bytes)?;
    let (width, height) = img.dimensions();
    Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
}

/// Loads an image and scales it down so its longest edge is at most `max_edge`.
///
/// Images already smaller than `max_edge` keep their size.
pub fn load_thumbnail<P: AsRef<Path>>(path: P, max_edge: u32) -> Result<ImageData> {
    let bytes = fs::read(path.as_ref())?;
    let img = image_rs::load_from_memory(&bytes)?;
    let (width, height) = img.dimensions();
    let img = if width > max_edge || height > max_edge {
        img.thumbnail(max_edge, max_edge)
    } else {
        img
    };
    let (width, height) = img.dimensions();
    Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");
        RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]))
            .save(&image_path)
            .expect("failed to write png");

        let data = load_image(&image_path).expect("failed to load png");
        assert_eq!((data.width, data.height), (4, 2));
    }

    #[test]
    fn thumbnail_is_bounded_by_max_edge() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("wide.png");
        RgbaImage::from_pixel(400, 100, Rgba([0, 0, 255, 255]))
            .save(&image_path)
            .expect("failed to write png");

        let data = load_thumbnail(&image_path, 100).expect("failed to load thumbnail");
        assert_eq!(data.width, 100);
        assert_eq!(data.height, 25);
    }

    #[test]
    fn small_image_is_not_upscaled() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("small.png");
        RgbaImage::from_pixel(10, 10, Rgba([0, 255, 0, 255]))
            .save(&image_path)
            .expect("failed to write png");

        let data = load_thumbnail(&image_path, 100).expect("failed to load thumbnail");
        assert_eq!((data.width, data.height), (10, 10));
    }

    #[test]
    fn missing_file_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_image(temp_dir.path().join("absent.png"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn corrupt_file_is_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("corrupt.png");
        std::fs::write(&image_path, b"not an image").expect("failed to write file");

        let result = load_image(&image_path);
        assert!(matches!(result, Err(Error::Image(_))));
    }
}
