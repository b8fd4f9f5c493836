// SPDX-License-Identifier: MPL-2.0
//! Image assets: decoding, thumbnailing and caching.
//!
//! Decoding is CPU bound and runs on tokio's blocking pool so the UI thread
//! only ever receives finished [`ImageData`].

pub mod cache;
pub mod image;

pub use cache::{CacheStats, ThumbnailCache};
pub use image::{load_image, load_thumbnail, ImageData};

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Resolves an asset locator against the assets root.
///
/// Absolute locators are used as-is.
#[must_use]
pub fn resolve(root: &Path, source: &str) -> PathBuf {
    let path = Path::new(source);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Decodes a full-size image on the blocking pool.
pub async fn load_image_async(path: PathBuf) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || load_image(&path))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}

/// Decodes a thumbnail on the blocking pool.
pub async fn load_thumbnail_async(path: PathBuf, max_edge: u32) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || load_thumbnail(&path, max_edge))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}
