// SPDX-License-Identifier: MPL-2.0
//! Static catalog of project galleries.
//!
//! The catalog is read once at startup from the embedded `catalog.toml` and is
//! never mutated afterwards. Every gallery holds at least one image; image
//! order is navigation order.
//!
//! # Examples
//!
//! ```
//! use iced_folio::catalog::Catalog;
//!
//! let catalog = Catalog::embedded().expect("embedded catalog is valid");
//! let gallery = catalog.get("paperazzi").expect("paperazzi is shipped");
//! assert_eq!(gallery.len(), 5);
//! assert!(catalog.get("nonexistent-id").is_none());
//! ```

use crate::content;
use crate::error::{self, CatalogError, CATALOG_DOCUMENT};
use serde::Deserialize;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Identifier of a gallery, as declared by project cards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GalleryId(String);

impl GalleryId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GalleryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for GalleryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GalleryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One image of a gallery.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GalleryRecord {
    /// Asset locator, relative to the assets root.
    pub source: String,
    /// Alternative text shown when the image cannot be displayed.
    #[serde(rename = "alt", default)]
    pub alt_text: String,
    #[serde(default)]
    pub description: String,
}

/// A titled, non-empty, ordered list of images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    title: String,
    images: Vec<GalleryRecord>,
}

impl Gallery {
    /// Builds a gallery, rejecting empty titles, empty image lists and
    /// records without a source.
    pub fn new(
        id: &str,
        title: impl Into<String>,
        images: Vec<GalleryRecord>,
    ) -> Result<Self, CatalogError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CatalogError::MissingTitle(id.to_string()));
        }
        if images.is_empty() {
            return Err(CatalogError::EmptyGallery(id.to_string()));
        }
        if let Some(index) = images.iter().position(|record| record.source.trim().is_empty()) {
            return Err(CatalogError::MissingSource {
                gallery: id.to_string(),
                index,
            });
        }
        Ok(Self { title, images })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn images(&self) -> &[GalleryRecord] {
        &self.images
    }

    #[must_use]
    pub fn image(&self, index: usize) -> Option<&GalleryRecord> {
        self.images.get(index)
    }

    /// Number of images; always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always `false`: construction rejects empty galleries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    galleries: BTreeMap<String, GalleryDocument>,
}

#[derive(Debug, Deserialize)]
struct GalleryDocument {
    #[serde(default)]
    title: String,
    #[serde(default)]
    images: Vec<GalleryRecord>,
}

/// Read-only mapping from gallery id to gallery.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    galleries: BTreeMap<GalleryId, Arc<Gallery>>,
}

impl Catalog {
    /// An empty catalog; every lookup misses.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the catalog embedded in the binary.
    pub fn embedded() -> error::Result<Self> {
        Ok(Self::from_toml_str(&content::document(CATALOG_DOCUMENT)?)?)
    }

    /// Parses and validates a catalog document.
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            toml::from_str(source).map_err(|err| CatalogError::Malformed {
                document: CATALOG_DOCUMENT,
                message: err.to_string(),
            })?;

        let mut galleries = BTreeMap::new();
        for (id, raw) in document.galleries {
            let gallery = Gallery::new(&id, raw.title, raw.images)?;
            galleries.insert(GalleryId::new(id), Arc::new(gallery));
        }
        Ok(Self { galleries })
    }

    /// Looks up a gallery; unknown ids yield `None`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Arc<Gallery>> {
        self.galleries.get(id).cloned()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.galleries.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &GalleryId> {
        self.galleries.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.galleries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.galleries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(source: &str) -> GalleryRecord {
        GalleryRecord {
            source: source.to_string(),
            alt_text: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn embedded_catalog_ships_eight_galleries() {
        let catalog = Catalog::embedded().expect("embedded catalog should be valid");
        let expected = [
            ("etracker-admin", 5),
            ("etracker-faculty", 5),
            ("etracker-student", 5),
            ("kainimo", 4),
            ("paperazzi", 5),
            ("smilebright", 5),
            ("student-api", 1),
            ("weather-api", 1),
        ];
        assert_eq!(catalog.len(), expected.len());
        for (id, count) in expected {
            let gallery = catalog
                .get(id)
                .unwrap_or_else(|| panic!("missing gallery {id}"));
            assert_eq!(gallery.len(), count, "image count of {id}");
            assert!(!gallery.title().is_empty());
        }
    }

    #[test]
    fn paperazzi_images_keep_declared_order() {
        let catalog = Catalog::embedded().unwrap();
        let gallery = catalog.get("paperazzi").unwrap();
        assert_eq!(gallery.title(), "Paperazzi - Coin Operated Printing Machine");
        let sources: Vec<_> = gallery.images().iter().map(|r| r.source.as_str()).collect();
        assert_eq!(
            sources,
            vec![
                "assets/PAPERAZZI/1.png",
                "assets/PAPERAZZI/2.png",
                "assets/PAPERAZZI/3.png",
                "assets/PAPERAZZI/4.png",
                "assets/PAPERAZZI/5.png",
            ]
        );
        assert_eq!(
            gallery.images()[0].description,
            "Main user interface of the Paperazzi coin-operated printing system"
        );
    }

    #[test]
    fn unknown_id_yields_none() {
        let catalog = Catalog::embedded().unwrap();
        assert!(catalog.get("nonexistent-id").is_none());
        assert!(!catalog.contains("nonexistent-id"));
        assert!(Catalog::empty().get("paperazzi").is_none());
    }

    #[test]
    fn empty_gallery_is_rejected() {
        let source = "[galleries.empty]\ntitle = \"Empty\"\n";
        assert_eq!(
            Catalog::from_toml_str(source).unwrap_err(),
            CatalogError::EmptyGallery("empty".to_string())
        );
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = Gallery::new("x", "  ", vec![record("a.png")]).unwrap_err();
        assert_eq!(err, CatalogError::MissingTitle("x".to_string()));
    }

    #[test]
    fn missing_source_reports_index() {
        let err = Gallery::new("x", "X", vec![record("a.png"), record("")]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::MissingSource {
                gallery: "x".to_string(),
                index: 1
            }
        );
    }

    #[test]
    fn malformed_document_is_reported() {
        let err = Catalog::from_toml_str("[galleries.x\n").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Malformed {
                document: CATALOG_DOCUMENT,
                ..
            }
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected_by_the_parser() {
        let source = "[galleries.a]\ntitle = \"A\"\n[[galleries.a.images]]\nsource = \"1.png\"\n\
                      [galleries.a]\ntitle = \"B\"\n";
        assert!(matches!(
            Catalog::from_toml_str(source),
            Err(CatalogError::Malformed { .. })
        ));
    }
}
