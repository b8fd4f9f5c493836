// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Name of the embedded gallery catalog document.
pub const CATALOG_DOCUMENT: &str = "catalog.toml";

/// Name of the embedded host page document.
pub const PAGE_DOCUMENT: &str = "page.toml";

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
    Image(String),
}

/// Problems found while reading the embedded gallery catalog or page description.
/// Used to provide precise diagnostics about authoring mistakes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The embedded document is missing from the binary.
    MissingDocument(&'static str),

    /// The document is not valid TOML or does not match the expected shape.
    Malformed {
        document: &'static str,
        message: String,
    },

    /// A gallery declares no images.
    EmptyGallery(String),

    /// A gallery has an empty title.
    MissingTitle(String),

    /// An image record has an empty source locator.
    MissingSource { gallery: String, index: usize },
}

impl CatalogError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::MissingDocument(document) | CatalogError::Malformed { document, .. }
                if *document == PAGE_DOCUMENT =>
            {
                "notification-page-invalid"
            }
            _ => "notification-catalog-invalid",
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::MissingDocument(name) => write!(f, "Embedded document missing: {}", name),
            CatalogError::Malformed { document, message } => {
                write!(f, "Malformed {}: {}", document, message)
            }
            CatalogError::EmptyGallery(id) => write!(f, "Gallery '{}' has no images", id),
            CatalogError::MissingTitle(id) => write!(f, "Gallery '{}' has no title", id),
            CatalogError::MissingSource { gallery, index } => {
                write!(f, "Image {} of gallery '{}' has no source", index, gallery)
            }
        }
    }
}

impl Error {
    /// Message key of the warning toast shown when embedded content is
    /// unusable.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Catalog(err) => err.i18n_key(),
            Error::Io(_) | Error::Config(_) | Error::Image(_) => "notification-catalog-invalid",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
