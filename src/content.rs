// SPDX-License-Identifier: MPL-2.0
//! Content documents embedded in the binary at compile time.

use crate::error::{CatalogError, Result};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Content;

/// Returns the text of an embedded content document.
pub fn document(name: &'static str) -> Result<String> {
    let file = Content::get(name).ok_or(CatalogError::MissingDocument(name))?;
    let text = String::from_utf8(file.data.into_owned()).map_err(|err| {
        CatalogError::Malformed {
            document: name,
            message: err.to_string(),
        }
    })?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, CATALOG_DOCUMENT, PAGE_DOCUMENT};

    #[test]
    fn embedded_documents_are_present() {
        assert!(document(CATALOG_DOCUMENT).is_ok());
        assert!(document(PAGE_DOCUMENT).is_ok());
    }

    #[test]
    fn unknown_document_is_reported() {
        assert!(matches!(
            document("nope.toml"),
            Err(Error::Catalog(CatalogError::MissingDocument("nope.toml")))
        ));
    }
}
