// SPDX-License-Identifier: MPL-2.0
//! Host page description: project cards and the gallery modal anchors.
//!
//! The page is declared in the embedded `page.toml`. A `[modal]` table turns
//! the gallery modal on; its `anchors` list names the modal surfaces that
//! exist. Surfaces that are not anchored are never written nor drawn.

pub mod filter;

pub use filter::CategoryFilter;

use crate::catalog::GalleryId;
use crate::content;
use crate::error::{self, CatalogError, PAGE_DOCUMENT};
use serde::Deserialize;
use std::collections::BTreeSet;

/// Attachment points of the gallery modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    Title,
    MainImage,
    Description,
    Current,
    Total,
    Thumbnails,
    Close,
    Previous,
    Next,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::Title,
        Anchor::MainImage,
        Anchor::Description,
        Anchor::Current,
        Anchor::Total,
        Anchor::Thumbnails,
        Anchor::Close,
        Anchor::Previous,
        Anchor::Next,
    ];
}

/// The set of modal anchors present on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalAnchors(BTreeSet<Anchor>);

impl ModalAnchors {
    #[must_use]
    pub fn all() -> Self {
        Self(Anchor::ALL.into_iter().collect())
    }

    #[must_use]
    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    #[must_use]
    pub fn has(&self, anchor: Anchor) -> bool {
        self.0.contains(&anchor)
    }

    #[must_use]
    pub fn without(mut self, anchor: Anchor) -> Self {
        self.0.remove(&anchor);
        self
    }
}

impl Default for ModalAnchors {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Anchor> for ModalAnchors {
    fn from_iter<I: IntoIterator<Item = Anchor>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Index of a card in [`PageLayout::cards`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub usize);

/// An image of a card's in-card preview strip.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardThumb {
    pub source: String,
    #[serde(default)]
    pub alt: String,
}

/// A project card on the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub summary: String,
    pub category: String,
    /// Gallery opened by the card's open control, if the card declares one.
    pub gallery: Option<GalleryId>,
    pub thumbs: Vec<CardThumb>,
}

#[derive(Debug, Deserialize)]
struct PageDocument {
    modal: Option<ModalDocument>,
    #[serde(default)]
    cards: Vec<CardDocument>,
}

#[derive(Debug, Deserialize)]
struct ModalDocument {
    anchors: Option<Vec<Anchor>>,
}

#[derive(Debug, Deserialize)]
struct CardDocument {
    title: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    category: String,
    gallery: Option<String>,
    #[serde(default)]
    thumbs: Vec<CardThumb>,
}

/// The parsed host page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageLayout {
    /// `None` when the page has no gallery modal.
    pub modal: Option<ModalAnchors>,
    pub cards: Vec<ProjectCard>,
}

impl PageLayout {
    /// Loads the page description embedded in the binary.
    pub fn embedded() -> error::Result<Self> {
        Ok(Self::from_toml_str(&content::document(PAGE_DOCUMENT)?)?)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let document: PageDocument =
            toml::from_str(source).map_err(|err| CatalogError::Malformed {
                document: PAGE_DOCUMENT,
                message: err.to_string(),
            })?;

        let modal = document.modal.map(|modal| match modal.anchors {
            Some(anchors) => anchors.into_iter().collect(),
            None => ModalAnchors::all(),
        });
        let cards = document
            .cards
            .into_iter()
            .map(|card| ProjectCard {
                title: card.title,
                summary: card.summary,
                category: card.category.trim().to_lowercase(),
                gallery: card
                    .gallery
                    .filter(|id| !id.trim().is_empty())
                    .map(GalleryId::new),
                thumbs: card.thumbs,
            })
            .collect();

        Ok(Self { modal, cards })
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&ProjectCard> {
        self.cards.get(id.0)
    }

    /// Distinct card categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for card in &self.cards {
            if !card.category.is_empty() && !seen.contains(&card.category.as_str()) {
                seen.push(&card.category);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_page_has_modal_and_cards() {
        let page = PageLayout::embedded().expect("embedded page should be valid");
        assert_eq!(page.modal, Some(ModalAnchors::all()));
        assert_eq!(page.cards.len(), 9);
        assert_eq!(page.categories(), vec!["desktop", "web", "api"]);
    }

    #[test]
    fn embedded_cards_reference_galleries() {
        let page = PageLayout::embedded().unwrap();
        let paperazzi = page.card(CardId(0)).unwrap();
        assert_eq!(paperazzi.gallery, Some(GalleryId::new("paperazzi")));
        assert_eq!(paperazzi.thumbs.len(), 3);

        let last = page.cards.last().unwrap();
        assert!(last.gallery.is_none());
    }

    #[test]
    fn missing_modal_table_disables_modal() {
        let page = PageLayout::from_toml_str("[[cards]]\ntitle = \"A\"\n").unwrap();
        assert!(page.modal.is_none());
        assert_eq!(page.cards.len(), 1);
    }

    #[test]
    fn modal_without_anchor_list_has_all_anchors() {
        let page = PageLayout::from_toml_str("[modal]\n").unwrap();
        assert_eq!(page.modal, Some(ModalAnchors::all()));
    }

    #[test]
    fn partial_anchor_list_is_respected() {
        let page =
            PageLayout::from_toml_str("[modal]\nanchors = [\"main-image\", \"close\"]\n").unwrap();
        let anchors = page.modal.unwrap();
        assert!(anchors.has(Anchor::MainImage));
        assert!(anchors.has(Anchor::Close));
        assert!(!anchors.has(Anchor::Thumbnails));
        assert!(!anchors.has(Anchor::Current));
    }

    #[test]
    fn unknown_anchor_is_malformed() {
        let err = PageLayout::from_toml_str("[modal]\nanchors = [\"sidebar\"]\n").unwrap_err();
        assert_eq!(err.i18n_key(), "notification-page-invalid");
    }

    #[test]
    fn blank_gallery_id_is_treated_as_absent() {
        let page =
            PageLayout::from_toml_str("[[cards]]\ntitle = \"A\"\ngallery = \"  \"\n").unwrap();
        assert!(page.cards[0].gallery.is_none());
    }
}
