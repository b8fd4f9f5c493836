// SPDX-License-Identifier: MPL-2.0
//! Classification of pointer activations and key presses.
//!
//! A pointer activation is described by a [`Hit`]: the region that was
//! activated followed by the regions that contain it, innermost first. The
//! rules below are tried in order and the first match decides the action;
//! the activation is consumed after a match.
//!
//! | # | Matches                                          | Action                      |
//! |---|--------------------------------------------------|-----------------------------|
//! | 1 | `OpenControl` in the path                        | open the card's gallery     |
//! | 2 | `Backdrop` is innermost, or `CloseControl` in path | close                     |
//! | 3 | `PrevControl` / `NextControl` in the path        | previous / next             |
//! | 4 | `ModalThumb` in the path                         | show the declared index     |
//! | 5 | `CardThumb` in the path                          | swap the card preview       |
//!
//! Keys are only routed while the modal is open.

use crate::catalog::GalleryId;
use crate::page::CardId;

/// A UI region that can take part in a pointer activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region {
    /// The control on a project card that opens its gallery.
    OpenControl,
    /// A project card, with the gallery id it declares.
    ProjectCard {
        card: CardId,
        gallery: Option<GalleryId>,
    },
    /// The dimmed area around the modal panel.
    Backdrop,
    /// The modal panel itself.
    ModalPanel,
    CloseControl,
    PrevControl,
    NextControl,
    /// A modal thumbnail, with its index exactly as declared on the slot.
    ModalThumb { declared_index: String },
    /// The in-card thumbnail strip.
    CardThumbStrip,
    CardThumb { card: CardId, thumb: usize },
    Other,
}

/// Activated region plus its ancestors, innermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit(Vec<Region>);

impl Hit {
    #[must_use]
    pub fn new(innermost: Region) -> Self {
        Self(vec![innermost])
    }

    /// Adds the next enclosing region.
    #[must_use]
    pub fn within(mut self, ancestor: Region) -> Self {
        self.0.push(ancestor);
        self
    }

    #[must_use]
    pub fn innermost(&self) -> Option<&Region> {
        self.0.first()
    }

    /// First region on the path, starting at the innermost, matching `predicate`.
    fn closest<'a, T>(&'a self, predicate: impl FnMut(&'a Region) -> Option<T>) -> Option<T> {
        self.0.iter().find_map(predicate)
    }

    fn contains(&self, region: &Region) -> bool {
        self.0.contains(region)
    }
}

/// Keys the router knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

/// The single action an input resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open a gallery at its first image.
    Open(GalleryId),
    /// An open control was activated outside a card, or on a card that
    /// declares no gallery.
    OpenWithoutGallery { card: Option<CardId> },
    Close,
    Previous,
    Next,
    ShowImage(usize),
    /// A modal thumbnail declared an index that is not a valid integer.
    InvalidThumbnailIndex(String),
    SelectCardThumb { card: CardId, thumb: usize },
}

/// Resolves a pointer activation.
#[must_use]
pub fn route_pointer(hit: &Hit) -> Option<Action> {
    // Rule 1
    if hit.contains(&Region::OpenControl) {
        let card = hit.closest(|region| match region {
            Region::ProjectCard { card, gallery } => Some((*card, gallery.clone())),
            _ => None,
        });
        return Some(match card {
            Some((_, Some(id))) => Action::Open(id),
            Some((card, None)) => Action::OpenWithoutGallery { card: Some(card) },
            None => Action::OpenWithoutGallery { card: None },
        });
    }

    // Rule 2
    if hit.innermost() == Some(&Region::Backdrop) || hit.contains(&Region::CloseControl) {
        return Some(Action::Close);
    }

    // Rule 3
    if hit.contains(&Region::PrevControl) {
        return Some(Action::Previous);
    }
    if hit.contains(&Region::NextControl) {
        return Some(Action::Next);
    }

    // Rule 4
    if let Some(declared) = hit.closest(|region| match region {
        Region::ModalThumb { declared_index } => Some(declared_index),
        _ => None,
    }) {
        return Some(match declared.trim().parse::<usize>() {
            Ok(index) => Action::ShowImage(index),
            Err(_) => Action::InvalidThumbnailIndex(declared.clone()),
        });
    }

    // Rule 5
    hit.closest(|region| match region {
        Region::CardThumb { card, thumb } => Some(Action::SelectCardThumb {
            card: *card,
            thumb: *thumb,
        }),
        _ => None,
    })
}

/// Resolves a key press. Nothing is routed while the modal is closed.
#[must_use]
pub fn route_key(key: Key, modal_open: bool) -> Option<Action> {
    if !modal_open {
        return None;
    }
    match key {
        Key::Escape => Some(Action::Close),
        Key::ArrowLeft => Some(Action::Previous),
        Key::ArrowRight => Some(Action::Next),
        Key::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(index: usize, gallery: Option<&str>) -> Region {
        Region::ProjectCard {
            card: CardId(index),
            gallery: gallery.map(GalleryId::new),
        }
    }

    fn in_modal(region: Region) -> Hit {
        Hit::new(region)
            .within(Region::ModalPanel)
            .within(Region::Backdrop)
    }

    #[test]
    fn open_control_opens_card_gallery() {
        let hit = Hit::new(Region::OpenControl).within(card(0, Some("paperazzi")));
        assert_eq!(
            route_pointer(&hit),
            Some(Action::Open(GalleryId::new("paperazzi")))
        );
    }

    #[test]
    fn content_inside_open_control_still_opens() {
        let hit = Hit::new(Region::Other)
            .within(Region::OpenControl)
            .within(card(1, Some("kainimo")));
        assert_eq!(
            route_pointer(&hit),
            Some(Action::Open(GalleryId::new("kainimo")))
        );
    }

    #[test]
    fn open_control_uses_closest_card() {
        let hit = Hit::new(Region::OpenControl)
            .within(card(3, Some("inner")))
            .within(card(4, Some("outer")));
        assert_eq!(route_pointer(&hit), Some(Action::Open(GalleryId::new("inner"))));
    }

    #[test]
    fn open_control_without_gallery_id() {
        let hit = Hit::new(Region::OpenControl).within(card(8, None));
        assert_eq!(
            route_pointer(&hit),
            Some(Action::OpenWithoutGallery {
                card: Some(CardId(8))
            })
        );
        assert_eq!(
            route_pointer(&Hit::new(Region::OpenControl)),
            Some(Action::OpenWithoutGallery { card: None })
        );
    }

    #[test]
    fn backdrop_closes_only_when_innermost() {
        assert_eq!(
            route_pointer(&Hit::new(Region::Backdrop)),
            Some(Action::Close)
        );
        assert_eq!(route_pointer(&in_modal(Region::Other)), None);
        assert_eq!(
            route_pointer(&Hit::new(Region::ModalPanel).within(Region::Backdrop)),
            None
        );
    }

    #[test]
    fn close_control_closes() {
        let hit = Hit::new(Region::Other)
            .within(Region::CloseControl)
            .within(Region::ModalPanel)
            .within(Region::Backdrop);
        assert_eq!(route_pointer(&hit), Some(Action::Close));
    }

    #[test]
    fn prev_and_next_controls() {
        assert_eq!(
            route_pointer(&in_modal(Region::PrevControl)),
            Some(Action::Previous)
        );
        assert_eq!(
            route_pointer(&in_modal(Region::NextControl)),
            Some(Action::Next)
        );
    }

    #[test]
    fn modal_thumb_parses_declared_index() {
        let hit = in_modal(Region::ModalThumb {
            declared_index: "3".to_string(),
        });
        assert_eq!(route_pointer(&hit), Some(Action::ShowImage(3)));
    }

    #[test]
    fn modal_thumb_with_invalid_index() {
        let hit = in_modal(Region::ModalThumb {
            declared_index: "three".to_string(),
        });
        assert_eq!(
            route_pointer(&hit),
            Some(Action::InvalidThumbnailIndex("three".to_string()))
        );
    }

    #[test]
    fn card_thumb_selects_preview() {
        let hit = Hit::new(Region::CardThumb {
            card: CardId(1),
            thumb: 1,
        })
        .within(Region::CardThumbStrip)
        .within(card(1, Some("kainimo")));
        assert_eq!(
            route_pointer(&hit),
            Some(Action::SelectCardThumb {
                card: CardId(1),
                thumb: 1
            })
        );
    }

    #[test]
    fn earlier_rule_wins() {
        // A close control nested in something that also looks like a thumb.
        let hit = Hit::new(Region::CloseControl).within(Region::ModalThumb {
            declared_index: "1".to_string(),
        });
        assert_eq!(route_pointer(&hit), Some(Action::Close));
    }

    #[test]
    fn unrelated_region_is_ignored() {
        assert_eq!(route_pointer(&Hit::new(Region::Other)), None);
        assert_eq!(
            route_pointer(&Hit::new(Region::CardThumbStrip).within(card(0, None))),
            None
        );
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        assert_eq!(route_key(Key::Escape, false), None);
        assert_eq!(route_key(Key::ArrowLeft, false), None);
        assert_eq!(route_key(Key::ArrowRight, false), None);
    }

    #[test]
    fn keys_route_while_open() {
        assert_eq!(route_key(Key::Escape, true), Some(Action::Close));
        assert_eq!(route_key(Key::ArrowLeft, true), Some(Action::Previous));
        assert_eq!(route_key(Key::ArrowRight, true), Some(Action::Next));
        assert_eq!(route_key(Key::Other, true), None);
    }
}
