// SPDX-License-Identifier: MPL-2.0
//! Which gallery is shown and which image is selected.

use crate::catalog::{Gallery, GalleryId};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveGallery {
    pub id: GalleryId,
    pub gallery: Arc<Gallery>,
}

/// Selection state owned by the controller.
///
/// `active` is `None` exactly when the modal is closed. While it is `Some`,
/// `active_index` is a valid index into the gallery's images.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    active: Option<ActiveGallery>,
    active_index: usize,
}

impl ViewState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveGallery> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn active_id(&self) -> Option<&GalleryId> {
        self.active.as_ref().map(|active| &active.id)
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Number of images of the active gallery, zero when closed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active
            .as_ref()
            .map_or(0, |active| active.gallery.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(super) fn activate(&mut self, id: GalleryId, gallery: Arc<Gallery>) {
        self.active = Some(ActiveGallery { id, gallery });
        self.active_index = 0;
    }

    /// Sets the selection; callers guarantee `index < len()`.
    pub(super) fn select(&mut self, index: usize) {
        debug_assert!(index < self.len());
        self.active_index = index;
    }

    pub(super) fn clear(&mut self) {
        self.active = None;
        self.active_index = 0;
    }
}
