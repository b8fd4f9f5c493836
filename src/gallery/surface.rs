// SPDX-License-Identifier: MPL-2.0
//! Render model of the gallery modal.
//!
//! The controller writes into the surface; the view only reads it. Every
//! write targets one anchor and is skipped when the page does not declare
//! that anchor, so a partially anchored page never shows stray content.

use crate::catalog::Gallery;
use crate::media::ImageData;
use crate::page::{Anchor, ModalAnchors};

/// Opacity of a main image that is not transitioning.
pub const FULL_OPACITY: f32 = 1.0;

/// Decode progress of an image slot.
#[derive(Debug, Clone, Default)]
pub enum ImageState {
    #[default]
    Empty,
    /// Decode in flight. Holds the image shown before it, if any, so the
    /// slot never goes blank while the replacement decodes.
    Loading(Option<ImageData>),
    Ready(ImageData),
    Failed,
}

impl ImageState {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, ImageState::Ready(_))
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, ImageState::Failed)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, ImageState::Loading(_))
    }

    /// Image to draw right now: the decoded one, or the one it replaces.
    #[must_use]
    pub fn displayed(&self) -> Option<&ImageData> {
        match self {
            ImageState::Ready(image) | ImageState::Loading(Some(image)) => Some(image),
            ImageState::Empty | ImageState::Loading(None) | ImageState::Failed => None,
        }
    }

    /// Starts a new decode, keeping whatever is currently displayed.
    fn into_loading(self) -> Self {
        match self {
            ImageState::Ready(image) | ImageState::Loading(Some(image)) => {
                ImageState::Loading(Some(image))
            }
            ImageState::Empty | ImageState::Loading(None) | ImageState::Failed => {
                ImageState::Loading(None)
            }
        }
    }
}

/// The large image of the modal.
#[derive(Debug, Clone)]
pub struct MainImage {
    /// Committed source; changes only when a deferred swap fires.
    pub source: Option<String>,
    pub alt: String,
    pub opacity: f32,
    pub state: ImageState,
}

impl Default for MainImage {
    fn default() -> Self {
        Self {
            source: None,
            alt: String::new(),
            opacity: FULL_OPACITY,
            state: ImageState::Empty,
        }
    }
}

/// One entry of the modal thumbnail strip.
#[derive(Debug, Clone)]
pub struct ThumbSlot {
    /// Position of the image in the gallery.
    pub index: usize,
    pub source: String,
    pub alt: String,
    pub active: bool,
    pub state: ImageState,
}

#[derive(Debug, Clone)]
pub struct ModalSurface {
    anchors: ModalAnchors,
    visible: bool,
    scroll_locked: bool,
    title: Option<String>,
    main_image: Option<MainImage>,
    description: Option<String>,
    current: Option<usize>,
    total: Option<usize>,
    thumbnails: Vec<ThumbSlot>,
}

impl ModalSurface {
    #[must_use]
    pub fn new(anchors: ModalAnchors) -> Self {
        let main_image = anchors.has(Anchor::MainImage).then(MainImage::default);
        Self {
            anchors,
            visible: false,
            scroll_locked: false,
            title: None,
            main_image,
            description: None,
            current: None,
            total: None,
            thumbnails: Vec::new(),
        }
    }

    // ---------------------------------------------------------------------
    // Reads
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn anchors(&self) -> &ModalAnchors {
        &self.anchors
    }

    #[must_use]
    pub fn has(&self, anchor: Anchor) -> bool {
        self.anchors.has(anchor)
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether scrolling of the page behind the modal is suspended.
    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn main_image(&self) -> Option<&MainImage> {
        self.main_image.as_ref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// One-based position shown by the current indicator.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> Option<usize> {
        self.total
    }

    #[must_use]
    pub fn thumbnails(&self) -> &[ThumbSlot] {
        &self.thumbnails
    }

    /// Index of the highlighted thumbnail, if any.
    #[must_use]
    pub fn active_thumbnail(&self) -> Option<usize> {
        self.thumbnails
            .iter()
            .find(|slot| slot.active)
            .map(|slot| slot.index)
    }

    // ---------------------------------------------------------------------
    // Writes
    // ---------------------------------------------------------------------

    pub(super) fn show(&mut self) {
        self.visible = true;
        self.scroll_locked = true;
    }

    pub(super) fn hide(&mut self) {
        self.visible = false;
        self.scroll_locked = false;
        if let Some(main) = self.main_image.as_mut() {
            main.opacity = FULL_OPACITY;
        }
    }

    pub(super) fn write_title(&mut self, title: &str) {
        if self.has(Anchor::Title) {
            self.title = Some(title.to_string());
        }
    }

    pub(super) fn write_description(&mut self, description: &str) {
        if self.has(Anchor::Description) {
            self.description = Some(description.to_string());
        }
    }

    pub(super) fn write_current(&mut self, one_based: usize) {
        if self.has(Anchor::Current) {
            self.current = Some(one_based);
        }
    }

    pub(super) fn write_total(&mut self, total: usize) {
        if self.has(Anchor::Total) {
            self.total = Some(total);
        }
    }

    /// Replaces the strip with one pending slot per image, in order.
    ///
    /// Returns `false` when the page has no thumbnail strip.
    pub(super) fn rebuild_thumbnails(&mut self, gallery: &Gallery) -> bool {
        if !self.has(Anchor::Thumbnails) {
            return false;
        }
        self.thumbnails = gallery
            .images()
            .iter()
            .enumerate()
            .map(|(index, record)| ThumbSlot {
                index,
                source: record.source.clone(),
                alt: record.alt_text.clone(),
                active: false,
                state: ImageState::Loading(None),
            })
            .collect();
        true
    }

    /// Highlights exactly the slot at `index`.
    pub(super) fn mark_active_thumbnail(&mut self, index: usize) {
        for slot in &mut self.thumbnails {
            slot.active = slot.index == index;
        }
    }

    pub(super) fn thumbnail_loaded(&mut self, index: usize, image: Option<ImageData>) {
        if let Some(slot) = self.thumbnails.iter_mut().find(|slot| slot.index == index) {
            slot.state = match image {
                Some(image) => ImageState::Ready(image),
                None => ImageState::Failed,
            };
        }
    }

    pub(super) fn dim_main_image(&mut self, opacity: f32) {
        if let Some(main) = self.main_image.as_mut() {
            main.opacity = opacity;
        }
    }

    /// Commits a new source. The outgoing image stays displayed, still dimmed,
    /// until the new one is decoded.
    ///
    /// Returns `false` when there is no main image anchor.
    pub(super) fn commit_main_image(&mut self, source: &str, alt: &str) -> bool {
        match self.main_image.as_mut() {
            Some(main) => {
                main.source = Some(source.to_string());
                main.alt = alt.to_string();
                main.state = std::mem::take(&mut main.state).into_loading();
                true
            }
            None => false,
        }
    }

    /// Records the decode outcome and restores full opacity either way.
    pub(super) fn main_image_loaded(&mut self, image: Option<ImageData>) {
        if let Some(main) = self.main_image.as_mut() {
            main.state = match image {
                Some(image) => ImageState::Ready(image),
                None => ImageState::Failed,
            };
            main.opacity = FULL_OPACITY;
        }
    }
}
