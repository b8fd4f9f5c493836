// SPDX-License-Identifier: MPL-2.0
//! Gallery controller: the single owner of the modal's view state.
//!
//! Every operation updates [`ViewState`] and the [`ModalSurface`] together and
//! returns the side effects the application has to run (timers, decodes,
//! scrolling). Completed side effects come back through
//! [`Controller::commit_swap`], [`Controller::main_image_loaded`] and
//! [`Controller::thumbnail_loaded`], each tagged with the token it was issued
//! with.

use super::state::ViewState;
use super::surface::ModalSurface;
use super::transition::{TransitionToken, TransitionTracker};
use super::Effect;
use crate::app::config::{GalleryConfig, DEFAULT_DIM_OPACITY, DEFAULT_SWAP_DELAY_MS};
use crate::catalog::{Catalog, GalleryId};
use crate::diagnostics::DiagnosticsHandle;
use crate::error::Error;
use crate::media::ImageData;
use crate::page::{Anchor, ModalAnchors};
use std::sync::Arc;
use std::time::Duration;

/// Timing of the main image swap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSettings {
    /// Delay between dimming the image and committing the new source.
    pub swap_delay: Duration,
    /// Opacity of the main image while the swap is pending.
    pub dim_opacity: f32,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            swap_delay: Duration::from_millis(DEFAULT_SWAP_DELAY_MS),
            dim_opacity: DEFAULT_DIM_OPACITY,
        }
    }
}

impl From<&GalleryConfig> for ControllerSettings {
    fn from(config: &GalleryConfig) -> Self {
        Self {
            swap_delay: config.swap_delay(),
            dim_opacity: config.dim_opacity(),
        }
    }
}

#[derive(Debug, Clone)]
struct PendingSwap {
    token: TransitionToken,
    source: String,
    alt: String,
}

#[derive(Debug)]
pub struct Controller {
    catalog: Catalog,
    state: ViewState,
    surface: ModalSurface,
    swaps: TransitionTracker,
    strips: TransitionTracker,
    pending_swap: Option<PendingSwap>,
    settings: ControllerSettings,
    diagnostics: DiagnosticsHandle,
}

impl Controller {
    #[must_use]
    pub fn new(
        catalog: Catalog,
        anchors: ModalAnchors,
        settings: ControllerSettings,
        diagnostics: DiagnosticsHandle,
    ) -> Self {
        Self {
            catalog,
            state: ViewState::default(),
            surface: ModalSurface::new(anchors),
            swaps: TransitionTracker::new(),
            strips: TransitionTracker::new(),
            pending_swap: None,
            settings,
            diagnostics,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn surface(&self) -> &ModalSurface {
        &self.surface
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    #[must_use]
    pub fn settings(&self) -> ControllerSettings {
        self.settings
    }

    /// Opens gallery `id` at `start_index`, clamped into the gallery.
    ///
    /// Unknown ids leave every piece of state untouched.
    pub fn open(&mut self, id: &str, start_index: usize) -> Vec<Effect> {
        let Some(gallery) = self.catalog.get(id) else {
            self.diagnostics
                .lookup_miss(format!("gallery '{id}' is not in the catalog"));
            return vec![Effect::GalleryNotFound(GalleryId::new(id))];
        };

        tracing::debug!(gallery = id, start_index, "opening gallery");
        let index = start_index.min(gallery.len() - 1);
        self.state.activate(GalleryId::new(id), Arc::clone(&gallery));

        self.surface.write_title(gallery.title());
        self.surface.write_total(gallery.len());

        let mut effects = Vec::new();
        if self.surface.rebuild_thumbnails(&gallery) {
            let strip = self.strips.issue();
            effects.push(Effect::LoadThumbnails {
                strip,
                sources: gallery
                    .images()
                    .iter()
                    .map(|record| record.source.clone())
                    .collect(),
            });
        }

        effects.extend(self.show_image(index));
        self.surface.show();
        effects
    }

    /// Hides the modal and forgets the active gallery. Calling it while
    /// closed changes nothing.
    pub fn close(&mut self) -> Vec<Effect> {
        if self.state.is_open() {
            tracing::debug!(gallery = ?self.state.active_id(), "closing gallery");
        }
        self.surface.hide();
        self.state.clear();
        self.swaps.invalidate();
        self.strips.invalidate();
        self.pending_swap = None;
        Vec::new()
    }

    /// Selects image `index` of the active gallery.
    ///
    /// Without an active gallery, or with an index past the last image, a
    /// diagnostic is recorded and nothing changes.
    pub fn show_image(&mut self, index: usize) -> Vec<Effect> {
        let Some(active) = self.state.active() else {
            self.diagnostics
                .ignored_request(format!("show_image({index}) without an active gallery"));
            return Vec::new();
        };
        let count = active.gallery.len();
        let Some(record) = active.gallery.image(index).cloned() else {
            self.diagnostics.ignored_request(format!(
                "show_image({index}) out of range for '{}' ({count} images)",
                active.id
            ));
            return Vec::new();
        };

        self.state.select(index);

        let mut effects = Vec::new();
        if self.surface.has(Anchor::MainImage) {
            self.surface.dim_main_image(self.settings.dim_opacity);
            let token = self.swaps.issue();
            self.pending_swap = Some(PendingSwap {
                token,
                source: record.source,
                alt: record.alt_text,
            });
            effects.push(Effect::ScheduleSwap {
                token,
                delay: self.settings.swap_delay,
            });
        }

        self.surface.write_description(&record.description);
        self.surface.write_current(index + 1);
        self.surface.mark_active_thumbnail(index);
        if self.surface.has(Anchor::Thumbnails) {
            effects.push(Effect::RevealThumbnail { index, count });
        }
        effects
    }

    /// Moves to the next image, wrapping from the last to the first.
    pub fn show_next(&mut self) -> Vec<Effect> {
        let count = self.state.len();
        if count == 0 {
            return Vec::new();
        }
        self.show_image((self.state.active_index() + 1) % count)
    }

    /// Moves to the previous image, wrapping from the first to the last.
    pub fn show_previous(&mut self) -> Vec<Effect> {
        let count = self.state.len();
        if count == 0 {
            return Vec::new();
        }
        let current = self.state.active_index();
        let previous = if current == 0 { count - 1 } else { current - 1 };
        self.show_image(previous)
    }

    /// Commits the source scheduled with `token` once its delay elapsed.
    pub fn commit_swap(&mut self, token: TransitionToken) -> Vec<Effect> {
        if !self.swaps.is_current(token) {
            tracing::trace!(token = token.value(), "stale swap dropped");
            return Vec::new();
        }
        let pending = match self.pending_swap.take() {
            Some(pending) if pending.token == token => pending,
            other => {
                self.pending_swap = other;
                return Vec::new();
            }
        };

        if self.surface.commit_main_image(&pending.source, &pending.alt) {
            vec![Effect::LoadMainImage {
                token,
                source: pending.source,
            }]
        } else {
            Vec::new()
        }
    }

    /// Applies the decoded main image for `token`; other tokens are dropped.
    pub fn main_image_loaded(
        &mut self,
        token: TransitionToken,
        result: Result<ImageData, Error>,
    ) {
        if !self.swaps.is_current(token) {
            return;
        }
        match result {
            Ok(image) => self.surface.main_image_loaded(Some(image)),
            Err(err) => {
                let source = self
                    .surface
                    .main_image()
                    .and_then(|main| main.source.clone())
                    .unwrap_or_default();
                self.diagnostics
                    .asset_load_failure(format!("main image '{source}': {err}"));
                self.surface.main_image_loaded(None);
            }
        }
    }

    /// Applies a decoded thumbnail of the strip built with `strip`.
    pub fn thumbnail_loaded(
        &mut self,
        strip: TransitionToken,
        index: usize,
        result: Result<ImageData, Error>,
    ) {
        if !self.strips.is_current(strip) {
            return;
        }
        match result {
            Ok(image) => self.surface.thumbnail_loaded(index, Some(image)),
            Err(err) => {
                self.diagnostics
                    .asset_load_failure(format!("thumbnail {index}: {err}"));
                self.surface.thumbnail_loaded(index, None);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;
    use crate::gallery::surface::FULL_OPACITY;

    fn controller() -> (Controller, DiagnosticsHandle) {
        let diagnostics = DiagnosticsHandle::default();
        let controller = Controller::new(
            Catalog::embedded().unwrap(),
            ModalAnchors::all(),
            ControllerSettings::default(),
            diagnostics.clone(),
        );
        (controller, diagnostics)
    }

    fn swap_token(effects: &[Effect]) -> TransitionToken {
        effects
            .iter()
            .find_map(|effect| match effect {
                Effect::ScheduleSwap { token, .. } => Some(*token),
                _ => None,
            })
            .expect("a swap should be scheduled")
    }

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn open_writes_every_surface() {
        let (mut controller, _) = controller();
        let effects = controller.open("paperazzi", 0);

        let surface = controller.surface();
        assert!(controller.is_open());
        assert!(surface.is_visible());
        assert!(surface.is_scroll_locked());
        assert_eq!(
            surface.title(),
            Some("Paperazzi - Coin Operated Printing Machine")
        );
        assert_eq!(surface.current(), Some(1));
        assert_eq!(surface.total(), Some(5));
        assert_eq!(surface.thumbnails().len(), 5);
        assert_eq!(surface.active_thumbnail(), Some(0));
        assert_eq!(surface.main_image().unwrap().opacity, DEFAULT_DIM_OPACITY);

        assert!(matches!(
            effects[0],
            Effect::LoadThumbnails { ref sources, .. } if sources.len() == 5
        ));
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::ScheduleSwap { delay, .. } if *delay == Duration::from_millis(150)
        )));
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::RevealThumbnail { index: 0, count: 5 })));
    }

    #[test]
    fn open_clamps_start_index() {
        let (mut controller, _) = controller();
        controller.open("kainimo", 42);
        assert_eq!(controller.state().active_index(), 3);
        assert_eq!(controller.surface().current(), Some(4));
    }

    #[test]
    fn unknown_gallery_changes_nothing() {
        let (mut controller, diagnostics) = controller();
        let effects = controller.open("nonexistent-id", 0);

        assert!(!controller.is_open());
        assert!(!controller.surface().is_visible());
        assert_eq!(controller.surface().current(), None);
        assert_eq!(controller.surface().total(), None);
        assert_eq!(diagnostics.count(DiagnosticKind::LookupMiss), 1);
        assert!(matches!(
            effects.as_slice(),
            [Effect::GalleryNotFound(id)] if id.as_str() == "nonexistent-id"
        ));
    }

    #[test]
    fn show_image_out_of_range_is_ignored() {
        let (mut controller, diagnostics) = controller();
        controller.open("kainimo", 1);

        let effects = controller.show_image(4);
        assert!(effects.is_empty());
        assert_eq!(controller.state().active_index(), 1);
        assert_eq!(controller.surface().current(), Some(2));
        assert_eq!(diagnostics.count(DiagnosticKind::IgnoredRequest), 1);
    }

    #[test]
    fn show_image_without_gallery_is_ignored() {
        let (mut controller, diagnostics) = controller();
        assert!(controller.show_image(0).is_empty());
        assert_eq!(diagnostics.count(DiagnosticKind::IgnoredRequest), 1);
    }

    #[test]
    fn navigation_without_gallery_is_a_silent_no_op() {
        let (mut controller, diagnostics) = controller();
        assert!(controller.show_next().is_empty());
        assert!(controller.show_previous().is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn next_and_previous_wrap_around() {
        let (mut controller, _) = controller();
        controller.open("smilebright", 0);

        controller.show_previous();
        assert_eq!(controller.state().active_index(), 4);
        controller.show_next();
        assert_eq!(controller.state().active_index(), 0);
    }

    #[test]
    fn single_image_gallery_wraps_to_itself() {
        let (mut controller, _) = controller();
        controller.open("weather-api", 0);
        controller.show_next();
        assert_eq!(controller.state().active_index(), 0);
        controller.show_previous();
        assert_eq!(controller.state().active_index(), 0);
    }

    #[test]
    fn description_follows_selection() {
        let (mut controller, _) = controller();
        controller.open("paperazzi", 0);
        controller.show_image(1);
        assert_eq!(
            controller.surface().description(),
            Some("Coin insertion and payment processing interface")
        );
    }

    #[test]
    fn swap_commits_source_then_load_restores_opacity() {
        let (mut controller, _) = controller();
        let effects = controller.open("paperazzi", 0);
        let token = swap_token(&effects);

        // Source does not change before the delay elapses.
        assert_eq!(controller.surface().main_image().unwrap().source, None);

        let effects = controller.commit_swap(token);
        assert!(matches!(
            effects.as_slice(),
            [Effect::LoadMainImage { source, .. }] if source == "assets/PAPERAZZI/1.png"
        ));
        let main = controller.surface().main_image().unwrap();
        assert_eq!(main.alt, "Paperazzi Main Interface");
        assert_eq!(main.opacity, DEFAULT_DIM_OPACITY);

        controller.main_image_loaded(token, Ok(pixel()));
        let main = controller.surface().main_image().unwrap();
        assert_eq!(main.opacity, FULL_OPACITY);
        assert!(main.state.is_ready());
    }

    #[test]
    fn outgoing_image_stays_up_while_next_decodes() {
        let (mut controller, _) = controller();
        let first = swap_token(&controller.open("paperazzi", 0));
        let load = controller.commit_swap(first);
        assert_eq!(load.len(), 1);
        controller.main_image_loaded(first, Ok(pixel()));

        let second = swap_token(&controller.show_next());
        controller.commit_swap(second);

        let main = controller.surface().main_image().unwrap();
        assert!(main.state.is_loading());
        assert!(main.state.displayed().is_some());
        assert!(main.opacity < FULL_OPACITY);
    }

    #[test]
    fn superseded_swap_is_dropped() {
        let (mut controller, _) = controller();
        let first = swap_token(&controller.open("paperazzi", 0));
        let second = swap_token(&controller.show_next());

        assert!(controller.commit_swap(first).is_empty());
        assert_eq!(controller.surface().main_image().unwrap().source, None);

        assert_eq!(controller.commit_swap(second).len(), 1);
        assert_eq!(
            controller
                .surface()
                .main_image()
                .unwrap()
                .source
                .as_deref(),
            Some("assets/PAPERAZZI/2.png")
        );
    }

    #[test]
    fn close_invalidates_pending_swap() {
        let (mut controller, _) = controller();
        let token = swap_token(&controller.open("paperazzi", 0));
        controller.close();

        assert!(controller.commit_swap(token).is_empty());
        assert_eq!(controller.surface().main_image().unwrap().source, None);
        assert_eq!(
            controller.surface().main_image().unwrap().opacity,
            FULL_OPACITY
        );
    }

    #[test]
    fn failed_load_restores_opacity_and_records_diagnostic() {
        let (mut controller, diagnostics) = controller();
        let token = swap_token(&controller.open("kainimo", 0));
        controller.commit_swap(token);
        controller.main_image_loaded(token, Err(Error::Io("missing".into())));

        let main = controller.surface().main_image().unwrap();
        assert_eq!(main.opacity, FULL_OPACITY);
        assert!(main.state.is_failed());
        assert_eq!(diagnostics.count(DiagnosticKind::AssetLoadFailure), 1);
    }

    #[test]
    fn stale_load_result_is_dropped() {
        let (mut controller, diagnostics) = controller();
        let first = swap_token(&controller.open("kainimo", 0));
        controller.commit_swap(first);
        let _second = swap_token(&controller.show_next());

        controller.main_image_loaded(first, Err(Error::Io("late".into())));
        assert!(diagnostics.is_empty());
        assert_eq!(
            controller.surface().main_image().unwrap().opacity,
            DEFAULT_DIM_OPACITY
        );
    }

    #[test]
    fn thumbnails_from_an_old_strip_are_dropped() {
        let (mut controller, _) = controller();
        let strip = match &controller.open("paperazzi", 0)[0] {
            Effect::LoadThumbnails { strip, .. } => *strip,
            other => panic!("unexpected effect {other:?}"),
        };
        controller.close();
        controller.open("paperazzi", 0);

        controller.thumbnail_loaded(strip, 0, Ok(pixel()));
        assert!(!controller.surface().thumbnails()[0].state.is_ready());
    }

    #[test]
    fn failed_thumbnail_is_marked() {
        let (mut controller, diagnostics) = controller();
        let strip = match &controller.open("paperazzi", 0)[0] {
            Effect::LoadThumbnails { strip, .. } => *strip,
            other => panic!("unexpected effect {other:?}"),
        };
        controller.thumbnail_loaded(strip, 2, Err(Error::Image("bad".into())));

        assert!(controller.surface().thumbnails()[2].state.is_failed());
        assert_eq!(diagnostics.count(DiagnosticKind::AssetLoadFailure), 1);
    }

    #[test]
    fn close_is_idempotent() {
        let (mut controller, _) = controller();
        controller.open("paperazzi", 2);
        controller.close();
        controller.close();

        assert!(!controller.is_open());
        assert_eq!(controller.state().active_index(), 0);
        assert!(!controller.surface().is_visible());
        assert!(!controller.surface().is_scroll_locked());
    }

    #[test]
    fn missing_anchors_suppress_effects() {
        let anchors = ModalAnchors::all()
            .without(Anchor::MainImage)
            .without(Anchor::Thumbnails);
        let mut controller = Controller::new(
            Catalog::embedded().unwrap(),
            anchors,
            ControllerSettings::default(),
            DiagnosticsHandle::default(),
        );

        let effects = controller.open("paperazzi", 0);
        assert!(effects.is_empty());
        assert!(controller.surface().thumbnails().is_empty());
        assert_eq!(controller.surface().current(), Some(1));
        controller.show_next();
        assert_eq!(controller.surface().current(), Some(2));
    }
}
