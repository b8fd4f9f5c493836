// SPDX-License-Identifier: MPL-2.0
//! In-card image previews.
//!
//! Each project card shows one large preview, its caption and a strip of its
//! thumbnails. Activating a thumbnail dims the preview and swaps it after the
//! same delay the modal uses. This state is independent of the gallery modal.

use super::controller::ControllerSettings;
use super::surface::{ImageState, FULL_OPACITY};
use super::transition::{TransitionToken, TransitionTracker};
use super::Effect;
use crate::diagnostics::DiagnosticsHandle;
use crate::media::ImageData;
use crate::page::{CardId, CardThumb, PageLayout};

#[derive(Debug, Clone, Copy)]
struct PendingSelect {
    token: TransitionToken,
    thumb: usize,
}

#[derive(Debug, Clone)]
pub struct CardPreview {
    thumbs: Vec<CardThumb>,
    images: Vec<ImageState>,
    active: usize,
    opacity: f32,
    pending: Option<PendingSelect>,
    swaps: TransitionTracker,
}

impl CardPreview {
    fn new(thumbs: Vec<CardThumb>) -> Self {
        let images = vec![ImageState::Empty; thumbs.len()];
        Self {
            thumbs,
            images,
            active: 0,
            opacity: FULL_OPACITY,
            pending: None,
            swaps: TransitionTracker::new(),
        }
    }

    #[must_use]
    pub fn image(&self, thumb: usize) -> Option<&ImageState> {
        self.images.get(thumb)
    }

    /// Index of the thumbnail shown as the preview.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Current preview and its image state. Cards without thumbnails have none.
    #[must_use]
    pub fn preview(&self) -> Option<(&CardThumb, &ImageState)> {
        Some((self.thumbs.get(self.active)?, self.images.get(self.active)?))
    }

    /// Alt text of the current preview, shown under it. Blank alts give none.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        let alt = self.thumbs.get(self.active)?.alt.trim();
        (!alt.is_empty()).then_some(alt)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.thumbs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.thumbs.is_empty()
    }

    /// Thumbnail the preview is showing or about to show.
    fn target(&self) -> usize {
        self.pending.map_or(self.active, |pending| pending.thumb)
    }
}

#[derive(Debug, Clone)]
pub struct CardPreviews {
    cards: Vec<CardPreview>,
    settings: ControllerSettings,
    diagnostics: DiagnosticsHandle,
}

impl CardPreviews {
    #[must_use]
    pub fn new(
        page: &PageLayout,
        settings: ControllerSettings,
        diagnostics: DiagnosticsHandle,
    ) -> Self {
        Self {
            cards: page
                .cards
                .iter()
                .map(|card| CardPreview::new(card.thumbs.clone()))
                .collect(),
            settings,
            diagnostics,
        }
    }

    #[must_use]
    pub fn get(&self, card: CardId) -> Option<&CardPreview> {
        self.cards.get(card.0)
    }

    /// Requests a decode of every card thumbnail not yet requested.
    pub fn load_all(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        for (card_index, preview) in self.cards.iter_mut().enumerate() {
            for (thumb, (entry, state)) in preview
                .thumbs
                .iter()
                .zip(preview.images.iter_mut())
                .enumerate()
            {
                if matches!(state, ImageState::Empty) {
                    *state = ImageState::Loading(None);
                    effects.push(Effect::LoadCardImage {
                        card: CardId(card_index),
                        thumb,
                        source: entry.source.clone(),
                    });
                }
            }
        }
        effects
    }

    /// Dims the preview of `card` and schedules the switch to `thumb`.
    ///
    /// Selecting the thumbnail already shown (or already scheduled) does
    /// nothing.
    pub fn select(&mut self, card: CardId, thumb: usize) -> Vec<Effect> {
        let Some(preview) = self.cards.get_mut(card.0) else {
            self.diagnostics
                .ignored_request(format!("card {} does not exist", card.0));
            return Vec::new();
        };
        if thumb >= preview.thumbs.len() {
            self.diagnostics.ignored_request(format!(
                "card {} has no thumbnail {thumb}",
                card.0
            ));
            return Vec::new();
        }
        if preview.target() == thumb {
            return Vec::new();
        }

        preview.opacity = self.settings.dim_opacity;
        let token = preview.swaps.issue();
        preview.pending = Some(PendingSelect { token, thumb });
        vec![Effect::ScheduleCardSwap {
            card,
            token,
            delay: self.settings.swap_delay,
        }]
    }

    /// Shows the thumbnail scheduled with `token`. Returns whether the
    /// preview changed; superseded tokens are dropped.
    pub fn commit_swap(&mut self, card: CardId, token: TransitionToken) -> bool {
        let Some(preview) = self.cards.get_mut(card.0) else {
            return false;
        };
        if !preview.swaps.is_current(token) {
            tracing::trace!(card = card.0, token = token.value(), "stale card swap dropped");
            return false;
        }
        let Some(pending) = preview.pending.take() else {
            return false;
        };
        preview.active = pending.thumb;
        preview.opacity = FULL_OPACITY;
        true
    }

    pub fn image_loaded(&mut self, card: CardId, thumb: usize, image: Option<ImageData>) {
        let Some(state) = self
            .cards
            .get_mut(card.0)
            .and_then(|preview| preview.images.get_mut(thumb))
        else {
            return;
        };
        *state = match image {
            Some(image) => ImageState::Ready(image),
            None => ImageState::Failed,
        };
    }
}
