// SPDX-License-Identifier: MPL-2.0
//! Project gallery component: the modal controller, the input router and the
//! in-card previews.
//!
//! Inputs arrive as [`Message`]s. Pointer and key messages go through the
//! [`router`] first; the resulting [`router::Action`] is applied to the
//! [`Controller`] or to the [`CardPreviews`]. Everything the component cannot
//! do itself (timers, decodes, scrolling, toasts) is returned as [`Effect`]s.

pub mod card_preview;
pub mod controller;
pub mod router;
pub mod state;
pub mod surface;
pub mod transition;
pub mod view;

pub use card_preview::{CardPreview, CardPreviews};
pub use controller::{Controller, ControllerSettings};
pub use router::{Action, Hit, Key, Region};
pub use state::ViewState;
pub use surface::{ImageState, ModalSurface};
pub use transition::TransitionToken;

use crate::catalog::{Catalog, GalleryId};
use crate::diagnostics::DiagnosticsHandle;
use crate::error::Error;
use crate::media::ImageData;
use crate::page::{CardId, PageLayout};
use std::time::Duration;

/// Messages handled by the gallery component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A pointer activation on a gallery-related region.
    Pointer(Hit),
    /// A key press.
    Key(Key),
    /// The delay of a scheduled swap elapsed.
    SwapDue(TransitionToken),
    MainImageLoaded {
        token: TransitionToken,
        result: Result<ImageData, Error>,
    },
    ThumbnailLoaded {
        strip: TransitionToken,
        index: usize,
        result: Result<ImageData, Error>,
    },
    CardImageLoaded {
        card: CardId,
        thumb: usize,
        result: Result<ImageData, Error>,
    },
    /// The delay of a scheduled card preview swap elapsed.
    CardSwapDue {
        card: CardId,
        token: TransitionToken,
    },
}

/// Side effects requested by the gallery component.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Send [`Message::SwapDue`] with `token` after `delay`.
    ScheduleSwap {
        token: TransitionToken,
        delay: Duration,
    },
    /// Decode the main image and answer with [`Message::MainImageLoaded`].
    LoadMainImage {
        token: TransitionToken,
        source: String,
    },
    /// Decode one thumbnail per source; the position in `sources` is the
    /// image index.
    LoadThumbnails {
        strip: TransitionToken,
        sources: Vec<String>,
    },
    /// Scroll the thumbnail strip, and nothing else, so `index` is visible.
    RevealThumbnail { index: usize, count: usize },
    LoadCardImage {
        card: CardId,
        thumb: usize,
        source: String,
    },
    /// Send [`Message::CardSwapDue`] for `card` after `delay`.
    ScheduleCardSwap {
        card: CardId,
        token: TransitionToken,
        delay: Duration,
    },
    /// A requested gallery id is not in the catalog.
    GalleryNotFound(GalleryId),
    /// An open control was used but the page has no gallery modal.
    GalleryDisabled,
}

/// Gallery component state.
#[derive(Debug)]
pub struct State {
    /// `None` when the page declares no modal.
    controller: Option<Controller>,
    previews: CardPreviews,
    diagnostics: DiagnosticsHandle,
}

impl State {
    #[must_use]
    pub fn new(
        catalog: Catalog,
        page: &PageLayout,
        settings: ControllerSettings,
        diagnostics: DiagnosticsHandle,
    ) -> Self {
        let controller = match &page.modal {
            Some(anchors) => Some(Controller::new(
                catalog,
                anchors.clone(),
                settings,
                diagnostics.clone(),
            )),
            None => {
                diagnostics.configuration_missing(
                    "page declares no gallery modal; galleries are disabled",
                );
                None
            }
        };
        Self {
            controller,
            previews: CardPreviews::new(page, settings, diagnostics.clone()),
            diagnostics,
        }
    }

    #[must_use]
    pub fn controller(&self) -> Option<&Controller> {
        self.controller.as_ref()
    }

    #[must_use]
    pub fn previews(&self) -> &CardPreviews {
        &self.previews
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.controller.as_ref().is_some_and(Controller::is_open)
    }

    /// Requests the card preview images.
    pub fn load_previews(&mut self) -> Vec<Effect> {
        self.previews.load_all()
    }

    /// Opens a gallery directly, as a card's open control would.
    pub fn open(&mut self, id: &str) -> Vec<Effect> {
        self.dispatch(Action::Open(GalleryId::new(id)))
    }

    pub fn handle(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::Pointer(hit) => match router::route_pointer(&hit) {
                Some(action) => self.dispatch(action),
                None => Vec::new(),
            },
            Message::Key(key) => match router::route_key(key, self.is_open()) {
                Some(action) => self.dispatch(action),
                None => Vec::new(),
            },
            Message::SwapDue(token) => self
                .controller
                .as_mut()
                .map(|controller| controller.commit_swap(token))
                .unwrap_or_default(),
            Message::MainImageLoaded { token, result } => {
                if let Some(controller) = self.controller.as_mut() {
                    controller.main_image_loaded(token, result);
                }
                Vec::new()
            }
            Message::ThumbnailLoaded {
                strip,
                index,
                result,
            } => {
                if let Some(controller) = self.controller.as_mut() {
                    controller.thumbnail_loaded(strip, index, result);
                }
                Vec::new()
            }
            Message::CardImageLoaded {
                card,
                thumb,
                result,
            } => {
                let image = match result {
                    Ok(image) => Some(image),
                    Err(err) => {
                        self.diagnostics.asset_load_failure(format!(
                            "card {} image {thumb}: {err}",
                            card.0
                        ));
                        None
                    }
                };
                self.previews.image_loaded(card, thumb, image);
                Vec::new()
            }
            Message::CardSwapDue { card, token } => {
                self.previews.commit_swap(card, token);
                Vec::new()
            }
        }
    }

    /// Applies one routed action.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        if let Action::SelectCardThumb { card, thumb } = action {
            return self.previews.select(card, thumb);
        }
        if let Action::OpenWithoutGallery { card } = action {
            let message = match card {
                Some(card) => format!("card {} declares no gallery id", card.0),
                None => "open control outside of a project card".to_string(),
            };
            self.diagnostics.ignored_request(message);
            return Vec::new();
        }
        if let Action::InvalidThumbnailIndex(declared) = &action {
            self.diagnostics
                .ignored_request(format!("thumbnail index '{declared}' is not a number"));
            return Vec::new();
        }

        let Some(controller) = self.controller.as_mut() else {
            if matches!(action, Action::Open(_)) {
                self.diagnostics
                    .configuration_missing("gallery modal is not present on the page");
                return vec![Effect::GalleryDisabled];
            }
            return Vec::new();
        };

        match action {
            Action::Open(id) => controller.open(id.as_str(), 0),
            Action::Close => controller.close(),
            Action::Previous => controller.show_previous(),
            Action::Next => controller.show_next(),
            Action::ShowImage(index) => controller.show_image(index),
            Action::OpenWithoutGallery { .. }
            | Action::InvalidThumbnailIndex(_)
            | Action::SelectCardThumb { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;

    fn component() -> (State, DiagnosticsHandle) {
        let diagnostics = DiagnosticsHandle::default();
        let state = State::new(
            Catalog::embedded().unwrap(),
            &PageLayout::embedded().unwrap(),
            ControllerSettings::default(),
            diagnostics.clone(),
        );
        (state, diagnostics)
    }

    fn open_hit(card: usize, gallery: &str) -> Message {
        Message::Pointer(Hit::new(Region::OpenControl).within(Region::ProjectCard {
            card: CardId(card),
            gallery: Some(GalleryId::new(gallery)),
        }))
    }

    #[test]
    fn open_control_opens_gallery() {
        let (mut state, _) = component();
        state.handle(open_hit(0, "paperazzi"));
        assert!(state.is_open());
        assert_eq!(state.controller().unwrap().surface().total(), Some(5));
    }

    #[test]
    fn keys_do_nothing_while_closed() {
        let (mut state, diagnostics) = component();
        assert!(state.handle(Message::Key(Key::ArrowLeft)).is_empty());
        assert!(!state.is_open());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn arrow_left_wraps_to_last_image() {
        let (mut state, _) = component();
        state.handle(open_hit(0, "paperazzi"));
        state.handle(Message::Key(Key::ArrowLeft));
        assert_eq!(state.controller().unwrap().state().active_index(), 4);
    }

    #[test]
    fn escape_closes() {
        let (mut state, _) = component();
        state.handle(open_hit(1, "kainimo"));
        state.handle(Message::Key(Key::Escape));
        assert!(!state.is_open());
    }

    #[test]
    fn modal_thumb_with_bad_index_records_diagnostic() {
        let (mut state, diagnostics) = component();
        state.handle(open_hit(0, "paperazzi"));
        state.handle(Message::Pointer(
            Hit::new(Region::ModalThumb {
                declared_index: "x".to_string(),
            })
            .within(Region::ModalPanel),
        ));
        assert_eq!(state.controller().unwrap().state().active_index(), 0);
        assert_eq!(diagnostics.count(DiagnosticKind::IgnoredRequest), 1);
    }

    #[test]
    fn card_thumb_works_with_modal_closed() {
        let (mut state, _) = component();
        let effects = state.handle(Message::Pointer(
            Hit::new(Region::CardThumb {
                card: CardId(0),
                thumb: 1,
            })
            .within(Region::CardThumbStrip),
        ));
        let [Effect::ScheduleCardSwap { card, token, delay }] = effects.as_slice() else {
            panic!("expected a card swap, got {effects:?}");
        };
        assert_eq!(*delay, ControllerSettings::default().swap_delay);

        state.handle(Message::CardSwapDue {
            card: *card,
            token: *token,
        });
        assert_eq!(state.previews().get(CardId(0)).unwrap().active(), 1);
        assert!(!state.is_open());
    }

    #[test]
    fn page_without_modal_disables_gallery() {
        let diagnostics = DiagnosticsHandle::default();
        let page = PageLayout::from_toml_str("[[cards]]\ntitle = \"A\"\ngallery = \"paperazzi\"\n")
            .unwrap();
        let mut state = State::new(
            Catalog::embedded().unwrap(),
            &page,
            ControllerSettings::default(),
            diagnostics.clone(),
        );
        assert_eq!(diagnostics.count(DiagnosticKind::ConfigurationMissing), 1);

        let effects = state.handle(open_hit(0, "paperazzi"));
        assert_eq!(effects, vec![Effect::GalleryDisabled]);
        assert!(!state.is_open());
        assert!(state.handle(Message::Key(Key::Escape)).is_empty());
    }

    #[test]
    fn card_image_failure_is_recorded() {
        let (mut state, diagnostics) = component();
        state.load_previews();
        state.handle(Message::CardImageLoaded {
            card: CardId(0),
            thumb: 0,
            result: Err(Error::Io("gone".into())),
        });
        assert_eq!(diagnostics.count(DiagnosticKind::AssetLoadFailure), 1);
    }
}
