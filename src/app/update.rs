// SPDX-License-Identifier: MPL-2.0
//! Message handling and effect execution.
//!
//! Gallery effects become iced tasks here. Decodes run on tokio's blocking
//! pool; thumbnail and card decodes go through the [`ThumbnailCache`] first
//! and are stored there when they succeed.
//!
//! [`ThumbnailCache`]: crate::media::ThumbnailCache

use super::config::DEFAULT_THUMBNAIL_EDGE_PX;
use super::{persistence, App, Message, CARD_IMAGE_EDGE_PX};
use crate::gallery::view::THUMBNAIL_STRIP_ID;
use crate::gallery::{self, Effect};
use crate::media;
use crate::ui::navbar;
use crate::ui::notifications::Notification;
use crate::ui::theming::AppTheme;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;

/// Horizontal offset that brings thumbnail `index` of `count` into view.
pub(super) fn reveal_offset(index: usize, count: usize) -> RelativeOffset {
    let x = if count > 1 {
        (index.min(count - 1) as f32) / ((count - 1) as f32)
    } else {
        0.0
    };
    RelativeOffset { x, y: 0.0 }
}

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => self.handle_gallery_message(message),
            Message::Navbar(message) => {
                let mut mode = self.theme.mode;
                match navbar::update(message, &mut mode, &mut self.filter) {
                    navbar::Event::ThemeChanged(mode) => {
                        self.theme = AppTheme::new(mode);
                        if let Some(notification) = persistence::persist_theme_mode(mode) {
                            self.notifications.push(notification);
                        }
                    }
                    navbar::Event::FilterChanged(filter) => {
                        tracing::debug!(?filter, "category filter changed");
                    }
                    navbar::Event::None => {}
                }
                Task::none()
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::ThumbnailDecoded {
                strip,
                index,
                source,
                result,
            } => {
                if let Ok(image) = &result {
                    self.thumbnails
                        .insert(&source, DEFAULT_THUMBNAIL_EDGE_PX, image.clone());
                }
                self.handle_gallery_message(gallery::Message::ThumbnailLoaded {
                    strip,
                    index,
                    result,
                })
            }
            Message::CardImageDecoded {
                card,
                thumb,
                source,
                result,
            } => {
                if let Ok(image) = &result {
                    self.thumbnails
                        .insert(&source, CARD_IMAGE_EDGE_PX, image.clone());
                }
                self.handle_gallery_message(gallery::Message::CardImageLoaded {
                    card,
                    thumb,
                    result,
                })
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn handle_gallery_message(&mut self, message: gallery::Message) -> Task<Message> {
        let was_open = self.gallery.is_open();
        let effects = self.gallery.handle(message);
        if !was_open && self.gallery.is_open() {
            self.notifications.clear_gallery_errors();
        }
        self.run_effects(effects)
    }

    /// Turns gallery effects into one batched task.
    pub(super) fn run_effects(&mut self, effects: Vec<Effect>) -> Task<Message> {
        let tasks: Vec<Task<Message>> = effects
            .into_iter()
            .map(|effect| self.run_effect(effect))
            .collect();
        Task::batch(tasks)
    }

    fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScheduleSwap { token, delay } => {
                Task::perform(tokio::time::sleep(delay), move |()| {
                    Message::Gallery(gallery::Message::SwapDue(token))
                })
            }
            Effect::ScheduleCardSwap { card, token, delay } => {
                Task::perform(tokio::time::sleep(delay), move |()| {
                    Message::Gallery(gallery::Message::CardSwapDue { card, token })
                })
            }
            Effect::LoadMainImage { token, source } => {
                let path = media::resolve(&self.assets_dir, &source);
                Task::perform(media::load_image_async(path), move |result| {
                    Message::Gallery(gallery::Message::MainImageLoaded { token, result })
                })
            }
            Effect::LoadThumbnails { strip, sources } => {
                let tasks: Vec<Task<Message>> = sources
                    .into_iter()
                    .enumerate()
                    .map(|(index, source)| {
                        if let Some(image) = self.thumbnails.get(&source, DEFAULT_THUMBNAIL_EDGE_PX)
                        {
                            return Task::done(Message::Gallery(
                                gallery::Message::ThumbnailLoaded {
                                    strip,
                                    index,
                                    result: Ok(image),
                                },
                            ));
                        }
                        let path = media::resolve(&self.assets_dir, &source);
                        Task::perform(
                            media::load_thumbnail_async(path, DEFAULT_THUMBNAIL_EDGE_PX),
                            move |result| Message::ThumbnailDecoded {
                                strip,
                                index,
                                source: source.clone(),
                                result,
                            },
                        )
                    })
                    .collect();
                Task::batch(tasks)
            }
            Effect::RevealThumbnail { index, count } => {
                operation::snap_to(Id::new(THUMBNAIL_STRIP_ID), reveal_offset(index, count))
            }
            Effect::LoadCardImage {
                card,
                thumb,
                source,
            } => {
                if let Some(image) = self.thumbnails.get(&source, CARD_IMAGE_EDGE_PX) {
                    return Task::done(Message::Gallery(gallery::Message::CardImageLoaded {
                        card,
                        thumb,
                        result: Ok(image),
                    }));
                }
                let path = media::resolve(&self.assets_dir, &source);
                Task::perform(
                    media::load_thumbnail_async(path, CARD_IMAGE_EDGE_PX),
                    move |result| Message::CardImageDecoded {
                        card,
                        thumb,
                        source: source.clone(),
                        result,
                    },
                )
            }
            Effect::GalleryNotFound(id) => {
                self.notifications.push(
                    Notification::error("notification-gallery-not-found")
                        .with_arg("id", id.as_str()),
                );
                Task::none()
            }
            Effect::GalleryDisabled => {
                self.notifications
                    .push(Notification::warning("notification-gallery-disabled"));
                Task::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_offset_spans_strip() {
        assert_eq!(reveal_offset(0, 5).x, 0.0);
        assert_eq!(reveal_offset(4, 5).x, 1.0);
        assert_eq!(reveal_offset(2, 5).x, 0.5);
    }

    #[test]
    fn reveal_offset_single_thumbnail() {
        assert_eq!(reveal_offset(0, 1).x, 0.0);
        assert_eq!(reveal_offset(0, 0).x, 0.0);
    }

    #[test]
    fn reveal_offset_clamps_index() {
        assert_eq!(reveal_offset(9, 3).x, 1.0);
    }
}
