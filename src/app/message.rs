// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::{self, TransitionToken};
use crate::media::ImageData;
use crate::page::CardId;
use crate::ui::navbar;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    /// A modal thumbnail finished decoding; cached before reaching the gallery.
    ThumbnailDecoded {
        strip: TransitionToken,
        index: usize,
        source: String,
        result: Result<ImageData, Error>,
    },
    /// A card preview image finished decoding; cached before reaching the gallery.
    CardImageDecoded {
        card: CardId,
        thumb: usize,
        source: String,
        result: Result<ImageData, Error>,
    },
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Gallery opened right after startup, as if its card had been activated.
    pub gallery: Option<String>,
}
