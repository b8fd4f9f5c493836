// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Toasts report problems the visitor should know about (a gallery that
//! cannot be shown, settings that could not be read or saved) without
//! blocking the page.
//!
//! ```
//! use iced_folio::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::error("notification-gallery-not-found").with_arg("id", "kainimo"));
//! assert_eq!(manager.visible_count(), 1);
//! ```
//!
//! At most three toasts are visible; the rest wait in a queue. Warnings
//! leave on their own after a few seconds, errors stay until dismissed.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
