// SPDX-License-Identifier: MPL-2.0
//! Named visual constants shared by the page, the gallery modal and toasts.
//!
//! Styles and views take sizes and colors from here instead of literals, so
//! the card grid and the modal stay on one spacing grid and one type scale.
//! Orderings between steps of each scale are checked at compile time at the
//! bottom of this file.
//!
//! ```
//! use iced::Color;
//! use iced_folio::ui::design_tokens::{opacity, palette, spacing};
//!
//! let scrim = Color { a: opacity::OVERLAY_STRONG, ..palette::BLACK };
//! assert_eq!(spacing::MD, 2.0 * spacing::XS);
//! assert!(scrim.a < 1.0);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// Hover fill of call-to-action buttons.
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    /// Call-to-action fill, selected filter, active thumbnail frame.
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Toast accents, one per severity.
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

/// Alpha values for tints laid over other content.
pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Modal backdrop.
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    /// Cards and the modal panel.
    pub const SURFACE: f32 = 0.95;
}

/// Gaps and paddings, multiples of a 4px step.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const CARD_WIDTH: f32 = 340.0;
    pub const MODAL_WIDTH: f32 = 960.0;

    /// Height of the large preview on a project card.
    pub const CARD_PREVIEW_HEIGHT: f32 = 200.0;
    /// Edge of the small thumbnails on a project card.
    pub const CARD_THUMB: f32 = 56.0;

    /// Height of the main image area in the gallery modal.
    pub const MODAL_IMAGE_HEIGHT: f32 = 520.0;
    /// Edge of a thumbnail in the gallery modal strip.
    pub const MODAL_THUMB: f32 = 80.0;

    /// Hit area of close, previous and next. 44px is the usual touch minimum.
    pub const CONTROL_HIT_SIZE: f32 = 44.0;
}

/// Font sizes, largest first.
pub mod typography {
    /// Page heading in the navbar.
    pub const TITLE_LG: f32 = 30.0;
    /// Gallery and card titles.
    pub const TITLE_MD: f32 = 20.0;
    /// Modal control glyphs.
    pub const TITLE_SM: f32 = 18.0;
    /// Toast glyphs.
    pub const BODY_LG: f32 = 16.0;
    /// Descriptions, summaries, toast text.
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    /// Category tags, captions, card counters.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accent and active thumbnail frame.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Large enough to round any control into a pill or circle.
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    const fn elevated(y: f32, blur_radius: f32) -> Shadow {
        Shadow {
            color: palette::BLACK,
            offset: Vector { x: 0.0, y },
            blur_radius,
        }
    }

    pub const NONE: Shadow = elevated(0.0, 0.0);
    pub const SM: Shadow = elevated(2.0, 4.0);
    pub const MD: Shadow = elevated(4.0, 8.0);
}

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_STRONG);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::CONTROL_HIT_SIZE >= 44.0);
    assert!(sizing::MODAL_THUMB > sizing::CARD_THUMB);
    assert!(sizing::MODAL_WIDTH > sizing::CARD_WIDTH);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(radius::FULL > radius::LG);
};
