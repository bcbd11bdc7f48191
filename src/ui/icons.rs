// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small inline SVG documents rendered through the `svg` widget.
//! Keeping the sources in code avoids shipping binary assets and keeps the
//! set auditable. Handles are cached using `OnceLock` so each icon is parsed
//! once per process.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `dismiss_toast`).

use iced::widget::svg::{Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle built from inline SVG.
macro_rules! define_icon {
    ($name:ident, $source:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($source.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    check,
    r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="#ffffff" d="M9 16.2 4.8 12l-1.4 1.4L9 19 21 7l-1.4-1.4z"/></svg>"##,
    "Check mark: single tick stroke."
);

define_icon!(
    check_circle,
    r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="#ffffff" d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm-2 15-5-5 1.4-1.4L10 14.2l7.6-7.6L19 8z"/></svg>"##,
    "Check mark inside a filled circle."
);

define_icon!(
    exclamation_triangle,
    r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="#ffffff" d="M1 21h22L12 2zm12-3h-2v-2h2zm0-4h-2v-4h2z"/></svg>"##,
    "Exclamation mark inside a warning triangle."
);

define_icon!(
    info_circle,
    r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="#ffffff" d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm1 15h-2v-6h2zm0-8h-2V7h2z"/></svg>"##,
    "Letter i inside a filled circle."
);

define_icon!(
    cross,
    r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="#ffffff" d="M19 6.4 17.6 5 12 10.6 6.4 5 5 6.4 10.6 12 5 17.6 6.4 19 12 13.4 17.6 19 19 17.6 13.4 12z"/></svg>"##,
    "Diagonal cross: close/dismiss shape."
);

/// Sizes an icon to a square of `size` logical pixels.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Tints an icon with a fixed color, overriding the embedded fill.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme: &Theme, _status| iced::widget::svg::Style { color: Some(color) })
}
