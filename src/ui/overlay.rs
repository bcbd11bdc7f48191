// SPDX-License-Identifier: MPL-2.0
//! Full-window loading overlay.
//!
//! At most one overlay exists at any time: `show` replaces any existing one
//! and `hide` is a no-op when none is up. The spinner advances on the
//! application tick.

use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use iced::widget::{container, text, Column, Container};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Default overlay message.
pub const DEFAULT_MESSAGE: &str = "Loading...";

/// Spinner animation frames, advanced one per tick.
const SPINNER_FRAMES: [&str; 6] = ["◜", "◠", "◝", "◞", "◡", "◟"];

/// Spinner glyph size.
const SPINNER_SIZE: f32 = 48.0;

#[derive(Debug, Clone)]
struct Overlay {
    message: String,
    shown_at: Instant,
    spinner_frame: usize,
}

/// Loading overlay state. Holds zero or one overlay.
#[derive(Debug, Clone, Default)]
pub struct State {
    overlay: Option<Overlay>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the overlay, replacing any existing one.
    pub fn show(&mut self, message: impl Into<String>) {
        // Replace rather than stack: the previous overlay, if any, is gone.
        self.overlay = Some(Overlay {
            message: message.into(),
            shown_at: Instant::now(),
            spinner_frame: 0,
        });
    }

    /// Hides the overlay. No-op when none is shown.
    pub fn hide(&mut self) {
        self.overlay = None;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.overlay.is_some()
    }

    /// The message of the current overlay, if one is shown.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.overlay.as_ref().map(|o| o.message.as_str())
    }

    /// When the current overlay was shown, if one is shown.
    #[must_use]
    pub fn shown_at(&self) -> Option<Instant> {
        self.overlay.as_ref().map(|o| o.shown_at)
    }

    /// Advances the spinner animation.
    pub fn tick(&mut self) {
        if let Some(overlay) = &mut self.overlay {
            overlay.spinner_frame = (overlay.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    /// Renders the overlay, or `None` when hidden.
    pub fn view<Message: 'static>(&self) -> Option<Element<'_, Message>> {
        let overlay = self.overlay.as_ref()?;

        let spinner = text(SPINNER_FRAMES[overlay.spinner_frame])
            .size(SPINNER_SIZE)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::PRIMARY_500),
            });

        let message = text(overlay.message.as_str())
            .size(typography::TITLE_SM)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::PRIMARY_600),
            });

        let content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(spinner)
            .push(message);

        Some(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(overlay_style)
                .into(),
        )
    }
}

/// Semi-transparent full-window backdrop.
fn overlay_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::WHITE
        })),
        border: iced::Border::default(),
        shadow: iced::Shadow::default(),
        text_color: None,
    }
}
