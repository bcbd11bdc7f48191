// SPDX-License-Identifier: MPL-2.0
//! Temporary button feedback.
//!
//! After an action such as a clipboard copy, the triggering button swaps its
//! face for an icon plus a short message ("Copied", "Error"), changes its
//! style class, and is disabled. The original face is captured before the
//! first mutation and restored once the feedback window elapses.
//!
//! Overlapping calls on the same button are last-writer-wins: a second
//! `show` while feedback is active replaces the message and pushes the
//! restore deadline out, and the button restores once, to the face captured
//! before the first call. This matches the historical behavior and is
//! acceptable for this tool's scope.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Color, Theme};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Default feedback window.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

/// Feedback flavor, mirroring the style classes of the original buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    /// Check icon, success styling.
    Success,
    /// Warning-triangle icon, danger styling.
    Danger,
}

impl FeedbackKind {
    /// The button class shown while this feedback is active.
    #[must_use]
    pub fn class(&self) -> ButtonClass {
        match self {
            FeedbackKind::Success => ButtonClass::Success,
            FeedbackKind::Danger => ButtonClass::Danger,
        }
    }
}

/// Style classes a button can carry — the `btn-<kind>` analog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonClass {
    Primary,
    Secondary,
    Success,
    Danger,
}

impl ButtonClass {
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            ButtonClass::Primary => palette::PRIMARY_500,
            ButtonClass::Secondary => palette::GRAY_400,
            ButtonClass::Success => palette::SUCCESS_500,
            ButtonClass::Danger => palette::ERROR_500,
        }
    }
}

/// Style function for a classed button.
pub fn class_style(class: ButtonClass) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let base = class.color();
        let background = match status {
            button::Status::Active => base,
            button::Status::Hovered | button::Status::Pressed => Color {
                r: base.r * 0.85,
                g: base.g * 0.85,
                b: base.b * 0.85,
                a: base.a,
            },
            button::Status::Disabled => Color { a: 0.65, ..base },
        };

        button::Style {
            background: Some(iced::Background::Color(background)),
            text_color: palette::WHITE,
            border: iced::Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
        }
    }
}

/// Captured appearance of a button before feedback mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    pub label: String,
    pub class: ButtonClass,
}

impl Appearance {
    pub fn new(label: impl Into<String>, class: ButtonClass) -> Self {
        Self {
            label: label.into(),
            class,
        }
    }
}

/// One active feedback window on a button.
#[derive(Debug)]
struct ActiveFeedback {
    /// Appearance captured before the first mutation; restored exactly once.
    original: Appearance,
    message: String,
    kind: FeedbackKind,
    restore_at: Instant,
}

/// The face a button should present right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    pub label: String,
    pub class: ButtonClass,
    pub disabled: bool,
    /// Icon shown in front of the label while feedback is active.
    pub icon: Option<FeedbackKind>,
}

/// Tracks temporary feedback across buttons, keyed by a stable button ID.
#[derive(Debug, Default)]
pub struct FeedbackManager {
    active: HashMap<&'static str, ActiveFeedback>,
}

impl FeedbackManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or extends) feedback on a button.
    ///
    /// `original` is only captured on the first call of an overlap window;
    /// later calls keep the earlier capture so restoration lands on the
    /// pre-feedback face.
    pub fn show(
        &mut self,
        button_id: &'static str,
        original: Appearance,
        message: impl Into<String>,
        kind: FeedbackKind,
        duration: Duration,
        now: Instant,
    ) {
        let message = message.into();
        let restore_at = now + duration;

        self.active
            .entry(button_id)
            .and_modify(|feedback| {
                feedback.message = message.clone();
                feedback.kind = kind;
                feedback.restore_at = restore_at;
            })
            .or_insert(ActiveFeedback {
                original,
                message,
                kind,
                restore_at,
            });
    }

    /// Restores every button whose feedback window has elapsed at `now`.
    pub fn tick_at(&mut self, now: Instant) {
        self.active.retain(|_, feedback| now < feedback.restore_at);
    }

    /// Whether any feedback window is currently open.
    #[must_use]
    pub fn has_active(&self) -> bool {
        !self.active.is_empty()
    }

    /// Whether feedback is active on the given button.
    #[must_use]
    pub fn is_active(&self, button_id: &str) -> bool {
        self.active.contains_key(button_id)
    }

    /// Computes the face a button should present, given its resting face.
    #[must_use]
    pub fn face(&self, button_id: &str, resting: &Appearance) -> Face {
        match self.active.get(button_id) {
            Some(feedback) => Face {
                label: feedback.message.clone(),
                class: feedback.kind.class(),
                disabled: true,
                icon: Some(feedback.kind),
            },
            None => Face {
                label: resting.label.clone(),
                class: resting.class,
                disabled: false,
                icon: None,
            },
        }
    }
}
