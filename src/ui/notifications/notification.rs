// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Default display duration before the fade begins.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

/// Length of the fade-out phase between expiry and removal.
pub const FADE_GRACE: Duration = Duration::from_millis(300);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines the toast's label, icon, and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    Success,
    /// Error requiring attention (red).
    Error,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Informational message (blue).
    #[default]
    Info,
}

impl Severity {
    /// Resolves a severity from its wire/config name.
    ///
    /// Unrecognized names degrade to `Info`, the historical fallback.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Info,
        }
    }

    /// Returns the header label shown on the toast.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Success => "Success",
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Info => "Information",
        }
    }

    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Info => palette::INFO_500,
        }
    }
}

/// Lifecycle phase of a displayed toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fully visible, duration not yet elapsed.
    Visible,
    /// Duration elapsed; fading out for [`FADE_GRACE`] before removal.
    Fading,
    /// Fade grace elapsed; the toast must be removed.
    Expired,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    created_at: Instant,
    /// Display duration before the fade begins.
    duration: Duration,
}

impl Notification {
    /// Creates a new notification with the given severity and message.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at: Instant::now(),
            duration: DEFAULT_DURATION,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Overrides the display duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the display duration before the fade begins.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the lifecycle phase at `now`.
    #[must_use]
    pub fn phase_at(&self, now: Instant) -> Phase {
        let age = now.saturating_duration_since(self.created_at);
        if age < self.duration {
            Phase::Visible
        } else if age < self.duration + FADE_GRACE {
            Phase::Fading
        } else {
            Phase::Expired
        }
    }
}
