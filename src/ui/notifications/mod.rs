// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (copy success, export errors, etc.) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for the live toast stack and expiry
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Lifecycle
//!
//! A toast is visible for its duration (5s by default), fades for a fixed
//! 300ms grace period, then is removed. Both transitions run off the
//! application tick and are guarded against double removal. Toasts can also
//! be dismissed by hand at any point.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Phase, Severity, DEFAULT_DURATION, FADE_GRACE};
pub use toast::Toast;
