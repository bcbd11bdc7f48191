// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the stack of live toasts — the process-scoped
//! counterpart of the lazily created toast container in the web build. It is
//! constructed once inside the application state and lives for the session.
//! Expiry runs off the periodic tick: a toast stays visible for its duration,
//! fades for the grace period, then is removed. Removal is liveness-guarded:
//! a toast dismissed by hand cannot be removed a second time by its timer.

use super::notification::{Notification, NotificationId, Phase};
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Manages the stack of live notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Live notifications in arrival order (oldest first).
    toasts: Vec<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new notification to the stack.
    pub fn push(&mut self, notification: Notification) {
        self.toasts.push(notification);
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was still live and got removed.
    /// Dismissing an already-removed ID is a no-op.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.toasts.iter().position(|n| n.id() == id) {
            self.toasts.remove(pos);
            return true;
        }
        false
    }

    /// Removes every toast whose fade grace has fully elapsed at `now`.
    ///
    /// Should be called from the periodic tick (every 100-500ms).
    pub fn tick_at(&mut self, now: Instant) {
        self.toasts.retain(|n| n.phase_at(now) != Phase::Expired);
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Returns the live notifications, oldest first.
    pub fn live(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter()
    }

    /// Returns the number of live notifications.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.toasts.len()
    }

    /// Returns whether any notification is live.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.toasts.is_empty()
    }

    /// Clears all notifications.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::super::notification::{DEFAULT_DURATION, FADE_GRACE};
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.live_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_appends_exactly_one_toast() {
        let mut manager = Manager::new();
        manager.push(Notification::error("upload failed"));

        assert_eq!(manager.live_count(), 1);
        let toast = manager.live().next().expect("one toast");
        assert_eq!(toast.message(), "upload failed");
    }

    #[test]
    fn dismiss_removes_the_toast() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();

        manager.push(notification);
        assert!(manager.dismiss(id));
        assert_eq!(manager.live_count(), 0);
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let fake_id = Notification::success("temp").id();

        assert!(!manager.dismiss(fake_id));
    }

    #[test]
    fn dismiss_twice_is_a_guarded_no_op() {
        let mut manager = Manager::new();
        let notification = Notification::info("once");
        let id = notification.id();
        manager.push(notification);

        assert!(manager.dismiss(id));
        assert!(!manager.dismiss(id));
    }

    #[test]
    fn tick_keeps_visible_and_fading_toasts() {
        let mut manager = Manager::new();
        let notification = Notification::info("fading");
        let born = notification.created_at();
        manager.push(notification);

        // Still visible
        manager.tick_at(born + DEFAULT_DURATION - Duration::from_millis(1));
        assert_eq!(manager.live_count(), 1);

        // Fading, not yet removable
        manager.tick_at(born + DEFAULT_DURATION + Duration::from_millis(100));
        assert_eq!(manager.live_count(), 1);
    }

    #[test]
    fn tick_removes_toasts_past_the_fade_grace() {
        let mut manager = Manager::new();
        let notification = Notification::info("expiring");
        let born = notification.created_at();
        manager.push(notification);

        manager.tick_at(born + DEFAULT_DURATION + FADE_GRACE);
        assert_eq!(manager.live_count(), 0);
    }

    #[test]
    fn manual_dismiss_before_expiry_wins_over_the_timer() {
        let mut manager = Manager::new();
        let notification = Notification::info("dismiss me");
        let id = notification.id();
        let born = notification.created_at();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.live_count(), 0);

        // The later timer pass finds nothing to remove.
        manager.tick_at(born + DEFAULT_DURATION + FADE_GRACE);
        assert_eq!(manager.live_count(), 0);
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.push(Notification::success(format!("test-{i}")));
        }

        manager.clear();
        assert_eq!(manager.live_count(), 0);
    }
}
