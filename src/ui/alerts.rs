// SPDX-License-Identifier: MPL-2.0
//! Alert banners shown at the top of the content region.
//!
//! Banners come up at startup (or after page-level events) and follow the
//! same fade-then-remove lifecycle as toasts: non-permanent alerts dismiss
//! automatically after five seconds plus the fade grace. Permanent alerts
//! stay until dismissed by hand.

use super::notifications::{Phase, Severity, FADE_GRACE};
use crate::ui::design_tokens::{border, radius, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

/// Auto-dismiss delay for non-permanent alerts.
pub const AUTO_DISMISS: Duration = Duration::from_millis(5000);

/// Unique identifier for an alert banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlertId(u64);

impl AlertId {
    fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Messages for alert state changes.
#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(AlertId),
}

/// One alert banner.
#[derive(Debug, Clone)]
pub struct Alert {
    id: AlertId,
    severity: Severity,
    message: String,
    permanent: bool,
    created_at: Instant,
}

impl Alert {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: AlertId::new(),
            severity,
            message: message.into(),
            permanent: false,
            created_at: Instant::now(),
        }
    }

    /// Marks the alert as permanent: exempt from auto-dismissal.
    #[must_use]
    pub fn permanent(mut self) -> Self {
        self.permanent = true;
        self
    }

    #[must_use]
    pub fn id(&self) -> AlertId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn is_permanent(&self) -> bool {
        self.permanent
    }

    /// Lifecycle phase at `now`. Permanent alerts never leave `Visible`.
    #[must_use]
    pub fn phase_at(&self, now: Instant) -> Phase {
        if self.permanent {
            return Phase::Visible;
        }
        let age = now.saturating_duration_since(self.created_at);
        if age < AUTO_DISMISS {
            Phase::Visible
        } else if age < AUTO_DISMISS + FADE_GRACE {
            Phase::Fading
        } else {
            Phase::Expired
        }
    }
}

/// The set of live alert banners.
#[derive(Debug, Clone, Default)]
pub struct Alerts {
    items: Vec<Alert>,
}

impl Alerts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, alert: Alert) {
        self.items.push(alert);
    }

    /// Dismisses an alert by ID; no-op when it is already gone.
    pub fn dismiss(&mut self, id: AlertId) -> bool {
        if let Some(pos) = self.items.iter().position(|a| a.id() == id) {
            self.items.remove(pos);
            return true;
        }
        false
    }

    /// Removes non-permanent alerts whose fade grace elapsed at `now`.
    pub fn tick_at(&mut self, now: Instant) {
        self.items.retain(|a| a.phase_at(now) != Phase::Expired);
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether any alert still needs timer service.
    #[must_use]
    pub fn has_pending_dismissals(&self) -> bool {
        self.items.iter().any(|a| !a.is_permanent())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.items.iter()
    }

    /// Renders the banner column as it looks at `now`.
    pub fn view(&self, now: Instant) -> Element<'_, Message> {
        let banners: Vec<Element<'_, Message>> =
            self.items.iter().map(|alert| banner(alert, now)).collect();

        Column::with_children(banners)
            .spacing(spacing::XS)
            .width(Length::Fill)
            .into()
    }
}

fn banner(alert: &Alert, now: Instant) -> Element<'_, Message> {
    let fade = match alert.phase_at(now) {
        Phase::Visible => 1.0,
        Phase::Fading => {
            let age = now.saturating_duration_since(alert.created_at);
            let into_fade = age.saturating_sub(AUTO_DISMISS);
            1.0 - (into_fade.as_secs_f32() / FADE_GRACE.as_secs_f32()).clamp(0.0, 1.0)
        }
        Phase::Expired => 0.0,
    };
    let accent = alert.severity().color();
    let accent = Color {
        a: accent.a * fade,
        ..accent
    };

    let label = text(alert.message())
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(Color {
                a: fade,
                ..theme.palette().text
            }),
        });

    let dismiss = button(text("×").size(typography::BODY))
        .on_press(Message::Dismiss(alert.id()))
        .padding(spacing::XXS)
        .style(|_theme, _status| button::Style {
            background: None,
            text_color: Color::BLACK,
            border: iced::Border::default(),
            shadow: iced::Shadow::default(),
        });

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(label).width(Length::Fill))
        .push(dismiss);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(Color {
                a: 0.12 * fade,
                ..accent
            })),
            border: iced::Border {
                color: accent,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: iced::Shadow::default(),
            text_color: None,
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_permanent_alert_expires_after_dismiss_plus_fade() {
        let alert = Alert::new(Severity::Info, "welcome back");
        let born = alert.created_at;

        assert_eq!(alert.phase_at(born), Phase::Visible);
        assert_eq!(alert.phase_at(born + AUTO_DISMISS), Phase::Fading);
        assert_eq!(alert.phase_at(born + AUTO_DISMISS + FADE_GRACE), Phase::Expired);
    }

    #[test]
    fn permanent_alert_never_expires() {
        let alert = Alert::new(Severity::Warning, "offline mode").permanent();
        let born = alert.created_at;

        assert_eq!(
            alert.phase_at(born + AUTO_DISMISS + FADE_GRACE + Duration::from_secs(60)),
            Phase::Visible
        );
    }

    #[test]
    fn tick_removes_only_expired_banners() {
        let mut alerts = Alerts::new();
        alerts.push(Alert::new(Severity::Info, "transient"));
        alerts.push(Alert::new(Severity::Warning, "sticky").permanent());
        let now = alerts.iter().next().expect("alert").created_at;

        alerts.tick_at(now + AUTO_DISMISS + FADE_GRACE);

        assert_eq!(alerts.len(), 1);
        assert!(alerts.iter().next().expect("alert").is_permanent());
    }

    #[test]
    fn manual_dismiss_works_for_permanent_banners() {
        let mut alerts = Alerts::new();
        let alert = Alert::new(Severity::Warning, "sticky").permanent();
        let id = alert.id();
        alerts.push(alert);

        alerts.handle_message(&Message::Dismiss(id));
        assert!(alerts.is_empty());
    }

    #[test]
    fn dismissing_twice_is_guarded() {
        let mut alerts = Alerts::new();
        let alert = Alert::new(Severity::Info, "once");
        let id = alert.id();
        alerts.push(alert);

        assert!(alerts.dismiss(id));
        assert!(!alerts.dismiss(id));
    }

    #[test]
    fn pending_dismissals_ignore_permanent_banners() {
        let mut alerts = Alerts::new();
        alerts.push(Alert::new(Severity::Warning, "sticky").permanent());
        assert!(!alerts.has_pending_dismissals());

        alerts.push(Alert::new(Severity::Info, "transient"));
        assert!(alerts.has_pending_dismissals());
    }
}
