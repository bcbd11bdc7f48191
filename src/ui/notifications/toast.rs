// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with a severity icon, a header label from the severity's
//! fixed lookup table, the message body, and a dismiss button. A toast in
//! its fade phase is rendered with reduced opacity until removal.

use super::manager::{Manager, Message};
use super::notification::{Notification, Phase, Severity, FADE_GRACE};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::svg::Svg;
use iced::widget::{button, container, text, Column, Container, Row};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification as it looks at `now`.
    pub fn view(notification: &Notification, now: std::time::Instant) -> Element<'_, Message> {
        let severity = notification.severity();
        let fade = fade_factor(notification, now);
        let accent_color = scaled_alpha(severity.color(), fade);

        let icon_widget = icons::tinted(
            icons::sized(Self::severity_icon(severity), sizing::ICON_MD),
            accent_color,
        );

        let header = text(severity.label())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(scaled_alpha(theme.palette().text, fade)),
            });

        let body = text(notification.message())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(scaled_alpha(theme.palette().text, fade)),
            });

        let notification_id = notification.id();
        let dismiss_button = button(icons::sized(icons::cross(), sizing::ICON_SM))
            .on_press(Message::Dismiss(notification_id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        let header_row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(header)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        let content = Column::new()
            .spacing(spacing::XS)
            .push(header_row)
            .push(body);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, fade))
            .into()
    }

    /// Renders the toast stack with all live notifications.
    ///
    /// Positions toasts in the top-right corner, newest below older ones,
    /// matching the fixed-position container of the original layout.
    pub fn view_stack(manager: &Manager, now: std::time::Instant) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = manager
            .live()
            .map(|notification| Self::view(notification, now))
            .collect();

        if toasts.is_empty() {
            // An empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(spacing::MD)
                .into()
        }
    }

    /// Returns the icon for the severity level (fixed lookup table).
    fn severity_icon(severity: Severity) -> Svg<'static> {
        match severity {
            Severity::Success => icons::check_circle(),
            Severity::Error | Severity::Warning => icons::exclamation_triangle(),
            Severity::Info => icons::info_circle(),
        }
    }
}

/// Opacity multiplier for the toast's current phase.
///
/// 1.0 while visible, then a linear ramp down across the fade grace.
fn fade_factor(notification: &Notification, now: std::time::Instant) -> f32 {
    match notification.phase_at(now) {
        Phase::Visible => 1.0,
        Phase::Expired => 0.0,
        Phase::Fading => {
            let age = now.saturating_duration_since(notification.created_at());
            let into_fade = age.saturating_sub(notification.duration());
            1.0 - (into_fade.as_secs_f32() / FADE_GRACE.as_secs_f32()).clamp(0.0, 1.0)
        }
    }
}

fn scaled_alpha(color: Color, factor: f32) -> Color {
    Color {
        a: color.a * factor,
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, fade: f32) -> container::Style {
    let bg_color = scaled_alpha(theme.extended_palette().background.base.color, fade);

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if fade >= 1.0 { shadow::MD } else { shadow::NONE },
        text_color: Some(scaled_alpha(theme.palette().text, fade)),
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::super::notification::DEFAULT_DURATION;
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use std::time::Duration;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Light;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent, 1.0);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn severity_icons_are_defined() {
        let _ = Toast::severity_icon(Severity::Success);
        let _ = Toast::severity_icon(Severity::Info);
        let _ = Toast::severity_icon(Severity::Warning);
        let _ = Toast::severity_icon(Severity::Error);
    }

    #[test]
    fn fade_factor_is_full_while_visible() {
        let notification = Notification::info("visible");
        let born = notification.created_at();
        assert_abs_diff_eq!(fade_factor(&notification, born), 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn fade_factor_ramps_down_during_the_grace() {
        let notification = Notification::info("fading");
        let born = notification.created_at();

        let halfway = born + DEFAULT_DURATION + FADE_GRACE / 2;
        let factor = fade_factor(&notification, halfway);
        assert!(factor > 0.0 && factor < 1.0);

        let done = born + DEFAULT_DURATION + FADE_GRACE + Duration::from_millis(1);
        assert_abs_diff_eq!(fade_factor(&notification, done), 0.0, epsilon = F32_EPSILON);
    }
}
