// SPDX-License-Identifier: MPL-2.0
//! UI building blocks: design tokens, icons, and the convenience components
//! (toasts, alert banners, button feedback, loading overlay, smooth scroll).

pub mod alerts;
pub mod design_tokens;
pub mod feedback;
pub mod icons;
pub mod notifications;
pub mod overlay;
pub mod scroll;

use iced::widget::{text, tooltip};
use iced::Element;

/// Wraps `content` with a tooltip when tooltips are enabled.
///
/// Mirrors the page initializer of the web build, which only activated
/// tooltips on elements marked for them; here the marking is the call site
/// and enablement comes from configuration.
pub fn with_tooltip<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    label: &'a str,
    enabled: bool,
) -> Element<'a, Message> {
    if enabled {
        tooltip::Tooltip::new(
            content,
            text(label).size(design_tokens::typography::CAPTION),
            tooltip::Position::Bottom,
        )
        .into()
    } else {
        content.into()
    }
}
