// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the UI conveniences.
//!
//! The `App` struct wires the draft pane together with the helpers: toast
//! notifications, alert banners, button feedback, the loading overlay,
//! debounced filtering, smooth section scrolling, clipboard copy and text
//! export. All timed behavior runs off a single periodic tick so overlapping
//! windows resolve the same way everywhere (last writer wins, fade before
//! removal). This file intentionally keeps user-facing policy (durations,
//! messages, the generic failure text) close to the update loop so it is
//! easy to audit.

use crate::clipboard;
use crate::config::{self, Config};
use crate::draft::{self, Section};
use crate::error::Error;
use crate::export::{self, ExportError};
use crate::ui::alerts::{Alert, Alerts};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::feedback::{self, Appearance, ButtonClass, FeedbackKind, FeedbackManager};
use crate::ui::notifications::{Manager as NotificationManager, Notification, Toast};
use crate::ui::overlay;
use crate::ui::scroll::{Animator, SectionRegistry};
use crate::ui::{self, alerts, icons, notifications};
use crate::util::{format_file_size, validate_file_type, Debouncer};
use iced::widget::scrollable::{self, AbsoluteOffset, Viewport};
use iced::widget::{button, container, stack, text, text_input, Column, Container, Row, Scrollable};
use iced::{alignment, time, window, Color, Element, Length, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 650;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Interval of the shared timer tick.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Length of the content entrance fade after startup.
const ENTRANCE_DURATION: Duration = Duration::from_millis(400);

/// Debounce window for the section filter input.
const FILTER_DEBOUNCE: Duration = Duration::from_millis(300);

/// Gap kept above a section when jumping to it.
const SCROLL_HEADROOM: f32 = spacing::MD;

/// Message surfaced for failures that have no dedicated handling.
const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Stable ID of the copy button, used to key its feedback window.
const COPY_BUTTON_ID: &str = "copy-draft";

/// File types accepted for draft import.
const DRAFT_EXTENSIONS: [&str; 3] = ["txt", "md", "markdown"];

fn draft_pane_id() -> scrollable::Id {
    scrollable::Id::new("draft-pane")
}

fn copy_button_resting() -> Appearance {
    Appearance::new("Copy draft", ButtonClass::Primary)
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional draft file to import on startup.
    pub draft_path: Option<String>,
}

/// Root Iced application state.
pub struct App {
    config: Config,
    draft: Vec<Section>,
    /// Raw filter input, echoed back into the text field.
    filter_input: String,
    /// Filter actually applied to the pane, updated after the debounce.
    filter_query: String,
    filter_debouncer: Debouncer<String>,
    notifications: NotificationManager,
    feedback: FeedbackManager,
    overlay: overlay::State,
    alerts: Alerts,
    sections: SectionRegistry,
    scroll_animator: Animator,
    /// Last known vertical offset of the draft pane.
    scroll_offset: f32,
    entrance_started_at: Instant,
    /// Timestamp of the latest tick, used when rendering fades.
    now: Instant,
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic tick driving every timed behavior.
    Tick(Instant),
    DraftLoaded(Result<String, Error>),
    CopyDraft,
    CopyFinished(Result<(), Error>),
    ExportDraft,
    /// `Ok(None)` means the user cancelled the save dialog.
    ExportFinished(Result<Option<PathBuf>, Error>),
    RebuildPreview,
    PreviewBuilt,
    FilterChanged(String),
    JumpToSection(String),
    DraftScrolled(Viewport),
    Notification(notifications::NotificationMessage),
    Alert(alerts::Message),
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(|state: &App| state.title(), App::update, App::view)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run_with(move || App::new(flags))
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            Config::default()
        });

        let now = Instant::now();
        let mut app = Self {
            config,
            draft: draft::sample_sections(),
            filter_input: String::new(),
            filter_query: String::new(),
            filter_debouncer: Debouncer::new(FILTER_DEBOUNCE),
            notifications: NotificationManager::new(),
            feedback: FeedbackManager::new(),
            overlay: overlay::State::new(),
            alerts: Alerts::new(),
            sections: SectionRegistry::new(),
            scroll_animator: Animator::new(),
            scroll_offset: 0.0,
            entrance_started_at: now,
            now,
        };
        app.rebuild_section_registry();

        // Startup banner, auto-dismissed like any other non-permanent alert.
        app.alerts.push(Alert::new(
            notifications::Severity::Info,
            "Drafts stay on this machine until you export them.",
        ));

        let task = match flags.draft_path {
            Some(path) if validate_file_type(&path, &DRAFT_EXTENSIONS) => Task::perform(
                async move { std::fs::read_to_string(&path).map_err(Error::from) },
                Message::DraftLoaded,
            ),
            Some(path) => {
                eprintln!("Refusing to import {path}: not a supported draft file type");
                app.notify(Notification::warning(
                    "Unsupported draft file type. Use .txt or .md.",
                ));
                Task::none()
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        String::from("Newsdesk")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.needs_ticks() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// The tick only runs while some timed window is open.
    fn needs_ticks(&self) -> bool {
        self.feedback.has_active()
            || self.notifications.has_notifications()
            || self.alerts.has_pending_dismissals()
            || self.overlay.is_visible()
            || self.filter_debouncer.is_armed()
            || self.scroll_animator.is_animating()
            || self.entrance_progress() < 1.0
    }

    fn entrance_progress(&self) -> f32 {
        let elapsed = self.now.saturating_duration_since(self.entrance_started_at);
        (elapsed.as_secs_f32() / ENTRANCE_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }

    fn toast_duration(&self) -> Duration {
        Duration::from_millis(
            self.config
                .toast_duration_ms
                .unwrap_or(config::DEFAULT_TOAST_DURATION_MS),
        )
    }

    fn feedback_duration(&self) -> Duration {
        Duration::from_millis(
            self.config
                .feedback_duration_ms
                .unwrap_or(config::DEFAULT_FEEDBACK_DURATION_MS),
        )
    }

    fn tooltips_enabled(&self) -> bool {
        self.config.tooltips.unwrap_or(true)
    }

    /// Pushes a notification with the configured display duration.
    fn notify(&mut self, notification: Notification) {
        let duration = self.toast_duration();
        self.notifications.push(notification.with_duration(duration));
    }

    /// Funnel for failures with no dedicated handling: log the diagnostic,
    /// surface a generic error toast. The operation is not retried.
    fn report_unexpected_failure(&mut self, context: &str, err: &Error) {
        eprintln!("{context}: {err}");
        self.notify(Notification::error(GENERIC_FAILURE_MESSAGE));
    }

    /// Sections matching the applied filter, in draft order.
    fn visible_sections(&self) -> Vec<&Section> {
        let query = self.filter_query.to_lowercase();
        self.draft
            .iter()
            .filter(|section| {
                query.is_empty()
                    || section.title.to_lowercase().contains(&query)
                    || section.body.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Recomputes section offsets. Cards are fixed-height, so offsets are
    /// exact: index * (card height + spacing).
    fn rebuild_section_registry(&mut self) {
        let names: Vec<String> = self
            .visible_sections()
            .iter()
            .map(|section| section.title.clone())
            .collect();

        let mut registry = SectionRegistry::new();
        for (index, name) in names.into_iter().enumerate() {
            let offset_y = index as f32 * (sizing::SECTION_CARD_HEIGHT + spacing::XS);
            registry.register(name, offset_y);
        }
        self.sections = registry;
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => {
                self.now = now;
                self.feedback.tick_at(now);
                self.notifications.tick_at(now);
                self.alerts.tick_at(now);
                self.overlay.tick();

                if let Some(query) = self.filter_debouncer.poll(now) {
                    self.filter_query = query;
                    self.rebuild_section_registry();
                }

                if let Some(offset_y) = self.scroll_animator.offset_at(now) {
                    self.scroll_offset = offset_y;
                    return scrollable::scroll_to(
                        draft_pane_id(),
                        AbsoluteOffset { x: 0.0, y: offset_y },
                    );
                }
                Task::none()
            }
            Message::DraftLoaded(Ok(content)) => {
                let sections = draft::parse_sections(&content);
                if sections.is_empty() {
                    self.notify(Notification::warning("The draft file was empty."));
                } else {
                    self.draft = sections;
                    self.rebuild_section_registry();
                    self.notify(Notification::success("Draft imported."));
                }
                Task::none()
            }
            Message::DraftLoaded(Err(err)) => {
                self.report_unexpected_failure("Failed to load draft", &err);
                Task::none()
            }
            Message::CopyDraft => {
                let content = draft::compose_text(&self.draft);
                Task::perform(
                    async move { clipboard::copy_text(&content) },
                    Message::CopyFinished,
                )
            }
            Message::CopyFinished(result) => {
                let duration = self.feedback_duration();
                match result {
                    Ok(()) => self.feedback.show(
                        COPY_BUTTON_ID,
                        copy_button_resting(),
                        "Copied",
                        FeedbackKind::Success,
                        duration,
                        Instant::now(),
                    ),
                    Err(err) => {
                        eprintln!("Clipboard copy failed: {err}");
                        self.feedback.show(
                            COPY_BUTTON_ID,
                            copy_button_resting(),
                            "Error",
                            FeedbackKind::Danger,
                            duration,
                            Instant::now(),
                        );
                    }
                }
                Task::none()
            }
            Message::ExportDraft => {
                let content = draft::compose_text(&self.draft);
                let suggested = export::generate_default_filename();
                Task::perform(
                    async move {
                        match export::save_text_as_file(content, suggested, export::DEFAULT_MIME)
                            .await
                        {
                            Ok(path) => Ok(Some(path)),
                            Err(ExportError::Cancelled) => Ok(None),
                            Err(ExportError::Io(err)) => Err(Error::Io(err.to_string())),
                        }
                    },
                    Message::ExportFinished,
                )
            }
            Message::ExportFinished(Ok(Some(path))) => {
                let size = format_file_size(draft::compose_text(&self.draft).len() as u64);
                self.notify(Notification::success(format!(
                    "Draft exported to {} ({size})",
                    path.display()
                )));
                Task::none()
            }
            Message::ExportFinished(Ok(None)) => {
                // Dialog cancelled: nothing to report.
                Task::none()
            }
            Message::ExportFinished(Err(err)) => {
                self.report_unexpected_failure("Draft export failed", &err);
                Task::none()
            }
            Message::RebuildPreview => {
                self.overlay.show("Building preview...");
                Task::perform(
                    async {
                        tokio::time::sleep(Duration::from_millis(1200)).await;
                    },
                    |()| Message::PreviewBuilt,
                )
            }
            Message::PreviewBuilt => {
                self.overlay.hide();
                self.notify(Notification::success("Preview rebuilt."));
                Task::none()
            }
            Message::FilterChanged(value) => {
                self.filter_input = value.clone();
                self.filter_debouncer.push(value, Instant::now());
                Task::none()
            }
            Message::JumpToSection(name) => {
                // Unknown names (section filtered away, stale button) are a no-op.
                if let Some(target) = self.sections.resolve(&name) {
                    self.scroll_animator.start(
                        self.scroll_offset,
                        target,
                        SCROLL_HEADROOM,
                        Instant::now(),
                    );
                }
                Task::none()
            }
            Message::DraftScrolled(viewport) => {
                self.scroll_offset = viewport.absolute_offset().y;
                Task::none()
            }
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg);
                Task::none()
            }
            Message::Alert(msg) => {
                self.alerts.handle_message(&msg);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let header = text("Newsdesk")
            .size(typography::TITLE_MD)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::PRIMARY_700),
            });

        let content = Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(self.alerts.view(self.now).map(Message::Alert))
            .push(self.view_toolbar())
            .push(self.view_section_nav())
            .push(self.view_draft());

        let base: Element<'_, Message> = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .into();

        let mut layers: Vec<Element<'_, Message>> = vec![base];

        layers.push(Toast::view_stack(&self.notifications, self.now).map(Message::Notification));

        if let Some(overlay_view) = self.overlay.view() {
            layers.push(overlay_view);
        }

        // Entrance fade: a cover that thins out over the first few hundred
        // milliseconds after startup.
        let entrance = self.entrance_progress();
        if entrance < 1.0 {
            layers.push(entrance_cover(1.0 - entrance));
        }

        stack(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn view_toolbar(&self) -> Element<'_, Message> {
        let tooltips = self.tooltips_enabled();

        let copy_face = self.feedback.face(COPY_BUTTON_ID, &copy_button_resting());
        let copy_button = feedback_button(&copy_face, Message::CopyDraft);
        let copy = ui::with_tooltip(copy_button, "Copy the draft to the clipboard", tooltips);

        let export_button = button(text("Export...").size(typography::BODY))
            .on_press(Message::ExportDraft)
            .padding([spacing::XS, spacing::SM])
            .style(feedback::class_style(ButtonClass::Secondary));
        let export = ui::with_tooltip(export_button, "Save the draft as a text file", tooltips);

        let rebuild_button = button(text("Rebuild preview").size(typography::BODY))
            .on_press(Message::RebuildPreview)
            .padding([spacing::XS, spacing::SM])
            .style(feedback::class_style(ButtonClass::Secondary));
        let rebuild = ui::with_tooltip(rebuild_button, "Regenerate the newsletter preview", tooltips);

        let filter = text_input("Filter sections...", &self.filter_input)
            .on_input(Message::FilterChanged)
            .width(Length::Fixed(sizing::FILTER_INPUT_WIDTH))
            .padding(spacing::XS);

        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(copy)
            .push(export)
            .push(rebuild)
            .push(filter)
            .into()
    }

    fn view_section_nav(&self) -> Element<'_, Message> {
        let mut row = Row::new().spacing(spacing::XS);
        for name in self.sections.names() {
            let jump = button(text(name.to_owned()).size(typography::CAPTION))
                .on_press(Message::JumpToSection(name.to_owned()))
                .padding([spacing::XXS, spacing::XS])
                .style(nav_button_style);
            row = row.push(jump);
        }
        row.into()
    }

    fn view_draft(&self) -> Element<'_, Message> {
        let cards: Vec<Element<'_, Message>> = self
            .visible_sections()
            .into_iter()
            .map(section_card)
            .collect();

        let pane = if cards.is_empty() {
            Element::from(
                Container::new(text("No section matches the filter.").size(typography::BODY))
                    .width(Length::Fill)
                    .padding(spacing::LG)
                    .align_x(alignment::Horizontal::Center),
            )
        } else {
            Column::with_children(cards).spacing(spacing::XS).into()
        };

        Scrollable::new(pane)
            .id(draft_pane_id())
            .on_scroll(Message::DraftScrolled)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("sections", &self.draft.len())
            .field("overlay_visible", &self.overlay.is_visible())
            .field("live_toasts", &self.notifications.live_count())
            .finish()
    }
}

/// Renders a button carrying its (possibly feedback-mutated) face.
fn feedback_button<'a>(face: &feedback::Face, on_press: Message) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center);

    if let Some(kind) = face.icon {
        let icon = match kind {
            FeedbackKind::Success => icons::check(),
            FeedbackKind::Danger => icons::exclamation_triangle(),
        };
        row = row.push(icons::sized(icon, sizing::ICON_SM));
    }
    row = row.push(text(face.label.clone()).size(typography::BODY));

    let mut widget = button(row)
        .padding([spacing::XS, spacing::SM])
        .style(feedback::class_style(face.class));
    if !face.disabled {
        widget = widget.on_press(on_press);
    }
    widget.into()
}

fn section_card(section: &Section) -> Element<'_, Message> {
    let title = text(section.title.as_str())
        .size(typography::TITLE_SM)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::PRIMARY_700),
        });
    let body = text(section.body.as_str()).size(typography::BODY);

    Container::new(Column::new().spacing(spacing::XS).push(title).push(body))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SECTION_CARD_HEIGHT))
        .padding(spacing::SM)
        .style(|_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(palette::WHITE)),
            border: iced::Border {
                color: palette::GRAY_200,
                width: 1.0,
                radius: crate::ui::design_tokens::radius::MD.into(),
            },
            shadow: iced::Shadow::default(),
            text_color: None,
        })
        .into()
}

fn nav_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(iced::Background::Color(Color {
            a: 0.15,
            ..palette::PRIMARY_500
        })),
        button::Status::Active | button::Status::Disabled => None,
    };
    button::Style {
        background,
        text_color: palette::PRIMARY_600,
        border: iced::Border {
            color: palette::PRIMARY_500,
            width: 1.0,
            radius: crate::ui::design_tokens::radius::SM.into(),
        },
        shadow: iced::Shadow::default(),
    }
}

/// Opaque cover used for the content entrance fade.
fn entrance_cover<'a>(alpha: f32) -> Element<'a, Message> {
    Container::new(text(""))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(Color {
                a: alpha.clamp(0.0, 1.0),
                ..palette::WHITE
            })),
            border: iced::Border::default(),
            shadow: iced::Shadow::default(),
            text_color: None,
        })
        .into()
}
